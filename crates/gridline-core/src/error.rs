//! Error types shared by the Gridline state crates

/// Result alias used across the Gridline crates
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised by view-state operations
///
/// Navigation never fails: out-of-range page targets are ignored. These
/// errors cover construction with invalid parameters and operations that
/// refer to rows or positions that do not exist.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
	/// Page size must be at least one item
	#[error("Invalid page size: {0} (must be at least 1)")]
	InvalidPageSize(u64),

	/// Page size exceeds the configured maximum
	#[error("Page size {requested} exceeds the maximum of {max}")]
	PageSizeTooLarge {
		/// Requested page size
		requested: u64,
		/// Configured maximum
		max: u64,
	},

	/// Page number below 1
	#[error("Invalid page: {0} (pages start at 1)")]
	InvalidPage(u64),

	/// Index outside the list being manipulated
	#[error("Index {index} out of bounds for length {len}")]
	IndexOutOfBounds {
		/// Offending index
		index: usize,
		/// Length of the list
		len: usize,
	},

	/// Drag that picks up or lands on an unsaved draft row
	#[error("Row at index {0} is an unsaved draft and cannot be reordered")]
	DraftNotMovable(usize),

	/// Row key that is not known to the grid
	#[error("Row not found: {0}")]
	RowNotFound(String),

	/// Edit state machine transition that is not allowed from the current state
	#[error("Cannot {action} while row is {state}")]
	InvalidTransition {
		/// Attempted action
		action: &'static str,
		/// State the row was in
		state: &'static str,
	},

	/// Query parameters could not be encoded
	#[error("Failed to encode query: {0}")]
	Query(String),
}

impl From<serde_urlencoded::ser::Error> for GridError {
	fn from(err: serde_urlencoded::ser::Error) -> Self {
		Self::Query(err.to_string())
	}
}
