//! Pagination for tables and lists
//!
//! [`page_range`] decides what a pagination control shows, [`PageState`]
//! decides which page is requested. Both operate on 1-indexed page numbers.

pub mod range;
pub mod state;

pub use range::{PageRangeEntry, page_range};
pub use state::PageState;

use crate::error::{GridError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of items requested per fetch (never zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct PageSize(u64);

impl PageSize {
	/// Creates a page size, rejecting zero
	///
	/// # Examples
	///
	/// ```
	/// use gridline_core::PageSize;
	///
	/// assert_eq!(PageSize::new(25).unwrap().get(), 25);
	/// assert!(PageSize::new(0).is_err());
	/// ```
	pub fn new(size: u64) -> Result<Self> {
		if size == 0 {
			return Err(GridError::InvalidPageSize(size));
		}
		Ok(Self(size))
	}

	/// Creates a page size bounded by `max`
	pub fn bounded(size: u64, max: u64) -> Result<Self> {
		if size > max {
			return Err(GridError::PageSizeTooLarge {
				requested: size,
				max,
			});
		}
		Self::new(size)
	}

	/// Returns the size as an integer
	pub fn get(self) -> u64 {
		self.0
	}
}

impl TryFrom<u64> for PageSize {
	type Error = GridError;

	fn try_from(value: u64) -> Result<Self> {
		Self::new(value)
	}
}

impl From<PageSize> for u64 {
	fn from(size: PageSize) -> Self {
		size.0
	}
}

impl fmt::Display for PageSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Returns `ceil(total_count / page_size)`
///
/// # Examples
///
/// ```
/// use gridline_core::{PageSize, total_pages};
///
/// let size = PageSize::new(10).unwrap();
/// assert_eq!(total_pages(0, size), 0);
/// assert_eq!(total_pages(10, size), 1);
/// assert_eq!(total_pages(11, size), 2);
/// ```
pub fn total_pages(total_count: u64, page_size: PageSize) -> u64 {
	total_count.div_ceil(page_size.get())
}
