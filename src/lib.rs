//! # Gridline
//!
//! View-state building blocks for data-heavy screens: paginated tables,
//! editable and reorderable grids, and searchable selects that load their
//! options page by page.
//!
//! Gridline holds no widgets and performs no I/O of its own. Each type is a
//! small state machine that a UI layer drives with user events and server
//! responses, and reads back to render.
//!
//! ## Feature Flags
//!
//! - `minimal` - Pagination, filtering and sorting state only
//! - `conf` - Settings loaded from TOML files and `GRIDLINE_*` variables
//! - `grid` - Merge-by-key rows, drafts, edit lifecycle, drag reordering
//! - `select` - Infinite cursor, debouncing, searchable select
//! - `full` (default) - All of the above
//!
//! ## Quick Example
//!
//! ```rust
//! use gridline::prelude::*;
//!
//! let mut table = TableState::new(10).unwrap();
//! table.apply_response(&PageResponse::new(95, vec![(); 10]));
//! table.pages_mut().set_page(6);
//!
//! let labels: Vec<String> = table.range().iter().map(ToString::to_string).collect();
//! assert_eq!(labels, ["1", "...", "5", "6", "7", "...", "10"]);
//!
//! table.set_filter("status", "open");
//! assert_eq!(table.pages().current_page(), 1);
//! ```

#![warn(missing_docs)]

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "grid")]
pub mod grid;
#[cfg(feature = "select")]
pub mod select;

pub use gridline_core::{
	FilterSet, GridError, PageRangeEntry, PageRequest, PageResponse, PageSize, PageState, Result,
	SortDirection, SortOrder, TableState, page_range, total_pages,
};

#[cfg(feature = "conf")]
pub use gridline_conf::{ConfError, GridSettings};

#[cfg(feature = "grid")]
pub use gridline_grid::{DragState, EditSession, EditState, Row, RowSet, VisibleRow};

#[cfg(feature = "select")]
pub use gridline_select::{OptionLoader, SearchableSelect, SelectOption, SelectionMode};

/// Commonly used types
pub mod prelude {
	pub use crate::{
		FilterSet, GridError, PageRangeEntry, PageRequest, PageResponse, PageSize, PageState,
		SortDirection, SortOrder, TableState, page_range,
	};

	#[cfg(feature = "conf")]
	pub use crate::GridSettings;

	#[cfg(feature = "grid")]
	pub use crate::{DragState, EditSession, EditState, Row, RowSet, VisibleRow};

	#[cfg(feature = "select")]
	pub use crate::{OptionLoader, SearchableSelect, SelectOption, SelectionMode};
}
