//! # Gridline Core
//!
//! Framework-independent view state for paginated, filterable tables.
//!
//! ## Overview
//!
//! - **Pagination range**: which page numbers and ellipses a pagination
//!   control should display ([`page_range`])
//! - **Page state**: current page clamped to the known page count
//!   ([`PageState`])
//! - **Query state**: filters, search and sort that parameterize a fetch
//!   ([`FilterSet`], [`SortOrder`], [`PageRequest`])
//! - **Table state**: all of the above wired together the way a list view
//!   needs them ([`TableState`])
//!
//! Nothing here performs I/O. A component layer feeds user events and server
//! responses in, and reads fetch parameters and display state out.
//!
//! ## Example
//!
//! ```rust
//! use gridline_core::{PageRangeEntry, PageResponse, TableState};
//!
//! let mut table = TableState::new(10)?;
//! table.apply_response(&PageResponse::<u32>::new(95, vec![]));
//! assert_eq!(table.pages().total_pages(), 10);
//!
//! table.pages_mut().set_page(5);
//! assert_eq!(table.range()[1], PageRangeEntry::Ellipsis);
//!
//! table.set_filter("status", "open");
//! assert_eq!(table.pages().current_page(), 1);
//! # Ok::<(), gridline_core::GridError>(())
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod pagination;
pub mod query;
pub mod table;

pub use error::{GridError, Result};
pub use pagination::{PageRangeEntry, PageSize, PageState, page_range, total_pages};
pub use query::{FilterSet, PageRequest, PageResponse, SortDirection, SortOrder};
pub use table::TableState;
