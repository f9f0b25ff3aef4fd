//! Searchable select module.
//!
//! # Examples
//!
//! ```rust
//! use gridline::select::InfiniteCursor;
//! use gridline::{PageResponse, PageSize};
//!
//! let mut cursor = InfiniteCursor::new(PageSize::new(2).unwrap());
//! let ticket = cursor.begin().unwrap();
//! cursor.complete(ticket, PageResponse::new(3, vec!["a", "b"]));
//! assert!(cursor.has_more());
//! ```

pub use gridline_select::*;
