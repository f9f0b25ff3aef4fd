//! Editable grid module.
//!
//! Rows merged by key, local drafts, per-row edit lifecycle and drag
//! reordering.

pub use gridline_grid::*;
