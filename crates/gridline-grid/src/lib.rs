//! # Gridline Grid
//!
//! State for editable, drag-reorderable data grids.
//!
//! - [`rows`]: server rows plus unsaved local rows, merged by key so a
//!   server refresh never loses local work
//! - [`edit`]: per-row edit lifecycle (view, edit, save, fail)
//! - [`reorder`]: drag-and-drop moves within a list
//!
//! Rows are any type implementing [`Row`].

#![warn(missing_docs)]

pub mod edit;
pub mod reorder;
pub mod rows;

pub use edit::{EditSession, EditState};
pub use reorder::{DragState, Move, move_item};
pub use rows::{DraftId, RefreshReport, Row, RowSet, VisibleRow};
