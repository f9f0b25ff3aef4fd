//! # Gridline Select
//!
//! State for searchable selects whose options are fetched page by page as
//! the user scrolls.
//!
//! - [`cursor`]: which page to fetch next, and which responses are stale
//! - [`debounce`]: waits for typing to pause before searching
//! - [`select`]: the two combined with open/close and selection state
//!
//! ## Flow
//!
//! ```text
//! keystroke -> input() -> Debouncer
//! timer     -> tick()  -> new term? reset cursor, LoadTicket for page 1
//! scroll    -> on_scroll() -> near bottom? LoadTicket for next page
//! fetch     -> complete(ticket, response) | fail(ticket, message)
//! ```

#![warn(missing_docs)]

pub mod cursor;
pub mod debounce;
pub mod select;

pub use cursor::{Completion, InfiniteCursor, LoadTicket};
pub use debounce::Debouncer;
pub use select::{OptionLoader, SearchableSelect, SelectOption, SelectionMode};
