//! # Gridline Conf
//!
//! Settings for Gridline views, layered the usual way:
//!
//! 1. Built-in defaults
//! 2. A TOML file
//! 3. `GRIDLINE_*` environment variables
//!
//! ```rust
//! use gridline_conf::GridSettings;
//!
//! let settings = GridSettings::from_toml_str(
//!     r#"
//!     [pagination]
//!     page_size = 50
//!
//!     [select]
//!     debounce_ms = 150
//!     "#,
//! )?;
//! assert_eq!(settings.pagination.page_size, 50);
//! assert_eq!(settings.select.page_size, 20);
//! # Ok::<(), gridline_conf::ConfError>(())
//! ```

#![warn(missing_docs)]

pub mod env;
pub mod error;
pub mod settings;

pub use env::Env;
pub use error::ConfError;
pub use settings::{GridSettings, PaginationSettings, SelectSettings};
