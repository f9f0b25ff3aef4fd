//! Settings module.
//!
//! # Examples
//!
//! ```rust
//! use gridline::conf::GridSettings;
//!
//! let settings = GridSettings::from_toml_str("[select]\ndebounce_ms = 150").unwrap();
//! assert_eq!(settings.select.debounce_ms, 150);
//! assert_eq!(settings.pagination.page_size, 25);
//! ```

pub use gridline_conf::*;
