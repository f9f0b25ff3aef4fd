//! Gridline settings

use crate::env::Env;
use crate::error::ConfError;
use gridline_core::PageSize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
	/// Paginated table settings
	pub pagination: PaginationSettings,
	/// Infinite select settings
	pub select: SelectSettings,
}

/// Paginated table settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
	/// Rows per page for new tables
	pub page_size: u64,
	/// Largest page size a user may pick
	pub max_page_size: u64,
}

impl Default for PaginationSettings {
	fn default() -> Self {
		Self {
			page_size: 25,
			max_page_size: 100,
		}
	}
}

/// Infinite searchable select settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectSettings {
	/// Options fetched per page
	pub page_size: u64,
	/// Quiet period after the last keystroke before searching
	pub debounce_ms: u64,
	/// Distance from the bottom of the list that triggers the next page
	pub scroll_threshold_px: u32,
}

impl Default for SelectSettings {
	fn default() -> Self {
		Self {
			page_size: 20,
			debounce_ms: 300,
			scroll_threshold_px: 48,
		}
	}
}

impl SelectSettings {
	/// Debounce delay as a duration
	pub fn debounce(&self) -> Duration {
		Duration::from_millis(self.debounce_ms)
	}
}

impl GridSettings {
	/// Parses settings from TOML, filling in defaults, and validates them
	pub fn from_toml_str(source: &str) -> Result<Self, ConfError> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfError> {
		let path = path.as_ref();
		let content = fs::read_to_string(path)?;
		let settings = Self::from_toml_str(&content)?;
		tracing::info!(path = %path.display(), "loaded grid settings");
		Ok(settings)
	}

	/// Loads defaults, then the file if given, then environment overrides
	pub fn load(path: Option<&Path>) -> Result<Self, ConfError> {
		let settings = match path {
			Some(path) => Self::from_file(path)?,
			None => Self::default(),
		};
		settings.with_env(&Env::new())
	}

	/// Applies `GRIDLINE_*` overrides and revalidates
	///
	/// | Variable                         | Setting                         |
	/// |----------------------------------|---------------------------------|
	/// | `GRIDLINE_PAGE_SIZE`             | `pagination.page_size`          |
	/// | `GRIDLINE_MAX_PAGE_SIZE`         | `pagination.max_page_size`      |
	/// | `GRIDLINE_SELECT_PAGE_SIZE`      | `select.page_size`              |
	/// | `GRIDLINE_SEARCH_DEBOUNCE_MS`    | `select.debounce_ms`            |
	/// | `GRIDLINE_SCROLL_THRESHOLD_PX`   | `select.scroll_threshold_px`    |
	pub fn with_env(mut self, env: &Env) -> Result<Self, ConfError> {
		if let Some(v) = env.parse("PAGE_SIZE", "integer")? {
			self.pagination.page_size = v;
		}
		if let Some(v) = env.parse("MAX_PAGE_SIZE", "integer")? {
			self.pagination.max_page_size = v;
		}
		if let Some(v) = env.parse("SELECT_PAGE_SIZE", "integer")? {
			self.select.page_size = v;
		}
		if let Some(v) = env.parse("SEARCH_DEBOUNCE_MS", "integer")? {
			self.select.debounce_ms = v;
		}
		if let Some(v) = env.parse("SCROLL_THRESHOLD_PX", "integer")? {
			self.select.scroll_threshold_px = v;
		}
		self.validate()?;
		Ok(self)
	}

	/// Checks that page sizes are usable
	pub fn validate(&self) -> Result<(), ConfError> {
		PageSize::new(self.pagination.max_page_size).map_err(|source| ConfError::Invalid {
			key: "pagination.max_page_size",
			source,
		})?;
		self.table_page_size()?;
		self.select_page_size()?;
		Ok(())
	}

	/// Validated page size for tables
	pub fn table_page_size(&self) -> Result<PageSize, ConfError> {
		PageSize::bounded(self.pagination.page_size, self.pagination.max_page_size).map_err(
			|source| ConfError::Invalid {
				key: "pagination.page_size",
				source,
			},
		)
	}

	/// Validated page size for selects
	pub fn select_page_size(&self) -> Result<PageSize, ConfError> {
		PageSize::new(self.select.page_size).map_err(|source| ConfError::Invalid {
			key: "select.page_size",
			source,
		})
	}
}
