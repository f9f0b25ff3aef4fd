//! Configuration errors

use gridline_core::GridError;

/// Error raised while loading or validating settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfError {
	/// Settings file could not be read
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Settings file is not valid TOML for [`GridSettings`](crate::GridSettings)
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Environment override could not be parsed
	#[error("Environment variable {key} has invalid value {value:?}: expected {expected}")]
	InvalidEnv {
		/// Full variable name, prefix included
		key: String,
		/// Raw value found in the environment
		value: String,
		/// Kind of value that was expected
		expected: &'static str,
	},

	/// Setting parsed but failed validation
	#[error("Invalid setting {key}: {source}")]
	Invalid {
		/// Dotted setting path, e.g. `select.page_size`
		key: &'static str,
		/// Validation failure
		#[source]
		source: GridError,
	},
}
