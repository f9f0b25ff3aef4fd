//! Environment variable overrides

use crate::error::ConfError;
use std::str::FromStr;

/// Default prefix for Gridline environment variables
pub const DEFAULT_PREFIX: &str = "GRIDLINE_";

/// Prefixed environment variable reader
///
/// Lookups go through a function so tests can supply variables without
/// touching the process environment.
pub struct Env {
	prefix: String,
	lookup: Box<dyn Fn(&str) -> Option<String>>,
}

impl Env {
	/// Reads from the process environment with the `GRIDLINE_` prefix
	pub fn new() -> Self {
		Self::with_lookup(|key| std::env::var(key).ok())
	}

	/// Reads through `lookup` with the `GRIDLINE_` prefix
	pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + 'static) -> Self {
		Self {
			prefix: DEFAULT_PREFIX.to_string(),
			lookup: Box::new(lookup),
		}
	}

	/// Replaces the prefix
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Full variable name for `key`
	pub fn key_name(&self, key: &str) -> String {
		format!("{}{}", self.prefix, key)
	}

	/// Reads and parses `key`, returning `None` when unset
	pub fn parse<T: FromStr>(
		&self,
		key: &str,
		expected: &'static str,
	) -> Result<Option<T>, ConfError> {
		let full_key = self.key_name(key);
		let Some(raw) = (self.lookup)(&full_key) else {
			return Ok(None);
		};
		raw.trim()
			.parse()
			.map(Some)
			.map_err(|_| ConfError::InvalidEnv {
				key: full_key,
				value: raw,
				expected,
			})
	}
}

impl Default for Env {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_unset_is_none() {
		let env = Env::with_lookup(|_| None);
		assert_eq!(env.parse::<u64>("PAGE_SIZE", "integer").unwrap(), None);
	}

	#[rstest]
	fn test_prefix_applied() {
		let env = Env::with_lookup(|key| (key == "APP_PAGE_SIZE").then(|| " 40 ".to_string()))
			.with_prefix("APP_");
		assert_eq!(env.parse::<u64>("PAGE_SIZE", "integer").unwrap(), Some(40));
	}

	#[rstest]
	fn test_unparseable_value() {
		let env = Env::with_lookup(|_| Some("lots".to_string()));
		let err = env.parse::<u64>("PAGE_SIZE", "integer").unwrap_err();
		assert!(matches!(
			err,
			ConfError::InvalidEnv { ref key, .. } if key == "GRIDLINE_PAGE_SIZE"
		));
	}
}
