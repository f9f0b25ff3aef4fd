//! Fetch parameters and responses
//!
//! The fetch itself happens outside this crate. [`PageRequest`] is what a
//! view hands to its data layer, [`PageResponse`] is what comes back.

use crate::error::Result;
use crate::pagination::PageSize;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}
}

/// Field and direction a list is ordered by
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOrder {
	/// Field name
	pub field: String,
	/// Direction
	pub direction: SortDirection,
}

impl SortOrder {
	/// Ascending order on `field`
	pub fn ascending(field: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			direction: SortDirection::Ascending,
		}
	}

	/// Descending order on `field`
	pub fn descending(field: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			direction: SortDirection::Descending,
		}
	}

	/// Parses the `-field` query convention
	///
	/// A leading `-` means descending (`"name"` is ascending, `"-name"` is
	/// descending). Returns `None` for an empty field.
	pub fn parse(s: &str) -> Option<Self> {
		let (direction, field) = match s.strip_prefix('-') {
			Some(field) => (SortDirection::Descending, field),
			None => (SortDirection::Ascending, s),
		};
		if field.is_empty() {
			return None;
		}
		Some(Self {
			field: field.to_string(),
			direction,
		})
	}
}

impl fmt::Display for SortOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.direction {
			SortDirection::Ascending => write!(f, "{}", self.field),
			SortDirection::Descending => write!(f, "-{}", self.field),
		}
	}
}

/// Active filters, in the order they were applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet(IndexMap<String, String>);

impl FilterSet {
	/// Creates an empty filter set
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a filter value, returning true if the set changed
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
		let key = key.into();
		let value = value.into();
		if self.0.get(&key) == Some(&value) {
			return false;
		}
		self.0.insert(key, value);
		true
	}

	/// Removes a filter, returning true if it was present
	pub fn remove(&mut self, key: &str) -> bool {
		self.0.shift_remove(key).is_some()
	}

	/// Removes every filter, returning true if any were present
	pub fn clear(&mut self) -> bool {
		let changed = !self.0.is_empty();
		self.0.clear();
		changed
	}

	/// Returns the value of a filter
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Returns true when no filter is active
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the number of active filters
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Iterates over `(key, value)` pairs
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterSet {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

/// Parameters for fetching one page of a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
	/// Page number (1-indexed)
	pub page: u64,
	/// Items per page
	pub page_size: PageSize,
	/// Free-text search term
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub search: Option<String>,
	/// Ordering
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sort: Option<SortOrder>,
	/// Field filters
	#[serde(default, skip_serializing_if = "FilterSet::is_empty")]
	pub filters: FilterSet,
}

impl PageRequest {
	/// Request for `page` with no search, sort or filters
	pub fn new(page: u64, page_size: PageSize) -> Self {
		Self {
			page,
			page_size,
			search: None,
			sort: None,
			filters: FilterSet::new(),
		}
	}

	/// Zero-based offset of the first requested item
	pub fn offset(&self) -> u64 {
		self.page.saturating_sub(1) * self.page_size.get()
	}

	/// Renders the request as URL query parameters
	///
	/// Uses the `page`, `page_size`, `search` and `ordering` keys, followed by
	/// one pair per filter.
	///
	/// # Examples
	///
	/// ```
	/// use gridline_core::{PageRequest, PageSize, SortOrder};
	///
	/// let mut request = PageRequest::new(2, PageSize::new(25).unwrap());
	/// request.sort = Some(SortOrder::descending("created_at"));
	/// request.filters.set("status", "open");
	/// assert_eq!(
	///     request.to_query_string().unwrap(),
	///     "page=2&page_size=25&ordering=-created_at&status=open"
	/// );
	/// ```
	pub fn to_query_string(&self) -> Result<String> {
		let mut pairs: Vec<(String, String)> = vec![
			("page".to_string(), self.page.to_string()),
			("page_size".to_string(), self.page_size.to_string()),
		];
		if let Some(search) = &self.search {
			pairs.push(("search".to_string(), search.clone()));
		}
		if let Some(sort) = &self.sort {
			pairs.push(("ordering".to_string(), sort.to_string()));
		}
		pairs.extend(
			self.filters
				.iter()
				.map(|(k, v)| (k.to_string(), v.to_string())),
		);
		Ok(serde_urlencoded::to_string(pairs)?)
	}
}

/// One page of results as returned by a list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse<T> {
	/// Total items across all pages
	pub count: u64,
	/// Items on this page
	pub results: Vec<T>,
}

impl<T> PageResponse<T> {
	/// Creates a response
	pub fn new(count: u64, results: Vec<T>) -> Self {
		Self { count, results }
	}
}
