//! List view state for paginated, filterable tables
//!
//! [`TableState`] owns the page, filters, search term and sort order of one
//! table instance. Every change that alters which rows match sends the table
//! back to page 1; sorting only reorders, so it keeps the page.

use crate::error::Result;
use crate::pagination::{PageRangeEntry, PageSize, PageState};
use crate::query::{FilterSet, PageRequest, PageResponse, SortDirection, SortOrder};

/// View state of a single table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
	pages: PageState,
	filters: FilterSet,
	search: Option<String>,
	sort: Option<SortOrder>,
}

impl TableState {
	/// Creates a table on page 1 with `page_size` items per page
	pub fn new(page_size: u64) -> Result<Self> {
		Ok(Self::with_page_size(PageSize::new(page_size)?))
	}

	/// Creates a table from an already validated page size
	pub fn with_page_size(page_size: PageSize) -> Self {
		Self {
			pages: PageState::new(page_size),
			filters: FilterSet::new(),
			search: None,
			sort: None,
		}
	}

	/// Page state
	pub fn pages(&self) -> &PageState {
		&self.pages
	}

	/// Mutable page state for navigation events
	pub fn pages_mut(&mut self) -> &mut PageState {
		&mut self.pages
	}

	/// Active filters
	pub fn filters(&self) -> &FilterSet {
		&self.filters
	}

	/// Active search term
	pub fn search(&self) -> Option<&str> {
		self.search.as_deref()
	}

	/// Active sort order
	pub fn sort(&self) -> Option<&SortOrder> {
		self.sort.as_ref()
	}

	/// Sets a filter value, returning to page 1 if it changed anything
	pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
		let changed = self.filters.set(key, value);
		self.on_filters_changed(changed)
	}

	/// Removes one filter
	pub fn clear_filter(&mut self, key: &str) -> bool {
		let changed = self.filters.remove(key);
		self.on_filters_changed(changed)
	}

	/// Removes all filters
	pub fn clear_filters(&mut self) -> bool {
		let changed = self.filters.clear();
		self.on_filters_changed(changed)
	}

	/// Replaces the whole filter set
	pub fn replace_filters(&mut self, filters: FilterSet) -> bool {
		let changed = self.filters != filters;
		self.filters = filters;
		self.on_filters_changed(changed)
	}

	/// Sets the search term
	///
	/// A blank term clears the search.
	pub fn set_search(&mut self, term: &str) -> bool {
		let term = term.trim();
		let next = (!term.is_empty()).then(|| term.to_string());
		let changed = next != self.search;
		self.search = next;
		self.on_filters_changed(changed)
	}

	/// Sorts by `field`, flipping the direction if it is already the sort field
	pub fn toggle_sort(&mut self, field: &str) {
		let next = match &self.sort {
			Some(current) if current.field == field => SortOrder {
				field: current.field.clone(),
				direction: current.direction.toggle(),
			},
			_ => SortOrder::ascending(field),
		};
		tracing::debug!(sort = %next, "sort changed");
		self.sort = Some(next);
	}

	/// Sets an explicit sort order, or clears it
	pub fn set_sort(&mut self, sort: Option<SortOrder>) {
		self.sort = sort;
	}

	/// Returns the direction `field` is sorted in, if it is the sort field
	pub fn sort_direction(&self, field: &str) -> Option<SortDirection> {
		self.sort
			.as_ref()
			.filter(|s| s.field == field)
			.map(|s| s.direction)
	}

	/// Changes the page size and returns to page 1
	pub fn set_page_size(&mut self, page_size: PageSize) {
		self.pages.set_page_size(page_size);
	}

	/// Fetch parameters for the current state
	pub fn request(&self) -> PageRequest {
		PageRequest {
			page: self.pages.current_page(),
			page_size: self.pages.page_size(),
			search: self.search.clone(),
			sort: self.sort.clone(),
			filters: self.filters.clone(),
		}
	}

	/// Records the item count reported with a page of results
	pub fn apply_response<T>(&mut self, response: &PageResponse<T>) {
		self.pages.set_total_count(response.count);
	}

	/// Pagination control entries for the current state
	pub fn range(&self) -> Vec<PageRangeEntry> {
		self.pages.range()
	}

	fn on_filters_changed(&mut self, changed: bool) -> bool {
		if changed {
			tracing::debug!(filters = self.filters.len(), search = ?self.search, "filters changed");
			self.pages.reset();
		}
		changed
	}
}
