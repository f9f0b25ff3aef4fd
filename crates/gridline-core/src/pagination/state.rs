//! Current page tracking

use super::{PageSize, page_range, range::PageRangeEntry, total_pages};
use crate::error::GridError;
use serde::{Deserialize, Serialize};

/// Current page of a paginated view
///
/// The page is 1-indexed and always stays within `[1, max(total_pages, 1)]`.
/// Navigation outside that window is silently ignored, so a disabled
/// "next" control that still fires simply does nothing.
///
/// Deserialized state is checked the same way: page 0 is rejected and a
/// page past the end is pulled back to the last page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageState")]
pub struct PageState {
	current_page: u64,
	page_size: PageSize,
	total_count: u64,
}

#[derive(Deserialize)]
struct RawPageState {
	current_page: u64,
	page_size: PageSize,
	total_count: u64,
}

impl TryFrom<RawPageState> for PageState {
	type Error = GridError;

	fn try_from(raw: RawPageState) -> Result<Self, GridError> {
		if raw.current_page < 1 {
			return Err(GridError::InvalidPage(raw.current_page));
		}
		let mut state = Self {
			current_page: raw.current_page,
			page_size: raw.page_size,
			total_count: 0,
		};
		state.set_total_count(raw.total_count);
		Ok(state)
	}
}

impl PageState {
	/// Creates page state on page 1 with no known items
	pub fn new(page_size: PageSize) -> Self {
		Self {
			current_page: 1,
			page_size,
			total_count: 0,
		}
	}

	/// Creates page state with a known item count
	pub fn with_total(page_size: PageSize, total_count: u64) -> Self {
		Self {
			total_count,
			..Self::new(page_size)
		}
	}

	/// Returns the current page (1-indexed)
	pub fn current_page(&self) -> u64 {
		self.current_page
	}

	/// Returns the page size
	pub fn page_size(&self) -> PageSize {
		self.page_size
	}

	/// Returns the last server-reported item count
	pub fn total_count(&self) -> u64 {
		self.total_count
	}

	/// Returns the number of pages for the current count and size
	pub fn total_pages(&self) -> u64 {
		total_pages(self.total_count, self.page_size)
	}

	/// Moves to `target` if it is a valid page
	///
	/// Returns true when the current page changed. Targets below 1 or past
	/// the last page leave the state untouched.
	pub fn set_page(&mut self, target: u64) -> bool {
		let total = self.total_pages();
		if target < 1 || target > total {
			tracing::debug!(target, total, "ignoring out-of-range page");
			return false;
		}
		if target == self.current_page {
			return false;
		}
		tracing::debug!(from = self.current_page, to = target, "page changed");
		self.current_page = target;
		true
	}

	/// Moves to the next page if there is one
	pub fn next(&mut self) -> bool {
		self.set_page(self.current_page.saturating_add(1))
	}

	/// Moves to the previous page if there is one
	pub fn previous(&mut self) -> bool {
		// page 1 maps to target 0, which set_page rejects
		self.set_page(self.current_page.saturating_sub(1))
	}

	/// Returns true if a next page exists
	pub fn has_next(&self) -> bool {
		self.current_page < self.total_pages()
	}

	/// Returns true if a previous page exists
	pub fn has_previous(&self) -> bool {
		self.current_page > 1
	}

	/// Goes back to page 1
	///
	/// Called whenever the filter set changes.
	pub fn reset(&mut self) {
		if self.current_page != 1 {
			tracing::debug!(from = self.current_page, "page reset");
		}
		self.current_page = 1;
	}

	/// Records a new server-reported item count
	///
	/// If the count shrank below the current page (for example after the
	/// last row of the last page was deleted), the page is pulled back to
	/// the new last page.
	pub fn set_total_count(&mut self, total_count: u64) {
		self.total_count = total_count;
		let last = self.total_pages().max(1);
		if self.current_page > last {
			tracing::debug!(from = self.current_page, to = last, "page clamped after count change");
			self.current_page = last;
		}
	}

	/// Changes the page size and returns to page 1
	pub fn set_page_size(&mut self, page_size: PageSize) {
		self.page_size = page_size;
		self.reset();
	}

	/// Returns the zero-based offset of the first item on the current page
	pub fn offset(&self) -> u64 {
		(self.current_page - 1).saturating_mul(self.page_size.get())
	}

	/// Returns the 1-based indices of the first and last item on the page
	///
	/// `None` when the current page holds no items.
	///
	/// # Examples
	///
	/// ```
	/// use gridline_core::{PageSize, PageState};
	///
	/// let mut state = PageState::with_total(PageSize::new(10).unwrap(), 95);
	/// state.set_page(10);
	/// assert_eq!(state.item_range(), Some((91, 95)));
	/// ```
	pub fn item_range(&self) -> Option<(u64, u64)> {
		let start = self.offset() + 1;
		if start > self.total_count {
			return None;
		}
		let end = self
			.offset()
			.saturating_add(self.page_size.get())
			.min(self.total_count);
		Some((start, end))
	}

	/// Returns the pagination control entries for the current state
	pub fn range(&self) -> Vec<PageRangeEntry> {
		page_range(self.current_page, self.total_pages())
	}
}
