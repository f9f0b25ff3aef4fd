//! Infinite scroll cursor bookkeeping

use gridline_core::{PageRequest, PageResponse, PageSize};

/// Permission to fetch one page
///
/// Issued by [`InfiniteCursor::begin`]. A ticket issued before a
/// [`reset`](InfiniteCursor::reset) is stale and its response is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
	generation: u64,
	page: u64,
}

impl LoadTicket {
	/// Page this ticket fetches (1-indexed)
	pub fn page(&self) -> u64 {
		self.page
	}
}

/// What [`InfiniteCursor::complete`] did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
	/// Results were appended
	Applied {
		/// Number of items added
		added: usize,
	},
	/// The ticket was outdated and the response was discarded
	Stale,
}

/// Accumulated pages of an infinitely scrolling list
#[derive(Debug, Clone)]
pub struct InfiniteCursor<T> {
	items: Vec<T>,
	page_size: PageSize,
	next_page: u64,
	total_count: Option<u64>,
	has_more: bool,
	in_flight: Option<LoadTicket>,
	generation: u64,
	error: Option<String>,
}

impl<T> InfiniteCursor<T> {
	/// Creates an empty cursor
	pub fn new(page_size: PageSize) -> Self {
		Self {
			items: Vec::new(),
			page_size,
			next_page: 1,
			total_count: None,
			has_more: true,
			in_flight: None,
			generation: 0,
			error: None,
		}
	}

	/// Loaded items in order
	pub fn items(&self) -> &[T] {
		&self.items
	}

	/// Page size
	pub fn page_size(&self) -> PageSize {
		self.page_size
	}

	/// Item count last reported by the server
	pub fn total_count(&self) -> Option<u64> {
		self.total_count
	}

	/// True while more pages may exist
	pub fn has_more(&self) -> bool {
		self.has_more
	}

	/// True while a page is being fetched
	pub fn is_loading(&self) -> bool {
		self.in_flight.is_some()
	}

	/// Error of the last failed fetch
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	/// True before the first page has arrived
	pub fn is_initial(&self) -> bool {
		self.next_page == 1
	}

	/// Starts fetching the next page
	///
	/// Returns `None` when a fetch is already in flight or the list is
	/// exhausted.
	pub fn begin(&mut self) -> Option<LoadTicket> {
		if self.in_flight.is_some() || !self.has_more {
			return None;
		}
		let ticket = LoadTicket {
			generation: self.generation,
			page: self.next_page,
		};
		self.in_flight = Some(ticket);
		self.error = None;
		tracing::debug!(page = ticket.page, generation = ticket.generation, "page load started");
		Some(ticket)
	}

	/// Request parameters for a ticket
	pub fn request(&self, ticket: &LoadTicket) -> PageRequest {
		PageRequest::new(ticket.page, self.page_size)
	}

	/// Appends a fetched page
	///
	/// More pages are assumed while the loaded item count is below the
	/// reported total and the page came back full.
	pub fn complete(&mut self, ticket: LoadTicket, response: PageResponse<T>) -> Completion {
		if self.in_flight != Some(ticket) {
			tracing::debug!(
				page = ticket.page,
				generation = ticket.generation,
				current = self.generation,
				"discarding stale page"
			);
			return Completion::Stale;
		}
		self.in_flight = None;

		let added = response.results.len();
		self.items.extend(response.results);
		self.next_page += 1;
		self.total_count = Some(response.count);
		self.has_more =
			(self.items.len() as u64) < response.count && added as u64 >= self.page_size.get();

		tracing::debug!(
			page = ticket.page,
			added,
			loaded = self.items.len(),
			has_more = self.has_more,
			"page loaded"
		);
		Completion::Applied { added }
	}

	/// Records a failed fetch
	///
	/// The same page is fetched again by the next [`begin`](Self::begin).
	/// Returns false for stale tickets.
	pub fn fail(&mut self, ticket: LoadTicket, message: impl Into<String>) -> bool {
		if self.in_flight != Some(ticket) {
			return false;
		}
		self.in_flight = None;
		let message = message.into();
		tracing::warn!(page = ticket.page, %message, "page load failed");
		self.error = Some(message);
		true
	}

	/// Drops all items and invalidates outstanding tickets
	pub fn reset(&mut self) {
		self.generation += 1;
		self.items.clear();
		self.next_page = 1;
		self.total_count = None;
		self.has_more = true;
		self.in_flight = None;
		self.error = None;
	}
}
