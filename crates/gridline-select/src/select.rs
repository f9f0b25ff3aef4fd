//! Searchable select with infinitely scrolling options

use crate::cursor::{Completion, InfiniteCursor, LoadTicket};
use crate::debounce::Debouncer;
use async_trait::async_trait;
use gridline_conf::{ConfError, SelectSettings};
use gridline_core::{PageRequest, PageResponse, PageSize};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::time::{Duration, Instant};

/// An option that can be picked
pub trait SelectOption: Clone {
	/// Value submitted when the option is selected
	type Value: Clone + Eq + Hash + Debug;

	/// Returns the option's value
	fn value(&self) -> Self::Value;

	/// Returns the text shown for the option
	fn label(&self) -> &str;
}

/// Fetches pages of options
///
/// Implemented by the data layer, typically a GET against a list endpoint
/// with `page`, `page_size` and `search` query parameters.
#[async_trait]
pub trait OptionLoader<T>: Send + Sync {
	/// Error returned by a failed fetch
	type Error: Display + Send;

	/// Fetches the page described by `request`
	async fn load(&self, request: &PageRequest) -> Result<PageResponse<T>, Self::Error>;
}

/// Whether one or many options can be selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
	/// Picking an option replaces the selection and closes the list
	#[default]
	Single,
	/// Picking an option toggles it
	Multiple,
}

/// State of a searchable select
#[derive(Debug, Clone)]
pub struct SearchableSelect<T: SelectOption> {
	input: String,
	search: String,
	debouncer: Debouncer<String>,
	cursor: InfiniteCursor<T>,
	selected: IndexMap<T::Value, T>,
	mode: SelectionMode,
	is_open: bool,
	scroll_threshold: u32,
}

impl<T: SelectOption> SearchableSelect<T> {
	/// Creates a closed select with no search
	pub fn new(page_size: PageSize, debounce: Duration, mode: SelectionMode) -> Self {
		Self {
			input: String::new(),
			search: String::new(),
			debouncer: Debouncer::new(debounce),
			cursor: InfiniteCursor::new(page_size),
			selected: IndexMap::new(),
			mode,
			is_open: false,
			scroll_threshold: 48,
		}
	}

	/// Creates a select from settings
	pub fn from_settings(
		settings: &SelectSettings,
		mode: SelectionMode,
	) -> Result<Self, ConfError> {
		let page_size = PageSize::new(settings.page_size).map_err(|source| ConfError::Invalid {
			key: "select.page_size",
			source,
		})?;
		Ok(Self::new(page_size, settings.debounce(), mode)
			.with_scroll_threshold(settings.scroll_threshold_px))
	}

	/// Distance from the bottom, in pixels, that triggers the next page
	pub fn with_scroll_threshold(mut self, px: u32) -> Self {
		self.scroll_threshold = px;
		self
	}

	/// Text currently in the input
	pub fn input(&self) -> &str {
		&self.input
	}

	/// Search term the loaded options belong to
	pub fn search(&self) -> &str {
		&self.search
	}

	/// Loaded options
	pub fn options(&self) -> &[T] {
		self.cursor.items()
	}

	/// Cursor state (loading, errors, exhaustion)
	pub fn cursor(&self) -> &InfiniteCursor<T> {
		&self.cursor
	}

	/// Selection mode
	pub fn mode(&self) -> SelectionMode {
		self.mode
	}

	/// True while the option list is shown
	pub fn is_open(&self) -> bool {
		self.is_open
	}

	/// When [`tick`](Self::tick) should next be called
	pub fn next_tick(&self) -> Option<Instant> {
		self.debouncer.deadline()
	}

	/// Opens the list, starting the first load if nothing is loaded yet
	pub fn open(&mut self) -> Option<LoadTicket> {
		self.is_open = true;
		if self.cursor.is_initial() {
			self.cursor.begin()
		} else {
			None
		}
	}

	/// Closes the list
	pub fn close(&mut self) {
		self.is_open = false;
	}

	/// Records a change of the input text
	pub fn set_input(&mut self, text: impl Into<String>, now: Instant) {
		self.input = text.into();
		self.debouncer.push(self.input.trim().to_string(), now);
	}

	/// Applies the input once typing has paused
	///
	/// Returns the ticket for the first page of a new search.
	pub fn tick(&mut self, now: Instant) -> Option<LoadTicket> {
		let term = self.debouncer.poll(now)?;
		self.apply_search(term)
	}

	/// Applies the input immediately (e.g. on Enter)
	pub fn submit_input(&mut self) -> Option<LoadTicket> {
		let term = self.debouncer.flush()?;
		self.apply_search(term)
	}

	fn apply_search(&mut self, term: String) -> Option<LoadTicket> {
		if term == self.search {
			return None;
		}
		tracing::debug!(from = %self.search, to = %term, "search changed");
		self.search = term;
		self.cursor.reset();
		self.cursor.begin()
	}

	/// Handles a scroll of the option list
	///
	/// Requests the next page when the bottom edge of the viewport is within
	/// the scroll threshold of the end of the content.
	pub fn on_scroll(
		&mut self,
		scroll_top: u32,
		viewport_height: u32,
		content_height: u32,
	) -> Option<LoadTicket> {
		let bottom = scroll_top.saturating_add(viewport_height);
		if content_height.saturating_sub(bottom) > self.scroll_threshold {
			return None;
		}
		self.cursor.begin()
	}

	/// Requests the next page regardless of scroll position
	pub fn load_more(&mut self) -> Option<LoadTicket> {
		self.cursor.begin()
	}

	/// Request parameters for a ticket, including the search term
	pub fn request(&self, ticket: &LoadTicket) -> PageRequest {
		let mut request = self.cursor.request(ticket);
		if !self.search.is_empty() {
			request.search = Some(self.search.clone());
		}
		request
	}

	/// Delivers a fetched page
	pub fn complete(&mut self, ticket: LoadTicket, response: PageResponse<T>) -> Completion {
		self.cursor.complete(ticket, response)
	}

	/// Delivers a failed fetch
	pub fn fail(&mut self, ticket: LoadTicket, message: impl Into<String>) -> bool {
		self.cursor.fail(ticket, message)
	}

	/// Fetches the next page through `loader`
	///
	/// Returns `Ok(None)` when there is nothing to load. A failed fetch is
	/// recorded on the cursor and also returned.
	pub async fn load_next<L>(&mut self, loader: &L) -> Result<Option<Completion>, L::Error>
	where
		L: OptionLoader<T> + ?Sized,
	{
		let Some(ticket) = self.cursor.begin() else {
			return Ok(None);
		};
		let request = self.request(&ticket);
		match loader.load(&request).await {
			Ok(response) => Ok(Some(self.complete(ticket, response))),
			Err(err) => {
				self.fail(ticket, err.to_string());
				Err(err)
			}
		}
	}

	/// Picks an option
	///
	/// In single mode this replaces the selection and closes the list; in
	/// multiple mode it toggles the option.
	pub fn select(&mut self, option: T) {
		let value = option.value();
		match self.mode {
			SelectionMode::Single => {
				self.selected.clear();
				self.selected.insert(value, option);
				self.is_open = false;
			}
			SelectionMode::Multiple => {
				if self.selected.shift_remove(&value).is_none() {
					self.selected.insert(value, option);
				}
			}
		}
	}

	/// Removes one option from the selection
	pub fn deselect(&mut self, value: &T::Value) -> Option<T> {
		self.selected.shift_remove(value)
	}

	/// Clears the selection
	pub fn clear_selection(&mut self) {
		self.selected.clear();
	}

	/// True when the option with `value` is selected
	pub fn is_selected(&self, value: &T::Value) -> bool {
		self.selected.contains_key(value)
	}

	/// Selected options in the order they were picked
	pub fn selected(&self) -> impl Iterator<Item = &T> {
		self.selected.values()
	}

	/// Label of the single selected option, for display in a closed select
	pub fn selected_label(&self) -> Option<&str> {
		match self.mode {
			SelectionMode::Single => self.selected.values().next().map(T::label),
			SelectionMode::Multiple => None,
		}
	}
}
