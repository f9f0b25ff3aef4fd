//! Row edit lifecycle
//!
//! ```text
//!            begin            submit
//! Viewing ---------> Editing -------> Saving ---succeed---> Viewing
//!    ^                 |  ^             |
//!    |     cancel      |  |   update    | fail
//!    +-----------------+  +--------+    v
//!    ^                             +-- Failed
//!    |            cancel              |  |
//!    +--------------------------------+  +--retry--> Saving
//! ```

use gridline_core::{GridError, Result};
use std::collections::HashMap;
use std::hash::Hash;
use std::mem;

/// Edit state of one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState<R> {
	/// Displayed read-only
	Viewing,
	/// Being edited; `draft` holds the user's changes
	Editing {
		/// Row before editing started
		original: R,
		/// Row with the user's changes
		draft: R,
	},
	/// Draft sent to the server, awaiting the result
	Saving {
		/// Row before editing started
		original: R,
		/// Row being saved
		draft: R,
	},
	/// Save failed; the draft is kept for retry
	Failed {
		/// Row before editing started
		original: R,
		/// Row that failed to save
		draft: R,
		/// Error reported by the save
		message: String,
	},
}

impl<R> Default for EditState<R> {
	fn default() -> Self {
		Self::Viewing
	}
}

impl<R: Clone> EditState<R> {
	/// Short name of the state
	pub fn name(&self) -> &'static str {
		match self {
			Self::Viewing => "viewing",
			Self::Editing { .. } => "editing",
			Self::Saving { .. } => "saving",
			Self::Failed { .. } => "failed",
		}
	}

	/// The user's pending changes, if any
	pub fn draft(&self) -> Option<&R> {
		match self {
			Self::Viewing => None,
			Self::Editing { draft, .. }
			| Self::Saving { draft, .. }
			| Self::Failed { draft, .. } => Some(draft),
		}
	}

	/// Error of the last failed save
	pub fn error(&self) -> Option<&str> {
		match self {
			Self::Failed { message, .. } => Some(message),
			_ => None,
		}
	}

	/// True while a save is in flight
	pub fn is_saving(&self) -> bool {
		matches!(self, Self::Saving { .. })
	}

	/// Starts editing `original`
	pub fn begin(&mut self, original: R) -> Result<()> {
		match self {
			Self::Viewing => {
				*self = Self::Editing {
					draft: original.clone(),
					original,
				};
				Ok(())
			}
			_ => Err(self.invalid("begin editing")),
		}
	}

	/// Replaces the draft
	///
	/// Editing a failed row goes back to editing.
	pub fn update(&mut self, row: R) -> Result<()> {
		match mem::take(self) {
			Self::Editing { original, .. } | Self::Failed { original, .. } => {
				*self = Self::Editing {
					original,
					draft: row,
				};
				Ok(())
			}
			other => {
				*self = other;
				Err(self.invalid("update"))
			}
		}
	}

	/// Sends the draft for saving, returning it
	pub fn submit(&mut self) -> Result<R> {
		match mem::take(self) {
			Self::Editing { original, draft } => {
				*self = Self::Saving {
					original,
					draft: draft.clone(),
				};
				Ok(draft)
			}
			other => {
				*self = other;
				Err(self.invalid("submit"))
			}
		}
	}

	/// Resends a draft whose save failed
	pub fn retry(&mut self) -> Result<R> {
		match mem::take(self) {
			Self::Failed { original, draft, .. } => {
				*self = Self::Saving {
					original,
					draft: draft.clone(),
				};
				Ok(draft)
			}
			other => {
				*self = other;
				Err(self.invalid("retry"))
			}
		}
	}

	/// Completes a save, returning the saved draft
	pub fn succeed(&mut self) -> Result<R> {
		match mem::take(self) {
			Self::Saving { draft, .. } => Ok(draft),
			other => {
				*self = other;
				Err(self.invalid("complete save"))
			}
		}
	}

	/// Records a failed save
	pub fn fail(&mut self, message: impl Into<String>) -> Result<()> {
		match mem::take(self) {
			Self::Saving { original, draft } => {
				*self = Self::Failed {
					original,
					draft,
					message: message.into(),
				};
				Ok(())
			}
			other => {
				*self = other;
				Err(self.invalid("fail save"))
			}
		}
	}

	/// Abandons the edit, returning the original row
	///
	/// Not allowed while a save is in flight.
	pub fn cancel(&mut self) -> Result<R> {
		match mem::take(self) {
			Self::Editing { original, .. } | Self::Failed { original, .. } => Ok(original),
			other => {
				*self = other;
				Err(self.invalid("cancel"))
			}
		}
	}

	fn invalid(&self, action: &'static str) -> GridError {
		GridError::InvalidTransition {
			action,
			state: self.name(),
		}
	}
}

/// Edit states of many rows, keyed by row key
///
/// Rows without an entry are viewing.
#[derive(Debug, Clone)]
pub struct EditSession<K, R> {
	states: HashMap<K, EditState<R>>,
}

impl<K, R> Default for EditSession<K, R> {
	fn default() -> Self {
		Self {
			states: HashMap::new(),
		}
	}
}

impl<K: Clone + Eq + Hash + std::fmt::Debug, R: Clone> EditSession<K, R> {
	/// Creates a session with every row viewing
	pub fn new() -> Self {
		Self::default()
	}

	/// State of a row
	pub fn state(&self, key: &K) -> Option<&EditState<R>> {
		self.states.get(key)
	}

	/// True when the row is in any state other than viewing
	pub fn is_active(&self, key: &K) -> bool {
		self.states.contains_key(key)
	}

	/// Keys of all rows not viewing
	pub fn active_keys(&self) -> impl Iterator<Item = &K> {
		self.states.keys()
	}

	/// Starts editing a row
	pub fn begin(&mut self, key: K, original: R) -> Result<()> {
		let state = self.states.entry(key.clone()).or_default();
		state.begin(original)?;
		tracing::debug!(?key, "row edit started");
		Ok(())
	}

	/// Replaces a row's draft
	pub fn update(&mut self, key: &K, row: R) -> Result<()> {
		self.with_state(key, |s| s.update(row))
	}

	/// Sends a row's draft for saving
	pub fn submit(&mut self, key: &K) -> Result<R> {
		self.with_state(key, EditState::submit)
	}

	/// Resends a failed row
	pub fn retry(&mut self, key: &K) -> Result<R> {
		self.with_state(key, EditState::retry)
	}

	/// Completes a row's save
	pub fn succeed(&mut self, key: &K) -> Result<R> {
		self.with_state(key, EditState::succeed)
	}

	/// Records a failed save
	pub fn fail(&mut self, key: &K, message: impl Into<String>) -> Result<()> {
		self.with_state(key, |s| s.fail(message))?;
		if let Some(message) = self.states.get(key).and_then(EditState::error) {
			tracing::warn!(?key, %message, "row save failed");
		}
		Ok(())
	}

	/// Abandons a row's edit
	pub fn cancel(&mut self, key: &K) -> Result<R> {
		self.with_state(key, EditState::cancel)
	}

	fn with_state<T>(
		&mut self,
		key: &K,
		f: impl FnOnce(&mut EditState<R>) -> Result<T>,
	) -> Result<T> {
		let state = self.states.entry(key.clone()).or_default();
		let result = f(state);
		if matches!(state, EditState::Viewing) {
			self.states.remove(key);
		}
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_happy_path() {
		let mut state = EditState::default();
		state.begin("old").unwrap();
		state.update("new").unwrap();
		assert_eq!(state.submit().unwrap(), "new");
		assert!(state.is_saving());
		assert_eq!(state.succeed().unwrap(), "new");
		assert_eq!(state, EditState::Viewing);
	}

	#[rstest]
	fn test_failure_keeps_draft_for_retry() {
		let mut state = EditState::default();
		state.begin(1).unwrap();
		state.update(2).unwrap();
		state.submit().unwrap();
		state.fail("conflict").unwrap();
		assert_eq!(state.error(), Some("conflict"));
		assert_eq!(state.draft(), Some(&2));
		assert_eq!(state.retry().unwrap(), 2);
	}

	#[rstest]
	fn test_cancel_after_failure_returns_original() {
		let mut state = EditState::default();
		state.begin(1).unwrap();
		state.update(2).unwrap();
		state.submit().unwrap();
		state.fail("timeout").unwrap();
		assert_eq!(state.cancel().unwrap(), 1);
		assert_eq!(state, EditState::Viewing);
	}

	#[rstest]
	#[case::submit_while_viewing(EditState::<u8>::Viewing, "submit")]
	#[case::cancel_while_saving(EditState::Saving { original: 1, draft: 2 }, "cancel")]
	#[case::begin_while_editing(EditState::Editing { original: 1, draft: 1 }, "begin editing")]
	fn test_invalid_transitions_leave_state(#[case] start: EditState<u8>, #[case] action: &str) {
		let mut state = start.clone();
		let err = match action {
			"submit" => state.submit().unwrap_err(),
			"cancel" => state.cancel().unwrap_err(),
			_ => state.begin(9).unwrap_err(),
		};
		assert!(matches!(err, GridError::InvalidTransition { .. }));
		assert_eq!(state, start);
	}

	#[rstest]
	fn test_session_fail_rejected_outside_saving() {
		let mut session: EditSession<u32, &str> = EditSession::new();
		session.begin(7, "draft").unwrap();
		assert!(matches!(
			session.fail(&7, "boom"),
			Err(GridError::InvalidTransition { state: "editing", .. })
		));
		assert_eq!(session.state(&7).and_then(EditState::error), None);

		session.submit(&7).unwrap();
		session.fail(&7, "boom").unwrap();
		assert_eq!(session.state(&7).and_then(EditState::error), Some("boom"));
	}
}
