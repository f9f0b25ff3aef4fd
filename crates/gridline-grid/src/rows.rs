//! Server rows merged with unsaved local rows
//!
//! A grid shows three kinds of rows at once: rows the server returned,
//! local edits layered over some of those rows, and drafts the user added
//! that the server has not seen yet. [`RowSet`] keeps them apart so that a
//! refresh replaces only the server layer.

use crate::reorder::Move;
use gridline_core::{GridError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// A grid row with a stable key
pub trait Row: Clone {
	/// Key that identifies the row across refreshes
	type Key: Clone + Eq + Hash + Debug;

	/// Returns the row's key
	fn key(&self) -> Self::Key;
}

/// Local identifier of a row that has not been saved yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DraftId(u64);

impl DraftId {
	/// Returns the raw counter value
	pub fn get(self) -> u64 {
		self.0
	}
}

/// A row as it should be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleRow<'a, R> {
	/// Unsaved local row
	Draft {
		/// Local id
		id: DraftId,
		/// Row data
		row: &'a R,
	},
	/// Server row, possibly with a local edit applied
	Server {
		/// Effective row data
		row: &'a R,
		/// True when `row` is a local edit not yet confirmed by the server
		edited: bool,
	},
}

impl<'a, R> VisibleRow<'a, R> {
	/// Row data
	pub fn row(&self) -> &'a R {
		match self {
			Self::Draft { row, .. } | Self::Server { row, .. } => row,
		}
	}

	/// True for drafts and edited server rows
	pub fn is_unsaved(&self) -> bool {
		matches!(self, Self::Draft { .. } | Self::Server { edited: true, .. })
	}
}

/// Outcome of [`RowSet::refresh`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport<K> {
	/// Edited rows that still exist on the server and keep their local edit
	pub kept_edits: Vec<K>,
	/// Edited rows the server no longer returns; their edits were discarded
	pub dropped_edits: Vec<K>,
	/// Optimistically removed rows the server no longer returns
	pub confirmed_removals: Vec<K>,
}

impl<K> Default for RefreshReport<K> {
	fn default() -> Self {
		Self {
			kept_edits: Vec::new(),
			dropped_edits: Vec::new(),
			confirmed_removals: Vec::new(),
		}
	}
}

/// Server rows, local edits and drafts of one grid
#[derive(Debug, Clone)]
pub struct RowSet<R: Row> {
	server: IndexMap<R::Key, R>,
	edits: HashMap<R::Key, R>,
	drafts: Vec<(DraftId, R)>,
	removed: HashSet<R::Key>,
	next_draft: u64,
}

impl<R: Row> Default for RowSet<R> {
	fn default() -> Self {
		Self {
			server: IndexMap::new(),
			edits: HashMap::new(),
			drafts: Vec::new(),
			removed: HashSet::new(),
			next_draft: 0,
		}
	}
}

impl<R: Row> RowSet<R> {
	/// Creates an empty row set
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a row set from a first server response
	pub fn from_server(rows: impl IntoIterator<Item = R>) -> Self {
		let mut set = Self::new();
		set.refresh(rows);
		set
	}

	/// Replaces the server rows, keeping local work
	///
	/// Drafts always survive. Local edits survive when their key is still
	/// present; edits of rows that disappeared are dropped. Rows that were
	/// removed optimistically stay hidden until the server stops returning
	/// them.
	pub fn refresh(&mut self, rows: impl IntoIterator<Item = R>) -> RefreshReport<R::Key> {
		self.server = rows.into_iter().map(|row| (row.key(), row)).collect();

		let mut report = RefreshReport::default();
		let server = &self.server;
		self.edits.retain(|key, _| {
			if server.contains_key(key) {
				report.kept_edits.push(key.clone());
				true
			} else {
				report.dropped_edits.push(key.clone());
				false
			}
		});
		self.removed.retain(|key| {
			if server.contains_key(key) {
				true
			} else {
				report.confirmed_removals.push(key.clone());
				false
			}
		});

		if !report.dropped_edits.is_empty() {
			tracing::warn!(
				dropped = ?report.dropped_edits,
				"discarded local edits of rows missing from refresh"
			);
		}
		tracing::debug!(
			rows = self.server.len(),
			drafts = self.drafts.len(),
			edits = self.edits.len(),
			"rows refreshed"
		);
		report
	}

	/// Adds an unsaved row
	pub fn add_draft(&mut self, row: R) -> DraftId {
		let id = DraftId(self.next_draft);
		self.next_draft += 1;
		self.drafts.push((id, row));
		id
	}

	/// Returns a draft by id
	pub fn draft(&self, id: DraftId) -> Option<&R> {
		self.drafts.iter().find(|(d, _)| *d == id).map(|(_, row)| row)
	}

	/// Replaces the data of a draft
	pub fn update_draft(&mut self, id: DraftId, row: R) -> Result<()> {
		let slot = self
			.drafts
			.iter_mut()
			.find(|(d, _)| *d == id)
			.ok_or_else(|| GridError::RowNotFound(format!("draft {}", id.0)))?;
		slot.1 = row;
		Ok(())
	}

	/// Throws a draft away
	pub fn discard_draft(&mut self, id: DraftId) -> Option<R> {
		let pos = self.drafts.iter().position(|(d, _)| *d == id)?;
		Some(self.drafts.remove(pos).1)
	}

	/// Replaces a draft with the row the server saved
	///
	/// The saved row is merged in by key: it replaces an existing server row
	/// with the same key or is appended.
	pub fn promote_draft(&mut self, id: DraftId, saved: R) -> Result<()> {
		self.discard_draft(id)
			.ok_or_else(|| GridError::RowNotFound(format!("draft {}", id.0)))?;
		self.confirm(saved);
		Ok(())
	}

	/// Writes a local edit over a server row
	pub fn upsert(&mut self, row: R) -> Result<()> {
		let key = row.key();
		if !self.server.contains_key(&key) {
			return Err(GridError::RowNotFound(format!("{:?}", key)));
		}
		self.edits.insert(key, row);
		Ok(())
	}

	/// Records a row as saved by the server, clearing its local edit
	pub fn confirm(&mut self, saved: R) {
		let key = saved.key();
		self.edits.remove(&key);
		self.removed.remove(&key);
		self.server.insert(key, saved);
	}

	/// Drops the local edit of a row
	pub fn revert(&mut self, key: &R::Key) -> Option<R> {
		self.edits.remove(key)
	}

	/// Hides a server row until the server confirms the delete
	pub fn remove(&mut self, key: &R::Key) -> Result<()> {
		if !self.server.contains_key(key) {
			return Err(GridError::RowNotFound(format!("{:?}", key)));
		}
		self.edits.remove(key);
		self.removed.insert(key.clone());
		Ok(())
	}

	/// Shows a row again after its delete failed
	pub fn restore(&mut self, key: &R::Key) -> bool {
		self.removed.remove(key)
	}

	/// Effective data of a server row
	pub fn get(&self, key: &R::Key) -> Option<&R> {
		if self.removed.contains(key) {
			return None;
		}
		self.edits.get(key).or_else(|| self.server.get(key))
	}

	/// Server data of a row, ignoring local edits
	pub fn original(&self, key: &R::Key) -> Option<&R> {
		self.server.get(key)
	}

	/// True when the row has an unconfirmed local edit
	pub fn is_edited(&self, key: &R::Key) -> bool {
		self.edits.contains_key(key)
	}

	/// True when there are drafts or local edits
	pub fn has_unsaved(&self) -> bool {
		!self.drafts.is_empty() || !self.edits.is_empty()
	}

	/// Rows in display order: drafts newest first, then server rows
	pub fn visible(&self) -> Vec<VisibleRow<'_, R>> {
		let drafts = self
			.drafts
			.iter()
			.rev()
			.map(|(id, row)| VisibleRow::Draft { id: *id, row });
		let server = self
			.server
			.iter()
			.filter(|(key, _)| !self.removed.contains(*key))
			.map(|(key, row)| match self.edits.get(key) {
				Some(edit) => VisibleRow::Server {
					row: edit,
					edited: true,
				},
				None => VisibleRow::Server { row, edited: false },
			});
		drafts.chain(server).collect()
	}

	/// Keys of the visible server rows in display order
	pub fn server_keys(&self) -> Vec<R::Key> {
		self.server
			.keys()
			.filter(|key| !self.removed.contains(*key))
			.cloned()
			.collect()
	}

	/// Reorders server rows to follow `keys`
	///
	/// Keys not listed keep their relative order after the listed ones.
	pub fn apply_order(&mut self, keys: &[R::Key]) {
		let mut ordered: IndexMap<R::Key, R> = IndexMap::with_capacity(self.server.len());
		for key in keys {
			if let Some(row) = self.server.shift_remove(key) {
				ordered.insert(key.clone(), row);
			}
		}
		ordered.extend(self.server.drain(..));
		self.server = ordered;
	}

	/// Applies a drag made over [`visible`](Self::visible)
	///
	/// Indices count drafts first, as displayed. Drafts have no server
	/// position, so a move that starts or ends on one is rejected. Returns
	/// the `(key, new_index)` pairs among server rows that changed.
	pub fn reorder_visible(&mut self, mv: Move) -> Result<Vec<(R::Key, usize)>> {
		let drafts = self.drafts.len();
		for index in [mv.from, mv.to] {
			if index < drafts {
				return Err(GridError::DraftNotMovable(index));
			}
		}
		let server_move = Move {
			from: mv.from - drafts,
			to: mv.to - drafts,
		};
		let mut keys = self.server_keys();
		let positions = server_move.changed_positions(&keys)?;
		server_move.apply(&mut keys)?;
		self.apply_order(&keys);
		tracing::debug!(from = mv.from, to = mv.to, drafts, "server rows reordered");
		Ok(positions)
	}

	/// Number of visible rows
	pub fn len(&self) -> usize {
		self.drafts.len() + self.server.len() - self.removed.len()
	}

	/// True when nothing is visible
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[derive(Debug, Clone, PartialEq)]
	struct Item {
		id: u32,
		label: &'static str,
	}

	impl Row for Item {
		type Key = u32;

		fn key(&self) -> u32 {
			self.id
		}
	}

	fn item(id: u32, label: &'static str) -> Item {
		Item { id, label }
	}

	#[rstest]
	fn test_duplicate_keys_keep_last() {
		let set = RowSet::from_server([item(1, "a"), item(1, "b")]);
		assert_eq!(set.len(), 1);
		assert_eq!(set.get(&1).unwrap().label, "b");
	}

	#[rstest]
	fn test_upsert_unknown_key_fails() {
		let mut set = RowSet::from_server([item(1, "a")]);
		assert_eq!(set.upsert(item(2, "b")), Err(GridError::RowNotFound("2".into())));
	}

	#[rstest]
	fn test_remove_then_restore() {
		let mut set = RowSet::from_server([item(1, "a"), item(2, "b")]);
		set.remove(&1).unwrap();
		assert_eq!(set.len(), 1);
		assert!(set.get(&1).is_none());
		assert!(set.restore(&1));
		assert_eq!(set.len(), 2);
	}

	#[rstest]
	fn test_apply_order() {
		let mut set = RowSet::from_server([item(1, "a"), item(2, "b"), item(3, "c")]);
		set.apply_order(&[3, 1]);
		assert_eq!(set.server_keys(), vec![3, 1, 2]);
	}
}
