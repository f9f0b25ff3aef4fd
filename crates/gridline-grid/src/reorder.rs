//! Drag-and-drop reordering

use gridline_core::{GridError, Result};
use serde::{Deserialize, Serialize};

/// Moves the item at `from` so that it ends up at index `to`
///
/// # Examples
///
/// ```
/// use gridline_grid::move_item;
///
/// let mut items = vec!["a", "b", "c", "d"];
/// move_item(&mut items, 0, 2).unwrap();
/// assert_eq!(items, ["b", "c", "a", "d"]);
/// ```
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<()> {
	let len = items.len();
	for index in [from, to] {
		if index >= len {
			return Err(GridError::IndexOutOfBounds { index, len });
		}
	}
	if from != to {
		let item = items.remove(from);
		items.insert(to, item);
	}
	Ok(())
}

/// A completed drag from one index to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
	/// Index the item was picked up from
	pub from: usize,
	/// Index the item was dropped at
	pub to: usize,
}

impl Move {
	/// Applies the move to `items`
	pub fn apply<T>(&self, items: &mut Vec<T>) -> Result<()> {
		move_item(items, self.from, self.to)
	}

	/// Returns the new positions of every item whose index changed
	///
	/// Each entry is `(key, new_index)`, which is what a persistence call
	/// for sort positions needs.
	pub fn changed_positions<K: Clone>(&self, keys: &[K]) -> Result<Vec<(K, usize)>> {
		let mut reordered = keys.to_vec();
		self.apply(&mut reordered)?;
		let (lo, hi) = if self.from <= self.to {
			(self.from, self.to)
		} else {
			(self.to, self.from)
		};
		Ok(reordered[lo..=hi]
			.iter()
			.enumerate()
			.map(|(offset, key)| (key.clone(), lo + offset))
			.collect())
	}
}

/// Pointer state of a drag in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
	/// Nothing being dragged
	#[default]
	Idle,
	/// An item is being dragged
	Dragging {
		/// Index the drag started from
		from: usize,
		/// Index currently hovered, if any
		over: Option<usize>,
	},
}

impl DragState {
	/// Picks up the item at `index`
	///
	/// Starting a new drag replaces one already in progress.
	pub fn start(&mut self, index: usize) {
		*self = Self::Dragging {
			from: index,
			over: Some(index),
		};
	}

	/// Records the hovered drop target
	pub fn hover(&mut self, index: Option<usize>) {
		if let Self::Dragging { over, .. } = self {
			*over = index;
		}
	}

	/// Drops the item, returning the move if it changes the order
	///
	/// Dropping outside any target, or back on the origin, yields nothing.
	pub fn drop(&mut self) -> Option<Move> {
		let state = std::mem::take(self);
		match state {
			Self::Dragging {
				from,
				over: Some(to),
			} if from != to => {
				tracing::debug!(from, to, "row dropped");
				Some(Move { from, to })
			}
			_ => None,
		}
	}

	/// Abandons the drag
	pub fn cancel(&mut self) {
		*self = Self::Idle;
	}

	/// True while dragging
	pub fn is_dragging(&self) -> bool {
		matches!(self, Self::Dragging { .. })
	}

	/// Index being dragged
	pub fn source(&self) -> Option<usize> {
		match self {
			Self::Dragging { from, .. } => Some(*from),
			Self::Idle => None,
		}
	}
}
