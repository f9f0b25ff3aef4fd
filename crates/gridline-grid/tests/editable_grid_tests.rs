//! End-to-end flows of an editable grid: drafts, edits, refreshes and drags

use gridline_core::GridError;
use gridline_grid::{DragState, EditSession, EditState, Move, Row, RowSet, VisibleRow};
use proptest::prelude::*;
use rstest::{fixture, rstest};

#[derive(Debug, Clone, PartialEq)]
struct Product {
	sku: String,
	name: String,
	price_cents: u32,
}

impl Row for Product {
	type Key = String;

	fn key(&self) -> String {
		self.sku.clone()
	}
}

fn product(sku: &str, name: &str, price_cents: u32) -> Product {
	Product {
		sku: sku.to_string(),
		name: name.to_string(),
		price_cents,
	}
}

#[fixture]
fn catalog() -> RowSet<Product> {
	RowSet::from_server([
		product("A-1", "Anvil", 4_999),
		product("B-2", "Bolt", 25),
		product("C-3", "Clamp", 1_250),
	])
}

fn names(rows: &RowSet<Product>) -> Vec<String> {
	rows.visible().iter().map(|r| r.row().name.clone()).collect()
}

#[rstest]
fn test_refresh_keeps_drafts_and_surviving_edits(mut catalog: RowSet<Product>) {
	let draft = catalog.add_draft(product("", "Drill", 8_900));
	catalog.upsert(product("B-2", "Bolt (zinc)", 30)).unwrap();
	catalog.upsert(product("C-3", "Clamp XL", 1_500)).unwrap();

	// C-3 was deleted by someone else in the meantime
	let report = catalog.refresh([product("A-1", "Anvil", 4_999), product("B-2", "Bolt", 25)]);

	assert_eq!(report.kept_edits, vec!["B-2".to_string()]);
	assert_eq!(report.dropped_edits, vec!["C-3".to_string()]);
	assert_eq!(catalog.draft(draft).unwrap().name, "Drill");
	assert_eq!(names(&catalog), ["Drill", "Anvil", "Bolt (zinc)"]);
	assert!(matches!(
		catalog.visible()[2],
		VisibleRow::Server { edited: true, .. }
	));
}

#[rstest]
fn test_drafts_listed_newest_first(mut catalog: RowSet<Product>) {
	catalog.add_draft(product("", "First", 1));
	catalog.add_draft(product("", "Second", 2));
	assert_eq!(names(&catalog)[..2], ["Second", "First"]);
}

#[rstest]
fn test_promote_draft_merges_by_key(mut catalog: RowSet<Product>) {
	let draft = catalog.add_draft(product("", "Drill", 8_900));
	catalog.promote_draft(draft, product("D-4", "Drill", 8_900)).unwrap();

	assert!(catalog.draft(draft).is_none());
	assert!(!catalog.has_unsaved());
	assert_eq!(catalog.get(&"D-4".to_string()).unwrap().price_cents, 8_900);
	assert_eq!(names(&catalog), ["Anvil", "Bolt", "Clamp", "Drill"]);

	assert!(matches!(
		catalog.promote_draft(draft, product("D-4", "Drill", 1)),
		Err(GridError::RowNotFound(_))
	));
}

#[rstest]
fn test_optimistic_delete_confirmed_by_refresh(mut catalog: RowSet<Product>) {
	catalog.remove(&"A-1".to_string()).unwrap();
	assert_eq!(catalog.len(), 2);

	// server has not processed the delete yet
	let report = catalog.refresh([
		product("A-1", "Anvil", 4_999),
		product("B-2", "Bolt", 25),
		product("C-3", "Clamp", 1_250),
	]);
	assert!(report.confirmed_removals.is_empty());
	assert_eq!(names(&catalog), ["Bolt", "Clamp"]);

	let report = catalog.refresh([product("B-2", "Bolt", 25), product("C-3", "Clamp", 1_250)]);
	assert_eq!(report.confirmed_removals, vec!["A-1".to_string()]);
}

#[rstest]
fn test_edit_session_save_flow(mut catalog: RowSet<Product>) {
	let key = "B-2".to_string();
	let mut session = EditSession::new();

	session.begin(key.clone(), catalog.get(&key).unwrap().clone()).unwrap();
	session.update(&key, product("B-2", "Bolt", 40)).unwrap();
	let to_save = session.submit(&key).unwrap();
	catalog.upsert(to_save).unwrap();

	session.fail(&key, "409 Conflict").unwrap();
	assert_eq!(session.state(&key).and_then(EditState::error), Some("409 Conflict"));

	let to_save = session.retry(&key).unwrap();
	let saved = session.succeed(&key).unwrap();
	assert_eq!(saved, to_save);
	catalog.confirm(saved);

	assert!(!session.is_active(&key));
	assert!(!catalog.is_edited(&key));
	assert_eq!(catalog.get(&key).unwrap().price_cents, 40);
}

#[rstest]
fn test_cancel_restores_original(mut catalog: RowSet<Product>) {
	let key = "A-1".to_string();
	let mut session = EditSession::new();
	session.begin(key.clone(), catalog.get(&key).unwrap().clone()).unwrap();
	session.update(&key, product("A-1", "Anvil v2", 1)).unwrap();

	let original = session.cancel(&key).unwrap();
	assert_eq!(original.name, "Anvil");
	assert!(session.state(&key).is_none());
	assert!(catalog.revert(&key).is_none());
}

#[rstest]
fn test_drag_reorders_server_rows(mut catalog: RowSet<Product>) {
	let mut drag = DragState::default();
	drag.start(2);
	drag.hover(Some(1));
	drag.hover(Some(0));
	let mv = drag.drop().unwrap();

	let mut keys = catalog.server_keys();
	let positions = mv.changed_positions(&keys).unwrap();
	mv.apply(&mut keys).unwrap();
	catalog.apply_order(&keys);

	assert_eq!(names(&catalog), ["Clamp", "Anvil", "Bolt"]);
	assert_eq!(
		positions,
		vec![("C-3".to_string(), 0), ("A-1".to_string(), 1), ("B-2".to_string(), 2)]
	);
}

#[rstest]
fn test_drag_with_draft_present(mut catalog: RowSet<Product>) {
	catalog.add_draft(product("D-4", "Drill", 8_900));
	assert_eq!(names(&catalog), ["Drill", "Anvil", "Bolt", "Clamp"]);

	let mut drag = DragState::default();
	drag.start(1);
	drag.hover(Some(3));
	let positions = catalog.reorder_visible(drag.drop().unwrap()).unwrap();

	assert_eq!(names(&catalog), ["Drill", "Bolt", "Clamp", "Anvil"]);
	assert_eq!(
		positions,
		vec![("B-2".to_string(), 0), ("C-3".to_string(), 1), ("A-1".to_string(), 2)]
	);
}

#[rstest]
#[case::from_draft(0, 2)]
#[case::onto_draft(3, 0)]
fn test_drag_involving_draft_rejected(
	mut catalog: RowSet<Product>,
	#[case] from: usize,
	#[case] to: usize,
) {
	catalog.add_draft(product("D-4", "Drill", 8_900));
	let err = catalog.reorder_visible(Move { from, to }).unwrap_err();
	assert!(matches!(err, GridError::DraftNotMovable(_)));
	assert_eq!(names(&catalog), ["Drill", "Anvil", "Bolt", "Clamp"]);
}

#[rstest]
fn test_drag_past_end_rejected(mut catalog: RowSet<Product>) {
	catalog.add_draft(product("D-4", "Drill", 8_900));
	assert_eq!(
		catalog.reorder_visible(Move { from: 1, to: 4 }),
		Err(GridError::IndexOutOfBounds { index: 3, len: 3 })
	);
}

#[rstest]
fn test_saved_row_shown_again_after_optimistic_delete(mut catalog: RowSet<Product>) {
	catalog.remove(&"B-2".to_string()).unwrap();
	catalog.confirm(product("B-2", "Bolt", 30));
	assert_eq!(names(&catalog), ["Anvil", "Bolt", "Clamp"]);
	assert_eq!(catalog.len(), 3);
}

proptest! {
	/// A move keeps every element and places the moved one at `to`
	#[test]
	fn prop_move_is_permutation(len in 1usize..50, a in any::<usize>(), b in any::<usize>()) {
		let (from, to) = (a % len, b % len);
		let original: Vec<usize> = (0..len).collect();
		let mut moved = original.clone();
		gridline_grid::move_item(&mut moved, from, to).unwrap();

		prop_assert_eq!(moved[to], original[from]);
		let mut sorted = moved.clone();
		sorted.sort_unstable();
		prop_assert_eq!(sorted, original);
	}
}
