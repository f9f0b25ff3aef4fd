//! Wiring of the facade crate: settings feed the table, grid and select

use gridline::prelude::*;
use gridline::select::InfiniteCursor;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
struct Ticket {
	id: u32,
	title: String,
}

impl Row for Ticket {
	type Key = u32;

	fn key(&self) -> u32 {
		self.id
	}
}

impl SelectOption for Ticket {
	type Value = u32;

	fn value(&self) -> u32 {
		self.id
	}

	fn label(&self) -> &str {
		&self.title
	}
}

fn tickets(ids: std::ops::Range<u32>) -> Vec<Ticket> {
	ids.map(|id| Ticket {
		id,
		title: format!("Ticket #{id}"),
	})
	.collect()
}

#[rstest]
fn test_settings_drive_table_and_select() {
	let settings = GridSettings::from_toml_str(
		r#"
		[pagination]
		page_size = 10

		[select]
		page_size = 4
		"#,
	)
	.unwrap();

	let mut table = TableState::new(settings.table_page_size().unwrap().get()).unwrap();
	table.apply_response(&PageResponse::new(42, tickets(1..11)));
	assert_eq!(table.pages().total_pages(), 5);

	let select: SearchableSelect<Ticket> =
		SearchableSelect::from_settings(&settings.select, SelectionMode::Single).unwrap();
	assert_eq!(select.cursor().page_size().get(), 4);
}

#[rstest]
fn test_loaded_page_feeds_grid_rows() {
	let mut table = TableState::new(3).unwrap();
	let response = PageResponse::new(3, tickets(1..4));
	table.apply_response(&response);

	let mut rows = RowSet::from_server(response.results);
	assert_eq!(rows.server_keys(), [1, 2, 3]);
	rows.remove(&2).unwrap();
	assert_eq!(rows.visible().len(), 2);
}

#[rstest]
fn test_range_serializes_with_ellipsis_marker() {
	let json = serde_json::to_value(page_range(1, 9)).unwrap();
	assert_eq!(json, serde_json::json!([1, 2, 3, 4, 5, "...", 9]));
}

#[rstest]
fn test_cursor_reexported() {
	let mut cursor: InfiniteCursor<Ticket> = InfiniteCursor::new(PageSize::new(5).unwrap());
	assert!(cursor.begin().is_some());
}
