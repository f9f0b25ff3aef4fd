//! Integration tests for page and table state

use gridline_core::{FilterSet, GridError, PageResponse, PageSize, PageState, TableState};
use proptest::prelude::*;
use rstest::{fixture, rstest};

#[derive(Debug, Clone)]
enum Nav {
	Next,
	Previous,
	Set(u64),
	Count(u64),
}

fn nav_strategy() -> impl Strategy<Value = Nav> {
	prop_oneof![
		Just(Nav::Next),
		Just(Nav::Previous),
		(0u64..40).prop_map(Nav::Set),
		(0u64..400).prop_map(Nav::Count),
	]
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(200))]

	/// Navigation never leaves [1, max(total_pages, 1)]
	#[test]
	fn prop_page_stays_in_bounds(
		size in 1u64..20,
		count in 0u64..400,
		ops in prop::collection::vec(nav_strategy(), 0..64),
	) {
		let mut state = PageState::with_total(PageSize::new(size).unwrap(), count);
		for op in ops {
			match op {
				Nav::Next => { state.next(); }
				Nav::Previous => { state.previous(); }
				Nav::Set(target) => { state.set_page(target); }
				Nav::Count(count) => state.set_total_count(count),
			}
			let upper = state.total_pages().max(1);
			prop_assert!(state.current_page() >= 1);
			prop_assert!(state.current_page() <= upper);
		}
	}
}

#[fixture]
fn orders() -> TableState {
	let mut table = TableState::new(25).unwrap();
	table.apply_response(&PageResponse::<u32>::new(240, vec![]));
	table
}

#[rstest]
fn test_zero_page_size_rejected() {
	assert_eq!(TableState::new(0), Err(GridError::InvalidPageSize(0)));
}

#[rstest]
fn test_walk_to_last_page_and_back(mut orders: TableState) {
	assert_eq!(orders.pages().total_pages(), 10);
	while orders.pages_mut().next() {}
	assert_eq!(orders.pages().current_page(), 10);
	assert_eq!(orders.pages().item_range(), Some((226, 240)));
	while orders.pages_mut().previous() {}
	assert_eq!(orders.pages().current_page(), 1);
}

#[rstest]
fn test_filter_change_builds_first_page_request(mut orders: TableState) {
	orders.pages_mut().set_page(6);
	orders.set_filter("status", "shipped");
	orders.set_search("acme");

	let query = orders.request().to_query_string().unwrap();
	assert_eq!(query, "page=1&page_size=25&search=acme&status=shipped");
}

#[rstest]
fn test_replace_filters_only_resets_on_change(mut orders: TableState) {
	let filters: FilterSet = [("status", "open")].into_iter().collect();
	orders.pages_mut().set_page(4);
	assert!(orders.replace_filters(filters.clone()));
	assert_eq!(orders.pages().current_page(), 1);

	orders.pages_mut().set_page(4);
	assert!(!orders.replace_filters(filters));
	assert_eq!(orders.pages().current_page(), 4);
}

#[rstest]
fn test_delete_on_last_page_clamps(mut orders: TableState) {
	orders.pages_mut().set_page(10);
	// the last page held 15 rows and all of them were deleted
	orders.apply_response(&PageResponse::<u32>::new(225, vec![]));
	assert_eq!(orders.pages().current_page(), 9);
}
