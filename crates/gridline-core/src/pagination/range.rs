//! Page number ranges for pagination controls

use serde::{Serialize, Serializer};
use std::fmt;

/// Most pages a control shows before it starts eliding
const MAX_UNELIDED: u64 = 7;

/// Leading window shown when the current page is near the start
const LEADING_WINDOW: u64 = 5;

/// One slot of a pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageRangeEntry {
	/// A clickable page number (1-indexed)
	Page(u64),
	/// A gap standing in for one or more elided pages
	Ellipsis,
}

impl PageRangeEntry {
	/// Returns the page number, or `None` for an ellipsis
	pub fn page(&self) -> Option<u64> {
		match self {
			Self::Page(n) => Some(*n),
			Self::Ellipsis => None,
		}
	}

	/// Returns true for the ellipsis marker
	pub fn is_ellipsis(&self) -> bool {
		matches!(self, Self::Ellipsis)
	}
}

impl fmt::Display for PageRangeEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Page(n) => write!(f, "{}", n),
			Self::Ellipsis => f.write_str("..."),
		}
	}
}

/// Pages serialize as numbers and the ellipsis as `"..."`
impl Serialize for PageRangeEntry {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Page(n) => serializer.serialize_u64(*n),
			Self::Ellipsis => serializer.serialize_str("..."),
		}
	}
}

/// Computes the page numbers and ellipses to display
///
/// Up to seven pages are listed in full. Beyond that the first and last page
/// are always shown, and the pages around `current_page` fill the middle:
///
/// | Position of `current_page` | Result                                  |
/// |----------------------------|-----------------------------------------|
/// | `<= 4`                     | `1 2 3 4 5 … N`                         |
/// | `>= N - 3`                 | `1 … N-4 N-3 N-2 N-1 N`                 |
/// | otherwise                  | `1 … c-1 c c+1 … N`                     |
///
/// `current_page` is expected to be at least 1. A `total_pages` of zero
/// yields an empty range.
///
/// # Examples
///
/// ```
/// use gridline_core::{PageRangeEntry::{Ellipsis, Page}, page_range};
///
/// assert_eq!(
///     page_range(5, 10),
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
/// );
/// ```
pub fn page_range(current_page: u64, total_pages: u64) -> Vec<PageRangeEntry> {
	use PageRangeEntry::{Ellipsis, Page};

	if total_pages <= MAX_UNELIDED {
		return (1..=total_pages).map(Page).collect();
	}

	let range: Vec<PageRangeEntry> = if current_page <= 4 {
		(1..=LEADING_WINDOW)
			.map(Page)
			.chain([Ellipsis, Page(total_pages)])
			.collect()
	} else if current_page >= total_pages - 3 {
		[Page(1), Ellipsis]
			.into_iter()
			.chain((total_pages - 4..=total_pages).map(Page))
			.collect()
	} else {
		vec![
			Page(1),
			Ellipsis,
			Page(current_page - 1),
			Page(current_page),
			Page(current_page + 1),
			Ellipsis,
			Page(total_pages),
		]
	};

	tracing::trace!(current_page, total_pages, ?range, "computed page range");
	range
}
