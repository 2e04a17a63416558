//! The filtered paginator: a pure page-step over the catalog.
//!
//! `load_next_page` is a pure function of (catalog, query, page, page size,
//! loading flag, has-more flag). It owns no state; [`crate::BrowseSession`]
//! holds the state and folds each `PageStep` into it. Keeping the step pure
//! makes the pagination properties directly testable.

use crate::query::SearchQuery;
use catalog::{College, CollegeCatalog};

/// Result of one page-step.
///
/// `next_page` and `has_more` are the values the caller's pagination state
/// should take after applying this step. A no-op step echoes the inputs back
/// with no items.
#[derive(Debug, Clone, PartialEq)]
pub struct PageStep {
    /// Records to append to the displayed list (may be empty)
    pub items: Vec<College>,
    /// 1-based page number for the next load
    pub next_page: u32,
    /// Whether any matching records remain beyond this page
    pub has_more: bool,
}

impl PageStep {
    fn noop(page: u32, has_more: bool) -> Self {
        Self {
            items: Vec::new(),
            next_page: page,
            has_more,
        }
    }
}

/// Compute the next page of query matches.
///
/// ## Algorithm
/// 1. If a load is already in flight, or the filter is exhausted, do nothing.
/// 2. Filter the catalog by `query`, preserving dataset order.
/// 3. Slice `[(page-1)*page_size, page*page_size)` out of the matches.
/// 4. An out-of-range start means exhaustion: no items, `has_more = false`.
///
/// Exhaustion is detected eagerly: `has_more` is false as soon as the
/// returned slice reaches the end of the matches, so a final partial page
/// already reports that nothing is left.
///
/// Guarantees: deterministic, no side effects on its inputs, and sequential
/// calls with increasing `page` (catalog and query held fixed) never skip or
/// duplicate a record.
pub fn load_next_page(
    catalog: &CollegeCatalog,
    query: &SearchQuery,
    page: u32,
    page_size: usize,
    loading: bool,
    has_more: bool,
) -> PageStep {
    if loading || !has_more {
        return PageStep::noop(page, has_more);
    }

    let matches: Vec<&College> = catalog.iter().filter(|c| query.matches(c)).collect();

    let start = (page.saturating_sub(1) as usize).saturating_mul(page_size);
    if start >= matches.len() {
        tracing::debug!(
            term = query.term(),
            page,
            matched = matches.len(),
            "filter exhausted"
        );
        return PageStep::noop(page, false);
    }

    let end = (start + page_size).min(matches.len());
    let items: Vec<College> = matches[start..end].iter().map(|&c| c.clone()).collect();
    let has_more = end < matches.len();

    tracing::debug!(
        term = query.term(),
        page,
        loaded = items.len(),
        matched = matches.len(),
        has_more,
        "loaded page"
    );

    PageStep {
        items,
        next_page: page + 1,
        has_more,
    }
}
