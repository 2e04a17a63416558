//! The browse session: pagination state plus the scroll-driven lifecycle.
//!
//! A [`BrowseSession`] owns everything the hosting UI needs to render — the
//! displayed rows, the loading flag, and the has-more flag — and folds the
//! pure page-steps from [`crate::paginator`] into that state. All work is
//! synchronous; the `loading` flag is the sole re-entrancy guard against
//! rapid successive scroll events.
//!
//! State machine: `Idle --threshold crossed--> Loading --step applied--> Idle`.
//! A load runs to completion inside the event handler, so the session is
//! observably `Idle` between events; the guard matters because the hosting
//! widget may re-dispatch a qualifying scroll event from inside a render
//! callback while a step is being applied.

use crate::paginator;
use crate::query::SearchQuery;
use crate::scroll::{ScrollTrigger, Viewport};
use catalog::{College, CollegeCatalog};
use std::sync::Arc;

pub struct BrowseSession {
    catalog: Arc<CollegeCatalog>,
    query: SearchQuery,
    /// 1-based page number of the next load
    page: u32,
    page_size: usize,
    /// Append-only until a filter reset; always a prefix, in catalog order,
    /// of the current filter's matches
    displayed: Vec<College>,
    loading: bool,
    has_more: bool,
    mounted: bool,
    trigger: ScrollTrigger,
}

impl BrowseSession {
    pub fn new(catalog: Arc<CollegeCatalog>, page_size: usize) -> Self {
        Self {
            catalog,
            query: SearchQuery::default(),
            page: 1,
            page_size,
            displayed: Vec::new(),
            loading: false,
            has_more: true,
            mounted: false,
            trigger: ScrollTrigger::default(),
        }
    }

    /// Override the scroll trigger (builder style).
    pub fn with_trigger(mut self, trigger: ScrollTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Attach the session to its view.
    ///
    /// Idempotent: mounting an already-mounted session does nothing, so a
    /// hosting widget that mounts defensively cannot double-attach. The
    /// first mount performs the initial load so page 1 is populated without
    /// waiting for a scroll event; a re-mount after [`unmount`] resumes
    /// where the session left off.
    ///
    /// [`unmount`]: BrowseSession::unmount
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        tracing::debug!(term = self.query.term(), "session mounted");
        if self.displayed.is_empty() && self.page == 1 {
            self.load_next();
        }
    }

    /// Detach from the view. Scroll events are ignored until re-mounted.
    pub fn unmount(&mut self) {
        self.mounted = false;
        tracing::debug!("session unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Change the search term, atomically resetting pagination.
    ///
    /// The displayed list, page counter, and has-more flag are all reset
    /// before the new filter's first page loads, so no page computed under
    /// the previous filter can ever be appended after the reset.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query = SearchQuery::new(term);
        self.displayed.clear();
        self.page = 1;
        self.has_more = true;
        self.loading = false;
        tracing::debug!(term = self.query.term(), "filter reset");

        if self.mounted {
            self.load_next();
        }
    }

    /// Feed one scroll event. Returns true if a page load appended rows.
    ///
    /// Unmounted sessions ignore scroll events entirely. Events that cross
    /// the threshold while a load is in flight are rejected by the
    /// `loading` guard inside [`load_next`].
    ///
    /// [`load_next`]: BrowseSession::load_next
    pub fn handle_scroll(&mut self, viewport: Viewport) -> bool {
        if !self.mounted {
            return false;
        }
        if !self.trigger.should_load(&viewport) {
            return false;
        }
        self.load_next()
    }

    /// Run one page step and fold it into the session state.
    ///
    /// Returns true when new rows were appended (an exhaustion step flips
    /// `has_more` without appending).
    fn load_next(&mut self) -> bool {
        if self.loading || !self.has_more {
            return false;
        }
        self.loading = true;

        let step = paginator::load_next_page(
            &self.catalog,
            &self.query,
            self.page,
            self.page_size,
            false,
            self.has_more,
        );

        let appended = !step.items.is_empty();
        self.page = step.next_page;
        self.has_more = step.has_more;
        self.displayed.extend(step.items);

        self.loading = false;
        appended
    }

    // Read accessors: the plain data an external renderer consumes.

    pub fn displayed(&self) -> &[College] {
        &self.displayed
    }

    pub fn search_term(&self) -> &str {
        self.query.term()
    }

    /// 1-based page number the next load will fetch
    pub fn current_page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }
}
