//! Browsing core: filtered pagination driven by scroll events.
//!
//! This crate provides:
//! - `SearchQuery` for case-insensitive substring filtering
//! - `load_next_page`, the pure page-step over a catalog
//! - `ScrollTrigger` / `Viewport` for near-bottom detection
//! - `BrowseSession`, the stateful controller the hosting UI talks to
//!
//! ## Architecture
//! The page-step is a pure function; `BrowseSession` owns all mutable state
//! (search term, page counter, displayed rows, loading and has-more flags)
//! and applies steps in response to UI events:
//! 1. `mount` populates the first page
//! 2. `handle_scroll` loads the next page when near the bottom
//! 3. `set_search_term` atomically resets and reloads under the new filter
//!
//! ## Example Usage
//! ```ignore
//! use browse::{BrowseSession, Viewport};
//! use catalog::CollegeCatalog;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(CollegeCatalog::load_from_file(path)?);
//! let mut session = BrowseSession::new(catalog, 10);
//!
//! session.mount();
//! session.set_search_term("delhi");
//! session.handle_scroll(Viewport {
//!     scroll_offset: 3300.0,
//!     visible_height: 600.0,
//!     content_height: 4000.0,
//! });
//! render(session.displayed(), session.is_loading(), session.has_more());
//! ```

pub mod query;
pub mod paginator;
pub mod scroll;
pub mod session;

// Re-export main types
pub use query::SearchQuery;
pub use paginator::{PageStep, load_next_page};
pub use scroll::{DEFAULT_THRESHOLD_FACTOR, ScrollTrigger, Viewport};
pub use session::BrowseSession;
