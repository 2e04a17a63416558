//! Rendering-surface helpers for the college browser.
//!
//! The browse core emits plain data (displayed rows, loading flag, has-more
//! flag); this crate turns that data into sorted, formatted text. It has no
//! knowledge of pagination or scrolling.

pub mod columns;
pub mod table;

pub use columns::{SortKey, SortOrder, sort_colleges};
pub use table::{
    end_of_results_line, format_featured, format_fees, format_user_rating, loading_line,
    render_table,
};
