//! Plain-text table rendering for college rows.
//!
//! The browse core hands any renderer three plain values: the displayed
//! rows, a loading flag, and a has-more flag. This module is the text
//! renderer for them: the featured flag renders as Yes/No and user ratings
//! as `x.x/10`.

use catalog::College;

/// Render the featured flag the way the table column does.
pub fn format_featured(featured: bool) -> &'static str {
    if featured { "Yes" } else { "No" }
}

/// Render a user rating on its 0-10 scale, e.g. `8.6/10`.
pub fn format_user_rating(user_rating: f32) -> String {
    format!("{:.1}/10", user_rating)
}

/// Render fees with thousands grouping, e.g. `210000` -> `210,000`.
pub fn format_fees(fees: u32) -> String {
    let digits = fees.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

const HEADERS: [&str; 6] = [
    "CD Rating",
    "Colleges",
    "Course Fees",
    "Location",
    "User Reviews",
    "Featured",
];

fn row_cells(college: &College) -> [String; 6] {
    [
        format!("{:.1}", college.rating),
        college.name.clone(),
        format_fees(college.fees),
        college.location.clone(),
        format_user_rating(college.user_rating),
        format_featured(college.featured).to_string(),
    ]
}

/// Render rows as a fixed-width text table with a header line.
pub fn render_table(rows: &[College]) -> String {
    let cells: Vec<[String; 6]> = rows.iter().map(row_cells).collect();

    // Column widths: widest of header and every cell.
    let mut widths: [usize; 6] = HEADERS.map(|h| h.len());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    let line = |cells: &[String; 6], out: &mut String| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect();
        out.push_str(padded.join("  ").trim_end());
        out.push('\n');
    };

    line(&HEADERS.map(|h| h.to_string()), &mut out);
    line(
        &widths.map(|w| "-".repeat(w)),
        &mut out,
    );
    for row in &cells {
        line(row, &mut out);
    }
    out
}

/// Footer shown while a page load is in flight.
pub fn loading_line() -> &'static str {
    "Loading..."
}

/// Footer shown once the filter is exhausted.
pub fn end_of_results_line() -> &'static str {
    "No more data"
}
