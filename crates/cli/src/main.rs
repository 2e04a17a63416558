use anyhow::{Context, Result};
use browse::{BrowseSession, DEFAULT_THRESHOLD_FACTOR, ScrollTrigger, Viewport};
use catalog::CollegeCatalog;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use view::{SortKey, SortOrder};

/// CollegeScope - searchable, incrementally-loaded college listing
#[derive(Parser)]
#[command(name = "college-scope")]
#[command(about = "Browse a college catalog with search and scroll-driven paging", long_about = None)]
struct Cli {
    /// Path to the college dataset (JSON array of records)
    #[arg(short, long, default_value = "data/colleges.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load pages of colleges under a search term and render them
    List {
        /// Search term (case-insensitive substring on name or location)
        #[arg(long, default_value = "")]
        search: String,

        /// Number of page loads to perform
        #[arg(long, default_value = "3")]
        pages: u32,

        /// Records per page
        #[arg(long, default_value = "10")]
        page_size: usize,

        /// Sort displayed rows by a column (rating, name, fees, location, user-rating)
        #[arg(long)]
        sort_by: Option<SortKey>,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },

    /// Drive the scroll trigger with synthetic scroll events
    Simulate {
        /// Search term applied before mounting
        #[arg(long, default_value = "")]
        search: String,

        /// Records per page
        #[arg(long, default_value = "10")]
        page_size: usize,

        /// Viewport height in pixels
        #[arg(long, default_value = "600")]
        viewport_height: f32,

        /// Rendered row height in pixels
        #[arg(long, default_value = "40")]
        row_height: f32,

        /// Pixels scrolled per synthetic event
        #[arg(long, default_value = "120")]
        scroll_step: f32,

        /// Threshold factor (multiple of the viewport height)
        #[arg(long, default_value_t = DEFAULT_THRESHOLD_FACTOR)]
        threshold: f32,
    },

    /// Show catalog summary statistics
    Info,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = Arc::new(
        CollegeCatalog::load_from_file(&cli.data).with_context(|| {
            format!("Failed to load college dataset from {}", cli.data.display())
        })?,
    );
    println!("{} Loaded {} colleges", "✓".green(), catalog.len());

    match cli.command {
        Commands::List {
            search,
            pages,
            page_size,
            sort_by,
            desc,
        } => handle_list(catalog, search, pages, page_size, sort_by, desc),
        Commands::Simulate {
            search,
            page_size,
            viewport_height,
            row_height,
            scroll_step,
            threshold,
        } => handle_simulate(
            catalog,
            search,
            page_size,
            viewport_height,
            row_height,
            scroll_step,
            threshold,
        ),
        Commands::Info => handle_info(&catalog),
    }
}

/// Handle the 'list' command
fn handle_list(
    catalog: Arc<CollegeCatalog>,
    search: String,
    pages: u32,
    page_size: usize,
    sort_by: Option<SortKey>,
    desc: bool,
) -> Result<()> {
    let mut session = BrowseSession::new(catalog, page_size);
    // Set the term before mounting so the initial load already uses it.
    session.set_search_term(&search);
    session.mount();

    // The mount performed load 1; scroll to the bottom for the rest.
    for _ in 1..pages {
        if !session.has_more() {
            break;
        }
        let content_height = session.displayed().len() as f32 * 40.0;
        session.handle_scroll(Viewport {
            scroll_offset: content_height,
            visible_height: 600.0,
            content_height,
        });
    }

    if !search.is_empty() {
        println!("{}", format!("Results for '{}':", search).bold().blue());
    }

    let mut rows = session.displayed().to_vec();
    if let Some(key) = sort_by {
        let order = if desc {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        view::sort_colleges(&mut rows, key, order);
    }

    print!("{}", view::render_table(&rows));

    if session.has_more() {
        println!(
            "{}",
            format!(
                "Showing {} of more matches (raise --pages to load further)",
                rows.len()
            )
            .cyan()
        );
    } else {
        println!("{}", view::end_of_results_line().cyan());
    }
    Ok(())
}

/// Handle the 'simulate' command
fn handle_simulate(
    catalog: Arc<CollegeCatalog>,
    search: String,
    page_size: usize,
    viewport_height: f32,
    row_height: f32,
    scroll_step: f32,
    threshold: f32,
) -> Result<()> {
    let mut session =
        BrowseSession::new(catalog, page_size).with_trigger(ScrollTrigger::new(threshold));
    session.set_search_term(&search);
    session.mount();
    println!(
        "{} mount: {} rows, has_more = {}",
        "→".green(),
        session.displayed().len(),
        session.has_more()
    );

    if session.displayed().is_empty() && !session.has_more() {
        println!("{}", view::end_of_results_line().cyan());
        return Ok(());
    }

    let mut offset: f32 = 0.0;
    loop {
        let content_height = session.displayed().len() as f32 * row_height;
        let max_offset = (content_height - viewport_height).max(0.0);

        let loaded = session.handle_scroll(Viewport {
            scroll_offset: offset,
            visible_height: viewport_height,
            content_height,
        });
        if loaded {
            println!(
                "{} scroll @ {:>6.0}px: loaded page, {} rows, has_more = {}",
                "→".green(),
                offset,
                session.displayed().len(),
                session.has_more()
            );
        }

        // Stop at the bottom once nothing more loads there, either because
        // the filter is exhausted or because a sub-1.0 threshold can never
        // fire at the bottom (the trigger is a tunable, not a guarantee).
        if offset >= max_offset && !loaded {
            break;
        }
        offset = (offset + scroll_step).min(max_offset);
    }

    println!(
        "{} done: {} rows displayed, final page counter {}",
        "✓".green(),
        session.displayed().len(),
        session.current_page()
    );
    if !session.has_more() {
        println!("{}", view::end_of_results_line().cyan());
    }
    Ok(())
}

/// Handle the 'info' command
fn handle_info(catalog: &CollegeCatalog) -> Result<()> {
    let total = catalog.len();
    let featured = catalog.iter().filter(|c| c.featured).count();
    let locations: std::collections::HashSet<&str> =
        catalog.iter().map(|c| c.location.as_str()).collect();

    println!("{}", "Catalog summary".bold().blue());
    println!("{}Colleges: {}", "• ".green(), total);
    println!("{}Featured: {}", "• ".green(), featured);
    println!("{}Locations: {}", "• ".green(), locations.len());

    if let (Some(min), Some(max)) = (
        catalog.iter().map(|c| c.fees).min(),
        catalog.iter().map(|c| c.fees).max(),
    ) {
        println!(
            "{}Fees: {} - {}",
            "• ".cyan(),
            view::format_fees(min),
            view::format_fees(max)
        );
    }

    if total > 0 {
        let avg_user: f32 = catalog.iter().map(|c| c.user_rating).sum::<f32>() / total as f32;
        println!(
            "{}Average user rating: {}",
            "• ".cyan(),
            view::format_user_rating(avg_user)
        );
    }
    Ok(())
}
