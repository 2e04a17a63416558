//! # Catalog Crate
//!
//! This crate holds the college dataset: the record type, the validated
//! in-memory collection, and the JSON loader.
//!
//! ## Main Components
//!
//! - **types**: `College` record and the ordered `CollegeCatalog` collection
//! - **loader**: parse the JSON dataset file into a validated catalog
//! - **error**: error types for loading and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::CollegeCatalog;
//! use std::path::Path;
//!
//! let catalog = CollegeCatalog::load_from_file(Path::new("data/colleges.json"))?;
//!
//! let college = catalog.get("IIT Madras").unwrap();
//! println!("{} is in {}", college.name, college.location);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{College, CollegeCatalog};
