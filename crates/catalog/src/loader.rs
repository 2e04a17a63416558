//! Loader for the college dataset file.
//!
//! The dataset is a single JSON array of college records (the Rust-side form
//! of the upstream static `CollegeData` module). Loading happens once at
//! startup; the resulting catalog is immutable.

use crate::error::Result;
use crate::types::{College, CollegeCatalog};
use std::fs;
use std::path::Path;

impl CollegeCatalog {
    /// Load and validate the dataset from a JSON file.
    ///
    /// Steps:
    /// 1. Read the file
    /// 2. Parse it as a JSON array of records
    /// 3. Validate via [`CollegeCatalog::from_colleges`]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let colleges: Vec<College> = serde_json::from_str(&contents)?;
        Self::from_colleges(colleges)
    }
}
