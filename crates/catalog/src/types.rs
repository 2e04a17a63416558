//! Core domain types for the college dataset.
//!
//! The dataset is a flat JSON array of college records. Field names in the
//! serialized form follow the upstream dataset (`college_name`,
//! `college_dunia_rating`, ...), mapped onto shorter Rust names here.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single college record.
///
/// Records are read-only: the full set is loaded once at startup and never
/// mutated afterwards. `name` is the unique row key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct College {
    /// Unique college name, used as the row key
    #[serde(rename = "college_name")]
    pub name: String,

    /// Editorial rating ("CD Rating" column)
    #[serde(rename = "college_dunia_rating")]
    pub rating: f32,

    /// Annual course fees
    pub fees: u32,

    pub location: String,

    /// Aggregated user review score on a 0-10 scale
    pub user_rating: f32,

    /// Whether the college is featured (rendered as Yes/No)
    pub featured: bool,
}

/// The full, ordered, validated college dataset.
///
/// Holds records in their original dataset order (pagination depends on that
/// order being stable) plus a name index for O(1) key lookups.
#[derive(Debug)]
pub struct CollegeCatalog {
    colleges: Vec<College>,
    name_index: HashMap<String, usize>,
}

impl CollegeCatalog {
    /// Build a catalog from parsed records, validating as we go.
    ///
    /// Validation rules:
    /// - college names must be unique (they are the row key)
    /// - `user_rating` must be within the 0-10 scale
    pub fn from_colleges(colleges: Vec<College>) -> Result<Self> {
        let mut name_index = HashMap::with_capacity(colleges.len());

        for (idx, college) in colleges.iter().enumerate() {
            if !(0.0..=10.0).contains(&college.user_rating) {
                return Err(CatalogError::InvalidValue {
                    college: college.name.clone(),
                    field: "user_rating".to_string(),
                    value: college.user_rating.to_string(),
                });
            }

            if name_index.insert(college.name.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateName {
                    name: college.name.clone(),
                });
            }
        }

        Ok(Self {
            colleges,
            name_index,
        })
    }

    /// Get a college by its unique name
    pub fn get(&self, name: &str) -> Option<&College> {
        self.name_index.get(name).map(|&idx| &self.colleges[idx])
    }

    /// All records, in original dataset order
    pub fn as_slice(&self) -> &[College] {
        &self.colleges
    }

    /// Iterate records in original dataset order
    pub fn iter(&self) -> impl Iterator<Item = &College> {
        self.colleges.iter()
    }

    pub fn len(&self) -> usize {
        self.colleges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colleges.is_empty()
    }
}
