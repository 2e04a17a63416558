//! Free-text search over the catalog.
//!
//! A query is a single text string matched case-insensitively as a substring
//! against a record's name OR its location. The empty query matches every
//! record.

use catalog::College;

/// A case-insensitive substring search term.
///
/// The term is lowercased once at construction so that matching a record is
/// just two `contains` checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    term_lower: String,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        let term = term.into();
        let term_lower = term.to_lowercase();
        Self { term, term_lower }
    }

    /// The original term as the user typed it
    pub fn term(&self) -> &str {
        &self.term
    }

    /// True when the term is empty (matches everything)
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Does this college match the query?
    ///
    /// Matches against name or location, case-insensitively. An empty term
    /// matches every record (`contains("")` is always true).
    pub fn matches(&self, college: &College) -> bool {
        college.name.to_lowercase().contains(&self.term_lower)
            || college.location.to_lowercase().contains(&self.term_lower)
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn college(name: &str, location: &str) -> College {
        College {
            name: name.to_string(),
            rating: 8.0,
            fees: 200_000,
            location: location.to_string(),
            user_rating: 7.0,
            featured: false,
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = SearchQuery::default();
        assert!(query.matches(&college("IIT Madras", "Chennai")));
        assert!(query.matches(&college("", "")));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let query = SearchQuery::new("madras");
        assert!(query.matches(&college("IIT Madras", "Chennai")));

        let query = SearchQuery::new("CHENNAI");
        assert!(query.matches(&college("IIT Madras", "Chennai")));
    }

    #[test]
    fn test_matches_name_or_location() {
        let query = SearchQuery::new("delhi");

        // Matches by name
        assert!(query.matches(&college("Delhi Technological University", "New Delhi")));
        // Matches by location only
        assert!(query.matches(&college("Jamia Millia Islamia", "Delhi")));
        // Matches neither
        assert!(!query.matches(&college("IIT Madras", "Chennai")));
    }

    #[test]
    fn test_substring_not_exact_match() {
        let query = SearchQuery::new("iit");
        assert!(query.matches(&college("IIT Bombay", "Mumbai")));
        assert!(query.matches(&college("NIIT University", "Neemrana")));
    }
}
