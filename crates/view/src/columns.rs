//! Sortable columns over displayed rows.
//!
//! Sorting is a presentation concern: it reorders the rows a renderer was
//! handed and never feeds back into pagination, which always walks the
//! catalog in dataset order.

use catalog::College;
use std::cmp::Ordering;
use std::str::FromStr;

/// Column to sort the displayed rows by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Rating,
    Name,
    Fees,
    Location,
    UserRating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rating" => Ok(SortKey::Rating),
            "name" => Ok(SortKey::Name),
            "fees" => Ok(SortKey::Fees),
            "location" => Ok(SortKey::Location),
            "user-rating" | "user_rating" => Ok(SortKey::UserRating),
            _ => Err(format!(
                "unknown sort key '{}' (expected rating, name, fees, location, user-rating)",
                s
            )),
        }
    }
}

fn compare(a: &College, b: &College, key: SortKey) -> Ordering {
    match key {
        SortKey::Rating => a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Fees => a.fees.cmp(&b.fees),
        SortKey::Location => a.location.cmp(&b.location),
        SortKey::UserRating => a
            .user_rating
            .partial_cmp(&b.user_rating)
            .unwrap_or(Ordering::Equal),
    }
}

/// Sort rows in place by one column. Ties keep their relative order.
pub fn sort_colleges(rows: &mut [College], key: SortKey, order: SortOrder) {
    rows.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<College> {
        vec![
            College {
                name: "Beta College".to_string(),
                rating: 7.2,
                fees: 300_000,
                location: "Mumbai".to_string(),
                user_rating: 6.0,
                featured: false,
            },
            College {
                name: "Alpha College".to_string(),
                rating: 9.1,
                fees: 150_000,
                location: "Chennai".to_string(),
                user_rating: 8.5,
                featured: true,
            },
            College {
                name: "Gamma College".to_string(),
                rating: 8.0,
                fees: 220_000,
                location: "Delhi".to_string(),
                user_rating: 7.1,
                featured: false,
            },
        ]
    }

    #[test]
    fn test_sort_by_rating_descending() {
        let mut r = rows();
        sort_colleges(&mut r, SortKey::Rating, SortOrder::Descending);
        let names: Vec<&str> = r.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha College", "Gamma College", "Beta College"]);
    }

    #[test]
    fn test_sort_by_fees_ascending() {
        let mut r = rows();
        sort_colleges(&mut r, SortKey::Fees, SortOrder::Ascending);
        assert_eq!(r[0].fees, 150_000);
        assert_eq!(r[2].fees, 300_000);
    }

    #[test]
    fn test_sort_by_location() {
        let mut r = rows();
        sort_colleges(&mut r, SortKey::Location, SortOrder::Ascending);
        let cities: Vec<&str> = r.iter().map(|c| c.location.as_str()).collect();
        assert_eq!(cities, vec!["Chennai", "Delhi", "Mumbai"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut r = rows();
        for c in r.iter_mut() {
            c.user_rating = 5.0;
        }
        let before: Vec<String> = r.iter().map(|c| c.name.clone()).collect();
        sort_colleges(&mut r, SortKey::UserRating, SortOrder::Ascending);
        let after: Vec<String> = r.iter().map(|c| c.name.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("rating".parse::<SortKey>().unwrap(), SortKey::Rating);
        assert_eq!("user-rating".parse::<SortKey>().unwrap(), SortKey::UserRating);
        assert!("bogus".parse::<SortKey>().is_err());
    }
}
