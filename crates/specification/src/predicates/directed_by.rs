//! Predicate for attribution to a named director.
//!
//! Matches a nested field (the related director entity's name) for exact
//! equality against a constructor parameter.

use crate::expr::{Clause, CompareOp, ScalarValue};
use crate::traits::Predicate;
use catalog::Movie;

/// Satisfied by movies credited to the named director.
///
/// Any name constructs a valid predicate — an empty string simply
/// matches no movie with a named director.
pub struct DirectedBy {
    name: String,
}

impl DirectedBy {
    /// Create a new DirectedBy predicate.
    ///
    /// # Arguments
    /// * `name` - Director name to match, compared for exact equality
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Predicate<Movie> for DirectedBy {
    fn name(&self) -> &str {
        "DirectedBy"
    }

    fn is_satisfied_by(&self, movie: &Movie) -> bool {
        movie.director.name == self.name
    }

    fn clause(&self) -> Option<Clause> {
        Some(Clause {
            field: "director.name".to_string(),
            op: CompareOp::Eq,
            value: ScalarValue::Text(self.name.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Director, MpaaRating};
    use chrono::{TimeZone, Utc};

    fn movie_by(director: &str) -> Movie {
        Movie {
            id: 1,
            title: "Test Movie".to_string(),
            mpaa_rating: MpaaRating::Pg13,
            director: Director::new(director),
            release_date: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_directed_by_exact_match() {
        let predicate = DirectedBy::new("Nolan");

        assert!(predicate.is_satisfied_by(&movie_by("Nolan")));
        assert!(!predicate.is_satisfied_by(&movie_by("Villeneuve")));
        assert!(!predicate.is_satisfied_by(&movie_by("nolan")));
    }

    #[test]
    fn test_empty_name_constructs_and_matches_nothing() {
        let predicate = DirectedBy::new("");
        assert!(!predicate.is_satisfied_by(&movie_by("Nolan")));
    }

    #[test]
    fn test_clause_targets_nested_field() {
        let clause = DirectedBy::new("Nolan").clause().unwrap();
        assert_eq!(clause.field, "director.name");
        assert_eq!(clause.op, CompareOp::Eq);
        assert_eq!(clause.value, ScalarValue::Text("Nolan".to_string()));
    }
}
