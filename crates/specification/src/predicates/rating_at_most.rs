//! Predicate for an audience-rating ceiling.
//!
//! Keeps movies whose MPAA rating is at or below a fixed classification,
//! e.g. "PG or tamer" for a kids' shelf.

use crate::expr::{Clause, CompareOp, ScalarValue};
use crate::traits::Predicate;
use catalog::{Movie, MpaaRating};

/// Satisfied by movies rated at or below a ceiling.
///
/// Relies on [`MpaaRating`]'s derived ordering, where a lower variant
/// means a more permissive audience.
pub struct RatingAtMost {
    ceiling: MpaaRating,
}

impl RatingAtMost {
    /// Create a new RatingAtMost predicate.
    ///
    /// # Arguments
    /// * `ceiling` - The most restrictive rating still accepted
    pub fn new(ceiling: MpaaRating) -> Self {
        Self { ceiling }
    }
}

impl Predicate<Movie> for RatingAtMost {
    fn name(&self) -> &str {
        "RatingAtMost"
    }

    fn is_satisfied_by(&self, movie: &Movie) -> bool {
        movie.mpaa_rating <= self.ceiling
    }

    fn clause(&self) -> Option<Clause> {
        // Lowered against the rating's ordinal, matching the in-memory order
        Some(Clause {
            field: "mpaa_rating".to_string(),
            op: CompareOp::Le,
            value: ScalarValue::Int(self.ceiling as i64),
        })
    }
}
