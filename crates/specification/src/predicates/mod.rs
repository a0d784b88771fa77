//! Concrete leaf predicates over catalog movies.
//!
//! This module contains the supplied movie conditions plus a few named
//! shorthands for the compositions callers reach for most.

pub mod directed_by;
pub mod older_than;
pub mod rating_at_most;

// Re-export for convenience
pub use directed_by::DirectedBy;
pub use older_than::OlderThanMonths;
pub use rating_at_most::RatingAtMost;

use crate::Specification;
use catalog::{Movie, MpaaRating};

/// Movies a young audience can watch: rated PG or below.
pub fn for_kids() -> Specification<Movie> {
    Specification::leaf(RatingAtMost::new(MpaaRating::Pg))
}

/// Movies old enough to have reached home release: out for six months.
pub fn available_on_home_video() -> Specification<Movie> {
    Specification::leaf(OlderThanMonths::new(6))
}

/// Movies credited to the named director.
pub fn directed_by(name: impl Into<String>) -> Specification<Movie> {
    Specification::leaf(DirectedBy::new(name))
}
