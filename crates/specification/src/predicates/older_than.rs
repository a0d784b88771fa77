//! Predicate for release age.
//!
//! Keeps movies released at least N calendar months before "now". The
//! default clock is the wall clock read at each evaluation, so results
//! drift as time passes; tests pin the clock with [`OlderThanMonths::with_now`].

use crate::expr::{Clause, CompareOp, ScalarValue};
use crate::traits::Predicate;
use catalog::Movie;
use chrono::{DateTime, Months, Utc};

/// Satisfied by movies whose release date is at least a number of
/// calendar months in the past.
///
/// ## Algorithm
/// 1. Take "now" (injected, or `Utc::now()` per evaluation)
/// 2. Step back `months` calendar months to get the cutoff
/// 3. Keep movies released at or before the cutoff
///
/// If the cutoff cannot be represented (stepping back past the datetime
/// range), no movie satisfies the predicate.
pub struct OlderThanMonths {
    months: u32,
    now: Option<DateTime<Utc>>,
}

impl OlderThanMonths {
    /// Create a predicate against the system clock.
    ///
    /// # Arguments
    /// * `months` - Minimum age in calendar months (zero accepts any
    ///   movie released up to the moment of evaluation)
    pub fn new(months: u32) -> Self {
        Self { months, now: None }
    }

    /// Create a predicate with a pinned clock, for deterministic tests.
    pub fn with_now(months: u32, now: DateTime<Utc>) -> Self {
        Self {
            months,
            now: Some(now),
        }
    }

    fn cutoff(&self) -> Option<DateTime<Utc>> {
        self.now
            .unwrap_or_else(Utc::now)
            .checked_sub_months(Months::new(self.months))
    }
}

impl Predicate<Movie> for OlderThanMonths {
    fn name(&self) -> &str {
        "OlderThanMonths"
    }

    fn is_satisfied_by(&self, movie: &Movie) -> bool {
        match self.cutoff() {
            Some(cutoff) => movie.release_date <= cutoff,
            None => false,
        }
    }

    fn clause(&self) -> Option<Clause> {
        // The lowered literal freezes the cutoff at translation time;
        // re-translate to refresh it.
        self.cutoff().map(|cutoff| Clause {
            field: "release_date".to_string(),
            op: CompareOp::Le,
            value: ScalarValue::Int(cutoff.timestamp()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Director, MpaaRating};
    use chrono::TimeZone;

    fn movie_released(year: i32, month: u32) -> Movie {
        Movie {
            id: 1,
            title: "Test Movie".to_string(),
            mpaa_rating: MpaaRating::Pg13,
            director: Director::new("Someone"),
            release_date: Utc.with_ymd_and_hms(year, month, 15, 0, 0, 0).unwrap(),
        }
    }

    fn pinned_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_older_than_six_months_with_pinned_clock() {
        let predicate = OlderThanMonths::with_now(6, pinned_now());

        // 20 months before the pinned clock
        assert!(predicate.is_satisfied_by(&movie_released(2022, 10)));
        // 2 months before the pinned clock
        assert!(!predicate.is_satisfied_by(&movie_released(2024, 4)));
    }

    #[test]
    fn test_boundary_release_exactly_at_cutoff() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let predicate = OlderThanMonths::with_now(6, now);

        // Released exactly six months before now: at the cutoff, kept
        assert!(predicate.is_satisfied_by(&movie_released(2023, 12)));
    }

    #[test]
    fn test_system_clock_monotonic_on_ancient_release() {
        // Without a pinned clock we can still assert the obvious: a
        // decades-old release is older than six months today.
        let predicate = OlderThanMonths::new(6);
        assert!(predicate.is_satisfied_by(&movie_released(1980, 1)));
    }

    #[test]
    fn test_clause_freezes_cutoff_timestamp() {
        let clause = OlderThanMonths::with_now(6, pinned_now()).clause().unwrap();
        let expected = Utc.with_ymd_and_hms(2023, 12, 15, 12, 0, 0).unwrap();
        assert_eq!(clause.field, "release_date");
        assert_eq!(clause.op, CompareOp::Le);
        assert_eq!(clause.value, ScalarValue::Int(expected.timestamp()));
    }
}
