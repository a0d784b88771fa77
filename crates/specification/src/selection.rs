//! Helpers for applying specifications across a catalog slice.
//!
//! This module covers the list-filtering caller pattern: fold whatever
//! criteria the caller selected into one specification (falling back to
//! the match-all identity when none were given), then select matching
//! entities from a slice.

use crate::specification::Specification;
use rayon::prelude::*;
use tracing;

/// Combine criteria conjunctively: an entity must satisfy every one.
///
/// The fold seeds with [`Specification::all`], so an empty criteria set
/// yields the identity and the identity folds out of a non-empty set —
/// callers never special-case "no filters were picked".
pub fn all_of<T>(specs: impl IntoIterator<Item = Specification<T>>) -> Specification<T> {
    specs
        .into_iter()
        .fold(Specification::all(), |acc, spec| acc.and(spec))
}

/// Combine criteria disjunctively: an entity may satisfy any one.
///
/// An empty criteria set means "no constraint", so it also yields the
/// identity. A non-empty set folds with `or`, where the identity would
/// absorb everything; seeding with the first criterion avoids that.
pub fn any_of<T>(specs: impl IntoIterator<Item = Specification<T>>) -> Specification<T> {
    let mut specs = specs.into_iter();
    match specs.next() {
        None => Specification::all(),
        Some(first) => specs.fold(first, |acc, spec| acc.or(spec)),
    }
}

/// Select the entities of a slice satisfying a specification.
///
/// Evaluation is pure and the specification is immutable, so entities
/// are tested in parallel.
///
/// # Arguments
/// * `items` - The entities to test
/// * `spec` - The specification each kept entity must satisfy
///
/// # Returns
/// References to the matching entities, in slice order
pub fn select<'a, T: Sync>(items: &'a [T], spec: &Specification<T>) -> Vec<&'a T> {
    tracing::debug!("Selecting over {} entities", items.len());
    let selected: Vec<&T> = items
        .par_iter()
        .filter(|item| spec.is_satisfied_by(item))
        .collect();
    tracing::debug!("Selected {} of {} entities", selected.len(), items.len());
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn even() -> Specification<i32> {
        Specification::from_fn("Even", |n: &i32| n % 2 == 0)
    }

    fn positive() -> Specification<i32> {
        Specification::from_fn("Positive", |n: &i32| *n > 0)
    }

    #[test]
    fn test_all_of_empty_is_identity() {
        let spec = all_of(Vec::<Specification<i32>>::new());
        assert!(spec.is_satisfied_by(&-7));
    }

    #[test]
    fn test_any_of_empty_is_identity() {
        let spec = any_of(Vec::<Specification<i32>>::new());
        assert!(spec.is_satisfied_by(&-7));
    }

    #[test]
    fn test_all_of_requires_every_criterion() {
        let spec = all_of([even(), positive()]);
        assert!(spec.is_satisfied_by(&4));
        assert!(!spec.is_satisfied_by(&3));
        assert!(!spec.is_satisfied_by(&-2));
    }

    #[test]
    fn test_any_of_accepts_any_criterion() {
        let spec = any_of([even(), positive()]);
        assert!(spec.is_satisfied_by(&-2));
        assert!(spec.is_satisfied_by(&3));
        assert!(!spec.is_satisfied_by(&-3));
    }

    #[test]
    fn test_select_keeps_slice_order() {
        let numbers: Vec<i32> = (-3..=3).collect();
        let selected = select(&numbers, &even());
        assert_eq!(selected, vec![&-2, &0, &2]);
    }

    #[test]
    fn test_select_with_identity_keeps_everything() {
        let numbers: Vec<i32> = (1..=5).collect();
        let selected = select(&numbers, &Specification::all());
        assert_eq!(selected.len(), 5);
    }
}
