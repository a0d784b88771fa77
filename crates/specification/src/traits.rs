//! Core trait for leaf predicates.
//!
//! This module defines the Predicate trait that allows new leaf
//! conditions to be plugged into the specification algebra.

use crate::expr::Clause;

/// A single concrete condition over an entity of type `T`.
///
/// Leaves are the open edge of the algebra: the combinator node set is
/// closed, but anything implementing this trait can sit at a leaf.
///
/// ## Design Note
/// - `Send + Sync` allows specifications to be evaluated from many
///   threads at once; leaves hold only immutable parameters
/// - Construction must always succeed — degenerate parameters (an empty
///   name, a zero threshold) are valid leaves that may match nothing
/// - Evaluation is pure and infallible; it returns a plain bool
pub trait Predicate<T>: Send + Sync {
    /// Returns the name of this predicate (for logging/debugging)
    fn name(&self) -> &str;

    /// Evaluate this predicate against a single entity.
    fn is_satisfied_by(&self, entity: &T) -> bool;

    /// The structured form of this condition for query-backend lowering.
    ///
    /// Returns `None` when the condition has no tabular rendering; a
    /// translator must then fall back to in-memory evaluation for this
    /// leaf. The default is `None` so closure-backed leaves stay opaque.
    fn clause(&self) -> Option<Clause> {
        None
    }
}

/// Adapter that turns a plain closure into a leaf predicate.
///
/// Used by [`Specification::from_fn`](crate::Specification::from_fn);
/// such leaves are always opaque to translators.
pub(crate) struct FnPredicate<F> {
    pub(crate) name: String,
    pub(crate) eval: F,
}

impl<T, F> Predicate<T> for FnPredicate<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn is_satisfied_by(&self, entity: &T) -> bool {
        (self.eval)(entity)
    }
}
