//! The Specification facade: the only composable surface clients see.
//!
//! This module provides the public wrapper over the expression tree.
//! Combinators always return Specification, never a concrete node type,
//! so calling code cannot tell (or depend on) how many combinators were
//! folded into the tree underneath.

use crate::expr::Expr;
use crate::traits::{FnPredicate, Predicate};
use std::fmt;
use std::sync::Arc;

/// A composable, reusable boolean condition over entities of type `T`.
///
/// A specification wraps exactly one immutable expression tree. Cloning
/// is an `Arc` bump; combining produces a new specification and never
/// mutates an operand, so held references stay valid and many threads
/// may evaluate the same specification concurrently.
///
/// ## The identity element
/// [`Specification::all`] matches every entity and is the identity of
/// the algebra:
/// - `all().and(s)` returns `s` itself (same tree allocation, not merely
///   an equivalent one), and symmetrically for `s.and(all())`
/// - `s.or(all())` and `all().or(s)` return the `all()` operand
/// - `all().not()` is *not* simplified: it stays a Not node that matches
///   nothing, exactly as if a true-predicate were negated
///
/// Folding the identity away keeps an unconstrained search from carting
/// a vacuous always-true clause into a lowered backend filter.
///
/// ## Usage
/// ```
/// use specification::Specification;
/// use catalog::Movie;
///
/// let recent = Specification::<Movie>::from_fn("Recent", |m| {
///     m.release_date.timestamp() > 0
/// });
/// let unconstrained = Specification::all();
///
/// // The identity folds away; this IS `recent`, not a bigger tree
/// let combined = unconstrained.and(recent);
/// # let _ = combined;
/// ```
pub struct Specification<T> {
    expr: Arc<Expr<T>>,
}

impl<T> Specification<T> {
    /// The specification satisfied by every entity.
    ///
    /// Only this constructor produces the identity node; a user leaf
    /// that happens to always return true is never folded, because the
    /// optimization keys on the private identity variant, not on any
    /// structural "is this always true" check.
    pub fn all() -> Self {
        Self {
            expr: Arc::new(Expr::All),
        }
    }

    /// Wrap a leaf predicate as a specification.
    pub fn leaf(predicate: impl Predicate<T> + 'static) -> Self {
        Self {
            expr: Arc::new(Expr::Leaf(Arc::new(predicate))),
        }
    }

    /// Wrap a plain closure as an opaque leaf specification.
    ///
    /// Handy for one-off conditions and tests. The resulting leaf has no
    /// [`Clause`](crate::Clause), so translators treat it as opaque.
    pub fn from_fn<F>(name: impl Into<String>, eval: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::leaf(FnPredicate {
            name: name.into(),
            eval,
        })
    }

    /// Evaluate this specification against a single entity.
    ///
    /// Pure and infallible; safe to call repeatedly and from multiple
    /// threads at once.
    pub fn is_satisfied_by(&self, entity: &T) -> bool {
        self.expr.evaluate(entity)
    }

    /// Conjunction: satisfied when both `self` and `other` are.
    ///
    /// If either operand is the identity it is dropped and the other
    /// operand is returned as-is (sharing its tree allocation); otherwise
    /// a new And node wraps both operands' trees.
    pub fn and(self, other: Specification<T>) -> Specification<T> {
        if self.is_all() {
            return other;
        }
        if other.is_all() {
            return self;
        }
        Self {
            expr: Arc::new(Expr::And(self.expr, other.expr)),
        }
    }

    /// Disjunction: satisfied when either `self` or `other` is.
    ///
    /// "No constraint OR anything" is still no constraint, so if either
    /// operand is the identity, that identity operand is returned as-is;
    /// otherwise a new Or node wraps both operands' trees.
    pub fn or(self, other: Specification<T>) -> Specification<T> {
        if self.is_all() {
            return self;
        }
        if other.is_all() {
            return other;
        }
        Self {
            expr: Arc::new(Expr::Or(self.expr, other.expr)),
        }
    }

    /// Negation: satisfied when `self` is not.
    ///
    /// Always builds a Not node, even over the identity — `all().not()`
    /// matches nothing, which is the exact meaning of negating a
    /// true-predicate and is deliberately not special-cased.
    pub fn not(self) -> Specification<T> {
        Self {
            expr: Arc::new(Expr::Not(self.expr)),
        }
    }

    /// Borrow the expression tree for external translation.
    ///
    /// Translators pattern-match on [`Expr`](crate::Expr) node kinds; a
    /// bare `All` reaching a translator (a caller exported `all()`
    /// uncombined) must lower to no filter clause at all.
    pub fn expr(&self) -> &Expr<T> {
        &self.expr
    }

    fn is_all(&self) -> bool {
        matches!(*self.expr, Expr::All)
    }
}

// Manual impls: derives would wrongly require `T: Clone` / `T: Debug`.
impl<T> Clone for Specification<T> {
    fn clone(&self) -> Self {
        Self {
            expr: Arc::clone(&self.expr),
        }
    }
}

impl<T> fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Specification").field(&self.expr).finish()
    }
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

    /// The operands share a tree allocation exactly when the wrapper was
    /// returned unchanged by an identity fold.
    fn same_tree(a: &Specification<i32>, b: &Specification<i32>) -> bool {
        std::ptr::eq(a.expr(), b.expr())
    }

    #[test]
    fn test_all_matches_everything() {
        let all = Specification::<i32>::all();
        for n in [-3, 0, 42] {
            assert!(all.is_satisfied_by(&n));
        }
    }

    #[test]
    fn test_and_folds_identity_to_same_tree() {
        let s = even();
        let kept = s.clone();

        let left = Specification::all().and(s.clone());
        assert!(same_tree(&left, &kept));

        let right = s.and(Specification::all());
        assert!(same_tree(&right, &kept));
    }

    #[test]
    fn test_or_with_identity_returns_identity() {
        let all = Specification::<i32>::all();
        let kept = all.clone();

        let left = all.clone().or(even());
        assert!(same_tree(&left, &kept));

        let right = even().or(all);
        assert!(same_tree(&right, &kept));
        assert!(right.is_satisfied_by(&3));
    }

    #[test]
    fn test_and_semantics() {
        let s = even().and(positive());
        assert!(s.is_satisfied_by(&4));
        assert!(!s.is_satisfied_by(&3));
        assert!(!s.is_satisfied_by(&-4));
    }

    #[test]
    fn test_or_semantics() {
        let s = even().or(positive());
        assert!(s.is_satisfied_by(&4));
        assert!(s.is_satisfied_by(&3));
        assert!(!s.is_satisfied_by(&-3));
    }

    #[test]
    fn test_not_semantics() {
        let s = even().not();
        assert!(s.is_satisfied_by(&3));
        assert!(!s.is_satisfied_by(&4));
    }

    #[test]
    fn test_not_of_all_matches_nothing() {
        let none = Specification::<i32>::all().not();
        for n in [-3, 0, 42] {
            assert!(!none.is_satisfied_by(&n));
        }
        // Confirm the tree kept its Not node rather than folding
        assert!(matches!(none.expr(), Expr::Not(_)));
    }

    #[test]
    fn test_combination_does_not_mutate_operands() {
        let s = even();
        let kept = s.clone();
        let _combined = s.and(positive());
        assert!(kept.is_satisfied_by(&2));
        assert!(!kept.is_satisfied_by(&3));
    }

    #[test]
    fn test_combinators_leak_only_the_wrapper() {
        // Compile-time check by usage: nested composition stays fluent
        let s = even().and(positive()).or(even().not()).not();
        let _ = s.is_satisfied_by(&1);
    }
}
