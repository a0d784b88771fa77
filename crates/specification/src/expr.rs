//! The inspectable expression tree behind every specification.
//!
//! This module defines Expr, the tree form of a boolean condition, plus
//! the Clause types that leaves expose for query-backend lowering.
//!
//! Rust concepts demonstrated here:
//! - A closed enum as the translator contract (node kinds never grow
//!   behind a translator's back)
//! - `Arc` for cheap structural sharing of immutable subtrees
//! - Trait objects (`dyn Predicate<T>`) for the open leaf edge

use crate::traits::Predicate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Expression Tree
// =============================================================================

/// A node in the expression tree of a specification.
///
/// The variant set {All, Leaf, And, Or, Not} is the stable contract for
/// external translators: lower `And`/`Or`/`Not` structurally, lower a
/// `Leaf` through its [`Clause`] (or fall back to in-memory evaluation
/// when the leaf is opaque), and lower `All` to *no* filter clause —
/// never to an explicit always-true predicate.
///
/// Children are `Arc`-shared and never mutated after construction, so a
/// composed tree can be walked concurrently with its operands still live.
pub enum Expr<T> {
    /// Matches every entity; the identity element of the algebra.
    All,
    /// A single concrete condition with a directly callable evaluator.
    Leaf(Arc<dyn Predicate<T>>),
    /// Both children must hold. Evaluation short-circuits left to right.
    And(Arc<Expr<T>>, Arc<Expr<T>>),
    /// Either child must hold. Evaluation short-circuits left to right.
    Or(Arc<Expr<T>>, Arc<Expr<T>>),
    /// The child must not hold.
    Not(Arc<Expr<T>>),
}

impl<T> Expr<T> {
    /// Evaluate this tree against a single entity.
    ///
    /// The same `entity` reference flows through every node — binary
    /// nodes test one shared value, not two independently scoped ones.
    /// `&&`/`||` give And/Or standard short-circuit semantics, so a
    /// right-hand leaf with an expensive evaluator is skipped whenever
    /// the left operand already decides the result.
    pub fn evaluate(&self, entity: &T) -> bool {
        match self {
            Expr::All => true,
            Expr::Leaf(predicate) => predicate.is_satisfied_by(entity),
            Expr::And(left, right) => left.evaluate(entity) && right.evaluate(entity),
            Expr::Or(left, right) => left.evaluate(entity) || right.evaluate(entity),
            Expr::Not(child) => !child.evaluate(entity),
        }
    }
}

// Manual impl: `dyn Predicate<T>` has no Debug bound, so derive won't do.
impl<T> fmt::Debug for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::All => f.write_str("All"),
            Expr::Leaf(predicate) => write!(f, "Leaf({})", predicate.name()),
            Expr::And(left, right) => f.debug_tuple("And").field(left).field(right).finish(),
            Expr::Or(left, right) => f.debug_tuple("Or").field(left).field(right).finish(),
            Expr::Not(child) => f.debug_tuple("Not").field(child).finish(),
        }
    }
}

// =============================================================================
// Lowering Types
// =============================================================================

/// The structured, backend-neutral form of one leaf condition.
///
/// A translator that understands `{field, op, value}` triples can lower
/// a clause into its own filter syntax (SQL, a store's query DSL, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    /// Dotted path to the entity field (e.g., "director.name").
    pub field: String,
    pub op: CompareOp,
    pub value: ScalarValue,
}

/// Comparison operators a leaf clause can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    /// SQL-style spelling of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}

/// Literal values a leaf clause can compare against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            ScalarValue::Int(n) => write!(f, "{}", n),
            ScalarValue::Float(x) => write!(f, "{}", x),
        }
    }
}
