//! Composable boolean specifications over catalog entities.
//!
//! This crate provides:
//! - Predicate trait for leaf conditions
//! - Specification for algebraic composition (and/or/not)
//! - Expr, the inspectable expression tree behind every specification
//! - Concrete movie predicates and selection helpers
//!
//! ## Architecture
//! A specification has two faces over the same tree:
//! 1. Executable: `is_satisfied_by` walks the tree against one entity
//! 2. Inspectable: `expr()` hands the tree to an external translator,
//!    which pattern-matches node kinds and lowers leaves via their clauses
//!
//! Composition never mutates operands; `and`/`or`/`not` build new trees
//! over shared `Arc` nodes. The `all()` specification is the identity of
//! the algebra and folds away under `and`/`or`, so an unconstrained search
//! never grows a vacuous clause.
//!
//! ## Example Usage
//! ```
//! use specification::Specification;
//! use specification::predicates::{DirectedBy, RatingAtMost};
//! use catalog::MpaaRating;
//!
//! let for_kids = Specification::leaf(RatingAtMost::new(MpaaRating::Pg));
//! let by_nolan = Specification::leaf(DirectedBy::new("Nolan"));
//!
//! // Either condition may match; the combined value is still a Specification
//! let watchable = for_kids.or(by_nolan);
//! # let _ = watchable;
//! ```

pub mod expr;
pub mod predicates;
pub mod selection;
pub mod specification;
pub mod traits;

// Re-export main types
pub use expr::{Clause, CompareOp, Expr, ScalarValue};
pub use selection::{all_of, any_of, select};
pub use specification::Specification;
pub use traits::Predicate;
