//! Example: lower a specification into a backend filter
//!
//! Run with: cargo run --package specification --example lower_to_sql
//!
//! This example plays the role of the external translator: it walks the
//! exported expression tree, lowers leaf clauses into a SQL-ish WHERE
//! string (and JSON for wire transport), renders the match-all identity
//! as no clause at all, and falls back to in-memory evaluation when it
//! meets an opaque leaf.

use catalog::{Director, Movie, MpaaRating};
use chrono::{TimeZone, Utc};
use specification::predicates::{directed_by, for_kids, OlderThanMonths};
use specification::{Clause, Expr, Specification};

/// Lower an expression tree to a WHERE fragment.
///
/// Returns `Ok(None)` for the bare identity (no filter clause), and an
/// error naming the opaque leaf when the tree cannot be lowered.
fn lower(expr: &Expr<Movie>) -> anyhow::Result<Option<String>> {
    match expr {
        Expr::All => Ok(None),
        Expr::Leaf(predicate) => match predicate.clause() {
            Some(Clause { field, op, value }) => {
                Ok(Some(format!("{} {} {}", field, op.symbol(), value)))
            }
            None => anyhow::bail!(
                "leaf '{}' has no clause; evaluate it in memory instead",
                predicate.name()
            ),
        },
        Expr::And(left, right) => Ok(Some(format!(
            "({} AND {})",
            lower(left)?.unwrap_or_else(|| "TRUE".to_string()),
            lower(right)?.unwrap_or_else(|| "TRUE".to_string()),
        ))),
        Expr::Or(left, right) => Ok(Some(format!(
            "({} OR {})",
            lower(left)?.unwrap_or_else(|| "TRUE".to_string()),
            lower(right)?.unwrap_or_else(|| "TRUE".to_string()),
        ))),
        Expr::Not(child) => Ok(Some(format!(
            "NOT {}",
            lower(child)?.unwrap_or_else(|| "TRUE".to_string())
        ))),
    }
}

/// Collect every leaf clause in the tree, for wire transport as JSON.
fn collect_clauses(expr: &Expr<Movie>, out: &mut Vec<Clause>) {
    match expr {
        Expr::All => {}
        Expr::Leaf(predicate) => {
            if let Some(clause) = predicate.clause() {
                out.push(clause);
            }
        }
        Expr::And(left, right) | Expr::Or(left, right) => {
            collect_clauses(left, out);
            collect_clauses(right, out);
        }
        Expr::Not(child) => collect_clauses(child, out),
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("debug").init();

    println!("=== Specification Lowering Example ===\n");

    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

    let on_home_video = Specification::leaf(OlderThanMonths::with_now(6, now));
    let spec = for_kids().or(directed_by("Nolan")).and(on_home_video);

    // Face one: evaluate directly against an in-memory movie
    let movie = Movie {
        id: 1,
        title: "Oppenheimer".to_string(),
        mpaa_rating: MpaaRating::Pg13,
        director: Director::new("Nolan"),
        release_date: Utc.with_ymd_and_hms(2023, 7, 21, 0, 0, 0).unwrap(),
    };
    println!("In-memory: {:?} -> {}", movie.title, spec.is_satisfied_by(&movie));

    // Face two: lower the same tree for a query backend
    match lower(spec.expr())? {
        Some(where_clause) => println!("WHERE {}", where_clause),
        None => println!("(no filter clause)"),
    }

    let mut clauses = Vec::new();
    collect_clauses(spec.expr(), &mut clauses);
    println!("Clauses as JSON: {}", serde_json::to_string_pretty(&clauses)?);

    // The bare identity lowers to no clause, not to an always-true one
    let unconstrained = Specification::<Movie>::all();
    match lower(unconstrained.expr())? {
        Some(where_clause) => println!("WHERE {}", where_clause),
        None => println!("Unconstrained search: no filter clause emitted"),
    }

    // Closure leaves carry no clause; the translator cannot lower them
    // and falls back to in-memory evaluation of the whole tree
    let critics_pick = Specification::from_fn("CriticsPick", |m: &Movie| m.title.len() > 8);
    let curated = spec.and(critics_pick);
    match lower(curated.expr()) {
        Ok(Some(where_clause)) => println!("WHERE {}", where_clause),
        Ok(None) => println!("(no filter clause)"),
        Err(err) => {
            println!("Cannot lower ({}); falling back to in-memory evaluation", err);
            println!(
                "In-memory fallback: {:?} -> {}",
                movie.title,
                curated.is_satisfied_by(&movie)
            );
        }
    }

    Ok(())
}
