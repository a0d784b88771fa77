//! Core domain types for the movie catalog.
//!
//! This module defines the entity model that specifications evaluate.
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (MovieId)
//! - Enums with a derived ordering for threshold comparisons
//! - Derive macros for common traits
//! - FromStr/Display for label round-trips

use crate::error::CatalogError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie
pub type MovieId = u32;

// =============================================================================
// Rating Type
// =============================================================================

/// MPAA rating classifications, ordered from most to least permissive
/// audience.
///
/// Rust concept: deriving `PartialOrd`/`Ord` on a fieldless enum orders
/// variants by declaration, so `G < Pg < Pg13 < R < Nc17`. Threshold
/// checks like "at or below PG" are plain comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MpaaRating {
    G,
    Pg,
    Pg13,
    R,
    Nc17,
}

impl MpaaRating {
    /// The official label for this rating (e.g., "PG-13").
    pub fn label(&self) -> &'static str {
        match self {
            MpaaRating::G => "G",
            MpaaRating::Pg => "PG",
            MpaaRating::Pg13 => "PG-13",
            MpaaRating::R => "R",
            MpaaRating::Nc17 => "NC-17",
        }
    }
}

impl fmt::Display for MpaaRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MpaaRating {
    type Err = CatalogError;

    /// Parse an official MPAA label. Case-sensitive, matching the labels
    /// printed by [`MpaaRating::label`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "G" => Ok(MpaaRating::G),
            "PG" => Ok(MpaaRating::Pg),
            "PG-13" => Ok(MpaaRating::Pg13),
            "R" => Ok(MpaaRating::R),
            "NC-17" => Ok(MpaaRating::Nc17),
            other => Err(CatalogError::InvalidRating {
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Movie-related Types
// =============================================================================

/// The person credited as director of a movie.
///
/// Modeled as a nested entity rather than a bare string so specifications
/// that match on "a related entity's name" have a real nested field to
/// reach through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    pub name: String,
}

impl Director {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Represents a movie in the catalog.
///
/// All fields are plain data; specifications read them and never write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub mpaa_rating: MpaaRating,
    pub director: Director,
    /// Theatrical release date, UTC.
    pub release_date: DateTime<Utc>,
}
