//! # Catalog Crate
//!
//! The movie entity model that specifications are written against.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Director, MpaaRating)
//! - **error**: Error types for parsing catalog data
//!
//! Specifications only need read access to these fields; how a catalog is
//! persisted or queried is a concern of the callers, not of this crate.
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{Director, Movie, MpaaRating};
//! use chrono::{TimeZone, Utc};
//!
//! let movie = Movie {
//!     id: 1,
//!     title: "Memento".to_string(),
//!     mpaa_rating: MpaaRating::R,
//!     director: Director::new("Nolan"),
//!     release_date: Utc.with_ymd_and_hms(2000, 9, 5, 0, 0, 0).unwrap(),
//! };
//!
//! assert!(movie.mpaa_rating > MpaaRating::Pg);
//! ```

pub mod error;
pub mod types;

// Re-export main types
pub use error::{CatalogError, Result};
pub use types::{Director, Movie, MovieId, MpaaRating};
