//! Symbolic decoding core for a natural-language style/grammar checker.
//!
//! A dictionary-based tagger emits compact positional tags like
//! `SUB:AKK:SIN:FEM` for each analyzed word-form. This crate decodes
//! those tags into structured, queryable [`FeatureBundle`]s for the
//! pattern-rule engine downstream.
//!
//! The decoder is table-driven on two levels: the first tag segment
//! selects a [`Category`] and its template; the template decodes each
//! remaining segment through a code dictionary, including segments that
//! union several simultaneously-applicable codes (`ADV:MOD+TMP+LOK`)
//! and codes that intrinsically carry several values at once (`RIN` is
//! both interrogative and relative).
//!
//! ```
//! use morphotag::{FeatureKey, TagResolver};
//!
//! let resolver = TagResolver::new();
//! let bundles = resolver.resolve("SUB:AKK:SIN:FEM").unwrap();
//!
//! let kasus = bundles[0].values_for(FeatureKey::Kasus).unwrap();
//! assert!(kasus.contains("akkusativ"));
//! ```
//!
//! Decoding is pure and the grammar tables are immutable after first
//! use, so one [`TagResolver`] is safe to share across threads. For
//! validating grammar coverage against a whole reference dictionary,
//! see [`TagResolver::validate_coverage`].
//!
//! Confusable-word groups (the registry handed to the statistical
//! disambiguation rule) live in the companion `morphotag-confusables`
//! crate.

mod category;
mod codes;
mod coverage;
mod error;
mod feature;
mod resolver;

pub use category::Category;
pub use coverage::{is_known_problem, CoverageFailure, CoverageReport};
pub use error::{DecodeError, TableError};
pub use feature::{FeatureBundle, FeatureKey, FeatureValueSet};
pub use resolver::{TagResolver, SEGMENT_DELIMITER};
