//! Confusable-word groups for statistical disambiguation.
//!
//! A confusion set is a group of word-forms a writer is statistically
//! prone to substitute for one another ("their", "there", "they're").
//! This crate loads a line-oriented resource of such groups and builds
//! a word-form to group lookup consumed by the n-gram based confusion
//! rule of the grammar checker.
//!
//! ```
//! use morphotag_confusables::ConfusionRegistry;
//!
//! let registry = ConfusionRegistry::from_text("their, there, they're\n");
//! let group = registry.lookup("there").unwrap();
//! assert_eq!(group.members(), ["their", "there", "they're"]);
//! ```
//!
//! The registry is immutable after load and safe to share read-only
//! across threads.

mod error;
mod registry;

pub use error::LoadError;
pub use registry::{ConfusionGroup, ConfusionRegistry};
