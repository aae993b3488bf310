//! Error types for tag decoding and table verification.
//!
//! Every failure names the offending input (tag, segment index,
//! dictionary) so callers and tests can assert on the exact cause.

use thiserror::Error;

/// Failure to decode one raw tag.
///
/// The resolver never corrects or skips a bad tag on its own; callers
/// in the rule pipeline decide whether to skip the word or abort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The first segment is not a known primary category code.
    #[error("unknown category code '{code}' in tag '{tag}'")]
    UnknownCategory { tag: String, code: String },

    /// A segment code is absent from the dictionary governing its position.
    #[error("unknown code '{code}' at segment {segment} of tag '{tag}' (no '{dictionary}' reading)")]
    UnknownCode {
        tag: String,
        /// Zero-based segment index within the tag.
        segment: usize,
        code: String,
        /// Name of the code dictionary that was consulted.
        dictionary: &'static str,
    },

    /// The tag has more segments than the category template allows.
    #[error("tag '{tag}' has trailing segments starting at segment {segment}")]
    TrailingSegments { tag: String, segment: usize },

    /// The tag ends before a required template position was filled.
    #[error("tag '{tag}' is missing a '{dictionary}' segment at position {segment}")]
    MissingSegment {
        tag: String,
        segment: usize,
        dictionary: &'static str,
    },
}

impl DecodeError {
    /// The raw tag the failure refers to.
    pub fn tag(&self) -> &str {
        match self {
            DecodeError::UnknownCategory { tag, .. }
            | DecodeError::UnknownCode { tag, .. }
            | DecodeError::TrailingSegments { tag, .. }
            | DecodeError::MissingSegment { tag, .. } => tag,
        }
    }
}

/// A defect in the built-in grammar tables.
///
/// These indicate a programming error in the table data, not bad input;
/// [`crate::TagResolver::verify_tables`] surfaces them before any
/// per-tag decoding is trusted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("dictionary '{dictionary}' defines code '{code}' more than once")]
    DuplicateCode {
        dictionary: &'static str,
        code: &'static str,
    },

    #[error("dictionary '{dictionary}' maps code '{code}' to no values")]
    EmptyValues {
        dictionary: &'static str,
        code: &'static str,
    },

    #[error("dictionary '{dictionary}' has no entries")]
    EmptyDictionary { dictionary: &'static str },
}
