//! The two-level tag decoder.
//!
//! Level 1 splits the raw tag on `:` and dispatches on the first
//! segment's [`Category`]. Level 2 walks the category's template and
//! decodes each remaining segment through its slot's code dictionary,
//! unioning all resolved values into the bundle. Decoding is pure: it
//! never mutates resolver state, so one resolver instance is safe to
//! share across threads.

use crate::category::{self, Category, Slot};
use crate::codes;
use crate::error::{DecodeError, TableError};
use crate::feature::{FeatureBundle, FeatureKey};

/// Delimiter between segments of a raw tag.
pub const SEGMENT_DELIMITER: char = ':';

/// Decoder from raw morphological tags to feature bundles.
///
/// The `strict` flag is configuration for the coverage harness (see
/// [`TagResolver::validate_coverage`]); it does not change what
/// [`TagResolver::resolve`] rejects. Set it once before sharing the
/// resolver across threads.
#[derive(Debug, Clone, Default)]
pub struct TagResolver {
    strict: bool,
}

impl TagResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable strict coverage mode.
    pub fn set_strict_mode(&mut self, strict: bool) {
        self.strict = strict;
    }

    pub fn strict_mode(&self) -> bool {
        self.strict
    }

    /// Check the built-in grammar tables for defects.
    ///
    /// A failure here is a programming error in the table data; run it
    /// once at startup or from a coverage harness, not per tag.
    pub fn verify_tables(&self) -> Result<(), TableError> {
        codes::verify_all()
    }

    /// Decode one raw tag into its grammatical interpretations.
    ///
    /// Almost every well-formed tag yields exactly one bundle; the
    /// sequence return leaves room for genuinely ambiguous tags.
    pub fn resolve(&self, tag: &str) -> Result<Vec<FeatureBundle>, DecodeError> {
        let segments: Vec<&str> = tag.split(SEGMENT_DELIMITER).collect();
        // split() yields at least one element, even for "".
        let category_code = segments[0];
        let category =
            Category::from_code(category_code).ok_or_else(|| DecodeError::UnknownCategory {
                tag: tag.to_string(),
                code: category_code.to_string(),
            })?;

        let mut bundle = FeatureBundle::new();
        bundle.add_value(FeatureKey::Pos, category.pos_value());

        match category {
            Category::Verb => decode_verb(tag, &segments, &mut bundle)?,
            _ => decode_slots(tag, &segments, 1, category.slots(), &mut bundle)?,
        }

        Ok(vec![bundle])
    }
}

/// Verb tags encode person and number as a compound spread over two
/// segments (`VER:1:SIN:...`); the second segment dispatches between
/// the finite, imperative and non-finite templates.
fn decode_verb(
    tag: &str,
    segments: &[&str],
    bundle: &mut FeatureBundle,
) -> Result<(), DecodeError> {
    // The second segment may come from either the person or the form
    // dictionary; diagnostics name both.
    let Some(&mode) = segments.get(1) else {
        return Err(DecodeError::MissingSegment {
            tag: tag.to_string(),
            segment: 1,
            dictionary: "person/form",
        });
    };

    if let Some(values) = codes::PERSON.get(mode) {
        bundle.add_values(FeatureKey::Person, values.iter().copied());
        return decode_slots(tag, segments, 2, &category::VER_FINITE_SLOTS, bundle);
    }

    if let Some(values) = codes::VERB_FORM.get(mode) {
        bundle.add_values(FeatureKey::Form, values.iter().copied());
        let slots: &[Slot] = if mode == "IMP" {
            &category::VER_IMPERATIVE_SLOTS
        } else {
            &category::VER_NONFINITE_SLOTS
        };
        return decode_slots(tag, segments, 2, slots, bundle);
    }

    Err(DecodeError::UnknownCode {
        tag: tag.to_string(),
        segment: 1,
        code: mode.to_string(),
        dictionary: "person/form",
    })
}

/// Walk `segments[start..]` against the slot template.
///
/// Each segment is consumed by the first remaining slot whose
/// dictionary knows its (first) code. Skipping a required slot, running
/// out of slots, or an unknown sub-code is a decode failure.
fn decode_slots(
    tag: &str,
    segments: &[&str],
    start: usize,
    slots: &[Slot],
    bundle: &mut FeatureBundle,
) -> Result<(), DecodeError> {
    let mut slot_idx = 0;

    for (seg_idx, &segment) in segments.iter().enumerate().skip(start) {
        let mut chosen: Option<&Slot> = None;
        while slot_idx < slots.len() {
            let slot = &slots[slot_idx];
            slot_idx += 1;
            if slot.dict.contains(first_code(segment, slot)) {
                chosen = Some(slot);
                break;
            }
            if slot.required {
                return Err(DecodeError::UnknownCode {
                    tag: tag.to_string(),
                    segment: seg_idx,
                    code: segment.to_string(),
                    dictionary: slot.dict.name(),
                });
            }
        }

        let Some(slot) = chosen else {
            return Err(DecodeError::TrailingSegments {
                tag: tag.to_string(),
                segment: seg_idx,
            });
        };
        decode_segment(tag, seg_idx, segment, slot, bundle)?;
    }

    if let Some(slot) = slots[slot_idx..].iter().find(|slot| slot.required) {
        return Err(DecodeError::MissingSegment {
            tag: tag.to_string(),
            segment: segments.len(),
            dictionary: slot.dict.name(),
        });
    }

    Ok(())
}

/// The sub-code used to probe whether a segment belongs to a slot.
fn first_code<'a>(segment: &'a str, slot: &Slot) -> &'a str {
    match slot.joiner {
        Some(joiner) => segment.split(joiner).next().unwrap_or(segment),
        None => segment,
    }
}

/// Decode one segment in its slot, unioning all sub-code values into
/// the bundle under the slot's key.
fn decode_segment(
    tag: &str,
    seg_idx: usize,
    segment: &str,
    slot: &Slot,
    bundle: &mut FeatureBundle,
) -> Result<(), DecodeError> {
    let sub_codes: Vec<&str> = match slot.joiner {
        Some(joiner) => segment.split(joiner).collect(),
        None => vec![segment],
    };

    for code in sub_codes {
        match slot.dict.get(code) {
            Some(values) => bundle.add_values(slot.key, values.iter().copied()),
            None => {
                return Err(DecodeError::UnknownCode {
                    tag: tag.to_string(),
                    segment: seg_idx,
                    code: code.to_string(),
                    dictionary: slot.dict.name(),
                })
            }
        }
    }

    Ok(())
}
