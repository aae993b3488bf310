//! Primary categories and their segment templates.
//!
//! The first segment of a raw tag selects one [`Category`]; the
//! category's template ([`Slot`] list) governs how the remaining
//! segments are interpreted. The enum is closed on purpose: adding a
//! category without a template is a compile error, not a silent
//! fall-through.

use once_cell::sync::Lazy;

use crate::codes::{self, CodeDict};
use crate::feature::FeatureKey;

/// Sub-codes that each resolve independently through the slot's
/// dictionary, joined inside one segment (`MOD+TMP+LOK`).
pub(crate) const MULTI_CODE_JOINER: char = '+';

/// Single-letter codes joined inside one segment (`B/S`).
pub(crate) const LETTER_CODE_JOINER: char = '/';

/// The primary grammatical category selected by a tag's first segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Nomen,
    Eigenname,
    Verb,
    Adjektiv,
    Artikel,
    Pronomen,
    Adverb,
    Praeposition,
    Negationspartikel,
    Abkuerzung,
    Zahlwort,
    Interjektion,
    Verbzusatz,
}

impl Category {
    /// Look up a category by its tagset code.
    pub fn from_code(code: &str) -> Option<Category> {
        Some(match code {
            "SUB" => Category::Nomen,
            "EIG" => Category::Eigenname,
            "VER" => Category::Verb,
            "ADJ" => Category::Adjektiv,
            "ART" => Category::Artikel,
            "PRO" => Category::Pronomen,
            "ADV" => Category::Adverb,
            "PRP" => Category::Praeposition,
            "NEG" => Category::Negationspartikel,
            "ABK" => Category::Abkuerzung,
            "ZAL" => Category::Zahlwort,
            "INJ" => Category::Interjektion,
            "ZUS" => Category::Verbzusatz,
            _ => return None,
        })
    }

    /// The value this category contributes under the `pos` key.
    pub fn pos_value(self) -> &'static str {
        match self {
            Category::Nomen => "nomen",
            Category::Eigenname => "eigenname",
            Category::Verb => "verb",
            Category::Adjektiv => "adjektiv",
            Category::Artikel => "artikel",
            Category::Pronomen => "pronomen",
            Category::Adverb => "adverb",
            Category::Praeposition => "präposition",
            Category::Negationspartikel => "negationspartikel",
            Category::Abkuerzung => "abkürzung",
            Category::Zahlwort => "zahlwort",
            Category::Interjektion => "interjektion",
            Category::Verbzusatz => "verbzusatz",
        }
    }

    /// Segment template for every category except verbs, whose second
    /// segment dispatches between finite and non-finite templates (see
    /// the resolver).
    pub(crate) fn slots(self) -> &'static [Slot] {
        match self {
            Category::Nomen => &SUB_SLOTS,
            Category::Eigenname => &EIG_SLOTS,
            // Dispatched on the second segment by the resolver.
            Category::Verb => &[],
            Category::Adjektiv => &ADJ_SLOTS,
            Category::Artikel => &ART_SLOTS,
            Category::Pronomen => &PRO_SLOTS,
            Category::Adverb => &ADV_SLOTS,
            Category::Praeposition => &PRP_SLOTS,
            // No further grammatical detail; trailing segments fail.
            Category::Negationspartikel
            | Category::Abkuerzung
            | Category::Zahlwort
            | Category::Interjektion
            | Category::Verbzusatz => &[],
        }
    }
}

/// One segment position in a category template.
pub(crate) struct Slot {
    /// Feature key this position fills.
    pub(crate) key: FeatureKey,
    /// Dictionary that decodes this position's codes.
    pub(crate) dict: &'static Lazy<CodeDict>,
    /// Multiplicity delimiter, when the position admits several
    /// simultaneously-applicable codes in one segment.
    pub(crate) joiner: Option<char>,
    /// Required positions must be filled by the next segment; optional
    /// positions are skipped when the segment's code belongs to a later
    /// slot.
    pub(crate) required: bool,
}

impl Slot {
    const fn required(key: FeatureKey, dict: &'static Lazy<CodeDict>) -> Slot {
        Slot {
            key,
            dict,
            joiner: None,
            required: true,
        }
    }

    const fn optional(key: FeatureKey, dict: &'static Lazy<CodeDict>) -> Slot {
        Slot {
            key,
            dict,
            joiner: None,
            required: false,
        }
    }

    const fn joined(key: FeatureKey, dict: &'static Lazy<CodeDict>, joiner: char) -> Slot {
        Slot {
            key,
            dict,
            joiner: Some(joiner),
            required: false,
        }
    }
}

static SUB_SLOTS: [Slot; 3] = [
    Slot::required(FeatureKey::Kasus, &codes::KASUS),
    Slot::required(FeatureKey::Numerus, &codes::NUMERUS),
    Slot::required(FeatureKey::Genus, &codes::GENUS),
];

static EIG_SLOTS: [Slot; 5] = [
    Slot::required(FeatureKey::Kasus, &codes::KASUS),
    Slot::required(FeatureKey::Numerus, &codes::NUMERUS),
    Slot::required(FeatureKey::Genus, &codes::GENUS),
    Slot::optional(FeatureKey::Artikel, &codes::ARTIKEL_EIGENNAME),
    Slot::optional(FeatureKey::Eigenname, &codes::EIGENNAME),
];

// Predicative adjectives carry no inflection (`ADJ:PRD:KOM`); inflected
// ones carry no usage marker (`ADJ:DAT:SIN:MAS:SUP:DEF`). Every
// position is optional and segments fill slots in order.
static ADJ_SLOTS: [Slot; 6] = [
    Slot::optional(FeatureKey::Gebrauch, &codes::GEBRAUCH_ADJEKTIV),
    Slot::optional(FeatureKey::Kasus, &codes::KASUS),
    Slot::optional(FeatureKey::Numerus, &codes::NUMERUS),
    Slot::optional(FeatureKey::Genus, &codes::GENUS),
    Slot::optional(FeatureKey::Komparation, &codes::KOMPARATION),
    Slot::optional(FeatureKey::Art, &codes::ART_ADJEKTIV),
];

static ART_SLOTS: [Slot; 4] = [
    Slot::required(FeatureKey::Artikel, &codes::ARTIKEL),
    Slot::optional(FeatureKey::Kasus, &codes::KASUS),
    Slot::optional(FeatureKey::Numerus, &codes::NUMERUS),
    Slot::optional(FeatureKey::Genus, &codes::GENUS),
];

static PRO_SLOTS: [Slot; 5] = [
    Slot::required(FeatureKey::Pronomen, &codes::PRONOMEN),
    Slot::optional(FeatureKey::Kasus, &codes::KASUS),
    Slot::optional(FeatureKey::Numerus, &codes::NUMERUS),
    Slot::optional(FeatureKey::Genus, &codes::GENUS),
    Slot::joined(FeatureKey::Stellung, &codes::STELLUNG, LETTER_CODE_JOINER),
];

static ADV_SLOTS: [Slot; 1] = [Slot::joined(
    FeatureKey::Adverb,
    &codes::ADVERB,
    MULTI_CODE_JOINER,
)];

static PRP_SLOTS: [Slot; 2] = [
    Slot::required(FeatureKey::Praeposition, &codes::PRAEPOSITION),
    Slot::joined(FeatureKey::Kasus, &codes::KASUS, MULTI_CODE_JOINER),
];

/// Template for finite verbs: `VER:<person>:<numerus>:<modus>[:<konjugation>][:<gebrauch>]`.
pub(crate) static VER_FINITE_SLOTS: [Slot; 4] = [
    Slot::required(FeatureKey::Numerus, &codes::NUMERUS),
    Slot::required(FeatureKey::Modus, &codes::MODUS),
    Slot::optional(FeatureKey::Konjugation, &codes::KONJUGATION),
    Slot::optional(FeatureKey::Gebrauch, &codes::GEBRAUCH_VERB),
];

/// Template for imperatives: `VER:IMP[:<numerus>][:<konjugation>][:<gebrauch>]`.
pub(crate) static VER_IMPERATIVE_SLOTS: [Slot; 3] = [
    Slot::optional(FeatureKey::Numerus, &codes::NUMERUS),
    Slot::optional(FeatureKey::Konjugation, &codes::KONJUGATION),
    Slot::optional(FeatureKey::Gebrauch, &codes::GEBRAUCH_VERB),
];

/// Template for infinitives and participles: `VER:INF|PA1|PA2[:<konjugation>][:<gebrauch>]`.
pub(crate) static VER_NONFINITE_SLOTS: [Slot; 2] = [
    Slot::optional(FeatureKey::Konjugation, &codes::KONJUGATION),
    Slot::optional(FeatureKey::Gebrauch, &codes::GEBRAUCH_VERB),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tagset_code_maps_to_a_category() {
        let codes = [
            "SUB", "EIG", "VER", "ADJ", "ART", "PRO", "ADV", "PRP", "NEG", "ABK", "ZAL", "INJ",
            "ZUS",
        ];
        for code in codes {
            assert!(
                Category::from_code(code).is_some(),
                "no category for '{}'",
                code
            );
        }
        assert_eq!(Category::from_code("KON"), None);
        assert_eq!(Category::from_code(""), None);
    }

    #[test]
    fn pos_values_match_the_tagset() {
        assert_eq!(Category::Nomen.pos_value(), "nomen");
        assert_eq!(Category::Praeposition.pos_value(), "präposition");
        assert_eq!(Category::Abkuerzung.pos_value(), "abkürzung");
        assert_eq!(Category::Verbzusatz.pos_value(), "verbzusatz");
    }

    #[test]
    fn bare_categories_have_empty_templates() {
        for category in [
            Category::Negationspartikel,
            Category::Abkuerzung,
            Category::Zahlwort,
            Category::Interjektion,
            Category::Verbzusatz,
        ] {
            assert!(category.slots().is_empty());
        }
        assert_eq!(Category::Nomen.slots().len(), 3);
    }
}
