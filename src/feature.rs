//! Feature bundles: the queryable output of tag resolution.
//!
//! A decoded tag is a [`FeatureBundle`] mapping each grammatical
//! category ([`FeatureKey`]) to the set of values that hold
//! simultaneously for the analyzed word-form ([`FeatureValueSet`]).
//! Rule authors query a bundle with [`FeatureBundle::values_for`].

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

/// A grammatical category a decoded tag can carry values for.
///
/// The variant order is the canonical display order for bundles;
/// [`FeatureKey::name`] gives the key name rule authors use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FeatureKey {
    /// Part of speech, present in every bundle.
    #[serde(rename = "pos")]
    Pos,
    /// Grammatical case.
    #[serde(rename = "kasus")]
    Kasus,
    /// Grammatical number.
    #[serde(rename = "numerus")]
    Numerus,
    /// Grammatical gender.
    #[serde(rename = "genus")]
    Genus,
    /// Person of a finite verb (1, 2, 3).
    #[serde(rename = "person")]
    Person,
    /// Tense/mood of a finite verb.
    #[serde(rename = "modus")]
    Modus,
    /// Conjugation class of a verb.
    #[serde(rename = "konjugation")]
    Konjugation,
    /// Usage: subordinate-clause verbs, predicative adjectives.
    #[serde(rename = "gebrauch")]
    Gebrauch,
    /// Non-finite verb form (infinitive, participle, imperative).
    #[serde(rename = "form")]
    Form,
    /// Degree of comparison of an adjective.
    #[serde(rename = "komparation")]
    Komparation,
    /// Definiteness of an adjective's accompanying article.
    #[serde(rename = "art")]
    Art,
    /// Article definiteness, or article presence on a proper noun.
    #[serde(rename = "artikel")]
    Artikel,
    /// Pronoun subtype.
    #[serde(rename = "pronomen")]
    Pronomen,
    /// Pronoun position role (accompanying vs. standing alone).
    #[serde(rename = "stellung")]
    Stellung,
    /// Adverb subtype.
    #[serde(rename = "adverb")]
    Adverb,
    /// Preposition subtype.
    #[serde(rename = "präposition")]
    Praeposition,
    /// Proper-noun subtype.
    #[serde(rename = "eigenname")]
    Eigenname,
}

impl FeatureKey {
    /// Every key, in canonical display order.
    pub const ALL: [FeatureKey; 17] = [
        FeatureKey::Pos,
        FeatureKey::Kasus,
        FeatureKey::Numerus,
        FeatureKey::Genus,
        FeatureKey::Person,
        FeatureKey::Modus,
        FeatureKey::Konjugation,
        FeatureKey::Gebrauch,
        FeatureKey::Form,
        FeatureKey::Komparation,
        FeatureKey::Art,
        FeatureKey::Artikel,
        FeatureKey::Pronomen,
        FeatureKey::Stellung,
        FeatureKey::Adverb,
        FeatureKey::Praeposition,
        FeatureKey::Eigenname,
    ];

    /// The key name as used by rule authors and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            FeatureKey::Pos => "pos",
            FeatureKey::Kasus => "kasus",
            FeatureKey::Numerus => "numerus",
            FeatureKey::Genus => "genus",
            FeatureKey::Person => "person",
            FeatureKey::Modus => "modus",
            FeatureKey::Konjugation => "konjugation",
            FeatureKey::Gebrauch => "gebrauch",
            FeatureKey::Form => "form",
            FeatureKey::Komparation => "komparation",
            FeatureKey::Art => "art",
            FeatureKey::Artikel => "artikel",
            FeatureKey::Pronomen => "pronomen",
            FeatureKey::Stellung => "stellung",
            FeatureKey::Adverb => "adverb",
            FeatureKey::Praeposition => "präposition",
            FeatureKey::Eigenname => "eigenname",
        }
    }

    /// Look up a key by its canonical name.
    pub fn from_name(name: &str) -> Option<FeatureKey> {
        FeatureKey::ALL.iter().copied().find(|key| key.name() == name)
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of simultaneously-true values for one grammatical category.
///
/// Values are alternatives that all hold for the analyzed word-form
/// (e.g. `{dativ, genitiv}` for a preposition governing either case),
/// not mutually exclusive choices. Duplicates collapse; iteration is
/// lexicographic, so displays and joins are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FeatureValueSet {
    values: BTreeSet<&'static str>,
}

impl FeatureValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a slice of canonical values.
    pub fn from_values(values: &[&'static str]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }

    pub fn insert(&mut self, value: &'static str) {
        self.values.insert(value);
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate values in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.iter().copied()
    }

    /// Join the values with `sep` in lexicographic order.
    pub fn joined(&self, sep: &str) -> String {
        self.values.iter().copied().collect::<Vec<_>>().join(sep)
    }
}

impl fmt::Display for FeatureValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined("|"))
    }
}

impl<'a> IntoIterator for &'a FeatureValueSet {
    type Item = &'static str;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, &'static str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter().copied()
    }
}

/// One complete grammatical interpretation of a raw tag.
///
/// A bundle never contains an empty value set: a code that contributes
/// nothing is simply absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FeatureBundle {
    features: BTreeMap<FeatureKey, FeatureValueSet>,
}

impl FeatureBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value set decoded for `key`, if any segment contributed one.
    pub fn values_for(&self, key: FeatureKey) -> Option<&FeatureValueSet> {
        self.features.get(&key)
    }

    /// Keys present in this bundle, in canonical display order.
    pub fn keys(&self) -> impl Iterator<Item = FeatureKey> + '_ {
        self.features.keys().copied()
    }

    /// Number of keys with at least one value.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub(crate) fn add_value(&mut self, key: FeatureKey, value: &'static str) {
        self.features.entry(key).or_default().insert(value);
    }

    pub(crate) fn add_values<I>(&mut self, key: FeatureKey, values: I)
    where
        I: IntoIterator<Item = &'static str>,
    {
        let set = self.features.entry(key).or_default();
        for value in values {
            set.insert(value);
        }
    }
}

impl fmt::Display for FeatureBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, values) in &self.features {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}={}", key, values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_round_trip() {
        for key in FeatureKey::ALL {
            assert_eq!(FeatureKey::from_name(key.name()), Some(key));
        }
        assert_eq!(FeatureKey::from_name("tempus"), None);
    }

    #[test]
    fn value_set_collapses_duplicates() {
        let mut set = FeatureValueSet::new();
        set.insert("temporal");
        set.insert("lokal");
        set.insert("temporal");
        assert_eq!(set.len(), 2);
        assert_eq!(set.joined("|"), "lokal|temporal");
    }

    #[test]
    fn value_set_display_is_sorted() {
        let set = FeatureValueSet::from_values(&["relativ", "interrogativ"]);
        assert_eq!(set.to_string(), "interrogativ|relativ");
    }

    #[test]
    fn bundle_unions_values_per_key() {
        let mut bundle = FeatureBundle::new();
        bundle.add_value(FeatureKey::Pos, "adverb");
        bundle.add_values(FeatureKey::Adverb, ["modal", "temporal"]);
        bundle.add_values(FeatureKey::Adverb, ["temporal", "lokal"]);

        let adverb = bundle.values_for(FeatureKey::Adverb).unwrap();
        assert_eq!(adverb.joined("|"), "lokal|modal|temporal");
        assert_eq!(bundle.values_for(FeatureKey::Kasus), None);
        assert_eq!(bundle.len(), 2);
    }

    #[test]
    fn bundle_display_uses_canonical_key_order() {
        let mut bundle = FeatureBundle::new();
        bundle.add_value(FeatureKey::Genus, "femininum");
        bundle.add_value(FeatureKey::Pos, "nomen");
        bundle.add_value(FeatureKey::Kasus, "akkusativ");
        bundle.add_value(FeatureKey::Numerus, "singular");

        insta::assert_snapshot!(
            bundle.to_string(),
            @"pos=nomen, kasus=akkusativ, numerus=singular, genus=femininum"
        );
    }
}
