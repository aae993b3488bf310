//! Code dictionaries: short domain codes to canonical feature values.
//!
//! Each dictionary covers one segment position of the tag grammar. An
//! entry may map to more than one value at once (`RIN` is both
//! interrogative and relative); that multiplicity is intrinsic to the
//! code and is preserved verbatim from the tagset.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::TableError;

/// A lookup from a short tag code to the canonical values it denotes.
pub(crate) struct CodeDict {
    name: &'static str,
    entries: &'static [(&'static str, &'static [&'static str])],
    index: HashMap<&'static str, &'static [&'static str]>,
}

impl CodeDict {
    fn new(
        name: &'static str,
        entries: &'static [(&'static str, &'static [&'static str])],
    ) -> Self {
        let index = entries.iter().copied().collect();
        Self {
            name,
            entries,
            index,
        }
    }

    /// Dictionary name used in diagnostics ("kasus", "genus", ...).
    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn get(&self, code: &str) -> Option<&'static [&'static str]> {
        self.index.get(code).copied()
    }

    pub(crate) fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Check the raw entry table for defects the index would mask.
    pub(crate) fn verify(&self) -> Result<(), TableError> {
        if self.entries.is_empty() {
            return Err(TableError::EmptyDictionary {
                dictionary: self.name,
            });
        }
        for (i, (code, values)) in self.entries.iter().enumerate() {
            if values.is_empty() {
                return Err(TableError::EmptyValues {
                    dictionary: self.name,
                    code,
                });
            }
            if self.entries[..i].iter().any(|(earlier, _)| earlier == code) {
                return Err(TableError::DuplicateCode {
                    dictionary: self.name,
                    code,
                });
            }
        }
        Ok(())
    }
}

pub(crate) static KASUS: Lazy<CodeDict> = Lazy::new(|| {
    CodeDict::new(
        "kasus",
        &[
            ("NOM", &["nominativ"]),
            ("GEN", &["genitiv"]),
            ("DAT", &["dativ"]),
            ("AKK", &["akkusativ"]),
        ],
    )
});

pub(crate) static NUMERUS: Lazy<CodeDict> = Lazy::new(|| {
    CodeDict::new("numerus", &[("SIN", &["singular"]), ("PLU", &["plural"])])
});

pub(crate) static GENUS: Lazy<CodeDict> = Lazy::new(|| {
    CodeDict::new(
        "genus",
        &[
            ("MAS", &["maskulinum"]),
            ("FEM", &["femininum"]),
            ("NEU", &["neutrum"]),
            // Gender-less noun entries in the source dictionary.
            ("NOG", &["ohne"]),
        ],
    )
});

/// Tense and mood codes of a finite verb share one segment position and
/// one feature key in the tagset.
pub(crate) static MODUS: Lazy<CodeDict> = Lazy::new(|| {
    CodeDict::new(
        "modus",
        &[
            ("PRÄ", &["präsens"]),
            ("PRT", &["präteritum"]),
            ("KJ1", &["konjunktiv1"]),
            ("KJ2", &["konjunktiv2"]),
        ],
    )
});

pub(crate) static KONJUGATION: Lazy<CodeDict> = Lazy::new(|| {
    CodeDict::new(
        "konjugation",
        &[("SFT", &["schwach"]), ("NON", &["unregelmäßig"])],
    )
});

pub(crate) static GEBRAUCH_VERB: Lazy<CodeDict> =
    Lazy::new(|| CodeDict::new("gebrauch", &[("NEB", &["nebensatz"])]));

pub(crate) static GEBRAUCH_ADJEKTIV: Lazy<CodeDict> =
    Lazy::new(|| CodeDict::new("gebrauch", &[("PRD", &["prädikativ"])]));

pub(crate) static KOMPARATION: Lazy<CodeDict> = Lazy::new(|| {
    CodeDict::new(
        "komparation",
        &[
            ("GRU", &["grundform"]),
            ("KOM", &["komparativ"]),
            ("SUP", &["superlativ"]),
        ],
    )
});

/// Definiteness of the article accompanying an inflected adjective.
pub(crate) static ART_ADJEKTIV: Lazy<CodeDict> = Lazy::new(|| {
    CodeDict::new(
        "art",
        &[
            ("DEF", &["bestimmt"]),
            ("IND", &["unbestimmt"]),
            ("SOL", &["ohne"]),
        ],
    )
});

pub(crate) static ARTIKEL: Lazy<CodeDict> = Lazy::new(|| {
    CodeDict::new(
        "artikel",
        &[("DEF", &["bestimmt"]), ("IND", &["unbestimmt"])],
    )
});

/// Article-presence marker on proper-noun tags (`EIG:...:ART:...`).
pub(crate) static ARTIKEL_EIGENNAME: Lazy<CodeDict> =
    Lazy::new(|| CodeDict::new("artikel", &[("ART", &["mit"])]));

pub(crate) static PRONOMEN: Lazy<CodeDict> = Lazy::new(|| {
    CodeDict::new(
        "pronomen",
        &[
            ("PER", &["personal"]),
            ("DEM", &["demonstrativ"]),
            ("POS", &["possessiv"]),
            ("REF", &["reflexiv"]),
            ("IND", &["indefinit"]),
            // One code, two simultaneous readings.
            ("RIN", &["interrogativ", "relativ"]),
        ],
    )
});

pub(crate) static STELLUNG: Lazy<CodeDict> = Lazy::new(|| {
    CodeDict::new(
        "stellung",
        &[("B", &["begleitend"]), ("S", &["stellvertretend"])],
    )
});

pub(crate) static ADVERB: Lazy<CodeDict> = Lazy::new(|| {
    CodeDict::new(
        "adverb",
        &[
            ("LOK", &["lokal"]),
            ("MOD", &["modal"]),
            ("TMP", &["temporal"]),
            ("KAU", &["kausal"]),
        ],
    )
});

pub(crate) static PRAEPOSITION: Lazy<CodeDict> = Lazy::new(|| {
    CodeDict::new(
        "präposition",
        &[
            ("LOK", &["lokal"]),
            ("MOD", &["modal"]),
            ("TMP", &["temporal"]),
            ("KAU", &["kausal"]),
        ],
    )
});

pub(crate) static EIGENNAME: Lazy<CodeDict> = Lazy::new(|| {
    CodeDict::new(
        "eigenname",
        &[
            ("STD", &["stadt"]),
            ("VOR", &["vorname"]),
            ("NAC", &["nachname"]),
            ("LAN", &["land"]),
            ("GEO", &["geografie"]),
        ],
    )
});

pub(crate) static VERB_FORM: Lazy<CodeDict> = Lazy::new(|| {
    CodeDict::new(
        "form",
        &[
            ("INF", &["infinitiv"]),
            ("PA1", &["partizip1"]),
            ("PA2", &["partizip2"]),
            ("IMP", &["imperativ"]),
        ],
    )
});

/// Person digits pass through as values.
pub(crate) static PERSON: Lazy<CodeDict> = Lazy::new(|| {
    CodeDict::new("person", &[("1", &["1"]), ("2", &["2"]), ("3", &["3"])])
});

/// All built-in dictionaries, for whole-table verification.
pub(crate) fn all() -> impl Iterator<Item = &'static CodeDict> {
    let dicts: [&'static Lazy<CodeDict>; 18] = [
        &KASUS,
        &NUMERUS,
        &GENUS,
        &MODUS,
        &KONJUGATION,
        &GEBRAUCH_VERB,
        &GEBRAUCH_ADJEKTIV,
        &KOMPARATION,
        &ART_ADJEKTIV,
        &ARTIKEL,
        &ARTIKEL_EIGENNAME,
        &PRONOMEN,
        &STELLUNG,
        &ADVERB,
        &PRAEPOSITION,
        &EIGENNAME,
        &VERB_FORM,
        &PERSON,
    ];
    dicts.into_iter().map(Lazy::force)
}

/// Verify every built-in dictionary. Fails fast on the first defect.
pub(crate) fn verify_all() -> Result<(), TableError> {
    for dict in all() {
        dict.verify()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_tables_are_well_formed() {
        verify_all().unwrap();
    }

    #[test]
    fn single_code_may_carry_multiple_values() {
        assert_eq!(
            PRONOMEN.get("RIN"),
            Some(&["interrogativ", "relativ"][..])
        );
        assert_eq!(KASUS.get("DAT"), Some(&["dativ"][..]));
        assert_eq!(KASUS.get("XYZ"), None);
    }

    #[test]
    fn verify_rejects_duplicate_codes() {
        let dict = CodeDict::new("test", &[("A", &["a"]), ("A", &["b"])]);
        assert_eq!(
            dict.verify(),
            Err(TableError::DuplicateCode {
                dictionary: "test",
                code: "A",
            })
        );
    }

    #[test]
    fn verify_rejects_empty_value_lists() {
        let dict = CodeDict::new("test", &[("A", &[])]);
        assert_eq!(
            dict.verify(),
            Err(TableError::EmptyValues {
                dictionary: "test",
                code: "A",
            })
        );
    }

    #[test]
    fn verify_rejects_empty_dictionaries() {
        let dict = CodeDict::new("test", &[]);
        assert_eq!(
            dict.verify(),
            Err(TableError::EmptyDictionary { dictionary: "test" })
        );
    }
}
