//! Declension and conjugation schemes.
//!
//! A scheme is a named bucket of `(signature, suffix)` entries shared by every
//! lexeme that inflects the same way, plus the rule that picks which of the
//! lexeme's stems a cell is built on.

use std::collections::HashMap;

use slovo_protocol::{
    AdjectiveSignature, Animacy, Case, Gender, Involvement, Mood, NounSignature, Number,
    PartOfSpeech, Person, PronounSignature, SchemeId, Sign, Signature, Tense, VerbSignature,
};

use crate::error::TableError;

/// Which stem of a lexeme a paradigm cell is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StemRule {
    /// Every cell uses the primary stem.
    Single,
    /// Primary stem only in the nominative and inanimate accusative of the
    /// masculine singular ("один", "весь"), the alternate stem elsewhere
    /// ("одного", "всего").
    MasculineDirect,
    /// Primary stem in the nominative and accusative ("полтора"), alternate in
    /// the oblique cases ("полутора").
    DirectCases,
    /// Alternate stem for non-past and imperative verb forms ("покажу",
    /// "покажи"), primary for the infinitive and the past ("показать").
    PresentAlternate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemChoice {
    Primary,
    Alternate,
}

impl StemRule {
    pub fn choose(self, signature: &Signature) -> StemChoice {
        let primary = match (self, signature) {
            (StemRule::Single, _) => true,
            (StemRule::MasculineDirect, _) => {
                let masculine_singular = signature.gender() == Some(Gender::Masculine)
                    && signature.number() == Some(Number::Singular);
                let direct = match signature.case() {
                    Some(Case::Nominative) => true,
                    Some(Case::Accusative) => signature.animacy() == Some(Animacy::Inanimate),
                    _ => false,
                };
                masculine_singular && direct
            }
            (StemRule::DirectCases, _) => {
                matches!(signature.case(), Some(Case::Nominative | Case::Accusative))
            }
            (StemRule::PresentAlternate, Signature::Verb(verb)) => {
                verb.infinitive || verb.tense == Sign::Is(Tense::Past)
            }
            (StemRule::PresentAlternate, _) => true,
        };
        if primary {
            StemChoice::Primary
        } else {
            StemChoice::Alternate
        }
    }

    pub fn needs_alternate(self) -> bool {
        !matches!(self, StemRule::Single)
    }
}

/// One cell of a scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParadigmEntry {
    pub signature: Signature,
    pub suffix: String,
}

/// Static authoring form of a scheme: rows are `(tags, suffix)` pairs.
#[derive(Debug, Clone, Copy)]
pub struct SchemeDef {
    pub name: &'static str,
    pub pos: PartOfSpeech,
    pub stem_rule: StemRule,
    pub rows: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone)]
pub struct Paradigm {
    pub id: SchemeId,
    pub name: String,
    pub pos: PartOfSpeech,
    pub stem_rule: StemRule,
    pub entries: Vec<ParadigmEntry>,
}

/// Does a table entry serve a requested signature?
///
/// Case, and every verbal sign other than number and gender, must agree
/// exactly. Number, gender and animacy are ignored when either side leaves
/// them unspecified.
pub fn entry_matches(entry: &Signature, request: &Signature) -> bool {
    match (entry, request) {
        (Signature::Noun(e), Signature::Noun(r)) => {
            e.case == r.case && e.number == r.number && e.animacy.compatible(r.animacy)
        }
        (Signature::Adjective(e), Signature::Adjective(r)) => {
            e.case == r.case
                && e.number == r.number
                && e.short == r.short
                && e.gender.compatible(r.gender)
                && e.animacy.compatible(r.animacy)
        }
        (Signature::Verb(e), Signature::Verb(r)) => {
            e.infinitive == r.infinitive
                && e.tense == r.tense
                && e.person == r.person
                && e.mood == r.mood
                && e.involvement == r.involvement
                && e.number.compatible(r.number)
                && e.gender.compatible(r.gender)
        }
        (Signature::Numeral(e), Signature::Numeral(r)) => {
            e.case == r.case
                && e.number.compatible(r.number)
                && e.gender.compatible(r.gender)
                && e.animacy.compatible(r.animacy)
        }
        (Signature::Pronoun(e), Signature::Pronoun(r)) => {
            e.case == r.case
                && e.number == r.number
                && e.gender.compatible(r.gender)
                && e.animacy.compatible(r.animacy)
        }
        (Signature::Invariable, Signature::Invariable) => true,
        _ => false,
    }
}

impl Paradigm {
    fn from_def(id: SchemeId, def: &SchemeDef) -> Result<Self, TableError> {
        let entries = def
            .rows
            .iter()
            .enumerate()
            .map(|(row, (tags, suffix))| {
                let signature =
                    Signature::parse(def.pos, tags).map_err(|source| TableError::BadRow {
                        scheme: def.name.to_string(),
                        row,
                        source,
                    })?;
                Ok(ParadigmEntry {
                    signature,
                    suffix: (*suffix).to_string(),
                })
            })
            .collect::<Result<Vec<_>, TableError>>()?;

        Ok(Self {
            id,
            name: def.name.to_string(),
            pos: def.pos,
            stem_rule: def.stem_rule,
            entries,
        })
    }

    /// Indices of every entry serving the request, in table order.
    pub fn lookup(&self, request: &Signature) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry_matches(&entry.signature, request))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn entry(&self, idx: usize) -> Option<&ParadigmEntry> {
        self.entries.get(idx)
    }

    /// Whether lexemes of part of speech `pos` may use this scheme.
    pub fn declines(&self, pos: PartOfSpeech) -> bool {
        self.pos == pos || (self.pos.is_invariable() && pos.is_invariable())
    }

    /// Every request the grammar can make must resolve to exactly one entry,
    /// and no two entries may serve the same request.
    pub fn validate(&self) -> Result<(), TableError> {
        for (i, first) in self.entries.iter().enumerate() {
            for second in &self.entries[i + 1..] {
                if entry_matches(&first.signature, &second.signature) {
                    return Err(TableError::OverlappingEntries {
                        scheme: self.name.clone(),
                        first: first.signature,
                        second: second.signature,
                    });
                }
            }
        }

        for request in coverage_requests(self.pos) {
            let found = self.lookup(&request).len();
            if found != 1 {
                return Err(TableError::UncoveredCell {
                    scheme: self.name.clone(),
                    signature: request,
                    found,
                });
            }
        }

        if self.pos == PartOfSpeech::Numeral {
            // Numeral schemes differ in which of number and gender they mark,
            // so only the case dimension is checked.
            for case in Case::ALL {
                if !self.entries.iter().any(|e| e.signature.case() == Some(*case)) {
                    return Err(TableError::UncoveredCell {
                        scheme: self.name.clone(),
                        signature: Signature::Numeral(slovo_protocol::NumeralSignature {
                            case: *case,
                            number: Sign::Unspecified,
                            gender: Sign::Unspecified,
                            animacy: Sign::Unspecified,
                        }),
                        found: 0,
                    });
                }
            }
        }

        Ok(())
    }
}

/// The fully specified requests a caller may make of a scheme of `pos`.
fn coverage_requests(pos: PartOfSpeech) -> Vec<Signature> {
    let mut requests = Vec::new();
    match pos {
        PartOfSpeech::Noun => {
            for &case in Case::ALL {
                for &number in Number::ALL {
                    for &animacy in Animacy::ALL {
                        requests.push(Signature::Noun(NounSignature {
                            case,
                            number,
                            animacy: Sign::Is(animacy),
                        }));
                    }
                }
            }
        }
        PartOfSpeech::Adjective | PartOfSpeech::Pronoun => {
            for &case in Case::ALL {
                for &number in Number::ALL {
                    for &gender in Gender::ALL {
                        for &animacy in Animacy::ALL {
                            let (gender, animacy) = (Sign::Is(gender), Sign::Is(animacy));
                            requests.push(if pos == PartOfSpeech::Adjective {
                                Signature::Adjective(AdjectiveSignature {
                                    case,
                                    number,
                                    gender,
                                    animacy,
                                    short: false,
                                })
                            } else {
                                Signature::Pronoun(PronounSignature {
                                    case,
                                    number,
                                    gender,
                                    animacy,
                                })
                            });
                        }
                    }
                }
            }
            if pos == PartOfSpeech::Adjective {
                for &number in Number::ALL {
                    for &gender in Gender::ALL {
                        requests.push(Signature::Adjective(AdjectiveSignature {
                            case: Case::Nominative,
                            number,
                            gender: Sign::Is(gender),
                            animacy: Sign::Unspecified,
                            short: true,
                        }));
                    }
                }
            }
        }
        PartOfSpeech::Verb => {
            requests.push(Signature::Verb(VerbSignature {
                infinitive: true,
                ..VerbSignature::default()
            }));
            let indicative = VerbSignature {
                mood: Sign::Is(Mood::Indicative),
                ..VerbSignature::default()
            };
            for &number in Number::ALL {
                for &gender in Gender::ALL {
                    requests.push(Signature::Verb(VerbSignature {
                        tense: Sign::Is(Tense::Past),
                        number: Sign::Is(number),
                        gender: Sign::Is(gender),
                        ..indicative
                    }));
                }
                for &person in Person::ALL {
                    requests.push(Signature::Verb(VerbSignature {
                        tense: Sign::Is(Tense::Present),
                        number: Sign::Is(number),
                        person: Sign::Is(person),
                        ..indicative
                    }));
                }
                requests.push(Signature::Verb(VerbSignature {
                    mood: Sign::Is(Mood::Imperative),
                    person: Sign::Is(Person::Second),
                    number: Sign::Is(number),
                    involvement: Sign::Is(Involvement::Exclusive),
                    ..VerbSignature::default()
                }));
            }
        }
        PartOfSpeech::Numeral => {}
        _ => requests.push(Signature::Invariable),
    }
    requests
}

/// Every scheme, grouped by the part of speech it declines.
#[derive(Debug, Clone, Default)]
pub struct ParadigmTables {
    paradigms: Vec<Paradigm>,
    by_name: HashMap<String, SchemeId>,
}

impl ParadigmTables {
    pub fn build<'a>(defs: impl IntoIterator<Item = &'a SchemeDef>) -> Result<Self, TableError> {
        let mut tables = ParadigmTables::default();
        for def in defs {
            if tables.by_name.contains_key(def.name) {
                return Err(TableError::DuplicateScheme {
                    scheme: def.name.to_string(),
                });
            }
            let id = SchemeId::new(tables.paradigms.len() as u32);
            let paradigm = Paradigm::from_def(id, def)?;
            paradigm.validate()?;
            tables.by_name.insert(def.name.to_string(), id);
            tables.paradigms.push(paradigm);
        }
        tracing::debug!(schemes = tables.paradigms.len(), "paradigm tables built");
        Ok(tables)
    }

    pub fn get(&self, id: SchemeId) -> Option<&Paradigm> {
        self.paradigms.get(id.index())
    }

    pub fn by_name(&self, name: &str) -> Option<&Paradigm> {
        self.by_name.get(name).and_then(|id| self.get(*id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Paradigm> {
        self.paradigms.iter()
    }

    pub fn len(&self) -> usize {
        self.paradigms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paradigms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ROWS: SchemeDef = SchemeDef {
        name: "test.two",
        pos: PartOfSpeech::Numeral,
        stem_rule: StemRule::Single,
        rows: &[
            ("nom m", "а"),
            ("nom f", "е"),
            ("gen", "ух"),
            ("dat", "ум"),
            ("acc m inan", "а"),
            ("acc f inan", "е"),
            ("acc anim", "ух"),
            ("ins", "умя"),
            ("loc", "ух"),
        ],
    };

    fn sig(pos: PartOfSpeech, tags: &str) -> Signature {
        Signature::parse(pos, tags).unwrap()
    }

    #[test]
    fn test_lookup_uses_wildcards_only_for_agreement_signs() {
        let tables = ParadigmTables::build([&TWO_ROWS]).unwrap();
        let two = tables.by_name("test.two").unwrap();

        // Oblique cases leave gender unspecified and serve any gender.
        assert_eq!(two.lookup(&sig(PartOfSpeech::Numeral, "gen f")), vec![2]);
        // Case is never a wildcard.
        assert!(two.lookup(&sig(PartOfSpeech::Numeral, "nom")).len() == 2);
        assert_eq!(two.lookup(&sig(PartOfSpeech::Numeral, "acc f inan")), vec![5]);
        // Without animacy the masculine accusative is ambiguous.
        assert_eq!(two.lookup(&sig(PartOfSpeech::Numeral, "acc m")), vec![4, 6]);
    }

    #[test]
    fn test_overlapping_rows_are_rejected() {
        const OVERLAP: SchemeDef = SchemeDef {
            name: "test.overlap",
            pos: PartOfSpeech::Numeral,
            stem_rule: StemRule::Single,
            rows: &[
                ("nom", "ь"),
                ("nom m", "ь"),
                ("gen", "и"),
                ("dat", "и"),
                ("acc", "ь"),
                ("ins", "ью"),
                ("loc", "и"),
            ],
        };
        let err = ParadigmTables::build([&OVERLAP]).unwrap_err();
        assert!(matches!(err, TableError::OverlappingEntries { .. }), "{err}");
    }

    #[test]
    fn test_incomplete_noun_scheme_is_rejected() {
        const HALF: SchemeDef = SchemeDef {
            name: "test.half",
            pos: PartOfSpeech::Noun,
            stem_rule: StemRule::Single,
            rows: &[("nom sg", ""), ("gen sg", "а")],
        };
        let err = ParadigmTables::build([&HALF]).unwrap_err();
        assert!(matches!(err, TableError::UncoveredCell { found: 0, .. }), "{err}");
    }

    #[test]
    fn test_bad_tag_reports_scheme_and_row() {
        const BAD: SchemeDef = SchemeDef {
            name: "test.bad",
            pos: PartOfSpeech::Noun,
            stem_rule: StemRule::Single,
            rows: &[("nom sg", ""), ("gen dual", "у")],
        };
        match ParadigmTables::build([&BAD]).unwrap_err() {
            TableError::BadRow { scheme, row, .. } => {
                assert_eq!(scheme, "test.bad");
                assert_eq!(row, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_scheme_names() {
        let err = ParadigmTables::build([&TWO_ROWS, &TWO_ROWS]).unwrap_err();
        assert!(matches!(err, TableError::DuplicateScheme { .. }));
    }

    #[test]
    fn test_stem_rules() {
        let num = |tags| sig(PartOfSpeech::Numeral, tags);
        assert_eq!(StemRule::MasculineDirect.choose(&num("nom sg m")), StemChoice::Primary);
        assert_eq!(StemRule::MasculineDirect.choose(&num("acc sg m inan")), StemChoice::Primary);
        assert_eq!(StemRule::MasculineDirect.choose(&num("acc sg m anim")), StemChoice::Alternate);
        assert_eq!(StemRule::MasculineDirect.choose(&num("nom sg f")), StemChoice::Alternate);
        assert_eq!(StemRule::DirectCases.choose(&num("acc f")), StemChoice::Primary);
        assert_eq!(StemRule::DirectCases.choose(&num("gen")), StemChoice::Alternate);

        let verb = |tags| sig(PartOfSpeech::Verb, tags);
        assert_eq!(StemRule::PresentAlternate.choose(&verb("inf")), StemChoice::Primary);
        assert_eq!(StemRule::PresentAlternate.choose(&verb("ind past sg f")), StemChoice::Primary);
        assert_eq!(StemRule::PresentAlternate.choose(&verb("ind pres 1p sg")), StemChoice::Alternate);
        assert_eq!(StemRule::PresentAlternate.choose(&verb("imp 2p sg excl")), StemChoice::Alternate);
    }
}
