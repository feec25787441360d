//! The dictionary: every lexeme, built once from static definitions.

use std::collections::HashMap;

use slovo_protocol::{
    Animacy, Aspect, Case, Gender, Lexeme, LexemeId, LexemeKind, LexiconArchive, NounInfo,
    NumeralCategory, NumeralInfo, NumeralRank, NumeralStructure, PartOfSpeech, PrepositionInfo,
    Stems, TagError, Transitivity, VerbInfo,
};

use crate::error::TableError;
use crate::paradigm::ParadigmTables;

/// Bumped whenever the archived lexeme layout changes.
pub const ARCHIVE_VERSION: u32 = 1;

const BOUND_TAG: &str = "bound";

/// Static authoring form of a lexeme.
///
/// `tags` starts with the part of speech and carries the lexeme's inherent
/// features: gender and animacy for nouns, aspect and transitivity for verbs,
/// category, structure and rank for numerals, governed cases for
/// prepositions. `stems` lists the primary stem first; compound numerals
/// leave it empty and name their `components` by lemma instead.
#[derive(Debug, Clone, Copy)]
pub struct LexemeDef {
    pub lemma: &'static str,
    pub tags: &'static str,
    pub scheme: &'static str,
    pub stems: &'static [&'static str],
    pub value: Option<u64>,
    pub components: &'static [&'static str],
}

impl LexemeDef {
    pub const fn word(
        lemma: &'static str,
        tags: &'static str,
        scheme: &'static str,
        stems: &'static [&'static str],
    ) -> Self {
        Self {
            lemma,
            tags,
            scheme,
            stems,
            value: None,
            components: &[],
        }
    }

    pub const fn numeral(
        lemma: &'static str,
        tags: &'static str,
        scheme: &'static str,
        stems: &'static [&'static str],
        value: u64,
    ) -> Self {
        Self {
            lemma,
            tags,
            scheme,
            stems,
            value: Some(value),
            components: &[],
        }
    }

    pub const fn compound(
        lemma: &'static str,
        tags: &'static str,
        scheme: &'static str,
        value: u64,
        components: &'static [&'static str],
    ) -> Self {
        Self {
            lemma,
            tags,
            scheme,
            stems: &[],
            value: Some(value),
            components,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    lexemes: Vec<Lexeme>,
    by_lemma: HashMap<String, LexemeId>,
}

impl Lexicon {
    pub fn build<'a>(
        defs: impl IntoIterator<Item = &'a LexemeDef>,
        tables: &ParadigmTables,
    ) -> Result<Self, TableError> {
        let mut lexicon = Lexicon::default();
        for def in defs {
            let id = LexemeId::new(lexicon.lexemes.len() as u32);
            let lexeme = lexicon.define(id, def, tables)?;
            lexicon.by_lemma.entry(lexeme.lemma.clone()).or_insert(id);
            lexicon.lexemes.push(lexeme);
        }
        tracing::debug!(lexemes = lexicon.lexemes.len(), "lexicon built");
        Ok(lexicon)
    }

    fn define(
        &self,
        id: LexemeId,
        def: &LexemeDef,
        tables: &ParadigmTables,
    ) -> Result<Lexeme, TableError> {
        let lemma = def.lemma.to_string();
        let bad_tag = |source: TagError| TableError::BadLexemeTag {
            lemma: lemma.clone(),
            source,
        };

        let mut tags = def.tags.split_whitespace();
        let pos: PartOfSpeech = tags
            .next()
            .ok_or_else(|| TableError::MissingPartOfSpeech {
                lemma: lemma.clone(),
            })?
            .parse()
            .map_err(bad_tag)?;
        let mut features = InherentTags::default();
        for tag in tags {
            features.insert(tag).map_err(bad_tag)?;
        }

        let paradigm = tables
            .by_name(def.scheme)
            .ok_or_else(|| TableError::UnknownScheme {
                lemma: lemma.clone(),
                scheme: def.scheme.to_string(),
            })?;
        if !paradigm.declines(pos) {
            return Err(TableError::SchemePartOfSpeech {
                lemma,
                scheme: def.scheme.to_string(),
                expected: paradigm.pos,
                found: pos,
            });
        }

        let stems = match def.stems.split_first() {
            Some((primary, alternates)) => Stems {
                primary: (*primary).to_string(),
                alternates: alternates.iter().map(|s| (*s).to_string()).collect(),
            },
            None => Stems::single(def.lemma),
        };

        let kind = match pos {
            PartOfSpeech::Noun => LexemeKind::Noun(NounInfo {
                gender: InherentTags::require(&lemma, "gender", features.gender)?,
                animacy: InherentTags::require(&lemma, "animacy", features.animacy)?,
            }),
            PartOfSpeech::Adjective => LexemeKind::Adjective,
            PartOfSpeech::Pronoun => LexemeKind::Pronoun,
            PartOfSpeech::Verb => LexemeKind::Verb(VerbInfo {
                aspect: InherentTags::require(&lemma, "aspect", features.aspect)?,
                transitivity: InherentTags::require(&lemma, "transitivity", features.transitivity)?,
            }),
            PartOfSpeech::Numeral => LexemeKind::Numeral(self.numeral(def, &features)?),
            PartOfSpeech::Preposition => LexemeKind::Preposition(PrepositionInfo {
                governs: features.cases.clone(),
            }),
            PartOfSpeech::Adverb => LexemeKind::Adverb,
            PartOfSpeech::Conjunction => LexemeKind::Conjunction,
            PartOfSpeech::Particle => LexemeKind::Particle,
        };

        let compound = matches!(&kind, LexemeKind::Numeral(info) if info.structure != NumeralStructure::Simple);
        if !compound && paradigm.stem_rule.needs_alternate() && stems.alternates.is_empty() {
            return Err(TableError::MissingStem {
                lemma,
                scheme: def.scheme.to_string(),
            });
        }

        Ok(Lexeme {
            id,
            lemma,
            stems,
            scheme: paradigm.id,
            bound: features.bound,
            kind,
        })
    }

    fn numeral(&self, def: &LexemeDef, features: &InherentTags) -> Result<NumeralInfo, TableError> {
        let incomplete = |detail| TableError::IncompleteNumeral {
            lemma: def.lemma.to_string(),
            detail,
        };
        let value = def.value.ok_or_else(|| incomplete("value"))?;
        let structure = features.structure.ok_or_else(|| incomplete("structure"))?;

        let components = def
            .components
            .iter()
            .map(|component| {
                self.by_lemma
                    .get(*component)
                    .copied()
                    .ok_or_else(|| TableError::UnknownComponent {
                        lemma: def.lemma.to_string(),
                        component: (*component).to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if structure != NumeralStructure::Simple && components.len() < 2 {
            return Err(incomplete("components"));
        }

        Ok(NumeralInfo {
            value,
            digits: value.to_string(),
            category: features.category.ok_or_else(|| incomplete("category"))?,
            structure,
            rank: features.rank.ok_or_else(|| incomplete("rank"))?,
            components,
        })
    }

    pub fn get(&self, id: LexemeId) -> Option<&Lexeme> {
        self.lexemes.get(id.index())
    }

    /// First lexeme declared with the given dictionary form.
    pub fn find(&self, lemma: &str) -> Option<&Lexeme> {
        self.by_lemma.get(lemma).and_then(|id| self.get(*id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lexeme> {
        self.lexemes.iter()
    }

    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    /// Snapshot for rkyv serialization.
    pub fn archive(&self) -> LexiconArchive {
        LexiconArchive {
            version: ARCHIVE_VERSION,
            lexemes: self.lexemes.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct InherentTags {
    gender: Option<Gender>,
    animacy: Option<Animacy>,
    aspect: Option<Aspect>,
    transitivity: Option<Transitivity>,
    category: Option<NumeralCategory>,
    structure: Option<NumeralStructure>,
    rank: Option<NumeralRank>,
    cases: Vec<Case>,
    bound: bool,
}

impl InherentTags {
    fn insert(&mut self, tag: &str) -> Result<(), TagError> {
        if tag == BOUND_TAG {
            self.bound = true;
        } else if let Ok(gender) = tag.parse() {
            self.gender = Some(gender);
        } else if let Ok(animacy) = tag.parse() {
            self.animacy = Some(animacy);
        } else if let Ok(aspect) = tag.parse() {
            self.aspect = Some(aspect);
        } else if let Ok(transitivity) = tag.parse() {
            self.transitivity = Some(transitivity);
        } else if let Ok(category) = tag.parse() {
            self.category = Some(category);
        } else if let Ok(structure) = tag.parse() {
            self.structure = Some(structure);
        } else if let Ok(rank) = tag.parse() {
            self.rank = Some(rank);
        } else if let Ok(case) = tag.parse() {
            self.cases.push(case);
        } else {
            return Err(TagError::unknown("lexeme feature", tag));
        }
        Ok(())
    }

    fn require<T>(lemma: &str, feature: &'static str, value: Option<T>) -> Result<T, TableError> {
        value.ok_or_else(|| TableError::MissingFeature {
            lemma: lemma.to_string(),
            feature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables;

    fn stock_tables() -> ParadigmTables {
        ParadigmTables::build(tables::schemes()).unwrap()
    }

    #[test]
    fn test_stock_lexicon_builds() {
        let tables = stock_tables();
        let lexicon = Lexicon::build(tables::lexemes(), &tables).unwrap();

        let fifty = lexicon.find("пятьдесят").unwrap();
        let info = fifty.numeral().unwrap();
        assert_eq!(info.value, 50);
        assert_eq!(info.digits, "50");
        assert_eq!(info.structure, NumeralStructure::Complex);
        let parts: Vec<_> = info
            .components
            .iter()
            .map(|id| lexicon.get(*id).unwrap().lemma.as_str())
            .collect();
        assert_eq!(parts, ["пять", "десят"]);
        assert!(lexicon.find("десят").unwrap().bound);

        let client = lexicon.find("клиент").unwrap();
        assert_eq!(
            client.noun(),
            Some(&NounInfo {
                gender: Gender::Masculine,
                animacy: Animacy::Animate,
            })
        );

        match &lexicon.find("в").unwrap().kind {
            LexemeKind::Preposition(info) => {
                assert_eq!(info.governs, vec![Case::Accusative, Case::Locative])
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_unknown_scheme() {
        let tables = stock_tables();
        let defs = [LexemeDef::word("кот", "noun m anim", "noun.masc.soft", &["кот"])];
        let err = Lexicon::build(&defs, &tables).unwrap_err();
        assert!(matches!(err, TableError::UnknownScheme { .. }), "{err}");
    }

    #[test]
    fn test_scheme_part_of_speech_mismatch() {
        let tables = stock_tables();
        let defs = [LexemeDef::word("кот", "noun m anim", "adj.hard", &["кот"])];
        let err = Lexicon::build(&defs, &tables).unwrap_err();
        assert!(matches!(err, TableError::SchemePartOfSpeech { .. }), "{err}");
    }

    #[test]
    fn test_unknown_feature_tag() {
        let tables = stock_tables();
        let defs = [LexemeDef::word("кот", "noun m furry", "noun.masc.hard", &["кот"])];
        match Lexicon::build(&defs, &tables).unwrap_err() {
            TableError::BadLexemeTag { lemma, source } => {
                assert_eq!(lemma, "кот");
                assert_eq!(source.tag, "furry");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_alternating_scheme_requires_alternate_stem() {
        let tables = stock_tables();
        let defs = [LexemeDef::word("показать", "verb perf tran", "verb.a-zh", &["показа"])];
        let err = Lexicon::build(&defs, &tables).unwrap_err();
        assert!(matches!(err, TableError::MissingStem { .. }), "{err}");
    }

    #[test]
    fn test_compound_numeral_components_must_exist() {
        let tables = stock_tables();
        let defs = [LexemeDef::compound(
            "пятьдесят",
            "num quant complex tens",
            "num.tens",
            50,
            &["пять", "десят"],
        )];
        let err = Lexicon::build(&defs, &tables).unwrap_err();
        assert!(matches!(err, TableError::UnknownComponent { .. }), "{err}");
    }

    #[test]
    fn test_archive_keeps_declaration_order() {
        let tables = stock_tables();
        let lexicon = Lexicon::build(tables::lexemes(), &tables).unwrap();
        let archive = lexicon.archive();
        assert_eq!(archive.version, ARCHIVE_VERSION);
        assert_eq!(archive.lexemes.len(), lexicon.len());
        for (idx, lexeme) in archive.lexemes.iter().enumerate() {
            assert_eq!(lexeme.id.index(), idx);
        }
    }
}
