use rkyv::{Archive, Deserialize, Serialize};
use crate::ids::{LexemeId, SchemeId};
use crate::morphology::{
    Animacy, Aspect, Case, Gender, NumeralCategory, NumeralRank, NumeralStructure, PartOfSpeech,
    Transitivity,
};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// The invariant parts of a lexeme. Which stem a form uses is decided by the
/// stem rule of the lexeme's scheme.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Stems {
    pub primary: String,
    pub alternates: Vec<String>,
}

impl Stems {
    pub fn single(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            alternates: Vec::new(),
        }
    }

    /// Alternate stem `n`, if the lexeme declares one.
    pub fn alternate(&self, n: usize) -> Option<&str> {
        self.alternates.get(n).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.alternates.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct NounInfo {
    pub gender: Gender,
    pub animacy: Animacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct VerbInfo {
    pub aspect: Aspect,
    pub transitivity: Transitivity,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct NumeralInfo {
    /// Quantitative value ("пятьдесят" is 50).
    pub value: u64,
    /// Digital rendering of the value, as written in commands ("50").
    pub digits: String,
    pub category: NumeralCategory,
    pub structure: NumeralStructure,
    pub rank: NumeralRank,
    /// Lexemes fused (complex) or juxtaposed (composite) to form this one.
    /// Empty for simple numerals.
    pub components: Vec<LexemeId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct PrepositionInfo {
    pub governs: Vec<Case>,
}

/// Part-of-speech discriminant with its specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub enum LexemeKind {
    Noun(NounInfo),
    Adjective,
    Verb(VerbInfo),
    Numeral(NumeralInfo),
    Pronoun,
    Adverb,
    Preposition(PrepositionInfo),
    Conjunction,
    Particle,
}

impl LexemeKind {
    pub fn part_of_speech(&self) -> PartOfSpeech {
        match self {
            LexemeKind::Noun(_) => PartOfSpeech::Noun,
            LexemeKind::Adjective => PartOfSpeech::Adjective,
            LexemeKind::Verb(_) => PartOfSpeech::Verb,
            LexemeKind::Numeral(_) => PartOfSpeech::Numeral,
            LexemeKind::Pronoun => PartOfSpeech::Pronoun,
            LexemeKind::Adverb => PartOfSpeech::Adverb,
            LexemeKind::Preposition(_) => PartOfSpeech::Preposition,
            LexemeKind::Conjunction => PartOfSpeech::Conjunction,
            LexemeKind::Particle => PartOfSpeech::Particle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexeme {
    pub id: LexemeId,
    /// Dictionary form.
    pub lemma: String,
    pub stems: Stems,
    pub scheme: SchemeId,
    /// Bound morphemes never stand alone; they only appear fused into a
    /// complex numeral.
    pub bound: bool,
    pub kind: LexemeKind,
}

impl Lexeme {
    pub fn part_of_speech(&self) -> PartOfSpeech {
        self.kind.part_of_speech()
    }

    pub fn noun(&self) -> Option<&NounInfo> {
        match &self.kind {
            LexemeKind::Noun(info) => Some(info),
            _ => None,
        }
    }

    pub fn verb(&self) -> Option<&VerbInfo> {
        match &self.kind {
            LexemeKind::Verb(info) => Some(info),
            _ => None,
        }
    }

    pub fn numeral(&self) -> Option<&NumeralInfo> {
        match &self.kind {
            LexemeKind::Numeral(info) => Some(info),
            _ => None,
        }
    }

    /// Whether the lexeme's forms are built from other lexemes rather than
    /// from its own stems.
    pub fn is_compound(&self) -> bool {
        self.numeral()
            .is_some_and(|info| info.structure != NumeralStructure::Simple)
    }
}

/// Serializable snapshot of a lexicon.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexiconArchive {
    pub version: u32,
    pub lexemes: Vec<Lexeme>,
}
