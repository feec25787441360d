//! Per part-of-speech grammatical signatures.
//!
//! A signature selects one cell of a lexeme's paradigm. Signatures are written
//! in the static tables as whitespace separated tags (`"acc sg m anim"`), and
//! rendered back the same way, so a table row and its `Display` agree.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use thiserror::Error;

use crate::morphology::{
    Animacy, Case, Gender, Involvement, Mood, MorphFlags, Number, PartOfSpeech, Person, Sign,
    TagError, Tense,
};

const INFINITIVE_TAG: &str = "inf";
const SHORT_TAG: &str = "short";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error(transparent)]
    UnknownTag(#[from] TagError),

    #[error("{pos} signature is missing its {sign}")]
    MissingSign {
        pos: PartOfSpeech,
        sign: &'static str,
    },

    #[error("tag `{tag}` does not apply to a {pos} signature")]
    UnexpectedSign { pos: PartOfSpeech, tag: String },

    #[error("tag `{tag}` repeats a sign that is already set")]
    DuplicateSign { tag: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct NounSignature {
    pub case: Case,
    pub number: Number,
    /// Only accusative cells depend on animacy.
    pub animacy: Sign<Animacy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct AdjectiveSignature {
    /// Short forms are predicative and always carry the nominative.
    pub case: Case,
    pub number: Number,
    pub gender: Sign<Gender>,
    pub animacy: Sign<Animacy>,
    pub short: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct VerbSignature {
    pub infinitive: bool,
    pub tense: Sign<Tense>,
    pub number: Sign<Number>,
    pub person: Sign<Person>,
    pub gender: Sign<Gender>,
    pub mood: Sign<Mood>,
    pub involvement: Sign<Involvement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct NumeralSignature {
    pub case: Case,
    pub number: Sign<Number>,
    pub gender: Sign<Gender>,
    pub animacy: Sign<Animacy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct PronounSignature {
    pub case: Case,
    pub number: Number,
    pub gender: Sign<Gender>,
    pub animacy: Sign<Animacy>,
}

/// The signature of one paradigm cell, tagged by part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Signature {
    Noun(NounSignature),
    Adjective(AdjectiveSignature),
    Verb(VerbSignature),
    Numeral(NumeralSignature),
    Pronoun(PronounSignature),
    /// Prepositions, conjunctions, particles and adverbs have a single form.
    Invariable,
}

impl Signature {
    /// Parses a table row such as `"gen sg"` for the given part of speech.
    pub fn parse(pos: PartOfSpeech, tags: &str) -> Result<Self, SignatureError> {
        let bag = TagBag::collect(tags)?;
        bag.build(pos)
    }

    /// Whether this signature may describe a word of the given part of speech.
    pub fn fits(&self, pos: PartOfSpeech) -> bool {
        match self {
            Signature::Noun(_) => pos == PartOfSpeech::Noun,
            Signature::Adjective(_) => pos == PartOfSpeech::Adjective,
            Signature::Verb(_) => pos == PartOfSpeech::Verb,
            Signature::Numeral(_) => pos == PartOfSpeech::Numeral,
            Signature::Pronoun(_) => pos == PartOfSpeech::Pronoun,
            Signature::Invariable => pos.is_invariable(),
        }
    }

    pub fn case(&self) -> Option<Case> {
        match self {
            Signature::Noun(s) => Some(s.case),
            Signature::Adjective(s) => Some(s.case),
            Signature::Numeral(s) => Some(s.case),
            Signature::Pronoun(s) => Some(s.case),
            Signature::Verb(_) | Signature::Invariable => None,
        }
    }

    pub fn number(&self) -> Option<Number> {
        match self {
            Signature::Noun(s) => Some(s.number),
            Signature::Adjective(s) => Some(s.number),
            Signature::Pronoun(s) => Some(s.number),
            Signature::Numeral(s) => s.number.value(),
            Signature::Verb(s) => s.number.value(),
            Signature::Invariable => None,
        }
    }

    pub fn gender(&self) -> Option<Gender> {
        match self {
            Signature::Adjective(s) => s.gender.value(),
            Signature::Numeral(s) => s.gender.value(),
            Signature::Pronoun(s) => s.gender.value(),
            Signature::Verb(s) => s.gender.value(),
            Signature::Noun(_) | Signature::Invariable => None,
        }
    }

    pub fn animacy(&self) -> Option<Animacy> {
        match self {
            Signature::Noun(s) => s.animacy.value(),
            Signature::Adjective(s) => s.animacy.value(),
            Signature::Numeral(s) => s.animacy.value(),
            Signature::Pronoun(s) => s.animacy.value(),
            Signature::Verb(_) | Signature::Invariable => None,
        }
    }

    pub fn mood(&self) -> Option<Mood> {
        match self {
            Signature::Verb(s) => s.mood.value(),
            _ => None,
        }
    }

    /// Compact bit summary used for agreement and constraint checks.
    pub fn flags(&self) -> MorphFlags {
        match *self {
            Signature::Noun(s) => {
                MorphFlags::from(s.case) | MorphFlags::from(s.number) | MorphFlags::from(s.animacy)
            }
            Signature::Adjective(s) => {
                let mut flags = MorphFlags::from(s.case)
                    | MorphFlags::from(s.number)
                    | MorphFlags::from(s.gender)
                    | MorphFlags::from(s.animacy);
                flags.set(MorphFlags::SHORT, s.short);
                flags
            }
            Signature::Verb(s) => {
                let mut flags = MorphFlags::from(s.tense)
                    | MorphFlags::from(s.number)
                    | MorphFlags::from(s.person)
                    | MorphFlags::from(s.gender)
                    | MorphFlags::from(s.mood)
                    | MorphFlags::from(s.involvement);
                flags.set(MorphFlags::INFINITIVE, s.infinitive);
                flags
            }
            Signature::Numeral(s) => {
                MorphFlags::from(s.case)
                    | MorphFlags::from(s.number)
                    | MorphFlags::from(s.gender)
                    | MorphFlags::from(s.animacy)
            }
            Signature::Pronoun(s) => {
                MorphFlags::from(s.case)
                    | MorphFlags::from(s.number)
                    | MorphFlags::from(s.gender)
                    | MorphFlags::from(s.animacy)
            }
            Signature::Invariable => MorphFlags::empty(),
        }
    }

    /// Tags in table order.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags = Vec::new();
        let mut push = |tag: Option<&'static str>| {
            if let Some(tag) = tag {
                tags.push(tag);
            }
        };
        match *self {
            Signature::Noun(s) => {
                push(Some(s.case.tag()));
                push(Some(s.number.tag()));
                push(s.animacy.value().map(Animacy::tag));
            }
            Signature::Adjective(s) => {
                push(s.short.then_some(SHORT_TAG));
                push(Some(s.case.tag()));
                push(Some(s.number.tag()));
                push(s.gender.value().map(Gender::tag));
                push(s.animacy.value().map(Animacy::tag));
            }
            Signature::Verb(s) => {
                push(s.infinitive.then_some(INFINITIVE_TAG));
                push(s.mood.value().map(Mood::tag));
                push(s.tense.value().map(Tense::tag));
                push(s.person.value().map(Person::tag));
                push(s.number.value().map(Number::tag));
                push(s.gender.value().map(Gender::tag));
                push(s.involvement.value().map(Involvement::tag));
            }
            Signature::Numeral(s) => {
                push(Some(s.case.tag()));
                push(s.number.value().map(Number::tag));
                push(s.gender.value().map(Gender::tag));
                push(s.animacy.value().map(Animacy::tag));
            }
            Signature::Pronoun(s) => {
                push(Some(s.case.tag()));
                push(Some(s.number.tag()));
                push(s.gender.value().map(Gender::tag));
                push(s.animacy.value().map(Animacy::tag));
            }
            Signature::Invariable => {}
        }
        tags
    }

    /// Short code used to match coordinated words, e.g. `noun:gen.sg`.
    pub fn short_code(&self, pos: PartOfSpeech) -> String {
        format!("{}:{}", pos.tag(), self.tags().join("."))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tags().join(" "))
    }
}

/// Every sign a tag row may carry, before it is shaped into a signature.
#[derive(Debug, Default)]
struct TagBag {
    case: Option<Case>,
    number: Option<Number>,
    gender: Option<Gender>,
    animacy: Option<Animacy>,
    person: Option<Person>,
    tense: Option<Tense>,
    mood: Option<Mood>,
    involvement: Option<Involvement>,
    infinitive: bool,
    short: bool,
    /// Raw tags in row order, kept for error reporting.
    seen: Vec<String>,
}

fn put<T>(slot: &mut Option<T>, value: T, tag: &str) -> Result<(), SignatureError> {
    if slot.is_some() {
        return Err(SignatureError::DuplicateSign {
            tag: tag.to_string(),
        });
    }
    *slot = Some(value);
    Ok(())
}

impl TagBag {
    fn collect(tags: &str) -> Result<Self, SignatureError> {
        let mut bag = TagBag::default();
        for tag in tags.split_whitespace() {
            bag.seen.push(tag.to_string());
            match tag {
                INFINITIVE_TAG => bag.infinitive = true,
                SHORT_TAG => bag.short = true,
                _ => bag.insert(tag)?,
            }
        }
        Ok(bag)
    }

    fn insert(&mut self, tag: &str) -> Result<(), SignatureError> {
        if let Ok(case) = tag.parse::<Case>() {
            return put(&mut self.case, case, tag);
        }
        if let Ok(number) = tag.parse::<Number>() {
            return put(&mut self.number, number, tag);
        }
        if let Ok(gender) = tag.parse::<Gender>() {
            return put(&mut self.gender, gender, tag);
        }
        if let Ok(animacy) = tag.parse::<Animacy>() {
            return put(&mut self.animacy, animacy, tag);
        }
        if let Ok(person) = tag.parse::<Person>() {
            return put(&mut self.person, person, tag);
        }
        if let Ok(tense) = tag.parse::<Tense>() {
            return put(&mut self.tense, tense, tag);
        }
        if let Ok(mood) = tag.parse::<Mood>() {
            return put(&mut self.mood, mood, tag);
        }
        if let Ok(involvement) = tag.parse::<Involvement>() {
            return put(&mut self.involvement, involvement, tag);
        }
        Err(TagError::unknown("grammeme", tag).into())
    }

    fn reject(&self, pos: PartOfSpeech, tag: Option<&'static str>) -> Result<(), SignatureError> {
        match tag {
            Some(tag) => Err(SignatureError::UnexpectedSign {
                pos,
                tag: tag.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn require<T>(value: Option<T>, pos: PartOfSpeech, sign: &'static str) -> Result<T, SignatureError> {
        value.ok_or(SignatureError::MissingSign { pos, sign })
    }

    fn sign<T>(value: Option<T>) -> Sign<T> {
        match value {
            Some(value) => Sign::Is(value),
            None => Sign::Unspecified,
        }
    }

    fn build(self, pos: PartOfSpeech) -> Result<Signature, SignatureError> {
        let verbal = self
            .person
            .map(Person::tag)
            .or(self.tense.map(Tense::tag))
            .or(self.mood.map(Mood::tag))
            .or(self.involvement.map(Involvement::tag))
            .or(self.infinitive.then_some(INFINITIVE_TAG));
        let short = self.short.then_some(SHORT_TAG);

        match pos {
            PartOfSpeech::Noun => {
                self.reject(pos, verbal.or(short).or(self.gender.map(Gender::tag)))?;
                Ok(Signature::Noun(NounSignature {
                    case: Self::require(self.case, pos, "case")?,
                    number: Self::require(self.number, pos, "number")?,
                    animacy: Self::sign(self.animacy),
                }))
            }
            PartOfSpeech::Adjective => {
                self.reject(pos, verbal)?;
                let case = match (self.case, self.short) {
                    (Some(case), _) => case,
                    (None, true) => Case::Nominative,
                    (None, false) => return Err(SignatureError::MissingSign { pos, sign: "case" }),
                };
                Ok(Signature::Adjective(AdjectiveSignature {
                    case,
                    number: Self::require(self.number, pos, "number")?,
                    gender: Self::sign(self.gender),
                    animacy: Self::sign(self.animacy),
                    short: self.short,
                }))
            }
            PartOfSpeech::Verb => {
                self.reject(pos, short.or(self.case.map(Case::tag)).or(self.animacy.map(Animacy::tag)))?;
                Ok(Signature::Verb(VerbSignature {
                    infinitive: self.infinitive,
                    tense: Self::sign(self.tense),
                    number: Self::sign(self.number),
                    person: Self::sign(self.person),
                    gender: Self::sign(self.gender),
                    mood: Self::sign(self.mood),
                    involvement: Self::sign(self.involvement),
                }))
            }
            PartOfSpeech::Numeral => {
                self.reject(pos, verbal.or(short))?;
                Ok(Signature::Numeral(NumeralSignature {
                    case: Self::require(self.case, pos, "case")?,
                    number: Self::sign(self.number),
                    gender: Self::sign(self.gender),
                    animacy: Self::sign(self.animacy),
                }))
            }
            PartOfSpeech::Pronoun => {
                self.reject(pos, verbal.or(short))?;
                Ok(Signature::Pronoun(PronounSignature {
                    case: Self::require(self.case, pos, "case")?,
                    number: Self::require(self.number, pos, "number")?,
                    gender: Self::sign(self.gender),
                    animacy: Self::sign(self.animacy),
                }))
            }
            _ => match self.seen.first() {
                Some(tag) => Err(SignatureError::UnexpectedSign {
                    pos,
                    tag: tag.clone(),
                }),
                None => Ok(Signature::Invariable),
            },
        }
    }
}
