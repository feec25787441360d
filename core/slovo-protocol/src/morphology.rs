use core::fmt;
use core::str::FromStr;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;
use thiserror::Error;

/// Raised when a dictionary or paradigm row names a grammatical tag that no
/// category knows about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {category} tag `{tag}`")]
pub struct TagError {
    pub category: &'static str,
    pub tag: String,
}

impl TagError {
    pub fn unknown(category: &'static str, tag: &str) -> Self {
        Self {
            category,
            tag: tag.to_string(),
        }
    }
}

/// Declares a closed grammatical category together with its short dictionary
/// tag, so that static tables can be written as compact tag strings.
macro_rules! define_category {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident = $value:literal => $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
        #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
        #[archive(check_bytes)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Short tag used in the static dictionary tables.
            pub const fn tag(self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }
        }

        impl FromStr for $name {
            type Err = TagError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($name::$variant),)+
                    _ => Err(TagError::unknown(stringify!($name), s)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.tag())
            }
        }
    };
}

define_category!(Case {
    Nominative = 0 => "nom",
    Genitive = 1 => "gen",
    Dative = 2 => "dat",
    Accusative = 3 => "acc",
    Instrumental = 4 => "ins",
    Locative = 5 => "loc",
});

define_category!(Gender {
    Masculine = 0 => "m",
    Feminine = 1 => "f",
    Neuter = 2 => "n",
});

define_category!(Number {
    Singular = 0 => "sg",
    Plural = 1 => "pl",
});

define_category!(Animacy {
    Animate = 0 => "anim",
    Inanimate = 1 => "inan",
});

define_category!(Person {
    First = 1 => "1p",
    Second = 2 => "2p",
    Third = 3 => "3p",
});

define_category!(Tense {
    Past = 0 => "past",
    Present = 1 => "pres",
    Future = 2 => "fut",
});

define_category!(Mood {
    Indicative = 0 => "ind",
    Imperative = 1 => "imp",
    Conditional = 2 => "cond",
});

define_category!(Aspect {
    Perfective = 0 => "perf",
    Imperfective = 1 => "impf",
});

define_category!(Transitivity {
    Transitive = 0 => "tran",
    Intransitive = 1 => "intr",
});

define_category!(
    /// Whether the speaker takes part in the requested action
    /// ("покажи" is exclusive, "покажемте" is inclusive).
    Involvement {
        Exclusive = 0 => "excl",
        Inclusive = 1 => "incl",
    }
);

define_category!(NumeralCategory {
    ProperQuantitative = 0 => "quant",
    Collective = 1 => "coll",
    Fractional = 2 => "frac",
});

define_category!(
    /// Simple numerals have one root ("пять"), complex ones fuse two roots in
    /// a single word ("пятьдесят"), composite ones span several words
    /// ("двадцать пять").
    NumeralStructure {
        Simple = 0 => "simple",
        Complex = 1 => "complex",
        Composite = 2 => "composite",
    }
);

define_category!(NumeralRank {
    Units = 0 => "units",
    Tens = 1 => "tens",
    Hundreds = 2 => "hundreds",
    Thousands = 3 => "thousands",
});

define_category!(PartOfSpeech {
    Noun = 0 => "noun",
    Adjective = 1 => "adj",
    Verb = 2 => "verb",
    Numeral = 3 => "num",
    Pronoun = 4 => "pron",
    Adverb = 5 => "adv",
    Preposition = 6 => "prep",
    Conjunction = 7 => "conj",
    Particle = 8 => "part",
});

impl PartOfSpeech {
    /// Invariable parts of speech have a single form and no signature.
    pub const fn is_invariable(self) -> bool {
        matches!(
            self,
            PartOfSpeech::Adverb
                | PartOfSpeech::Preposition
                | PartOfSpeech::Conjunction
                | PartOfSpeech::Particle
        )
    }
}

/// A grammatical sign that may be inapplicable to a paradigm cell.
///
/// `Unspecified` is a real value rather than an absent one: a paradigm entry
/// that leaves a sign unspecified states that the cell does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Sign<T> {
    Unspecified,
    Is(T),
}

impl<T> Default for Sign<T> {
    fn default() -> Self {
        Sign::Unspecified
    }
}

impl<T> From<T> for Sign<T> {
    fn from(value: T) -> Self {
        Sign::Is(value)
    }
}

impl<T: Copy + PartialEq> Sign<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Sign::Unspecified => None,
            Sign::Is(value) => Some(value),
        }
    }

    pub fn is_specified(self) -> bool {
        matches!(self, Sign::Is(_))
    }

    /// Two signs are compatible when either side does not care or both agree.
    pub fn compatible(self, other: Self) -> bool {
        match (self, other) {
            (Sign::Is(a), Sign::Is(b)) => a == b,
            _ => true,
        }
    }

    /// Keeps `self` when specified, otherwise takes `fallback`.
    pub fn or(self, fallback: Self) -> Self {
        match self {
            Sign::Is(_) => self,
            Sign::Unspecified => fallback,
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct MorphFlags: u32 {
        // Case (Bits 0-5)
        const NOMINATIVE = 1 << 0;
        const GENITIVE = 1 << 1;
        const DATIVE = 1 << 2;
        const ACCUSATIVE = 1 << 3;
        const INSTRUMENTAL = 1 << 4;
        const LOCATIVE = 1 << 5;

        // Gender (Bits 6-8)
        const MASCULINE = 1 << 6;
        const FEMININE = 1 << 7;
        const NEUTER = 1 << 8;

        // Number (Bits 9-10)
        const SINGULAR = 1 << 9;
        const PLURAL = 1 << 10;

        // Animacy (Bits 11-12)
        const ANIMATE = 1 << 11;
        const INANIMATE = 1 << 12;

        // Person (Bits 13-15)
        const FIRST_PERSON = 1 << 13;
        const SECOND_PERSON = 1 << 14;
        const THIRD_PERSON = 1 << 15;

        // Tense (Bits 16-18)
        const PAST = 1 << 16;
        const PRESENT = 1 << 17;
        const FUTURE = 1 << 18;

        // Mood (Bits 19-21)
        const INDICATIVE = 1 << 19;
        const IMPERATIVE = 1 << 20;
        const CONDITIONAL = 1 << 21;

        // Verb and adjective form markers
        const INFINITIVE = 1 << 22;
        const SHORT = 1 << 23;
        const EXCLUSIVE = 1 << 24;
        const INCLUSIVE = 1 << 25;

        const CASES = Self::NOMINATIVE.bits() | Self::GENITIVE.bits() | Self::DATIVE.bits()
            | Self::ACCUSATIVE.bits() | Self::INSTRUMENTAL.bits() | Self::LOCATIVE.bits();
        const GENDERS = Self::MASCULINE.bits() | Self::FEMININE.bits() | Self::NEUTER.bits();
        const NUMBERS = Self::SINGULAR.bits() | Self::PLURAL.bits();
        const MOODS = Self::INDICATIVE.bits() | Self::IMPERATIVE.bits() | Self::CONDITIONAL.bits();
    }
}

impl From<Case> for MorphFlags {
    fn from(case: Case) -> Self {
        match case {
            Case::Nominative => MorphFlags::NOMINATIVE,
            Case::Genitive => MorphFlags::GENITIVE,
            Case::Dative => MorphFlags::DATIVE,
            Case::Accusative => MorphFlags::ACCUSATIVE,
            Case::Instrumental => MorphFlags::INSTRUMENTAL,
            Case::Locative => MorphFlags::LOCATIVE,
        }
    }
}

impl From<Gender> for MorphFlags {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Masculine => MorphFlags::MASCULINE,
            Gender::Feminine => MorphFlags::FEMININE,
            Gender::Neuter => MorphFlags::NEUTER,
        }
    }
}

impl From<Number> for MorphFlags {
    fn from(number: Number) -> Self {
        match number {
            Number::Singular => MorphFlags::SINGULAR,
            Number::Plural => MorphFlags::PLURAL,
        }
    }
}

impl From<Animacy> for MorphFlags {
    fn from(animacy: Animacy) -> Self {
        match animacy {
            Animacy::Animate => MorphFlags::ANIMATE,
            Animacy::Inanimate => MorphFlags::INANIMATE,
        }
    }
}

impl From<Person> for MorphFlags {
    fn from(person: Person) -> Self {
        match person {
            Person::First => MorphFlags::FIRST_PERSON,
            Person::Second => MorphFlags::SECOND_PERSON,
            Person::Third => MorphFlags::THIRD_PERSON,
        }
    }
}

impl From<Tense> for MorphFlags {
    fn from(tense: Tense) -> Self {
        match tense {
            Tense::Past => MorphFlags::PAST,
            Tense::Present => MorphFlags::PRESENT,
            Tense::Future => MorphFlags::FUTURE,
        }
    }
}

impl From<Mood> for MorphFlags {
    fn from(mood: Mood) -> Self {
        match mood {
            Mood::Indicative => MorphFlags::INDICATIVE,
            Mood::Imperative => MorphFlags::IMPERATIVE,
            Mood::Conditional => MorphFlags::CONDITIONAL,
        }
    }
}

impl From<Involvement> for MorphFlags {
    fn from(involvement: Involvement) -> Self {
        match involvement {
            Involvement::Exclusive => MorphFlags::EXCLUSIVE,
            Involvement::Inclusive => MorphFlags::INCLUSIVE,
        }
    }
}

impl<T: Copy + Into<MorphFlags>> From<Sign<T>> for MorphFlags {
    fn from(sign: Sign<T>) -> Self {
        match sign {
            Sign::Is(value) => value.into(),
            Sign::Unspecified => MorphFlags::empty(),
        }
    }
}
