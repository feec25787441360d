//! Static dictionary data: declension and conjugation schemes, and the
//! lexemes that use them.

mod dictionary;
mod nominal;
mod numeral;
mod verbal;

use slovo_protocol::PartOfSpeech;

use crate::lexicon::LexemeDef;
use crate::paradigm::{SchemeDef, StemRule};

/// Single-form words: prepositions, conjunctions, particles and adverbs.
pub const INVARIABLE: SchemeDef = SchemeDef {
    name: "invariable",
    pos: PartOfSpeech::Particle,
    stem_rule: StemRule::Single,
    rows: &[("", "")],
};

/// Every scheme, in declaration order: nominal, numeral, verbal, invariable.
pub fn schemes() -> impl Iterator<Item = &'static SchemeDef> {
    nominal::SCHEMES
        .iter()
        .chain(numeral::SCHEMES)
        .chain(verbal::SCHEMES)
        .chain(std::iter::once(&INVARIABLE))
}

pub fn lexemes() -> &'static [LexemeDef] {
    dictionary::LEXEMES
}
