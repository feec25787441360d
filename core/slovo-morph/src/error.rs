use slovo_protocol::{LexemeId, PartOfSpeech, SchemeId, Signature, SignatureError, TagError};
use thiserror::Error;

/// Faults in the static dictionary or paradigm data. These are data bugs:
/// the tables are rejected as a whole instead of being loaded partially.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("scheme `{scheme}` row {row}: {source}")]
    BadRow {
        scheme: String,
        row: usize,
        #[source]
        source: SignatureError,
    },

    #[error("scheme `{scheme}` is declared twice")]
    DuplicateScheme { scheme: String },

    #[error("scheme `{scheme}` has overlapping entries `{first}` and `{second}`")]
    OverlappingEntries {
        scheme: String,
        first: Signature,
        second: Signature,
    },

    #[error("scheme `{scheme}` resolves `{signature}` to {found} entries instead of one")]
    UncoveredCell {
        scheme: String,
        signature: Signature,
        found: usize,
    },

    #[error("lexeme `{lemma}`: {source}")]
    BadLexemeTag {
        lemma: String,
        #[source]
        source: TagError,
    },

    #[error("lexeme `{lemma}` has no part of speech tag")]
    MissingPartOfSpeech { lemma: String },

    #[error("lexeme `{lemma}` does not declare its {feature}")]
    MissingFeature { lemma: String, feature: &'static str },

    #[error("lexeme `{lemma}` refers to unknown scheme `{scheme}`")]
    UnknownScheme { lemma: String, scheme: String },

    #[error("lexeme `{lemma}` is a {found} but scheme `{scheme}` declines a {expected}")]
    SchemePartOfSpeech {
        lemma: String,
        scheme: String,
        expected: PartOfSpeech,
        found: PartOfSpeech,
    },

    #[error("lexeme `{lemma}` needs an alternate stem for scheme `{scheme}`")]
    MissingStem { lemma: String, scheme: String },

    #[error("numeral `{lemma}` is missing its {detail}")]
    IncompleteNumeral { lemma: String, detail: &'static str },

    #[error("numeral `{lemma}` refers to unknown component `{component}`")]
    UnknownComponent { lemma: String, component: String },

    #[error("compound numeral `{lemma}` cannot build `{signature}`: {source}")]
    Compound {
        lemma: String,
        signature: Signature,
        #[source]
        source: MorphError,
    },
}

/// Failures while producing a word form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MorphError {
    #[error("`{lemma}` is a {expected}, not a `{signature}` signature")]
    SignatureMismatch {
        lemma: String,
        expected: PartOfSpeech,
        signature: Signature,
    },

    #[error("no ending of scheme `{scheme}` matches `{signature}` for `{lemma}`")]
    NoMatchingEnding {
        lemma: String,
        scheme: String,
        signature: Signature,
    },

    #[error("`{signature}` matches {candidates} endings of `{lemma}`; specify animacy or gender")]
    AmbiguousSignature {
        lemma: String,
        signature: Signature,
        candidates: usize,
    },

    #[error("`{lemma}` has no alternate stem")]
    MissingStem { lemma: String },

    #[error("unknown scheme {0:?}")]
    UnknownScheme(SchemeId),

    #[error("unknown lexeme {0:?}")]
    UnknownLexeme(LexemeId),
}
