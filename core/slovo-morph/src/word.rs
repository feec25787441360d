use core::fmt;

use slovo_protocol::{Lexeme, MorphFlags, NumeralInfo, PartOfSpeech, Signature};

/// One analysis of a surface form. The lexeme is borrowed from the lexicon,
/// which outlives every analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<'lx> {
    pub lexeme: &'lx Lexeme,
    pub signature: Signature,
    pub surface: String,
}

impl<'lx> Word<'lx> {
    pub fn new(lexeme: &'lx Lexeme, signature: Signature, surface: impl Into<String>) -> Self {
        Self {
            lexeme,
            signature,
            surface: surface.into(),
        }
    }

    pub fn lemma(&self) -> &'lx str {
        &self.lexeme.lemma
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        self.lexeme.part_of_speech()
    }

    /// Compact signature code, e.g. `noun:gen.sg`. Coordinated words share
    /// their code.
    pub fn short_code(&self) -> String {
        self.signature.short_code(self.part_of_speech())
    }

    pub fn flags(&self) -> MorphFlags {
        self.signature.flags()
    }

    pub fn numeral(&self) -> Option<&'lx NumeralInfo> {
        self.lexeme.numeral()
    }
}

impl fmt::Display for Word<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.surface, self.lemma(), self.short_code())
    }
}
