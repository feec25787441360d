use slovo_morph::Word;

use crate::token::Token;

/// A matched head token: a word token with the analysis that satisfied the
/// pattern, or a token matched on its kind (identifier, literal, number,
/// coordinating separator).
#[derive(Debug, Clone)]
pub enum Terminal<'lx> {
    Word { token: Token<'lx>, word: Word<'lx> },
    Token(Token<'lx>),
}

impl<'lx> Terminal<'lx> {
    pub fn token(&self) -> &Token<'lx> {
        match self {
            Terminal::Word { token, .. } | Terminal::Token(token) => token,
        }
    }

    pub fn text(&self) -> &str {
        &self.token().text
    }

    pub fn word(&self) -> Option<&Word<'lx>> {
        match self {
            Terminal::Word { word, .. } => Some(word),
            Terminal::Token(_) => None,
        }
    }
}

/// One successful template match. Built once and never mutated.
#[derive(Debug, Clone)]
pub struct Phrase<'lx> {
    pub template_id: String,
    pub specifier: Option<Box<Phrase<'lx>>>,
    /// Set when the head matched a nested template.
    pub head: Option<Box<Phrase<'lx>>>,
    /// Set when the head matched an atomic pattern: the matched token first,
    /// then its resolved coordinated siblings and separators.
    pub head_terminals: Vec<Terminal<'lx>>,
    pub complements: Vec<Phrase<'lx>>,
    pub adjunct: Option<Box<Phrase<'lx>>>,
}

impl<'lx> Phrase<'lx> {
    pub fn head_terminal(&self) -> Option<&Terminal<'lx>> {
        self.head_terminals.first()
    }

    /// Surface text of the head token, following nested head phrases.
    pub fn head_text(&self) -> Option<&str> {
        match &self.head {
            Some(nested) => nested.head_text(),
            None => self.head_terminal().map(Terminal::text),
        }
    }

    pub fn complement(&self, template_id: &str) -> Option<&Phrase<'lx>> {
        self.complements.iter().find(|c| c.template_id == template_id)
    }

    /// Number of tokens this phrase covers, coordinated siblings included.
    pub fn terminal_count(&self) -> usize {
        let nested = [&self.specifier, &self.head, &self.adjunct]
            .into_iter()
            .flatten()
            .map(|phrase| phrase.terminal_count())
            .sum::<usize>();
        nested
            + self.head_terminals.len()
            + self.complements.iter().map(Phrase::terminal_count).sum::<usize>()
    }
}
