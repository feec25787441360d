use core::fmt;

use slovo_morph::Word;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Alphabetic run; carries morphological analyses when the word is known.
    Word,
    /// Digits only.
    Number,
    /// Alphanumeric run containing a digit or an underscore, such as an
    /// account code `AB_12`.
    Identifier,
    /// Text between `"..."` or `«...»`, quotes excluded from `text`.
    QuotedLiteral,
    Punctuation(char),
    Whitespace,
    LineBreak,
}

#[derive(Debug, Clone)]
pub struct Token<'lx> {
    pub span: Span,
    pub text: String,
    pub kind: TokenKind,
    /// Every analysis of a word token; empty for unknown words and other kinds.
    pub analyses: Vec<Word<'lx>>,
    /// Copies of the coordinated continuations that follow this token in
    /// the stream: separators and sibling words in source order ("минска"
    /// holds "или", "пинска").
    pub uniform: Vec<Token<'lx>>,
}

impl<'lx> Token<'lx> {
    pub fn new(span: Span, text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            span,
            text: text.into(),
            kind,
            analyses: Vec::new(),
            uniform: Vec::new(),
        }
    }

    pub fn with_analyses(mut self, analyses: Vec<Word<'lx>>) -> Self {
        self.analyses = analyses;
        self
    }

    /// Whitespace and line breaks carry no grammatical content.
    pub fn is_blank(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::LineBreak)
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Short signature codes shared by at least one analysis.
    pub fn short_codes(&self) -> impl Iterator<Item = String> + '_ {
        self.analyses.iter().map(Word::short_code)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        for sibling in &self.uniform {
            match sibling.kind {
                TokenKind::Punctuation(_) => write!(f, "{sibling}")?,
                _ => write!(f, " {sibling}")?,
            }
        }
        Ok(())
    }
}
