use std::collections::VecDeque;

use slovo_morph::Morphology;

use crate::scanner::{scan_with_spans, RawToken};
use crate::token::{Token, TokenKind};

/// Conjunctions that join coordinated ("uniform") words.
const COORDINATORS: &[&str] = &["и", "или"];

pub struct Lexer<'lx> {
    morphology: &'lx Morphology,
}

impl<'lx> Lexer<'lx> {
    pub fn new(morphology: &'lx Morphology) -> Self {
        Self { morphology }
    }

    /// Primary entry point: Text -> Annotated Tokens
    pub fn tokenize(&self, input: &str) -> Vec<Token<'lx>> {
        let tokens = scan_with_spans(input)
            .into_iter()
            .map(|(span, raw)| {
                let text = &input[span.start..span.end];
                match raw {
                    RawToken::Word(word) => Token::new(span, word, TokenKind::Word)
                        .with_analyses(self.morphology.analyze(&word.to_lowercase())),
                    RawToken::Number(digits) => Token::new(span, digits, TokenKind::Number),
                    RawToken::Identifier(id) => Token::new(span, id, TokenKind::Identifier),
                    RawToken::Quoted(inner) => Token::new(span, inner, TokenKind::QuotedLiteral),
                    RawToken::Punct(c) => Token::new(span, text, TokenKind::Punctuation(c)),
                    RawToken::Whitespace => Token::new(span, text, TokenKind::Whitespace),
                    RawToken::LineBreak => Token::new(span, text, TokenKind::LineBreak),
                }
            })
            .collect();

        fold_uniform(tokens)
    }
}

fn is_separator(token: &Token<'_>) -> bool {
    match token.kind {
        TokenKind::Punctuation(',') => true,
        TokenKind::Word => COORDINATORS.contains(&token.text.to_lowercase().as_str()),
        _ => false,
    }
}

fn shares_code(head: &Token<'_>, sibling: &Token<'_>) -> bool {
    head.short_codes()
        .any(|code| sibling.short_codes().any(|other| other == code))
}

/// Attaches runs like `X, Y или Z` to X's uniform list when every sibling
/// shares a short signature code with X. The run stays in the stream; X
/// carries copies of its separators and siblings.
pub fn fold_uniform(tokens: Vec<Token<'_>>) -> Vec<Token<'_>> {
    let mut pending: VecDeque<_> = tokens.into();
    let mut result = Vec::with_capacity(pending.len());

    while let Some(mut head) = pending.pop_front() {
        let mut covered = 0;
        if head.is_word() && !head.analyses.is_empty() && !is_separator(&head) {
            loop {
                // Shape: blank* separator blank* word
                let mut at = covered;
                while pending.get(at).is_some_and(Token::is_blank) {
                    at += 1;
                }
                let Some(separator) = pending.get(at).filter(|token| is_separator(token)) else {
                    break;
                };
                at += 1;
                while pending.get(at).is_some_and(Token::is_blank) {
                    at += 1;
                }
                let Some(sibling) = pending.get(at) else {
                    break;
                };
                if !sibling.is_word() || is_separator(sibling) || !shares_code(&head, sibling) {
                    break;
                }

                head.uniform.push(separator.clone());
                head.uniform.push(sibling.clone());
                covered = at + 1;
            }
        }
        result.push(head);
        // Siblings never start a run of their own.
        result.extend(pending.drain(..covered));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexer() -> Lexer<'static> {
        Lexer::new(Morphology::global())
    }

    #[test]
    fn test_tokenize_annotates_words() {
        let tokens = lexer().tokenize("Покажи все 42 AB_1 «Альфа»");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Word,
                TokenKind::Whitespace,
                TokenKind::Word,
                TokenKind::Whitespace,
                TokenKind::Number,
                TokenKind::Whitespace,
                TokenKind::Identifier,
                TokenKind::Whitespace,
                TokenKind::QuotedLiteral,
            ]
        );
        // Analysis is case-insensitive at the token level.
        assert_eq!(tokens[0].text, "Покажи");
        assert_eq!(tokens[0].analyses[0].lemma(), "показать");
        assert_eq!(tokens[2].analyses.len(), 2);
        assert_eq!(tokens[8].text, "Альфа");
    }

    #[test]
    fn test_coordinated_words_fold_into_head() {
        let tokens = lexer().tokenize("из минска или пинска");
        assert_eq!(tokens.len(), 7);
        let head = &tokens[2];
        assert_eq!(head.text, "минска");
        let siblings: Vec<_> = head.uniform.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(siblings, ["или", "пинска"]);
        // The siblings stay in the stream, without runs of their own.
        assert_eq!(tokens[4].text, "или");
        assert_eq!(tokens[6].text, "пинска");
        assert!(tokens[6].uniform.is_empty());
    }

    #[test]
    fn test_comma_runs_fold() {
        let tokens = lexer().tokenize("минска, пинска и бреста");
        assert_eq!(tokens.len(), 8);
        let siblings: Vec<_> = tokens[0].uniform.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(siblings, [",", "пинска", "и", "бреста"]);
        assert_eq!(tokens[0].to_string(), "минска, пинска и бреста");
    }

    #[test]
    fn test_mismatched_words_do_not_fold() {
        // Genitive "минска" and accusative "организацию" share no code.
        let tokens = lexer().tokenize("минска и организацию");
        assert!(tokens[0].uniform.is_empty());
        assert_eq!(tokens.len(), 5);
    }
}
