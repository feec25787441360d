//! Template-driven recursive descent.
//!
//! Matching is greedy: head alternatives are tried in declared order and the
//! first one that matches commits, even if a complement fails afterwards.
//! Grammar authors rely on alternative order as a priority list.

use core::fmt;

use tracing::{debug, trace};

use crate::phrase::{Phrase, Terminal};
use crate::template::{AtomicPattern, HeadAlternative, MergedTemplate, PhraseTemplate, WordPattern};
use crate::token::{Token, TokenKind};
use slovo_protocol::PartOfSpeech;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoHeadFound,
    InvalidPhraseHead,
    MissingSpecifier,
    MissingComplement,
    DepthExceeded,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::NoHeadFound => "no head found",
            ErrorKind::InvalidPhraseHead => "invalid phrase head",
            ErrorKind::MissingSpecifier => "missing specifier",
            ErrorKind::MissingComplement => "missing complement",
            ErrorKind::DepthExceeded => "template nesting too deep",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFrame {
    pub template_id: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl fmt::Display for ErrorFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.template_id, self.message)
    }
}

#[derive(Debug, Clone)]
pub struct Parsed<'t, 'lx> {
    pub phrase: Phrase<'lx>,
    pub rest: &'t [Token<'lx>],
}

impl Parsed<'_, '_> {
    /// True when nothing but blanks is left.
    pub fn is_complete(&self) -> bool {
        self.rest.iter().all(Token::is_blank)
    }
}

/// A failed match. `stack` runs from the innermost failure outwards.
#[derive(Debug, Clone)]
pub struct ParseFailure<'t, 'lx> {
    pub rest: &'t [Token<'lx>],
    pub stack: Vec<ErrorFrame>,
}

impl<'t, 'lx> ParseFailure<'t, 'lx> {
    fn new(rest: &'t [Token<'lx>], template: &MergedTemplate, kind: ErrorKind, message: String) -> Self {
        Self {
            rest,
            stack: vec![ErrorFrame {
                template_id: template.id.clone(),
                kind,
                message,
            }],
        }
    }

    fn wrap(mut self, template: &MergedTemplate, kind: ErrorKind, message: String) -> Self {
        self.stack.push(ErrorFrame {
            template_id: template.id.clone(),
            kind,
            message,
        });
        self
    }

    pub fn innermost(&self) -> Option<&ErrorFrame> {
        self.stack.first()
    }

    pub fn is_depth_exceeded(&self) -> bool {
        self.innermost()
            .is_some_and(|frame| frame.kind == ErrorKind::DepthExceeded)
    }

    /// Fewer significant tokens left, then the deeper trace.
    fn got_further(&self, other: &ParseFailure<'_, '_>) -> bool {
        let (rest, other_rest) = (significant(self.rest), significant(other.rest));
        rest < other_rest || (rest == other_rest && self.stack.len() > other.stack.len())
    }
}

impl fmt::Display for ParseFailure<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut frames = self.stack.iter();
        if let Some(first) = frames.next() {
            write!(f, "{first}")?;
        }
        for frame in frames {
            write!(f, " <- {frame}")?;
        }
        Ok(())
    }
}

pub type ParseResult<'t, 'lx> = Result<Parsed<'t, 'lx>, ParseFailure<'t, 'lx>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum template nesting before the match gives up.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// Parses `tokens` against `template` with default options.
pub fn parse<'t, 'lx>(tokens: &'t [Token<'lx>], template: &PhraseTemplate) -> ParseResult<'t, 'lx> {
    Parser::default().parse(tokens, template)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn parse<'t, 'lx>(&self, tokens: &'t [Token<'lx>], template: &PhraseTemplate) -> ParseResult<'t, 'lx> {
        let result = self.parse_at(tokens, template, 0);
        match &result {
            Ok(parsed) => debug!(
                template = %template.id,
                consumed = tokens.len() - parsed.rest.len(),
                rest = parsed.rest.len(),
                "phrase matched"
            ),
            Err(failure) => debug!(template = %template.id, error = %failure, "phrase rejected"),
        }
        result
    }

    /// Tries every template against the same tokens. Keeps the success that
    /// leaves the fewest tokens, then the one covering more terminals; when
    /// all fail, the failure that got furthest, then the one with the deepest
    /// trace. Remaining ties go to the earlier template.
    pub fn parse_best<'t, 'lx, 'g>(
        &self,
        tokens: &'t [Token<'lx>],
        templates: impl IntoIterator<Item = &'g PhraseTemplate>,
    ) -> ParseResult<'t, 'lx> {
        let mut best_success: Option<Parsed<'t, 'lx>> = None;
        let mut best_failure: Option<ParseFailure<'t, 'lx>> = None;

        for template in templates {
            match self.parse(tokens, template) {
                Ok(parsed) => {
                    let better = best_success.as_ref().map_or(true, |best| {
                        let (rest, best_rest) = (significant(parsed.rest), significant(best.rest));
                        rest < best_rest
                            || (rest == best_rest && parsed.phrase.terminal_count() > best.phrase.terminal_count())
                    });
                    if better {
                        best_success = Some(parsed);
                    }
                }
                Err(failure) => {
                    if best_failure.as_ref().map_or(true, |best| failure.got_further(best)) {
                        best_failure = Some(failure);
                    }
                }
            }
        }

        match (best_success, best_failure) {
            (Some(parsed), _) => Ok(parsed),
            (None, Some(failure)) => Err(failure),
            (None, None) => Err(ParseFailure {
                rest: tokens,
                stack: Vec::new(),
            }),
        }
    }

    fn parse_at<'t, 'lx>(
        &self,
        tokens: &'t [Token<'lx>],
        template: &PhraseTemplate,
        depth: usize,
    ) -> ParseResult<'t, 'lx> {
        let merged = template.merge();
        if depth > self.options.max_depth {
            return Err(ParseFailure::new(
                tokens,
                &merged,
                ErrorKind::DepthExceeded,
                format!("nesting exceeds {} templates", self.options.max_depth),
            ));
        }

        let mut rest = tokens;

        // 1. Specifier
        let mut specifier = None;
        if let Some(slot) = &merged.specifier {
            match self.parse_at(rest, &slot.template, depth + 1) {
                Ok(parsed) => {
                    rest = parsed.rest;
                    specifier = Some(Box::new(parsed.phrase));
                }
                Err(failure) if slot.optional && !failure.is_depth_exceeded() => {
                    trace!(template = %merged.id, specifier = %slot.template.id, "optional specifier absent");
                }
                Err(failure) => {
                    let message = format!("expected {}", slot.template.label);
                    return Err(failure.wrap(&merged, ErrorKind::MissingSpecifier, message));
                }
            }
        }

        // 2. Blanks carry no grammatical content.
        rest = skip_blank(rest);

        // 3. Nothing left to head the phrase.
        let Some(current) = rest.first() else {
            return Err(ParseFailure::new(
                rest,
                &merged,
                ErrorKind::NoHeadFound,
                format!("input ended before {}", merged.label),
            ));
        };

        // 4. First matching alternative commits.
        let mut head = None;
        let mut head_terminals = Vec::new();
        let mut matched = false;
        let mut nested_failure: Option<ParseFailure<'t, 'lx>> = None;
        for (index, alternative) in merged.head.alternatives.iter().enumerate() {
            trace!(template = %merged.id, alternative = index, token = %current.text, "trying head");
            match alternative {
                HeadAlternative::Atom(pattern) => {
                    if let Some(terminal) = match_atom(pattern, current) {
                        head_terminals = if merged.head.no_uniform {
                            vec![terminal]
                        } else {
                            resolve_uniform(terminal)
                        };
                        rest = &rest[1..];
                        if let [_, .., last] = head_terminals.as_slice() {
                            rest = skip_covered(rest, last.token().span.end);
                        }
                        matched = true;
                    }
                }
                HeadAlternative::Template(nested) => match self.parse_at(rest, nested, depth + 1) {
                    Ok(parsed) => {
                        rest = parsed.rest;
                        head = Some(Box::new(parsed.phrase));
                        matched = true;
                    }
                    Err(failure) if failure.is_depth_exceeded() => {
                        let message = format!("head {}", nested.label);
                        return Err(failure.wrap(&merged, ErrorKind::InvalidPhraseHead, message));
                    }
                    Err(failure) => {
                        if nested_failure.as_ref().map_or(true, |best| failure.got_further(best)) {
                            nested_failure = Some(failure);
                        }
                    }
                },
            }
            if matched {
                break;
            }
        }

        // 5. No alternative matched; keep the trace of the nested one that got furthest.
        if !matched {
            let message = format!("`{}` cannot head {}", current.text, merged.label);
            return Err(match nested_failure {
                Some(failure) => failure.wrap(&merged, ErrorKind::InvalidPhraseHead, message),
                None => ParseFailure::new(rest, &merged, ErrorKind::InvalidPhraseHead, message),
            });
        }

        // 6. Complements, in order.
        let mut complements = Vec::with_capacity(merged.complements.len());
        for slot in &merged.complements {
            match self.parse_at(rest, &slot.template, depth + 1) {
                Ok(parsed) => {
                    rest = parsed.rest;
                    complements.push(parsed.phrase);
                }
                Err(failure) if slot.optional && !failure.is_depth_exceeded() => {
                    trace!(template = %merged.id, complement = %slot.template.id, "optional complement skipped");
                }
                Err(failure) => {
                    let message = format!("expected {}", slot.template.label);
                    return Err(failure.wrap(&merged, ErrorKind::MissingComplement, message));
                }
            }
        }

        // 7. Adjunct never fails the match.
        let mut adjunct = None;
        if let Some(slot) = &merged.adjunct {
            match self.parse_at(rest, &slot.template, depth + 1) {
                Ok(parsed) => {
                    rest = parsed.rest;
                    adjunct = Some(Box::new(parsed.phrase));
                }
                Err(failure) if failure.is_depth_exceeded() => {
                    let message = format!("adjunct {}", slot.template.label);
                    return Err(failure.wrap(&merged, ErrorKind::MissingComplement, message));
                }
                Err(_) => {}
            }
        }

        Ok(Parsed {
            phrase: Phrase {
                template_id: merged.id,
                specifier,
                head,
                head_terminals,
                complements,
                adjunct,
            },
            rest,
        })
    }
}

fn skip_blank<'t, 'lx>(tokens: &'t [Token<'lx>]) -> &'t [Token<'lx>] {
    let start = tokens
        .iter()
        .position(|token| !token.is_blank())
        .unwrap_or(tokens.len());
    &tokens[start..]
}

/// Drops the stream tokens a coordinated head already covers, up to the
/// byte offset `end`.
fn skip_covered<'t, 'lx>(tokens: &'t [Token<'lx>], end: usize) -> &'t [Token<'lx>] {
    let start = tokens
        .iter()
        .position(|token| token.span.end > end)
        .unwrap_or(tokens.len());
    &tokens[start..]
}

fn significant(tokens: &[Token<'_>]) -> usize {
    tokens.iter().filter(|token| !token.is_blank()).count()
}

fn match_atom<'lx>(pattern: &AtomicPattern, token: &Token<'lx>) -> Option<Terminal<'lx>> {
    match pattern {
        AtomicPattern::Word(word) => match_word(word, token),
        AtomicPattern::Identifier => (token.kind == TokenKind::Identifier).then(|| Terminal::Token(token.clone())),
        AtomicPattern::QuotedLiteral => {
            (token.kind == TokenKind::QuotedLiteral).then(|| Terminal::Token(token.clone()))
        }
        AtomicPattern::Number => (token.kind == TokenKind::Number).then(|| Terminal::Token(token.clone())),
    }
}

fn match_word<'lx>(pattern: &WordPattern, token: &Token<'lx>) -> Option<Terminal<'lx>> {
    if !token.is_word() {
        return None;
    }
    if let Some(image) = &pattern.image {
        if token.text.to_lowercase() != *image {
            return None;
        }
    }

    let word = token.analyses.iter().find(|word| {
        word.part_of_speech() == pattern.pos
            && pattern.case.map_or(true, |case| word.signature.case() == Some(case))
            && pattern.number.map_or(true, |number| word.signature.number() == Some(number))
            && pattern.mood.map_or(true, |mood| word.signature.mood() == Some(mood))
    })?;

    Some(Terminal::Word {
        token: token.clone(),
        word: word.clone(),
    })
}

/// Re-resolves the coordinated siblings of a matched word against the head's
/// part of speech and short code. Stops at the first sibling that does not
/// resolve; a trailing separator is dropped.
fn resolve_uniform(head: Terminal<'_>) -> Vec<Terminal<'_>> {
    let Terminal::Word { token, word } = &head else {
        return vec![head];
    };
    let pos = word.part_of_speech();
    let code = word.short_code();

    let mut resolved = Vec::new();
    let mut separator = None;
    for sibling in &token.uniform {
        if is_coordinator(sibling) {
            separator = Some(Terminal::Token(sibling.clone()));
            continue;
        }
        let Some(analysis) = sibling
            .analyses
            .iter()
            .find(|analysis| analysis.part_of_speech() == pos && analysis.short_code() == code)
        else {
            break;
        };
        resolved.extend(separator.take());
        resolved.push(Terminal::Word {
            token: sibling.clone(),
            word: analysis.clone(),
        });
    }

    let mut terminals = Vec::with_capacity(resolved.len() + 1);
    terminals.push(head);
    terminals.extend(resolved);
    terminals
}

fn is_coordinator(token: &Token<'_>) -> bool {
    match token.kind {
        TokenKind::Punctuation(',') => true,
        TokenKind::Word => token
            .analyses
            .iter()
            .any(|word| word.part_of_speech() == PartOfSpeech::Conjunction),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::template::Slot;
    use slovo_morph::Morphology;
    use slovo_protocol::Case;
    use std::sync::Arc;

    fn tokens(text: &str) -> Vec<Token<'static>> {
        Lexer::new(Morphology::global()).tokenize(text)
    }

    fn verb(image: &str) -> WordPattern {
        WordPattern::new(PartOfSpeech::Verb).image(image)
    }

    fn noun(id: &str, case: Case) -> Arc<PhraseTemplate> {
        PhraseTemplate::new(id, id)
            .head_word(WordPattern::new(PartOfSpeech::Noun).case(case))
            .build()
    }

    fn name() -> Arc<PhraseTemplate> {
        PhraseTemplate::new("name", "name")
            .head_atom(AtomicPattern::QuotedLiteral)
            .build()
    }

    #[test]
    fn test_first_head_alternative_commits() {
        let verb_with_object = PhraseTemplate::new("verb-object", "verb with object")
            .head_word(verb("покажи"))
            .complement(Slot::required(&noun("object", Case::Accusative)))
            .build();
        let template = PhraseTemplate::new("command", "command")
            .head_word(verb("покажи"))
            .head_template(&verb_with_object)
            .complement(Slot::required(&name()))
            .build();

        // The second alternative would succeed, but the first one matched.
        let input = tokens("покажи организацию «Альфа»");
        let failure = parse(&input, &template).unwrap_err();
        let kinds: Vec<_> = failure.stack.iter().map(|frame| frame.kind).collect();
        assert_eq!(kinds, [ErrorKind::InvalidPhraseHead, ErrorKind::MissingComplement]);
        assert_eq!(failure.stack[1].template_id, "command");
        assert_eq!(failure.rest[0].text, "организацию");
    }

    #[test]
    fn test_optional_complement_keeps_position() {
        let template = PhraseTemplate::new("command", "command")
            .head_word(verb("покажи"))
            .complement(Slot::optional(&name()))
            .complement(Slot::required(&noun("object", Case::Accusative)))
            .build();

        let input = tokens("покажи организацию");
        let parsed = parse(&input, &template).unwrap();
        assert!(parsed.rest.is_empty());
        assert_eq!(parsed.phrase.complements.len(), 1);
        assert_eq!(parsed.phrase.complements[0].template_id, "object");

        let bare = PhraseTemplate::new("bare", "bare")
            .head_word(verb("покажи"))
            .complement(Slot::optional(&name()))
            .build();
        let parsed = parse(&input, &bare).unwrap();
        assert_eq!(parsed.rest.len(), input.len() - 1);
        assert!(parsed.rest[0].is_blank());
    }

    #[test]
    fn test_blank_input_has_no_head() {
        let template = noun("object", Case::Accusative);
        let input = tokens("  \n ");
        let failure = parse(&input, &template).unwrap_err();
        assert_eq!(failure.innermost().unwrap().kind, ErrorKind::NoHeadFound);
        assert!(failure.rest.is_empty());
    }

    #[test]
    fn test_wrong_head_is_rejected() {
        let template = noun("object", Case::Accusative);
        let input = tokens("минска");
        let failure = parse(&input, &template).unwrap_err();
        assert_eq!(failure.stack.len(), 1);
        assert_eq!(failure.stack[0].kind, ErrorKind::InvalidPhraseHead);
        assert_eq!(failure.rest.len(), 1);
    }

    #[test]
    fn test_required_specifier() {
        let quantifier = PhraseTemplate::new("quantifier", "quantifier")
            .head_word(WordPattern::new(PartOfSpeech::Pronoun).image("все"))
            .build();
        let template = PhraseTemplate::new("object", "object")
            .specifier(Slot::required(&quantifier))
            .head_word(WordPattern::new(PartOfSpeech::Noun))
            .build();

        let input = tokens("все организации");
        let parsed = parse(&input, &template).unwrap();
        assert_eq!(parsed.phrase.specifier.as_ref().unwrap().head_text(), Some("все"));
        assert_eq!(parsed.phrase.head_text(), Some("организации"));

        let input = tokens("организации");
        let failure = parse(&input, &template).unwrap_err();
        assert_eq!(failure.stack.last().unwrap().kind, ErrorKind::MissingSpecifier);
    }

    #[test]
    fn test_uniform_siblings_and_suppression() {
        let template = noun("place", Case::Genitive);
        let input = tokens("минска, пинска и бреста");
        let parsed = parse(&input, &template).unwrap();
        let texts: Vec<_> = parsed.phrase.head_terminals.iter().map(Terminal::text).collect();
        assert_eq!(texts, ["минска", ",", "пинска", "и", "бреста"]);
        assert!(parsed.rest.is_empty());
        assert_eq!(parsed.phrase.terminal_count(), 5);

        let strict = PhraseTemplate::new("strict", "strict")
            .head_word(WordPattern::new(PartOfSpeech::Noun).case(Case::Genitive))
            .no_uniform()
            .build();
        let parsed = parse(&input, &strict).unwrap();
        assert_eq!(parsed.phrase.head_terminals.len(), 1);
        // Suppressed siblings stay unconsumed.
        assert!(!parsed.is_complete());
        let rest: Vec<_> = parsed.rest.iter().filter(|t| !t.is_blank()).map(|t| t.text.as_str()).collect();
        assert_eq!(rest, [",", "пинска", "и", "бреста"]);
    }

    #[test]
    fn test_unresolved_sibling_stays_in_rest() {
        // "клиента" folds "и минска" through its genitive reading, but the
        // accusative head cannot take the genitive-only "минска".
        let template = noun("object", Case::Accusative);
        let input = tokens("клиента и минска");
        assert_eq!(input[0].uniform.len(), 2);

        let parsed = parse(&input, &template).unwrap();
        let heads: Vec<_> = parsed.phrase.head_terminals.iter().map(Terminal::text).collect();
        assert_eq!(heads, ["клиента"]);
        assert!(!parsed.is_complete());
        let rest: Vec<_> = parsed.rest.iter().filter(|t| !t.is_blank()).map(|t| t.text.as_str()).collect();
        assert_eq!(rest, ["и", "минска"]);
    }

    #[test]
    fn test_nested_head_failure_keeps_its_trace() {
        let inner = PhraseTemplate::new("inner", "verb with object")
            .head_word(verb("покажи"))
            .complement(Slot::required(&noun("object", Case::Accusative)))
            .build();
        let outer = PhraseTemplate::new("outer", "outer").head_template(&inner).build();

        let input = tokens("покажи «Альфа»");
        let failure = parse(&input, &outer).unwrap_err();
        let frames: Vec<_> = failure
            .stack
            .iter()
            .map(|frame| (frame.template_id.as_str(), frame.kind))
            .collect();
        assert_eq!(
            frames,
            [
                ("object", ErrorKind::InvalidPhraseHead),
                ("inner", ErrorKind::MissingComplement),
                ("outer", ErrorKind::InvalidPhraseHead),
            ]
        );
        assert_eq!(failure.rest[0].text, "Альфа");
    }

    #[test]
    fn test_atomic_token_kinds() {
        let code = PhraseTemplate::new("code", "code")
            .head_atom(AtomicPattern::Identifier)
            .head_atom(AtomicPattern::Number)
            .build();
        for (text, expected) in [("AB_12", "AB_12"), ("42", "42")] {
            let input = tokens(text);
            let parsed = parse(&input, &code).unwrap();
            assert_eq!(parsed.phrase.head_text(), Some(expected));
            assert!(parsed.phrase.head_terminal().unwrap().word().is_none());
        }
    }

    #[test]
    fn test_depth_limit() {
        let inner = noun("inner", Case::Genitive);
        let middle = PhraseTemplate::new("middle", "middle").head_template(&inner).build();
        let outer = PhraseTemplate::new("outer", "outer").head_template(&middle).build();
        let input = tokens("минска");

        assert!(parse(&input, &outer).is_ok());
        let shallow = Parser::new(ParserOptions { max_depth: 1 });
        let failure = shallow.parse(&input, &outer).unwrap_err();
        assert!(failure.is_depth_exceeded());
        assert_eq!(failure.stack.len(), 3);
    }

    #[test]
    fn test_parse_best_prefers_fewest_leftovers() {
        let short = PhraseTemplate::new("short", "short").head_word(verb("покажи")).build();
        let long = PhraseTemplate::new("long", "long")
            .head_word(verb("покажи"))
            .complement(Slot::required(&noun("object", Case::Accusative)))
            .build();
        let input = tokens("покажи организацию");

        let parsed = Parser::default()
            .parse_best(&input, [&*short, &*long])
            .unwrap();
        assert_eq!(parsed.phrase.template_id, "long");

        let nothing = tokens("минска");
        let failure = Parser::default()
            .parse_best(&nothing, [&*short, &*long])
            .unwrap_err();
        assert_eq!(failure.stack[0].template_id, "short");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let template = PhraseTemplate::new("command", "command")
            .head_word(verb("покажи"))
            .complement(Slot::optional(&noun("object", Case::Accusative)))
            .build();
        let input = tokens("покажи все организации");
        let first = format!("{:?}", parse(&input, &template).map(|p| p.phrase));
        let second = format!("{:?}", parse(&input, &template).map(|p| p.phrase));
        assert_eq!(first, second);
    }
}
