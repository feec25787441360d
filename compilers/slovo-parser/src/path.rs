//! Addressing inside a phrase tree.
//!
//! A path is a `/`-separated list of segments: `H` (head, last segment
//! only), `S` (specifier), `C/<template id>` (complement) and
//! `A/<template id>` (adjunct). For example `C/object/C/place-from/H`.

use core::fmt;
use core::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::char,
    combinator::{all_consuming, map, value},
    multi::separated_list1,
    sequence::preceded,
    IResult,
};
use thiserror::Error;

use crate::phrase::{Phrase, Terminal};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("empty path")]
    EmptyPath,
    #[error("invalid path `{path}`: {reason}")]
    InvalidPath { path: String, reason: &'static str },
    #[error("`{0}` not found")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Head,
    Specifier,
    Complement(String),
    Adjunct(String),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Head => f.write_str("H"),
            Segment::Specifier => f.write_str("S"),
            Segment::Complement(id) => write!(f, "C/{id}"),
            Segment::Adjunct(id) => write!(f, "A/{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhrasePath {
    segments: Vec<Segment>,
}

fn template_id(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')(input)
}

fn segment(input: &str) -> IResult<&str, Segment> {
    alt((
        map(preceded(tag("C/"), template_id), |id: &str| Segment::Complement(id.to_string())),
        map(preceded(tag("A/"), template_id), |id: &str| Segment::Adjunct(id.to_string())),
        value(Segment::Head, tag("H")),
        value(Segment::Specifier, tag("S")),
    ))(input)
}

impl FromStr for PhrasePath {
    type Err = PathError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let invalid = |reason| PathError::InvalidPath {
            path: path.to_string(),
            reason,
        };

        let (_, segments) = all_consuming(separated_list1(char('/'), segment))(trimmed)
            .map_err(|_| invalid("expected H, S, C/<id> or A/<id>"))?;

        if segments
            .iter()
            .rev()
            .skip(1)
            .any(|segment| *segment == Segment::Head)
        {
            return Err(invalid("H must be the last segment"));
        }

        Ok(Self { segments })
    }
}

impl fmt::Display for PhrasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// What a path points at.
#[derive(Debug, Clone, Copy)]
pub enum Found<'p, 'lx> {
    Terminal(&'p Terminal<'lx>),
    Phrase(&'p Phrase<'lx>),
}

impl<'p, 'lx> Found<'p, 'lx> {
    pub fn terminal(self) -> Option<&'p Terminal<'lx>> {
        match self {
            Found::Terminal(terminal) => Some(terminal),
            Found::Phrase(_) => None,
        }
    }

    pub fn phrase(self) -> Option<&'p Phrase<'lx>> {
        match self {
            Found::Phrase(phrase) => Some(phrase),
            Found::Terminal(_) => None,
        }
    }

    /// Head text of whatever was found.
    pub fn text(self) -> Option<&'p str> {
        match self {
            Found::Terminal(terminal) => Some(terminal.text()),
            Found::Phrase(phrase) => phrase.head_text(),
        }
    }
}

impl PhrasePath {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn find<'p, 'lx>(&self, phrase: &'p Phrase<'lx>) -> Result<Found<'p, 'lx>, PathError> {
        let mut current = phrase;
        for segment in &self.segments {
            current = match segment {
                Segment::Head => {
                    return match (&current.head, current.head_terminal()) {
                        (Some(nested), _) => Ok(Found::Phrase(nested)),
                        (None, Some(terminal)) => Ok(Found::Terminal(terminal)),
                        (None, None) => Err(PathError::NotFound(format!("head of {}", current.template_id))),
                    };
                }
                Segment::Specifier => current
                    .specifier
                    .as_deref()
                    .ok_or_else(|| PathError::NotFound(format!("specifier of {}", current.template_id)))?,
                Segment::Complement(id) => current
                    .complement(id)
                    .ok_or_else(|| PathError::NotFound(id.clone()))?,
                Segment::Adjunct(id) => current
                    .adjunct
                    .as_deref()
                    .filter(|adjunct| adjunct.template_id == *id)
                    .ok_or_else(|| PathError::NotFound(id.clone()))?,
            };
        }
        Ok(Found::Phrase(current))
    }
}

/// Parses `path` and resolves it against `phrase`.
pub fn find<'p, 'lx>(phrase: &'p Phrase<'lx>, path: &str) -> Result<Found<'p, 'lx>, PathError> {
    path.parse::<PhrasePath>()?.find(phrase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Span, Token, TokenKind};

    fn leaf(id: &str, text: &str) -> Phrase<'static> {
        Phrase {
            template_id: id.to_string(),
            specifier: None,
            head: None,
            head_terminals: vec![Terminal::Token(Token::new(Span::new(0, text.len()), text, TokenKind::Word))],
            complements: Vec::new(),
            adjunct: None,
        }
    }

    fn tree() -> Phrase<'static> {
        let mut place = leaf("place-from", "из");
        place.complements.push(leaf("genitive-np", "минска"));
        let mut object = leaf("object", "организации");
        object.specifier = Some(Box::new(leaf("quantifier", "все")));
        object.complements.push(place);
        let mut command = leaf("show-command", "покажи");
        command.complements.push(object);
        command.adjunct = Some(Box::new(leaf("time", "сейчас")));
        command
    }

    #[test]
    fn test_parse_segments() {
        let path: PhrasePath = "C/object/S/H".parse().unwrap();
        assert_eq!(
            path.segments(),
            [
                Segment::Complement("object".into()),
                Segment::Specifier,
                Segment::Head
            ]
        );
        assert_eq!(path.to_string(), "C/object/S/H");
    }

    #[test]
    fn test_malformed_paths() {
        assert_eq!("".parse::<PhrasePath>(), Err(PathError::EmptyPath));
        assert_eq!("  ".parse::<PhrasePath>(), Err(PathError::EmptyPath));
        for bad in ["H/C/object", "C/", "X", "C/object//H", "H/H"] {
            assert!(
                matches!(bad.parse::<PhrasePath>(), Err(PathError::InvalidPath { .. })),
                "{bad} should be invalid"
            );
        }
    }

    #[test]
    fn test_find_walks_complements() {
        let tree = tree();
        let found = find(&tree, "C/object/C/place-from/C/genitive-np/H").unwrap();
        assert_eq!(found.text(), Some("минска"));
        assert!(found.terminal().is_some());

        assert_eq!(find(&tree, "H").unwrap().text(), Some("покажи"));
        assert_eq!(find(&tree, "C/object/S/H").unwrap().text(), Some("все"));
        assert_eq!(find(&tree, "A/time/H").unwrap().text(), Some("сейчас"));
        let object = find(&tree, "C/object").unwrap().phrase().unwrap();
        assert_eq!(object.template_id, "object");
    }

    #[test]
    fn test_find_reports_missing_nodes() {
        let tree = tree();
        assert_eq!(
            find(&tree, "C/place-from").unwrap_err(),
            PathError::NotFound("place-from".into())
        );
        assert_eq!(find(&tree, "A/place").unwrap_err(), PathError::NotFound("place".into()));
        assert!(matches!(find(&tree, "S"), Err(PathError::NotFound(_))));
    }

    #[test]
    fn test_head_of_nested_template_is_a_phrase() {
        let mut outer = leaf("outer", "");
        outer.head_terminals.clear();
        outer.head = Some(Box::new(leaf("inner", "минска")));
        let found = find(&outer, "H").unwrap();
        assert_eq!(found.phrase().unwrap().template_id, "inner");
        assert_eq!(found.text(), Some("минска"));
    }
}
