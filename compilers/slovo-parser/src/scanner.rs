use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{anychar, char},
    combinator::map,
    sequence::delimited,
    IResult,
};

use crate::token::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawToken<'a> {
    Word(&'a str),
    Number(&'a str),
    Identifier(&'a str),
    /// Quote contents, without the quotes.
    Quoted(&'a str),
    Punct(char),
    Whitespace,
    LineBreak,
}

fn is_inline_space(c: char) -> bool {
    c.is_whitespace() && c != '\n' && c != '\r'
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn quoted(input: &str) -> IResult<&str, RawToken<'_>> {
    alt((
        map(
            delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
            RawToken::Quoted,
        ),
        map(
            delimited(char('«'), take_while(|c: char| c != '»'), char('»')),
            RawToken::Quoted,
        ),
    ))(input)
}

/// Letters make a word, digits alone a number, and anything mixing digits or
/// underscores into letters an identifier.
fn alphanumeric(input: &str) -> IResult<&str, RawToken<'_>> {
    map(take_while1(is_word_char), |run: &str| {
        if run.chars().all(|c| c.is_ascii_digit()) {
            RawToken::Number(run)
        } else if run.chars().any(|c| c.is_numeric() || c == '_') {
            RawToken::Identifier(run)
        } else {
            RawToken::Word(run)
        }
    })(input)
}

fn token(input: &str) -> IResult<&str, RawToken<'_>> {
    alt((
        quoted,
        map(alt((tag("\r\n"), tag("\n"), tag("\r"))), |_| RawToken::LineBreak),
        map(take_while1(is_inline_space), |_| RawToken::Whitespace),
        alphanumeric,
        map(anychar, RawToken::Punct),
    ))(input)
}

/// Splits text into raw tokens with byte spans. Unlike a word tokenizer this
/// keeps whitespace and line breaks, since templates skip them explicitly.
pub fn scan_with_spans(original_input: &str) -> Vec<(Span, RawToken<'_>)> {
    let mut input = original_input;
    let mut result = Vec::new();

    while !input.is_empty() {
        match token(input) {
            Ok((next_input, token)) => {
                let len = input.len() - next_input.len();
                let start = original_input.len() - input.len();
                result.push((Span::new(start, start + len), token));
                input = next_input;
            }
            Err(_) => break,
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<RawToken<'_>> {
        scan_with_spans(input).into_iter().map(|(_, raw)| raw).collect()
    }

    #[test]
    fn test_words_and_punctuation() {
        assert_eq!(
            kinds("из минска, пинска."),
            vec![
                RawToken::Word("из"),
                RawToken::Whitespace,
                RawToken::Word("минска"),
                RawToken::Punct(','),
                RawToken::Whitespace,
                RawToken::Word("пинска"),
                RawToken::Punct('.'),
            ]
        );
    }

    #[test]
    fn test_numbers_identifiers_and_quotes() {
        assert_eq!(
            kinds("счёт AB_12 42 «Ромашка» \"Рога\""),
            vec![
                RawToken::Word("счёт"),
                RawToken::Whitespace,
                RawToken::Identifier("AB_12"),
                RawToken::Whitespace,
                RawToken::Number("42"),
                RawToken::Whitespace,
                RawToken::Quoted("Ромашка"),
                RawToken::Whitespace,
                RawToken::Quoted("Рога"),
            ]
        );
    }

    #[test]
    fn test_line_breaks_and_unterminated_quote() {
        assert_eq!(
            kinds("а\r\nб \"в"),
            vec![
                RawToken::Word("а"),
                RawToken::LineBreak,
                RawToken::Word("б"),
                RawToken::Whitespace,
                RawToken::Punct('"'),
                RawToken::Word("в"),
            ]
        );
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let input = "все «Альфа»";
        let spans: Vec<_> = scan_with_spans(input).into_iter().map(|(span, _)| span).collect();
        assert_eq!(&input[spans[0].start..spans[0].end], "все");
        assert_eq!(&input[spans[2].start..spans[2].end], "«Альфа»");
        assert_eq!(spans[2].end, input.len());
    }
}
