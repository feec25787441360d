//! Tokenizer, phrase templates and the template-driven phrase parser.
//!
//! ```text
//! text --Lexer--> [Token] --Parser + PhraseTemplate--> Phrase --path::find--> node
//! ```

pub mod grammar;
pub mod lexer;
pub mod path;
pub mod phrase;
pub mod scanner;
pub mod syntax;
pub mod template;
pub mod token;

pub use grammar::CommandGrammar;
pub use lexer::Lexer;
pub use path::{find, Found, PathError, PhrasePath, Segment};
pub use phrase::{Phrase, Terminal};
pub use syntax::{parse, ErrorFrame, ErrorKind, ParseFailure, ParseResult, Parsed, Parser, ParserOptions};
pub use template::{AtomicPattern, Head, HeadAlternative, MergedTemplate, PhraseTemplate, Slot, WordPattern};
pub use token::{Span, Token, TokenKind};
