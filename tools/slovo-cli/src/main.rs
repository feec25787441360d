use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use slovo_morph::{Morphology, Word};
use slovo_parser::{CommandGrammar, Lexer, Phrase, Terminal, Token};
use slovo_protocol::{LexiconArchive, MorphFlags, NumeralInfo, Signature};

#[derive(Parser)]
#[command(author, version, about = "Russian morphology and command phrase parser")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every analysis of each word as JSON.
    Analyze {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// List the full paradigm of a lemma.
    Forms { lemma: String },
    /// Parse a command and print the phrase tree, or the error trace.
    Parse {
        #[arg(required = true)]
        sentence: Vec<String>,
        /// Match against this template only instead of every command.
        #[arg(short, long, value_name = "ID")]
        template: Option<String>,
    },
    /// Write the lexicon as an rkyv archive.
    Export {
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

#[derive(Serialize)]
struct Analysis<'a> {
    surface: &'a str,
    lemma: &'a str,
    code: String,
    signature: Signature,
    flags: MorphFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    numeral: Option<&'a NumeralInfo>,
}

impl<'a> From<&'a Word<'a>> for Analysis<'a> {
    fn from(word: &'a Word<'a>) -> Self {
        Self {
            surface: &word.surface,
            lemma: word.lemma(),
            code: word.short_code(),
            signature: word.signature,
            flags: word.flags(),
            numeral: word.numeral(),
        }
    }
}

fn terminal_json(terminal: &Terminal<'_>) -> Value {
    match terminal.word() {
        Some(word) => json!({
            "text": terminal.text(),
            "lemma": word.lemma(),
            "code": word.short_code(),
        }),
        None => json!({ "text": terminal.text() }),
    }
}

fn phrase_json(phrase: &Phrase<'_>) -> Value {
    let mut node = json!({ "template": phrase.template_id });
    if let Some(specifier) = &phrase.specifier {
        node["specifier"] = phrase_json(specifier);
    }
    match &phrase.head {
        Some(head) => node["head"] = phrase_json(head),
        None => {
            node["head"] = phrase
                .head_terminals
                .iter()
                .map(terminal_json)
                .collect::<Vec<_>>()
                .into()
        }
    }
    if !phrase.complements.is_empty() {
        node["complements"] = phrase.complements.iter().map(phrase_json).collect::<Vec<_>>().into();
    }
    if let Some(adjunct) = &phrase.adjunct {
        node["adjunct"] = phrase_json(adjunct);
    }
    node
}

fn rest_json(rest: &[Token<'_>]) -> Vec<String> {
    rest.iter()
        .filter(|token| !token.is_blank())
        .map(|token| token.text.clone())
        .collect()
}

fn analyze(morphology: &Morphology, words: &[String]) -> anyhow::Result<()> {
    let mut report = serde_json::Map::new();
    for word in words {
        let analyses = morphology.analyze(&word.to_lowercase());
        let analyses: Vec<_> = analyses.iter().map(Analysis::from).collect();
        report.insert(word.clone(), serde_json::to_value(analyses)?);
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn forms(morphology: &Morphology, lemma: &str) -> anyhow::Result<()> {
    let lexeme = morphology
        .lexicon()
        .find(lemma)
        .with_context(|| format!("unknown lemma `{lemma}`"))?;
    println!("{} ({})", lexeme.lemma, lexeme.part_of_speech());
    for form in morphology.forms(lexeme) {
        println!("  {:<24} {}", form.signature.to_string(), form.surface);
    }
    Ok(())
}

fn parse(morphology: &Morphology, sentence: &str, template: Option<&str>) -> anyhow::Result<()> {
    let grammar = CommandGrammar::new();
    let tokens = Lexer::new(morphology).tokenize(sentence);
    let parser = slovo_parser::Parser::default();

    let result = match template {
        Some(id) => {
            let template = grammar
                .get(id)
                .with_context(|| format!("unknown template `{id}`"))?;
            parser.parse(&tokens, template)
        }
        None => parser.parse_best(&tokens, grammar.commands().map(|t| &**t)),
    };

    match result {
        Ok(parsed) => {
            let report = json!({
                "complete": parsed.is_complete(),
                "terminals": parsed.phrase.terminal_count(),
                "rest": rest_json(parsed.rest),
                "phrase": phrase_json(&parsed.phrase),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Err(failure) => {
            let frames: Vec<_> = failure
                .stack
                .iter()
                .map(|frame| {
                    json!({
                        "template": frame.template_id,
                        "kind": frame.kind.to_string(),
                        "message": frame.message,
                    })
                })
                .collect();
            let report = json!({ "rest": rest_json(failure.rest), "errors": frames });
            println!("{}", serde_json::to_string_pretty(&report)?);
            bail!("`{sentence}` did not parse")
        }
    }
}

fn export(morphology: &Morphology, output: &Path) -> anyhow::Result<()> {
    let archive = morphology.lexicon().archive();
    println!(
        "Archiving {} lexemes (format version {})...",
        archive.lexemes.len(),
        archive.version
    );

    let bytes = rkyv::to_bytes::<_, 4096>(&archive)
        .map_err(|err| anyhow!("rkyv serialization failed: {err:?}"))?;
    rkyv::check_archived_root::<LexiconArchive>(&bytes)
        .map_err(|err| anyhow!("archive failed validation: {err}"))?;

    fs::write(output, &bytes).with_context(|| format!("writing {}", output.display()))?;
    println!("Wrote {} bytes to {}", bytes.len(), output.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let morphology = Morphology::build()?;

    match cli.command {
        Command::Analyze { words } => analyze(&morphology, &words),
        Command::Forms { lemma } => forms(&morphology, &lemma),
        Command::Parse { sentence, template } => parse(&morphology, &sentence.join(" "), template.as_deref()),
        Command::Export { output } => export(&morphology, &output),
    }
}
