pub mod analyzer;
pub mod error;
pub mod generator;
pub mod lexicon;
pub mod paradigm;
pub mod tables;
pub mod word;

use std::sync::LazyLock;

use slovo_protocol::{Lexeme, Signature};

pub use analyzer::Analyzer;
pub use error::{MorphError, TableError};
pub use generator::Generator;
pub use lexicon::{LexemeDef, Lexicon};
pub use paradigm::{Paradigm, ParadigmEntry, ParadigmTables, SchemeDef, StemRule};
pub use word::Word;

static GLOBAL: LazyLock<Morphology> = LazyLock::new(|| match Morphology::build() {
    Ok(morphology) => morphology,
    Err(err) => panic!("built-in morphology tables are invalid: {err}"),
});

/// Lexicon, paradigm tables and analyzer indexes, assembled once and
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Morphology {
    lexicon: Lexicon,
    tables: ParadigmTables,
    analyzer: Analyzer,
}

impl Morphology {
    /// Builds the engine from the built-in dictionary.
    pub fn build() -> Result<Self, TableError> {
        Self::from_parts(tables::schemes(), tables::lexemes())
    }

    pub fn from_parts<'a>(
        schemes: impl IntoIterator<Item = &'a SchemeDef>,
        lexemes: impl IntoIterator<Item = &'a LexemeDef>,
    ) -> Result<Self, TableError> {
        let tables = ParadigmTables::build(schemes)?;
        let lexicon = Lexicon::build(lexemes, &tables)?;
        let analyzer = Analyzer::build(&lexicon, &tables)?;
        Ok(Self {
            lexicon,
            tables,
            analyzer,
        })
    }

    /// Process-wide instance over the built-in dictionary.
    ///
    /// # Panics
    ///
    /// On first use, if the built-in tables fail validation.
    pub fn global() -> &'static Morphology {
        &GLOBAL
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn tables(&self) -> &ParadigmTables {
        &self.tables
    }

    pub fn generator(&self) -> Generator<'_> {
        Generator::new(&self.lexicon, &self.tables)
    }

    pub fn paradigm_of(&self, lexeme: &Lexeme) -> Option<&Paradigm> {
        self.tables.get(lexeme.scheme)
    }

    pub fn generate(&self, lexeme: &Lexeme, signature: &Signature) -> Result<String, MorphError> {
        self.generator().generate(lexeme, signature)
    }

    /// Every analysis of `surface`. Unknown words yield an empty list.
    pub fn analyze(&self, surface: &str) -> Vec<Word<'_>> {
        self.analyzer
            .candidates(surface, &self.lexicon, &self.tables)
            .into_iter()
            .filter_map(|(id, idx)| {
                let lexeme = self.lexicon.get(id)?;
                let entry = self.paradigm_of(lexeme)?.entry(idx)?;
                let signature = generator::reported(lexeme, &entry.signature);
                Some(Word::new(lexeme, signature, surface))
            })
            .collect()
    }

    /// The full paradigm of a lexeme, in scheme order.
    pub fn forms<'m>(&'m self, lexeme: &'m Lexeme) -> Vec<Word<'m>> {
        let Some(paradigm) = self.paradigm_of(lexeme) else {
            return Vec::new();
        };
        let generator = self.generator();
        paradigm
            .entries
            .iter()
            .filter(|entry| generator::admits(lexeme, &entry.signature))
            .filter_map(|entry| {
                let signature = generator::reported(lexeme, &entry.signature);
                let surface = generator.generate(lexeme, &signature).ok()?;
                Some(Word::new(lexeme, signature, surface))
            })
            .collect()
    }
}
