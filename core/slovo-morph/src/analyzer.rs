//! Reverse lookup from surface forms to (lexeme, scheme entry) pairs.

use std::collections::{BTreeSet, HashMap};

use slovo_protocol::{LexemeId, NumeralStructure, SchemeId};

use crate::error::TableError;
use crate::generator::{admits, reported, Generator};
use crate::lexicon::Lexicon;
use crate::paradigm::ParadigmTables;

/// One analysis candidate: a lexeme and the index of the scheme entry that
/// produces the surface form.
pub type Candidate = (LexemeId, usize);

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    suffixes: HashMap<String, Vec<(SchemeId, usize)>>,
    stems: HashMap<(SchemeId, String), Vec<LexemeId>>,
    /// Every form of every complex numeral, built up front since they have
    /// no stems of their own.
    fused: HashMap<String, Vec<Candidate>>,
}

impl Analyzer {
    pub fn build(lexicon: &Lexicon, tables: &ParadigmTables) -> Result<Self, TableError> {
        let generator = Generator::new(lexicon, tables);
        let mut analyzer = Analyzer::default();

        for paradigm in tables.iter() {
            for (idx, entry) in paradigm.entries.iter().enumerate() {
                analyzer
                    .suffixes
                    .entry(entry.suffix.clone())
                    .or_default()
                    .push((paradigm.id, idx));
            }
        }

        for lexeme in lexicon.iter() {
            if lexeme.is_compound() {
                let paradigm = tables
                    .get(lexeme.scheme)
                    .ok_or_else(|| TableError::UnknownScheme {
                        lemma: lexeme.lemma.clone(),
                        scheme: format!("{:?}", lexeme.scheme),
                    })?;
                for (idx, entry) in paradigm.entries.iter().enumerate() {
                    let signature = reported(lexeme, &entry.signature);
                    let form = generator.generate(lexeme, &signature).map_err(|source| {
                        TableError::Compound {
                            lemma: lexeme.lemma.clone(),
                            signature,
                            source,
                        }
                    })?;
                    let structure = lexeme.numeral().map(|info| info.structure);
                    if structure == Some(NumeralStructure::Complex) {
                        analyzer.fused.entry(form).or_default().push((lexeme.id, idx));
                    }
                }
                continue;
            }
            if lexeme.bound {
                continue;
            }
            for stem in lexeme.stems.iter() {
                let ids = analyzer
                    .stems
                    .entry((lexeme.scheme, stem.to_string()))
                    .or_default();
                if !ids.contains(&lexeme.id) {
                    ids.push(lexeme.id);
                }
            }
        }

        tracing::debug!(
            suffixes = analyzer.suffixes.len(),
            stems = analyzer.stems.len(),
            fused = analyzer.fused.len(),
            "analyzer indexes built"
        );
        Ok(analyzer)
    }

    /// Every candidate producing `surface`, ordered by lexeme declaration and
    /// then by scheme entry.
    pub fn candidates(
        &self,
        surface: &str,
        lexicon: &Lexicon,
        tables: &ParadigmTables,
    ) -> BTreeSet<Candidate> {
        let generator = Generator::new(lexicon, tables);
        let mut found = BTreeSet::new();

        let splits = surface
            .char_indices()
            .map(|(at, _)| at)
            .chain(std::iter::once(surface.len()));
        for at in splits {
            let (stem, suffix) = surface.split_at(at);
            let Some(entries) = self.suffixes.get(suffix) else {
                continue;
            };
            for &(scheme, idx) in entries {
                let Some(ids) = self.stems.get(&(scheme, stem.to_string())) else {
                    continue;
                };
                let Some(paradigm) = tables.get(scheme) else {
                    continue;
                };
                let Some(entry) = paradigm.entry(idx) else {
                    continue;
                };
                for id in ids {
                    let Some(lexeme) = lexicon.get(*id) else {
                        continue;
                    };
                    if !admits(lexeme, &entry.signature) {
                        continue;
                    }
                    let realized = generator.realize(lexeme, paradigm, idx);
                    if realized.is_ok_and(|form| form == surface) {
                        found.insert((*id, idx));
                    }
                }
            }
        }

        if let Some(fused) = self.fused.get(surface) {
            found.extend(fused.iter().copied());
        }

        tracing::trace!(surface, candidates = found.len(), "analyzed");
        found
    }
}
