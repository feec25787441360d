//! Word-form generation: stem selection plus suffix concatenation.

use slovo_protocol::{
    Aspect, Lexeme, LexemeKind, NumeralInfo, NumeralStructure, Sign, Signature, Tense,
};

use crate::error::MorphError;
use crate::lexicon::Lexicon;
use crate::paradigm::{Paradigm, ParadigmTables, StemChoice};

#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    lexicon: &'a Lexicon,
    tables: &'a ParadigmTables,
}

impl<'a> Generator<'a> {
    pub fn new(lexicon: &'a Lexicon, tables: &'a ParadigmTables) -> Self {
        Self { lexicon, tables }
    }

    pub fn paradigm(&self, lexeme: &Lexeme) -> Result<&'a Paradigm, MorphError> {
        self.tables
            .get(lexeme.scheme)
            .ok_or(MorphError::UnknownScheme(lexeme.scheme))
    }

    /// Produces the surface form of `lexeme` for `signature`.
    ///
    /// The signature must pick exactly one cell of the lexeme's scheme once
    /// the lexeme's own features are filled in.
    pub fn generate(&self, lexeme: &Lexeme, signature: &Signature) -> Result<String, MorphError> {
        if !signature.fits(lexeme.part_of_speech()) {
            return Err(MorphError::SignatureMismatch {
                lemma: lexeme.lemma.clone(),
                expected: lexeme.part_of_speech(),
                signature: *signature,
            });
        }

        if let Some(info) = lexeme.numeral().filter(|_| lexeme.is_compound()) {
            return self.compose(info, signature);
        }

        let paradigm = self.paradigm(lexeme)?;
        let request = inherent(lexeme, signature);
        match paradigm.lookup(&request).as_slice() {
            [] => Err(MorphError::NoMatchingEnding {
                lemma: lexeme.lemma.clone(),
                scheme: paradigm.name.clone(),
                signature: request,
            }),
            [idx] => self.realize(lexeme, paradigm, *idx),
            candidates => Err(MorphError::AmbiguousSignature {
                lemma: lexeme.lemma.clone(),
                signature: request,
                candidates: candidates.len(),
            }),
        }
    }

    /// Builds the form of one scheme entry without any signature matching.
    pub fn realize(
        &self,
        lexeme: &Lexeme,
        paradigm: &Paradigm,
        idx: usize,
    ) -> Result<String, MorphError> {
        let entry = paradigm.entry(idx).ok_or_else(|| MorphError::NoMatchingEnding {
            lemma: lexeme.lemma.clone(),
            scheme: paradigm.name.clone(),
            signature: Signature::Invariable,
        })?;
        let stem = match paradigm.stem_rule.choose(&entry.signature) {
            StemChoice::Primary => lexeme.stems.primary.as_str(),
            StemChoice::Alternate => {
                lexeme
                    .stems
                    .alternate(0)
                    .ok_or_else(|| MorphError::MissingStem {
                        lemma: lexeme.lemma.clone(),
                    })?
            }
        };
        Ok(format!("{stem}{}", entry.suffix))
    }

    /// Complex numerals fuse their components' forms, composite ones
    /// separate them with a space.
    fn compose(&self, info: &NumeralInfo, signature: &Signature) -> Result<String, MorphError> {
        let parts = info
            .components
            .iter()
            .map(|id| {
                let component = self.lexicon.get(*id).ok_or(MorphError::UnknownLexeme(*id))?;
                self.generate(component, signature)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let separator = match info.structure {
            NumeralStructure::Composite => " ",
            _ => "",
        };
        Ok(parts.join(separator))
    }
}

/// Fills the lexeme's own features into a request: a noun's animacy, and the
/// future of a perfective verb, which its scheme stores as present.
pub fn inherent(lexeme: &Lexeme, signature: &Signature) -> Signature {
    match (*signature, &lexeme.kind) {
        (Signature::Noun(mut noun), LexemeKind::Noun(info)) => {
            noun.animacy = noun.animacy.or(Sign::Is(info.animacy));
            Signature::Noun(noun)
        }
        (Signature::Verb(mut verb), LexemeKind::Verb(info))
            if info.aspect == Aspect::Perfective && verb.tense == Sign::Is(Tense::Future) =>
        {
            verb.tense = Sign::Is(Tense::Present);
            Signature::Verb(verb)
        }
        _ => *signature,
    }
}

/// The signature an analysis reports for a scheme entry: perfective verbs
/// have no present, so their non-past cells read as future.
pub fn reported(lexeme: &Lexeme, entry: &Signature) -> Signature {
    match (*entry, lexeme.verb()) {
        (Signature::Verb(mut verb), Some(info))
            if info.aspect == Aspect::Perfective && verb.tense == Sign::Is(Tense::Present) =>
        {
            verb.tense = Sign::Is(Tense::Future);
            Signature::Verb(verb)
        }
        _ => *entry,
    }
}

/// Whether a lexeme takes the given scheme entry: nouns only take the
/// accusative variant of their own animacy.
pub fn admits(lexeme: &Lexeme, entry: &Signature) -> bool {
    match (entry, lexeme.noun()) {
        (Signature::Noun(noun), Some(info)) => noun.animacy.compatible(Sign::Is(info.animacy)),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables;
    use slovo_protocol::PartOfSpeech;

    struct Fixture {
        tables: ParadigmTables,
        lexicon: Lexicon,
    }

    impl Fixture {
        fn stock() -> Self {
            let tables = ParadigmTables::build(tables::schemes()).unwrap();
            let lexicon = Lexicon::build(tables::lexemes(), &tables).unwrap();
            Self { tables, lexicon }
        }

        fn generate(&self, lemma: &str, pos: PartOfSpeech, tags: &str) -> Result<String, MorphError> {
            let lexeme = self.lexicon.find(lemma).unwrap();
            let signature = Signature::parse(pos, tags).unwrap();
            Generator::new(&self.lexicon, &self.tables).generate(lexeme, &signature)
        }
    }

    #[test]
    fn test_noun_forms() {
        let fx = Fixture::stock();
        assert_eq!(fx.generate("минск", PartOfSpeech::Noun, "gen sg").unwrap(), "минска");
        assert_eq!(fx.generate("организация", PartOfSpeech::Noun, "gen pl").unwrap(), "организаций");
        // The noun's own animacy picks the accusative.
        assert_eq!(fx.generate("клиент", PartOfSpeech::Noun, "acc sg").unwrap(), "клиента");
        assert_eq!(fx.generate("документ", PartOfSpeech::Noun, "acc pl").unwrap(), "документы");
        assert_eq!(fx.generate("сотрудник", PartOfSpeech::Noun, "nom pl").unwrap(), "сотрудники");
    }

    #[test]
    fn test_masculine_direct_stems() {
        let fx = Fixture::stock();
        let num = PartOfSpeech::Numeral;
        assert_eq!(fx.generate("один", num, "nom sg m").unwrap(), "один");
        assert_eq!(fx.generate("один", num, "acc sg m inan").unwrap(), "один");
        assert_eq!(fx.generate("один", num, "acc sg m anim").unwrap(), "одного");
        assert_eq!(fx.generate("один", num, "nom sg f").unwrap(), "одна");
        assert_eq!(fx.generate("весь", PartOfSpeech::Pronoun, "gen sg m").unwrap(), "всего");
        assert_eq!(fx.generate("весь", PartOfSpeech::Pronoun, "nom pl").unwrap(), "все");
        assert_eq!(fx.generate("этот", PartOfSpeech::Pronoun, "nom sg m").unwrap(), "этот");
        assert_eq!(fx.generate("этот", PartOfSpeech::Pronoun, "nom pl").unwrap(), "эти");
    }

    #[test]
    fn test_direct_cases_stems() {
        let fx = Fixture::stock();
        assert_eq!(fx.generate("сто", PartOfSpeech::Numeral, "acc").unwrap(), "сто");
        assert_eq!(fx.generate("сто", PartOfSpeech::Numeral, "gen").unwrap(), "ста");
        assert_eq!(fx.generate("девяносто", PartOfSpeech::Numeral, "ins").unwrap(), "девяноста");
    }

    #[test]
    fn test_verb_stem_alternation_and_perfective_future() {
        let fx = Fixture::stock();
        let verb = PartOfSpeech::Verb;
        assert_eq!(fx.generate("показать", verb, "inf").unwrap(), "показать");
        assert_eq!(fx.generate("показать", verb, "ind past sg f").unwrap(), "показала");
        assert_eq!(fx.generate("показать", verb, "ind fut 1p sg").unwrap(), "покажу");
        assert_eq!(fx.generate("показать", verb, "imp 2p sg excl").unwrap(), "покажи");
        assert_eq!(fx.generate("удалить", verb, "imp 2p pl excl").unwrap(), "удалите");
        // Imperfective verbs have no synthetic future.
        assert!(matches!(
            fx.generate("показывать", verb, "ind fut 1p sg"),
            Err(MorphError::NoMatchingEnding { .. })
        ));
    }

    #[test]
    fn test_compound_numerals() {
        let fx = Fixture::stock();
        let num = PartOfSpeech::Numeral;
        assert_eq!(fx.generate("пятьдесят", num, "nom").unwrap(), "пятьдесят");
        assert_eq!(fx.generate("пятьдесят", num, "gen").unwrap(), "пятидесяти");
        assert_eq!(fx.generate("семьдесят", num, "ins").unwrap(), "семьюдесятью");
        assert_eq!(fx.generate("двадцать пять", num, "dat").unwrap(), "двадцати пяти");
    }

    #[test]
    fn test_accusative_without_animacy_is_ambiguous() {
        let fx = Fixture::stock();
        let err = fx.generate("новый", PartOfSpeech::Adjective, "acc sg m").unwrap_err();
        assert!(matches!(err, MorphError::AmbiguousSignature { candidates: 2, .. }), "{err}");
    }

    #[test]
    fn test_signature_mismatch() {
        let fx = Fixture::stock();
        let err = fx.generate("минск", PartOfSpeech::Adjective, "nom sg m").unwrap_err();
        assert!(matches!(err, MorphError::SignatureMismatch { expected: PartOfSpeech::Noun, .. }));
    }

    #[test]
    fn test_missing_cell() {
        let fx = Fixture::stock();
        let err = fx.generate("показывать", PartOfSpeech::Verb, "imp 1p pl incl").unwrap_err();
        assert!(matches!(err, MorphError::NoMatchingEnding { .. }));
    }
}
