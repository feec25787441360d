//! Declarative phrase templates.
//!
//! A template names a phrase shape: an optional specifier, a head made of
//! ordered alternatives, ordered complements and an optional adjunct.
//! Templates are shared through `Arc` and composed by reference; a child
//! template inherits every field it does not set from its parent.

use std::sync::Arc;

use slovo_protocol::{Case, Mood, Number, PartOfSpeech};

/// Constraints a word token must satisfy through at least one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPattern {
    pub pos: PartOfSpeech,
    /// Exact lowercase surface text.
    pub image: Option<String>,
    pub case: Option<Case>,
    pub number: Option<Number>,
    pub mood: Option<Mood>,
}

impl WordPattern {
    pub fn new(pos: PartOfSpeech) -> Self {
        Self {
            pos,
            image: None,
            case: None,
            number: None,
            mood: None,
        }
    }

    pub fn image(mut self, image: &str) -> Self {
        self.image = Some(image.to_lowercase());
        self
    }

    pub fn case(mut self, case: Case) -> Self {
        self.case = Some(case);
        self
    }

    pub fn number(mut self, number: Number) -> Self {
        self.number = Some(number);
        self
    }

    pub fn mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomicPattern {
    Word(WordPattern),
    Identifier,
    QuotedLiteral,
    Number,
}

#[derive(Debug, Clone)]
pub enum HeadAlternative {
    Atom(AtomicPattern),
    Template(Arc<PhraseTemplate>),
}

#[derive(Debug, Clone, Default)]
pub struct Head {
    pub alternatives: Vec<HeadAlternative>,
    /// Suppresses re-resolution of the head token's coordinated siblings.
    pub no_uniform: bool,
}

#[derive(Debug, Clone)]
pub struct Slot {
    pub template: Arc<PhraseTemplate>,
    pub optional: bool,
}

impl Slot {
    pub fn required(template: &Arc<PhraseTemplate>) -> Self {
        Self {
            template: Arc::clone(template),
            optional: false,
        }
    }

    pub fn optional(template: &Arc<PhraseTemplate>) -> Self {
        Self {
            template: Arc::clone(template),
            optional: true,
        }
    }
}

/// One grammar unit. Unset fields (`None`) are inherited from `parent`;
/// an explicitly empty complement list overrides the parent's.
#[derive(Debug, Clone, Default)]
pub struct PhraseTemplate {
    pub id: String,
    pub label: String,
    /// Sentences this template is expected to parse completely.
    pub examples: Vec<String>,
    pub parent: Option<Arc<PhraseTemplate>>,
    pub specifier: Option<Slot>,
    pub head: Option<Head>,
    pub complements: Option<Vec<Slot>>,
    pub adjunct: Option<Slot>,
}

/// A template with its inheritance chain resolved.
#[derive(Debug, Clone)]
pub struct MergedTemplate {
    pub id: String,
    pub label: String,
    pub specifier: Option<Slot>,
    pub head: Head,
    pub complements: Vec<Slot>,
    pub adjunct: Option<Slot>,
}

impl PhraseTemplate {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            ..Self::default()
        }
    }

    pub fn inherit(id: &str, label: &str, parent: &Arc<PhraseTemplate>) -> Self {
        Self {
            parent: Some(Arc::clone(parent)),
            ..Self::new(id, label)
        }
    }

    pub fn example(mut self, sentence: &str) -> Self {
        self.examples.push(sentence.to_string());
        self
    }

    pub fn specifier(mut self, slot: Slot) -> Self {
        self.specifier = Some(slot);
        self
    }

    pub fn head_word(self, pattern: WordPattern) -> Self {
        self.head_alternative(HeadAlternative::Atom(AtomicPattern::Word(pattern)))
    }

    pub fn head_atom(self, pattern: AtomicPattern) -> Self {
        self.head_alternative(HeadAlternative::Atom(pattern))
    }

    pub fn head_template(self, template: &Arc<PhraseTemplate>) -> Self {
        self.head_alternative(HeadAlternative::Template(Arc::clone(template)))
    }

    fn head_alternative(mut self, alternative: HeadAlternative) -> Self {
        self.head
            .get_or_insert_with(Head::default)
            .alternatives
            .push(alternative);
        self
    }

    pub fn no_uniform(mut self) -> Self {
        self.head.get_or_insert_with(Head::default).no_uniform = true;
        self
    }

    pub fn complement(mut self, slot: Slot) -> Self {
        self.complements.get_or_insert_with(Vec::new).push(slot);
        self
    }

    /// Declares that this template has no complements, even if its parent does.
    pub fn without_complements(mut self) -> Self {
        self.complements = Some(Vec::new());
        self
    }

    pub fn adjunct(mut self, slot: Slot) -> Self {
        self.adjunct = Some(slot);
        self
    }

    pub fn build(self) -> Arc<PhraseTemplate> {
        Arc::new(self)
    }

    /// Resolves the inheritance chain. Each field is taken from the nearest
    /// template that sets it; nothing is combined.
    pub fn merge(&self) -> MergedTemplate {
        let inherited = self.parent.as_ref().map(|parent| parent.merge());
        let (specifier, head, complements, adjunct) = match inherited {
            Some(base) => (
                self.specifier.clone().or(base.specifier),
                self.head.clone().unwrap_or(base.head),
                self.complements.clone().unwrap_or(base.complements),
                self.adjunct.clone().or(base.adjunct),
            ),
            None => (
                self.specifier.clone(),
                self.head.clone().unwrap_or_default(),
                self.complements.clone().unwrap_or_default(),
                self.adjunct.clone(),
            ),
        };

        MergedTemplate {
            id: self.id.clone(),
            label: self.label.clone(),
            specifier,
            head,
            complements,
            adjunct,
        }
    }
}
