//! Stock command grammar for list and delete requests.

use std::sync::Arc;

use slovo_protocol::{Case, Mood, PartOfSpeech};

use crate::template::{AtomicPattern, PhraseTemplate, Slot, WordPattern};

#[derive(Debug, Clone)]
pub struct CommandGrammar {
    pub quantifier: Arc<PhraseTemplate>,
    pub genitive_np: Arc<PhraseTemplate>,
    pub place_from: Arc<PhraseTemplate>,
    pub name: Arc<PhraseTemplate>,
    pub code: Arc<PhraseTemplate>,
    pub time: Arc<PhraseTemplate>,
    pub object: Arc<PhraseTemplate>,
    pub object_plain: Arc<PhraseTemplate>,
    pub show_command: Arc<PhraseTemplate>,
    pub show_command_plain: Arc<PhraseTemplate>,
    pub delete_command: Arc<PhraseTemplate>,
}

fn imperative(image: &str) -> WordPattern {
    WordPattern::new(PartOfSpeech::Verb)
        .image(image)
        .mood(Mood::Imperative)
}

impl CommandGrammar {
    pub fn new() -> Self {
        let quantifier = PhraseTemplate::new("quantifier", "quantifier")
            .example("все")
            .example("эти")
            .head_word(WordPattern::new(PartOfSpeech::Pronoun).image("все"))
            .head_word(WordPattern::new(PartOfSpeech::Pronoun).image("эти"))
            .build();

        let genitive_np = PhraseTemplate::new("genitive-np", "noun in the genitive")
            .example("минска")
            .example("минска или пинска")
            .head_word(WordPattern::new(PartOfSpeech::Noun).case(Case::Genitive))
            .build();

        let place_from = PhraseTemplate::new("place-from", "place of origin")
            .example("из минска")
            .example("из минска, пинска и бреста")
            .head_word(WordPattern::new(PartOfSpeech::Preposition).image("из"))
            .complement(Slot::required(&genitive_np))
            .build();

        let name = PhraseTemplate::new("name", "quoted name")
            .example("«Альфа»")
            .example("\"Бета\"")
            .head_atom(AtomicPattern::QuotedLiteral)
            .build();

        let code = PhraseTemplate::new("code", "identifier code")
            .example("AB_12")
            .head_atom(AtomicPattern::Identifier)
            .head_atom(AtomicPattern::Number)
            .build();

        let time = PhraseTemplate::new("time", "time")
            .example("сейчас")
            .head_word(WordPattern::new(PartOfSpeech::Adverb).image("сейчас"))
            .no_uniform()
            .build();

        let object = PhraseTemplate::new("object", "object")
            .example("все организации")
            .example("компанию «Альфа» из минска")
            .example("договор AB_12")
            .specifier(Slot::optional(&quantifier))
            .head_word(WordPattern::new(PartOfSpeech::Noun).case(Case::Accusative))
            .complement(Slot::optional(&name))
            .complement(Slot::optional(&code))
            .complement(Slot::optional(&place_from))
            .build();

        let object_plain = PhraseTemplate::inherit("object-plain", "object", &object)
            .example("эти документы")
            .example("файл «отчет»")
            .without_complements()
            .complement(Slot::optional(&name))
            .complement(Slot::optional(&code))
            .build();

        let show_command = PhraseTemplate::new("show-command", "show command")
            .example("покажи все организации")
            .example("покажи все организации из минска или пинска")
            .example("Покажи договор AB_12 сейчас")
            .head_word(imperative("покажи"))
            .complement(Slot::required(&object))
            .adjunct(Slot::optional(&time))
            .build();

        let show_command_plain = PhraseTemplate::inherit("show-command-plain", "show command", &show_command)
            .example("покажи все организации")
            .example("покажи файл «отчет» сейчас")
            .without_complements()
            .complement(Slot::required(&object_plain))
            .build();

        let delete_command = PhraseTemplate::new("delete-command", "delete command")
            .example("удали эти документы")
            .example("удали договор AB_12")
            .head_word(imperative("удали"))
            .complement(Slot::required(&object))
            .build();

        Self {
            quantifier,
            genitive_np,
            place_from,
            name,
            code,
            time,
            object,
            object_plain,
            show_command,
            show_command_plain,
            delete_command,
        }
    }

    /// Every template, leaves first.
    pub fn templates(&self) -> [&Arc<PhraseTemplate>; 11] {
        [
            &self.quantifier,
            &self.genitive_np,
            &self.place_from,
            &self.name,
            &self.code,
            &self.time,
            &self.object,
            &self.object_plain,
            &self.show_command,
            &self.show_command_plain,
            &self.delete_command,
        ]
    }

    /// Templates a whole sentence is matched against, in priority order.
    pub fn commands(&self) -> [&Arc<PhraseTemplate>; 3] {
        [&self.show_command, &self.delete_command, &self.show_command_plain]
    }

    pub fn get(&self, id: &str) -> Option<&Arc<PhraseTemplate>> {
        self.templates().into_iter().find(|template| template.id == id)
    }
}

impl Default for CommandGrammar {
    fn default() -> Self {
        Self::new()
    }
}
