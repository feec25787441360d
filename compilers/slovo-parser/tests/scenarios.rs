use proptest::prelude::*;
use slovo_morph::Morphology;
use slovo_parser::{
    find, CommandGrammar, ErrorKind, Lexer, Parser, PhraseTemplate, Token, WordPattern,
};
use slovo_protocol::{Mood, PartOfSpeech};

fn tokens(text: &str) -> Vec<Token<'static>> {
    Lexer::new(Morphology::global()).tokenize(text)
}

#[test]
fn test_show_all_organizations() {
    let grammar = CommandGrammar::new();
    let input = tokens("покажи все организации");
    let parsed = Parser::default().parse(&input, &grammar.show_command).unwrap();

    assert!(parsed.rest.is_empty());
    assert_eq!(parsed.phrase.head_text(), Some("покажи"));
    let object = parsed.phrase.complement("object").unwrap();
    assert_eq!(object.head_text(), Some("организации"));
    assert_eq!(find(&parsed.phrase, "C/object/S/H").unwrap().text(), Some("все"));
}

#[test]
fn test_show_with_coordinated_places() {
    let grammar = CommandGrammar::new();
    let input = tokens("покажи все организации из минска или пинска");
    let parsed = Parser::default().parse(&input, &grammar.show_command).unwrap();

    assert!(parsed.rest.is_empty());
    assert_eq!(find(&parsed.phrase, "H").unwrap().text(), Some("покажи"));
    assert_eq!(find(&parsed.phrase, "C/object/S/H").unwrap().text(), Some("все"));
    assert_eq!(find(&parsed.phrase, "C/object/H").unwrap().text(), Some("организации"));
    assert_eq!(find(&parsed.phrase, "C/object/C/place-from/H").unwrap().text(), Some("из"));

    let place = find(&parsed.phrase, "C/object/C/place-from/C/genitive-np/H")
        .unwrap()
        .terminal()
        .unwrap();
    assert_eq!(place.text(), "минска");
    let siblings: Vec<_> = place.token().uniform.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(siblings, ["или", "пинска"]);

    let genitive = find(&parsed.phrase, "C/object/C/place-from/C/genitive-np")
        .unwrap()
        .phrase()
        .unwrap();
    let resolved: Vec<_> = genitive.head_terminals.iter().map(|t| t.text()).collect();
    assert_eq!(resolved, ["минска", "или", "пинска"]);
    assert_eq!(
        genitive.head_terminals[2].word().unwrap().lemma(),
        "пинск"
    );
}

#[test]
fn test_plain_template_under_consumes() {
    let grammar = CommandGrammar::new();
    let input = tokens("покажи все организации из минска или пинска");
    let parsed = Parser::default()
        .parse(&input, &grammar.show_command_plain)
        .unwrap();

    assert!(!parsed.rest.is_empty());
    let rest: Vec<_> = parsed
        .rest
        .iter()
        .filter(|t| !t.is_blank())
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(rest, ["из", "минска", "или", "пинска"]);
    assert_eq!(
        find(&parsed.phrase, "C/object-plain/H").unwrap().text(),
        Some("организации")
    );
}

#[test]
fn test_parse_best_picks_the_full_match() {
    let grammar = CommandGrammar::new();
    let input = tokens("покажи все организации из минска или пинска");
    let parsed = Parser::default()
        .parse_best(&input, grammar.commands().map(|t| &**t))
        .unwrap();
    assert_eq!(parsed.phrase.template_id, "show-command");
    assert!(parsed.is_complete());
}

#[test]
fn test_missing_object_reports_trace() {
    let grammar = CommandGrammar::new();
    let input = tokens("удали минска");
    let failure = Parser::default()
        .parse(&input, &grammar.delete_command)
        .unwrap_err();

    let frames: Vec<_> = failure
        .stack
        .iter()
        .map(|frame| (frame.template_id.as_str(), frame.kind))
        .collect();
    assert_eq!(
        frames,
        [
            ("object", ErrorKind::InvalidPhraseHead),
            ("delete-command", ErrorKind::MissingComplement),
        ]
    );
    assert_eq!(failure.rest[0].text, "минска");
}

fn imperative(image: &str) -> WordPattern {
    WordPattern::new(PartOfSpeech::Verb).image(image).mood(Mood::Imperative)
}

proptest! {
    // With one alternative a prefix of the other, the declared order alone
    // decides which one commits.
    #[test]
    fn test_prefix_alternatives_follow_declared_order(
        noun in prop::sample::select(vec!["организации", "документы", "файл", "компанию", "минска"]),
        short_first in any::<bool>(),
    ) {
        let grammar = CommandGrammar::new();
        let short = PhraseTemplate::new("verb", "verb").head_word(imperative("покажи")).build();
        let long = PhraseTemplate::new("verb-object", "verb with object")
            .head_word(imperative("покажи"))
            .complement(slovo_parser::Slot::required(&grammar.object))
            .build();
        let ordered = if short_first { [&short, &long] } else { [&long, &short] };
        let outer = PhraseTemplate::new("outer", "outer")
            .head_template(ordered[0])
            .head_template(ordered[1])
            .build();

        let input = tokens(&format!("покажи {noun}"));
        let parser = Parser::default();
        let expected = ordered
            .iter()
            .find_map(|alternative| parser.parse(&input, alternative).ok())
            .map(|parsed| (parsed.phrase.template_id, parsed.rest.len()));

        let parsed = parser.parse(&input, &outer).unwrap();
        let head = parsed.phrase.head.as_ref().unwrap();
        prop_assert_eq!(Some((head.template_id.clone(), parsed.rest.len())), expected);

        let again = parser.parse(&input, &outer).unwrap();
        prop_assert_eq!(format!("{:?}", again.phrase), format!("{:?}", parsed.phrase));
    }
}
