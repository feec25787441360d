use crate::lexicon::LexemeDef;

const fn word(
    lemma: &'static str,
    tags: &'static str,
    scheme: &'static str,
    stems: &'static [&'static str],
) -> LexemeDef {
    LexemeDef::word(lemma, tags, scheme, stems)
}

const fn num(
    lemma: &'static str,
    tags: &'static str,
    scheme: &'static str,
    stems: &'static [&'static str],
    value: u64,
) -> LexemeDef {
    LexemeDef::numeral(lemma, tags, scheme, stems, value)
}

const fn invariable(lemma: &'static str, tags: &'static str) -> LexemeDef {
    LexemeDef::word(lemma, tags, "invariable", &[])
}

/// Declaration order is analysis order: homonyms are reported in the order
/// their lexemes appear here.
pub static LEXEMES: &[LexemeDef] = &[
    // Numerals. Components of compound numerals must be declared first.
    num("один", "num quant simple units", "num.odin", &["один", "одн"], 1),
    num("два", "num quant simple units", "num.dva", &["дв"], 2),
    num("три", "num quant simple units", "num.tri", &["тр"], 3),
    num("четыре", "num quant simple units", "num.chetyre", &["четыр"], 4),
    num("пять", "num quant simple units", "num.pyat", &["пят"], 5),
    num("шесть", "num quant simple units", "num.pyat", &["шест"], 6),
    num("семь", "num quant simple units", "num.pyat", &["сем"], 7),
    num("десять", "num quant simple tens", "num.pyat", &["десят"], 10),
    num("двадцать", "num quant simple tens", "num.pyat", &["двадцат"], 20),
    num("десят", "num quant simple tens bound", "num.tens", &["десят"], 10),
    LexemeDef::compound("пятьдесят", "num quant complex tens", "num.tens", 50, &["пять", "десят"]),
    LexemeDef::compound("шестьдесят", "num quant complex tens", "num.tens", 60, &["шесть", "десят"]),
    LexemeDef::compound("семьдесят", "num quant complex tens", "num.tens", 70, &["семь", "десят"]),
    num("девяносто", "num quant simple tens", "num.sto", &["девяносто", "девяност"], 90),
    num("сто", "num quant simple hundreds", "num.sto", &["сто", "ст"], 100),
    num("двое", "num coll simple units", "num.dvoe", &["дво"], 2),
    num("трое", "num coll simple units", "num.dvoe", &["тро"], 3),
    LexemeDef::compound("двадцать пять", "num quant composite tens", "num.pyat", 25, &["двадцать", "пять"]),
    // Pronouns.
    word("весь", "pron", "pron.ves", &["весь", "вс"]),
    word("этот", "pron", "pron.etot", &["этот", "эт"]),
    // Nouns.
    word("организация", "noun f inan", "noun.fem.ija", &["организаци"]),
    word("компания", "noun f inan", "noun.fem.ija", &["компани"]),
    word("операция", "noun f inan", "noun.fem.ija", &["операци"]),
    word("группа", "noun f inan", "noun.fem.hard", &["групп"]),
    word("страна", "noun f inan", "noun.fem.hard", &["стран"]),
    word("минск", "noun m inan", "noun.masc.hard", &["минск"]),
    word("пинск", "noun m inan", "noun.masc.hard", &["пинск"]),
    word("брест", "noun m inan", "noun.masc.hard", &["брест"]),
    word("отдел", "noun m inan", "noun.masc.hard", &["отдел"]),
    word("документ", "noun m inan", "noun.masc.hard", &["документ"]),
    word("договор", "noun m inan", "noun.masc.hard", &["договор"]),
    word("файл", "noun m inan", "noun.masc.hard", &["файл"]),
    word("клиент", "noun m anim", "noun.masc.hard", &["клиент"]),
    word("сотрудник", "noun m anim", "noun.masc.velar", &["сотрудник"]),
    word("банк", "noun m inan", "noun.masc.velar", &["банк"]),
    word("место", "noun n inan", "noun.neut.o", &["мест"]),
    word("дело", "noun n inan", "noun.neut.o", &["дел"]),
    // Adjectives.
    word("новый", "adj", "adj.hard", &["нов"]),
    word("старый", "adj", "adj.hard", &["стар"]),
    word("закрытый", "adj", "adj.hard", &["закрыт"]),
    // Verbs.
    word("показать", "verb perf tran", "verb.a-zh", &["показа", "покаж"]),
    word("сказать", "verb perf tran", "verb.a-zh", &["сказа", "скаж"]),
    word("показывать", "verb impf tran", "verb.aj", &["показыва"]),
    word("удалить", "verb perf tran", "verb.second", &["удали", "удал"]),
    word("удалять", "verb impf tran", "verb.aj", &["удаля"]),
    word("изменить", "verb perf tran", "verb.second", &["измени", "измен"]),
    word("сохранить", "verb perf tran", "verb.second", &["сохрани", "сохран"]),
    // Prepositions list the cases they govern.
    invariable("из", "prep gen"),
    invariable("в", "prep acc loc"),
    invariable("на", "prep acc loc"),
    invariable("по", "prep dat"),
    invariable("с", "prep gen ins"),
    invariable("для", "prep gen"),
    invariable("от", "prep gen"),
    invariable("до", "prep gen"),
    invariable("без", "prep gen"),
    invariable("о", "prep loc"),
    invariable("и", "conj"),
    invariable("или", "conj"),
    invariable("а", "conj"),
    invariable("но", "conj"),
    invariable("не", "part"),
    invariable("только", "part"),
    invariable("сейчас", "adv"),
];
