use slovo_protocol::PartOfSpeech;

use crate::paradigm::{SchemeDef, StemRule};

pub static SCHEMES: &[SchemeDef] = &[
    MASCULINE_HARD,
    MASCULINE_VELAR,
    FEMININE_IJA,
    FEMININE_HARD,
    NEUTER_O,
    ADJECTIVE_HARD,
    PRONOUN_VES,
    PRONOUN_ETOT,
];

/// "минск", "отдел", "клиент".
const MASCULINE_HARD: SchemeDef = SchemeDef {
    name: "noun.masc.hard",
    pos: PartOfSpeech::Noun,
    stem_rule: StemRule::Single,
    rows: &[
        ("nom sg", ""),
        ("gen sg", "а"),
        ("dat sg", "у"),
        ("acc sg inan", ""),
        ("acc sg anim", "а"),
        ("ins sg", "ом"),
        ("loc sg", "е"),
        ("nom pl", "ы"),
        ("gen pl", "ов"),
        ("dat pl", "ам"),
        ("acc pl inan", "ы"),
        ("acc pl anim", "ов"),
        ("ins pl", "ами"),
        ("loc pl", "ах"),
    ],
};

/// Stems ending in к/г/х take "и" in the plural: "сотрудники", "банки".
const MASCULINE_VELAR: SchemeDef = SchemeDef {
    name: "noun.masc.velar",
    pos: PartOfSpeech::Noun,
    stem_rule: StemRule::Single,
    rows: &[
        ("nom sg", ""),
        ("gen sg", "а"),
        ("dat sg", "у"),
        ("acc sg inan", ""),
        ("acc sg anim", "а"),
        ("ins sg", "ом"),
        ("loc sg", "е"),
        ("nom pl", "и"),
        ("gen pl", "ов"),
        ("dat pl", "ам"),
        ("acc pl inan", "и"),
        ("acc pl anim", "ов"),
        ("ins pl", "ами"),
        ("loc pl", "ах"),
    ],
};

/// "организация": the stem keeps its final "и".
const FEMININE_IJA: SchemeDef = SchemeDef {
    name: "noun.fem.ija",
    pos: PartOfSpeech::Noun,
    stem_rule: StemRule::Single,
    rows: &[
        ("nom sg", "я"),
        ("gen sg", "и"),
        ("dat sg", "и"),
        ("acc sg", "ю"),
        ("ins sg", "ей"),
        ("loc sg", "и"),
        ("nom pl", "и"),
        ("gen pl", "й"),
        ("dat pl", "ям"),
        ("acc pl inan", "и"),
        ("acc pl anim", "й"),
        ("ins pl", "ями"),
        ("loc pl", "ях"),
    ],
};

const FEMININE_HARD: SchemeDef = SchemeDef {
    name: "noun.fem.hard",
    pos: PartOfSpeech::Noun,
    stem_rule: StemRule::Single,
    rows: &[
        ("nom sg", "а"),
        ("gen sg", "ы"),
        ("dat sg", "е"),
        ("acc sg", "у"),
        ("ins sg", "ой"),
        ("loc sg", "е"),
        ("nom pl", "ы"),
        ("gen pl", ""),
        ("dat pl", "ам"),
        ("acc pl inan", "ы"),
        ("acc pl anim", ""),
        ("ins pl", "ами"),
        ("loc pl", "ах"),
    ],
};

const NEUTER_O: SchemeDef = SchemeDef {
    name: "noun.neut.o",
    pos: PartOfSpeech::Noun,
    stem_rule: StemRule::Single,
    rows: &[
        ("nom sg", "о"),
        ("gen sg", "а"),
        ("dat sg", "у"),
        ("acc sg", "о"),
        ("ins sg", "ом"),
        ("loc sg", "е"),
        ("nom pl", "а"),
        ("gen pl", ""),
        ("dat pl", "ам"),
        ("acc pl inan", "а"),
        ("acc pl anim", ""),
        ("ins pl", "ами"),
        ("loc pl", "ах"),
    ],
};

const ADJECTIVE_HARD: SchemeDef = SchemeDef {
    name: "adj.hard",
    pos: PartOfSpeech::Adjective,
    stem_rule: StemRule::Single,
    rows: &[
        ("nom sg m", "ый"),
        ("gen sg m", "ого"),
        ("dat sg m", "ому"),
        ("acc sg m inan", "ый"),
        ("acc sg m anim", "ого"),
        ("ins sg m", "ым"),
        ("loc sg m", "ом"),
        ("nom sg f", "ая"),
        ("gen sg f", "ой"),
        ("dat sg f", "ой"),
        ("acc sg f", "ую"),
        ("ins sg f", "ой"),
        ("loc sg f", "ой"),
        ("nom sg n", "ое"),
        ("gen sg n", "ого"),
        ("dat sg n", "ому"),
        ("acc sg n", "ое"),
        ("ins sg n", "ым"),
        ("loc sg n", "ом"),
        ("nom pl", "ые"),
        ("gen pl", "ых"),
        ("dat pl", "ым"),
        ("acc pl inan", "ые"),
        ("acc pl anim", "ых"),
        ("ins pl", "ыми"),
        ("loc pl", "ых"),
        ("short sg m", ""),
        ("short sg f", "а"),
        ("short sg n", "о"),
        ("short pl", "ы"),
    ],
};

/// "весь/всего": primary stem in the masculine nominative only.
const PRONOUN_VES: SchemeDef = SchemeDef {
    name: "pron.ves",
    pos: PartOfSpeech::Pronoun,
    stem_rule: StemRule::MasculineDirect,
    rows: &[
        ("nom sg m", ""),
        ("gen sg m", "его"),
        ("dat sg m", "ему"),
        ("acc sg m inan", ""),
        ("acc sg m anim", "его"),
        ("ins sg m", "ем"),
        ("loc sg m", "ём"),
        ("nom sg f", "я"),
        ("gen sg f", "ей"),
        ("dat sg f", "ей"),
        ("acc sg f", "ю"),
        ("ins sg f", "ей"),
        ("loc sg f", "ей"),
        ("nom sg n", "ё"),
        ("gen sg n", "его"),
        ("dat sg n", "ему"),
        ("acc sg n", "ё"),
        ("ins sg n", "ем"),
        ("loc sg n", "ём"),
        ("nom pl", "е"),
        ("gen pl", "ех"),
        ("dat pl", "ем"),
        ("acc pl inan", "е"),
        ("acc pl anim", "ех"),
        ("ins pl", "еми"),
        ("loc pl", "ех"),
    ],
};

const PRONOUN_ETOT: SchemeDef = SchemeDef {
    name: "pron.etot",
    pos: PartOfSpeech::Pronoun,
    stem_rule: StemRule::MasculineDirect,
    rows: &[
        ("nom sg m", ""),
        ("gen sg m", "ого"),
        ("dat sg m", "ому"),
        ("acc sg m inan", ""),
        ("acc sg m anim", "ого"),
        ("ins sg m", "им"),
        ("loc sg m", "ом"),
        ("nom sg f", "а"),
        ("gen sg f", "ой"),
        ("dat sg f", "ой"),
        ("acc sg f", "у"),
        ("ins sg f", "ой"),
        ("loc sg f", "ой"),
        ("nom sg n", "о"),
        ("gen sg n", "ого"),
        ("dat sg n", "ому"),
        ("acc sg n", "о"),
        ("ins sg n", "им"),
        ("loc sg n", "ом"),
        ("nom pl", "и"),
        ("gen pl", "их"),
        ("dat pl", "им"),
        ("acc pl inan", "и"),
        ("acc pl anim", "их"),
        ("ins pl", "ими"),
        ("loc pl", "их"),
    ],
};
