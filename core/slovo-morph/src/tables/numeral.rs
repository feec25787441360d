use slovo_protocol::PartOfSpeech;

use crate::paradigm::{SchemeDef, StemRule};

pub static SCHEMES: &[SchemeDef] = &[
    ODIN, DVA, TRI, CHETYRE, PYAT, TENS, HUNDRED, COLLECTIVE,
];

/// "один": singular forms agree in gender, the plural does not.
const ODIN: SchemeDef = SchemeDef {
    name: "num.odin",
    pos: PartOfSpeech::Numeral,
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
        ("acc sg f inan", "у"),
        ("acc sg f anim", "у"),
        ("ins sg f", "ой"),
        ("loc sg f", "ой"),
        ("nom sg n", "о"),
        ("gen sg n", "ого"),
        ("dat sg n", "ому"),
        ("acc sg n inan", "о"),
        ("acc sg n anim", "о"),
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

/// "два/две": every cell is marked for gender.
const DVA: SchemeDef = SchemeDef {
    name: "num.dva",
    pos: PartOfSpeech::Numeral,
    stem_rule: StemRule::Single,
    rows: &[
        ("nom m", "а"),
        ("nom n", "а"),
        ("nom f", "е"),
        ("gen m", "ух"),
        ("gen f", "ух"),
        ("gen n", "ух"),
        ("dat m", "ум"),
        ("dat f", "ум"),
        ("dat n", "ум"),
        ("acc m inan", "а"),
        ("acc n inan", "а"),
        ("acc f inan", "е"),
        ("acc m anim", "ух"),
        ("acc f anim", "ух"),
        ("acc n anim", "ух"),
        ("ins m", "умя"),
        ("ins f", "умя"),
        ("ins n", "умя"),
        ("loc m", "ух"),
        ("loc f", "ух"),
        ("loc n", "ух"),
    ],
};

const TRI: SchemeDef = SchemeDef {
    name: "num.tri",
    pos: PartOfSpeech::Numeral,
    stem_rule: StemRule::Single,
    rows: &[
        ("nom", "и"),
        ("gen", "ёх"),
        ("dat", "ём"),
        ("acc inan", "и"),
        ("acc anim", "ёх"),
        ("ins", "емя"),
        ("loc", "ёх"),
    ],
};

const CHETYRE: SchemeDef = SchemeDef {
    name: "num.chetyre",
    pos: PartOfSpeech::Numeral,
    stem_rule: StemRule::Single,
    rows: &[
        ("nom", "е"),
        ("gen", "ёх"),
        ("dat", "ём"),
        ("acc inan", "е"),
        ("acc anim", "ёх"),
        ("ins", "ьмя"),
        ("loc", "ёх"),
    ],
};

/// "пять" through "двадцать": soft-sign numerals with no animacy split.
const PYAT: SchemeDef = SchemeDef {
    name: "num.pyat",
    pos: PartOfSpeech::Numeral,
    stem_rule: StemRule::Single,
    rows: &[
        ("nom", "ь"),
        ("gen", "и"),
        ("dat", "и"),
        ("acc", "ь"),
        ("ins", "ью"),
        ("loc", "и"),
    ],
};

/// The bound tens morpheme of "пятьдесят", "пятидесяти".
const TENS: SchemeDef = SchemeDef {
    name: "num.tens",
    pos: PartOfSpeech::Numeral,
    stem_rule: StemRule::Single,
    rows: &[
        ("nom", ""),
        ("gen", "и"),
        ("dat", "и"),
        ("acc", ""),
        ("ins", "ью"),
        ("loc", "и"),
    ],
};

/// "сто/ста", "девяносто/девяноста".
const HUNDRED: SchemeDef = SchemeDef {
    name: "num.sto",
    pos: PartOfSpeech::Numeral,
    stem_rule: StemRule::DirectCases,
    rows: &[
        ("nom", ""),
        ("gen", "а"),
        ("dat", "а"),
        ("acc", ""),
        ("ins", "а"),
        ("loc", "а"),
    ],
};

/// "двое", "трое".
const COLLECTIVE: SchemeDef = SchemeDef {
    name: "num.dvoe",
    pos: PartOfSpeech::Numeral,
    stem_rule: StemRule::Single,
    rows: &[
        ("nom", "е"),
        ("gen", "их"),
        ("dat", "им"),
        ("acc inan", "е"),
        ("acc anim", "их"),
        ("ins", "ими"),
        ("loc", "их"),
    ],
};
