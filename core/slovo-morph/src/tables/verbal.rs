use slovo_protocol::PartOfSpeech;

use crate::paradigm::{SchemeDef, StemRule};

pub static SCHEMES: &[SchemeDef] = &[FIRST_ALTERNATING, SECOND, FIRST_AJ];

/// "показать/покажу": first conjugation with a consonant alternation in the
/// non-past stem.
const FIRST_ALTERNATING: SchemeDef = SchemeDef {
    name: "verb.a-zh",
    pos: PartOfSpeech::Verb,
    stem_rule: StemRule::PresentAlternate,
    rows: &[
        ("inf", "ть"),
        ("ind past sg m", "л"),
        ("ind past sg f", "ла"),
        ("ind past sg n", "ло"),
        ("ind past pl", "ли"),
        ("ind pres 1p sg", "у"),
        ("ind pres 2p sg", "ешь"),
        ("ind pres 3p sg", "ет"),
        ("ind pres 1p pl", "ем"),
        ("ind pres 2p pl", "ете"),
        ("ind pres 3p pl", "ут"),
        ("imp 2p sg excl", "и"),
        ("imp 2p pl excl", "ите"),
        ("imp 1p pl incl", "емте"),
    ],
};

/// "удалить/удалю": second conjugation, the infinitive stem drops its "и".
const SECOND: SchemeDef = SchemeDef {
    name: "verb.second",
    pos: PartOfSpeech::Verb,
    stem_rule: StemRule::PresentAlternate,
    rows: &[
        ("inf", "ть"),
        ("ind past sg m", "л"),
        ("ind past sg f", "ла"),
        ("ind past sg n", "ло"),
        ("ind past pl", "ли"),
        ("ind pres 1p sg", "ю"),
        ("ind pres 2p sg", "ишь"),
        ("ind pres 3p sg", "ит"),
        ("ind pres 1p pl", "им"),
        ("ind pres 2p pl", "ите"),
        ("ind pres 3p pl", "ят"),
        ("imp 2p sg excl", "и"),
        ("imp 2p pl excl", "ите"),
        ("imp 1p pl incl", "имте"),
    ],
};

/// "показывать", "удалять": one stem throughout.
const FIRST_AJ: SchemeDef = SchemeDef {
    name: "verb.aj",
    pos: PartOfSpeech::Verb,
    stem_rule: StemRule::Single,
    rows: &[
        ("inf", "ть"),
        ("ind past sg m", "л"),
        ("ind past sg f", "ла"),
        ("ind past sg n", "ло"),
        ("ind past pl", "ли"),
        ("ind pres 1p sg", "ю"),
        ("ind pres 2p sg", "ешь"),
        ("ind pres 3p sg", "ет"),
        ("ind pres 1p pl", "ем"),
        ("ind pres 2p pl", "ете"),
        ("ind pres 3p pl", "ют"),
        ("imp 2p sg excl", "й"),
        ("imp 2p pl excl", "йте"),
    ],
};
