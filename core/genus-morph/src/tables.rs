//! Static inflection data for Russian gender agreement.
//!
//! Everything here is read-only for the lifetime of the process.

use genus_protocol::{Case, Gender};

use crate::letters::LetterClass;

/// Past-tense verbs whose feminine form is not "masculine + (л)а".
pub const IRREGULAR_PAST: &[(&str, &str)] = &[
    ("лез", "лезла"),
    ("нёс", "несла"),
    ("вёз", "везла"),
    ("вёл", "вела"),
    ("мёл", "мела"),
    ("грёб", "гребла"),
    ("рос", "росла"),
    ("пёк", "пекла"),
    ("шёл", "шла"),
    ("ушёл", "ушла"),
    ("нашёл", "нашла"),
    ("прошёл", "прошла"),
    ("пришёл", "пришла"),
    ("вышел", "вышла"),
];

pub fn irregular_past(form: &str, masculine: bool) -> Option<&'static str> {
    IRREGULAR_PAST.iter().find_map(|&(masc, fem)| {
        if masculine && form == fem {
            Some(masc)
        } else if !masculine && form == masc {
            Some(fem)
        } else {
            None
        }
    })
}

/// Declension of "сам" (self) in the singular.
pub fn self_declension(case: Case, masculine: bool) -> Option<&'static str> {
    let form = match (case, masculine) {
        (Case::Nominative, true) => "сам",
        (Case::Accusative, true) => "самого",
        (Case::Genitive, true) => "самого",
        (Case::Dative, true) => "самому",
        (Case::Instrumental, true) => "самим",
        (Case::Locative, true) => "самом",
        (Case::Nominative, false) => "сама",
        (Case::Accusative, false) => "саму",
        (Case::Genitive, false) => "самой",
        (Case::Dative, false) => "самой",
        (Case::Instrumental, false) => "самой",
        (Case::Locative, false) => "самой",
        _ => return None,
    };
    Some(form)
}

/// Suffix swap whose result depends on the letter before the suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionalSubstitution {
    pub old_suffix: &'static str,
    pub conditioning: LetterClass,
    /// Used when the preceding letter is in `conditioning`.
    pub conditioned_suffix: &'static str,
    pub default_suffix: &'static str,
}

impl ConditionalSubstitution {
    /// Applies the swap to a form ending in `old_suffix`.
    pub fn apply(&self, form: &str) -> Option<String> {
        let stem = form.strip_suffix(self.old_suffix)?;
        let preceding = stem.chars().next_back()?;
        let suffix = if self.conditioning.matches(preceding) {
            self.conditioned_suffix
        } else {
            self.default_suffix
        };
        Some(format!("{}{}", stem, suffix))
    }
}

const fn conditional(
    old_suffix: &'static str,
    conditioned_suffix: &'static str,
    default_suffix: &'static str,
    conditioning: LetterClass,
) -> ConditionalSubstitution {
    ConditionalSubstitution { old_suffix, conditioning, conditioned_suffix, default_suffix }
}

/// Conditioned adjective substitution for a (case, current gender) pair.
pub fn conditional_adjective_substitution(case: Case, gender: Gender) -> Option<ConditionalSubstitution> {
    use Case::*;
    use Gender::*;

    let substitution = match (case, gender) {
        (Nominative, Masculine) => conditional("ий", "ая", "яя", LetterClass::SIBILANT_OR_VELAR),
        (Nominative, Feminine) => conditional("ая", "ий", "ый", LetterClass::SIBILANT_OR_VELAR),
        (Accusative, Masculine) => conditional("его", "ую", "юю", LetterClass::SIBILANT),
        (Accusative, Feminine) => conditional("ую", "его", "ого", LetterClass::SIBILANT),
        (Instrumental, Masculine) => conditional("им", "ой", "ей", LetterClass::VELAR),
        (Instrumental, Feminine) => conditional("ой", "им", "ым", LetterClass::VELAR),
        _ => return None,
    };
    Some(substitution)
}

/// Unconditioned adjective suffix swaps for a (case, current gender) pair,
/// tried in order. Feminine lists include the archaic "-ою"/"-ею" endings.
pub fn adjective_substitutions(case: Case, gender: Gender) -> &'static [(&'static str, &'static str)] {
    use Case::*;
    use Gender::*;

    match (case, gender) {
        (Nominative, Masculine) => &[("ый", "ая"), ("ой", "ая")],
        (Nominative, Feminine) => &[("яя", "ий")],
        (Accusative, Masculine) => &[("ого", "ую")],
        (Accusative, Feminine) => &[("юю", "его")],
        (Genitive, Masculine) => &[("ого", "ой"), ("его", "ей")],
        (Genitive, Feminine) => &[("ой", "ого"), ("ей", "его"), ("ою", "ого"), ("ею", "его")],
        (Dative, Masculine) => &[("ому", "ой"), ("ему", "ей")],
        (Dative, Feminine) => &[("ой", "ому"), ("ей", "ему"), ("ою", "ому"), ("ею", "ему")],
        (Instrumental, Masculine) => &[("ым", "ой")],
        (Instrumental, Feminine) => &[("ой", "ым"), ("ей", "им"), ("ою", "ым"), ("ею", "им")],
        (Locative, Masculine) => &[("ом", "ой"), ("ем", "ей")],
        (Locative, Feminine) => &[("ой", "ом"), ("ей", "ем"), ("ою", "ом"), ("ею", "ем")],
        _ => &[],
    }
}

/// Singular oblique-case endings of one noun declension pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclensionSuffixes {
    pub accusative: &'static str,
    pub genitive: &'static str,
    pub dative: &'static str,
    pub instrumental: &'static str,
    pub locative: &'static str,
}

impl DeclensionSuffixes {
    pub fn get(&self, case: Case) -> Option<&'static str> {
        match case {
            Case::Accusative => Some(self.accusative),
            Case::Genitive => Some(self.genitive),
            Case::Dative => Some(self.dative),
            Case::Instrumental => Some(self.instrumental),
            Case::Locative => Some(self.locative),
            _ => None,
        }
    }
}

/// First declension, hard stems in "-а" (комната).
pub const FIRST_DECLENSION_HARD: DeclensionSuffixes = DeclensionSuffixes {
    accusative: "у",
    genitive: "ы",
    dative: "е",
    instrumental: "ой",
    locative: "е",
};

/// First declension, soft stems in "-я" (няня).
pub const FIRST_DECLENSION_SOFT: DeclensionSuffixes = DeclensionSuffixes {
    accusative: "ю",
    genitive: "и",
    dative: "е",
    instrumental: "ей",
    locative: "е",
};

/// Second declension, hard stems (брат). Accusative assumes an animate noun.
pub const SECOND_DECLENSION_HARD: DeclensionSuffixes = DeclensionSuffixes {
    accusative: "а",
    genitive: "а",
    dative: "у",
    instrumental: "ом",
    locative: "е",
};

/// Second declension, stems in "-ь" or "-й" (учитель, герой).
pub const SECOND_DECLENSION_SOFT: DeclensionSuffixes = DeclensionSuffixes {
    accusative: "я",
    genitive: "я",
    dative: "ю",
    instrumental: "ем",
    locative: "е",
};

/// Third declension, feminine stems in "-ь" (боль).
pub const THIRD_DECLENSION: DeclensionSuffixes = DeclensionSuffixes {
    accusative: "ь",
    genitive: "и",
    dative: "и",
    instrumental: "ью",
    locative: "и",
};

/// Built-in masculine/feminine noun lemma pairs.
///
/// Deliberately partial: nouns missing here pass through unchanged.
pub const NOUN_PAIRS: &[(&str, &str)] = &[
    ("учитель", "учительница"),
    ("писатель", "писательница"),
    ("читатель", "читательница"),
    ("преподаватель", "преподавательница"),
    ("руководитель", "руководительница"),
    ("победитель", "победительница"),
    ("житель", "жительница"),
    ("покупатель", "покупательница"),
    ("посетитель", "посетительница"),
    ("любитель", "любительница"),
    ("ученик", "ученица"),
    ("художник", "художница"),
    ("переводчик", "переводчица"),
    ("школьник", "школьница"),
    ("работник", "работница"),
    ("сотрудник", "сотрудница"),
    ("помощник", "помощница"),
    ("собеседник", "собеседница"),
    ("родственник", "родственница"),
    ("отличник", "отличница"),
    ("волшебник", "волшебница"),
    ("австриец", "австрийка"),
    ("американец", "американка"),
    ("иностранец", "иностранка"),
    ("немец", "немка"),
    ("болгарин", "болгарка"),
    ("гражданин", "гражданка"),
    ("египтянин", "египтянка"),
    ("англичанин", "англичанка"),
    ("гитарист", "гитаристка"),
    ("журналист", "журналистка"),
    ("пианист", "пианистка"),
    ("артист", "артистка"),
    ("студент", "студентка"),
    ("аспирант", "аспирантка"),
    ("клиент", "клиентка"),
    ("пациент", "пациентка"),
    ("спортсмен", "спортсменка"),
    ("официант", "официантка"),
    ("пенсионер", "пенсионерка"),
    ("сосед", "соседка"),
    ("москвич", "москвичка"),
    ("француз", "француженка"),
    ("хозяин", "хозяйка"),
    ("певец", "певица"),
    ("продавец", "продавщица"),
    ("друг", "подруга"),
    ("внук", "внучка"),
    ("супруг", "супруга"),
    ("кузен", "кузина"),
    ("поэт", "поэтесса"),
    ("принц", "принцесса"),
    ("актёр", "актриса"),
    ("король", "королева"),
    ("царь", "царица"),
    ("герой", "героиня"),
];
