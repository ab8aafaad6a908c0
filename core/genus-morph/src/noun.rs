use genus_protocol::Case;

use crate::letters::{char_from_end, drop_last_chars, is_vowel, last_char, LetterClass};
use crate::tables::{
    FIRST_DECLENSION_HARD, FIRST_DECLENSION_SOFT, SECOND_DECLENSION_HARD, SECOND_DECLENSION_SOFT,
    THIRD_DECLENSION,
};

/// Declines a singular animate noun `lemma` into `case`.
///
/// `masculine` tells which gender the lemma has. A missing or unsupported
/// case yields the lemma itself. Stress-dependent endings (врачом, свечой)
/// are not modelled: sibilant stems always take the unstressed ending.
pub fn decline_noun(lemma: &str, case: Option<Case>, masculine: bool) -> String {
    if case == Some(Case::Nominative) {
        return lemma.to_string();
    }
    let Some(last) = last_char(lemma) else {
        return String::new();
    };

    let mut old_suffix_len = 0;
    let new_suffix: Option<&str>;

    if last == 'а' || last == 'я' || (!masculine && last != 'ь') {
        let stem_last = if is_vowel(last) {
            old_suffix_len = 1;
            char_from_end(lemma, 1).unwrap_or(last)
        } else {
            last
        };

        new_suffix = if LetterClass::NOUN_SIBILANT.matches(stem_last) && case == Some(Case::Instrumental) {
            Some("ей")
        } else if (lemma.ends_with("ия") && matches!(case, Some(Case::Dative | Case::Locative)))
            || (LetterClass::SIBILANT_OR_VELAR.matches(stem_last) && case == Some(Case::Genitive))
        {
            Some("и")
        } else if last == 'я' {
            case.and_then(|c| FIRST_DECLENSION_SOFT.get(c))
        } else {
            case.and_then(|c| FIRST_DECLENSION_HARD.get(c))
        };
    } else if masculine {
        let mut special = None;
        if lemma.ends_with("ий") {
            old_suffix_len = 1;
            match case {
                Some(Case::Locative) => special = Some("и"),
                Some(Case::Accusative) => return lemma.to_string(),
                _ => {}
            }
        } else if LetterClass::NOUN_SIBILANT.matches(last) && case == Some(Case::Instrumental) {
            special = Some("ем");
        }

        new_suffix = special.or_else(|| {
            if LetterClass::SOFT_INDICATING.matches(last) {
                old_suffix_len = 1;
                case.and_then(|c| SECOND_DECLENSION_SOFT.get(c))
            } else {
                case.and_then(|c| SECOND_DECLENSION_HARD.get(c))
            }
        });
    } else {
        old_suffix_len = 1;
        new_suffix = case.and_then(|c| THIRD_DECLENSION.get(c));
    }

    match new_suffix {
        Some(suffix) => format!("{}{}", drop_last_chars(lemma, old_suffix_len), suffix),
        None => lemma.to_string(),
    }
}
