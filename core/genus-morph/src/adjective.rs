use genus_protocol::{AnnotatedToken, Case, PartOfSpeech};

use crate::letters::{char_from_end, drop_last_chars, is_consonant, last_char};
use crate::tables::{adjective_substitutions, conditional_adjective_substitution, self_declension};

/// Switches the gender of an adjective or participle whose lower-case,
/// non-reflexive form is `form`.
pub fn adjust_adjective(form: &str, token: &AnnotatedToken, masculine: bool) -> Option<String> {
    let case = token.features.case;

    if token.lemma == "сам" {
        return case.and_then(|case| self_declension(case, masculine)).map(str::to_string);
    }

    if token.features.is_short() {
        return adjust_short_adjective(form, &token.lemma, masculine);
    }

    adjust_long_adjective(form, token, case?, masculine)
}

/// Short (predicative) adjectives: готов/готова, короток/коротка, важен/важна.
///
/// The fleeting "о"/"е" between the last two consonants of the masculine
/// form is guessed from the final consonant, so some stems come out wrong
/// (больна -> болон).
fn adjust_short_adjective(form: &str, lemma: &str, masculine: bool) -> Option<String> {
    if masculine {
        let stem = form.strip_suffix('а')?;
        let last = last_char(stem)?;
        let needs_fleeting_vowel = char_from_end(stem, 1).is_some_and(is_consonant) && is_consonant(last);
        if !needs_fleeting_vowel {
            return Some(stem.to_string());
        }

        let fleeting = if last == 'к' || stem == "полн" || stem == "смешн" {
            Some('о')
        } else if last == 'н' {
            Some('е')
        } else {
            None
        };
        return Some(match fleeting {
            Some(vowel) => format!("{}{}{}", drop_last_chars(stem, 1), vowel, last),
            None => stem.to_string(),
        });
    }

    let last = last_char(form)?;
    let penultimate = char_from_end(form, 1)?;
    // The vowel is fleeting unless the lemma has it in the same place.
    let fleeting = matches!(penultimate, 'о' | 'е')
        && char_from_end(lemma, 3).is_some_and(|c| c != penultimate);

    let stem = if fleeting {
        format!("{}{}", drop_last_chars(form, 2), last)
    } else {
        form.to_string()
    };
    Some(stem + "а")
}

fn adjust_long_adjective(form: &str, token: &AnnotatedToken, case: Case, masculine: bool) -> Option<String> {
    // An adjective lemma is already the masculine nominative. A participle's
    // lemma is the infinitive, so it has to go through the suffix rules.
    let has_lemma = !token.lemma.is_empty();
    if has_lemma && token.pos == PartOfSpeech::Adjective && case == Case::Nominative && masculine {
        return Some(token.lemma.clone());
    }

    let gender = token.features.gender?;

    if let Some(substitution) = conditional_adjective_substitution(case, gender) {
        if let Some(result) = substitution.apply(form) {
            return Some(result);
        }
    }

    adjective_substitutions(case, gender)
        .iter()
        .find_map(|&(old, new)| form.strip_suffix(old).map(|stem| format!("{}{}", stem, new)))
}
