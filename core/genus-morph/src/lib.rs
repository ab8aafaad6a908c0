pub mod adjective;
pub mod casing;
pub mod letters;
pub mod lexicon;
pub mod noun;
pub mod tables;
pub mod verb;

use genus_protocol::{AnnotatedToken, Gender, NounLexicon, PartOfSpeech};
use log::trace;

pub use casing::Casing;
pub use lexicon::NounPairs;
pub use noun::decline_noun;

/// Computes opposite-gender surface forms for single tokens.
///
/// Holds the noun-pair lexicon; everything else it needs is static. Safe to
/// share between threads once built.
#[derive(Debug, Clone)]
pub struct Transformer {
    nouns: NounPairs,
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new(NounPairs::builtin())
    }
}

impl Transformer {
    pub fn new(nouns: NounPairs) -> Self {
        Self { nouns }
    }

    /// Built-in pairs followed by the pairs of a compiled lexicon.
    pub fn with_lexicon(lexicon: &NounLexicon) -> Self {
        let mut nouns = NounPairs::builtin();
        nouns.extend(lexicon);
        Self::new(nouns)
    }

    /// Returns the form of `token` agreeing with the requested gender, or
    /// `None` if the token needs no change or no rule covers it.
    pub fn transform(&self, token: &AnnotatedToken, masculine: bool) -> Option<String> {
        let current = token.features.gender?;
        let wanted = if masculine { Gender::Masculine } else { Gender::Feminine };
        if current == wanted {
            return None;
        }

        let lower = token.text.to_lowercase();
        let is_verb = token.pos == PartOfSpeech::Verb;
        let is_participle = token.features.is_participle();

        let (form, reflexive) = match verb::split_reflexive(&lower) {
            Some(stem) if is_verb => (stem, true),
            _ => (lower.as_str(), false),
        };

        let adjusted = match token.pos {
            PartOfSpeech::Adjective => adjective::adjust_adjective(form, token, masculine),
            PartOfSpeech::Verb if is_participle => adjective::adjust_adjective(form, token, masculine),
            // Neuter past forms (сделало) have no suffix rule.
            PartOfSpeech::Verb | PartOfSpeech::Auxiliary if token.features.is_past() && current != Gender::Neuter => {
                verb::adjust_past_tense(form, masculine)
            }
            PartOfSpeech::Noun => self.adjust_noun(token, masculine),
            _ => None,
        };

        let Some(mut result) = adjusted else {
            trace!("no rule for '{}' ({} {})", token.text, token.pos, token.features);
            return None;
        };

        if reflexive {
            let hard = is_participle || letters::last_char(&result).is_some_and(letters::is_consonant);
            result.push_str(if hard { "ся" } else { "сь" });
        }

        if result == lower {
            return None;
        }
        Some(Casing::of(&token.text).apply(&result))
    }

    fn adjust_noun(&self, token: &AnnotatedToken, masculine: bool) -> Option<String> {
        let partner = self.nouns.partner(&token.lemma, masculine)?;
        Some(decline_noun(partner, token.features.case, masculine))
    }
}
