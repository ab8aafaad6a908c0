//! Chooses which tokens of a parsed sentence take the speaker's or the
//! addressee's gender.

#[cfg(test)]
mod fixtures;
pub mod selection;
pub mod systems;

use genus_protocol::{ParsedSentence, TargetGender};
use log::debug;

pub use selection::Selection;
pub use systems::anchors::{add_anchor, Role};
pub use systems::propagation::propagate;

/// Builds the selection for one sentence.
///
/// Tokens are scanned in order. Whenever a token contributes an anchor, the
/// selection gathered so far is expanded by one hop along agreeing relations
/// and the new tokens merged in. Roles set to [`TargetGender::Unchanged`]
/// contribute no anchors.
pub fn select(sentence: &ParsedSentence, speaker: TargetGender, addressee: TargetGender) -> Selection {
    let roles: Vec<(Role, bool)> = [(Role::Speaker, speaker), (Role::Addressee, addressee)]
        .into_iter()
        .filter_map(|(role, target)| target.as_masculine().map(|masculine| (role, masculine)))
        .collect();

    let mut selection = Selection::new();
    if roles.is_empty() {
        return selection;
    }

    for token in sentence.tokens() {
        let mut anchored = false;
        for &(role, masculine) in &roles {
            if let Some(index) = add_anchor(token, role, masculine, &mut selection) {
                debug!("{:?} anchor at token {} ('{}')", role, index, token.text);
                anchored = true;
            }
        }
        if !anchored {
            continue;
        }

        let related = propagate(&selection, sentence);
        for (index, _) in related.iter().filter(|&(index, _)| !selection.contains(index)) {
            debug!("propagated to token {}", index);
        }
        selection.merge(related);
    }

    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::laid_out;
    use genus_protocol::{AnnotatedToken, Features, Gender, Head, Number, PartOfSpeech, Person, Tense};

    // "Я был готов": был <-cop- готов is the root; я is nsubj of готов.
    fn copula_sentence() -> ParsedSentence {
        laid_out(vec![
            AnnotatedToken::new(0, "Я", PartOfSpeech::Pronoun).attached(Head::Token(2), "nsubj"),
            AnnotatedToken::new(1, "был", PartOfSpeech::Auxiliary)
                .with_lemma("быть")
                .with_features(Features::new().with_tense(Tense::Past).with_gender(Gender::Masculine))
                .attached(Head::Token(2), "cop"),
            AnnotatedToken::new(2, "готов", PartOfSpeech::Adjective).attached(Head::Root, "root"),
        ])
    }

    #[test]
    fn test_pronoun_anchor_propagates_to_copula() {
        let selection = select(&copula_sentence(), TargetGender::Feminine, TargetGender::Unchanged);
        let selected: Vec<_> = selection.iter().collect();
        assert_eq!(selected, vec![(1, false), (2, false)]);
    }

    #[test]
    fn test_unchanged_roles_select_nothing() {
        let selection = select(&copula_sentence(), TargetGender::Unchanged, TargetGender::Unchanged);
        assert!(selection.is_empty());
        let selection = select(&copula_sentence(), TargetGender::Unchanged, TargetGender::Masculine);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_both_roles_in_one_sentence() {
        // "Ты знаешь, что я пришёл"
        let second = Features::new().with_person(Person::Second).with_number(Number::Singular);
        let sentence = laid_out(vec![
            AnnotatedToken::new(0, "Ты", PartOfSpeech::Pronoun).attached(Head::Token(1), "nsubj"),
            AnnotatedToken::new(1, "знаешь", PartOfSpeech::Verb)
                .with_features(second)
                .attached(Head::Root, "root"),
            AnnotatedToken::new(2, ",", PartOfSpeech::Punctuation).attached(Head::Token(5), "punct"),
            AnnotatedToken::new(3, "что", PartOfSpeech::SubordinatingConjunction).attached(Head::Token(5), "mark"),
            AnnotatedToken::new(4, "я", PartOfSpeech::Pronoun).attached(Head::Token(5), "nsubj"),
            AnnotatedToken::new(5, "пришёл", PartOfSpeech::Verb).attached(Head::Token(1), "ccomp"),
        ]);
        let selection = select(&sentence, TargetGender::Feminine, TargetGender::Masculine);
        assert_eq!(selection.get(1), Some(true));
        assert_eq!(selection.get(5), Some(false));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_later_anchors_extend_earlier_propagation() {
        // "Я пришёл, сел и лёг, я устал": the second anchor re-expands
        // from сел, reaching лёг two hops from пришёл.
        let sentence = laid_out(vec![
            AnnotatedToken::new(0, "Я", PartOfSpeech::Pronoun).attached(Head::Token(1), "nsubj"),
            AnnotatedToken::new(1, "пришёл", PartOfSpeech::Verb).attached(Head::Root, "root"),
            AnnotatedToken::new(2, "сел", PartOfSpeech::Verb).attached(Head::Token(1), "conj"),
            AnnotatedToken::new(3, "лёг", PartOfSpeech::Verb).attached(Head::Token(2), "conj"),
            AnnotatedToken::new(4, "я", PartOfSpeech::Pronoun).attached(Head::Token(5), "nsubj"),
            AnnotatedToken::new(5, "устал", PartOfSpeech::Verb).attached(Head::Token(1), "parataxis"),
        ]);
        let selection = select(&sentence, TargetGender::Feminine, TargetGender::Unchanged);
        let selected: Vec<_> = selection.iter().map(|(i, _)| i).collect();
        assert_eq!(selected, vec![1, 2, 3, 5]);
    }
}
