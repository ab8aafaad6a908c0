use genus_protocol::{AnnotatedToken, Number, PartOfSpeech, Person, Relation};

use crate::selection::Selection;

/// The discourse participant whose gender is being set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Speaker,
    Addressee,
}

impl Role {
    fn person(self) -> Person {
        match self {
            Role::Speaker => Person::First,
            Role::Addressee => Person::Second,
        }
    }

    /// Lemma of the singular subject pronoun for this role.
    pub fn pronoun(self) -> &'static str {
        match self {
            Role::Speaker => "я",
            Role::Addressee => "ты",
        }
    }
}

/// Finite singular verb in the role's grammatical person.
pub fn is_verb_anchor(token: &AnnotatedToken, role: Role) -> bool {
    token.pos == PartOfSpeech::Verb
        && token.features.person == Some(role.person())
        && token.features.number == Some(Number::Singular)
}

/// "я"/"ты" attached as nominal subject.
pub fn is_subject_pronoun(token: &AnnotatedToken, role: Role) -> bool {
    token.lemma == role.pronoun() && token.relation == Some(Relation::NominalSubject)
}

/// Records the anchor `token` contributes for `role`, if any, and returns
/// the selected index.
///
/// A verb anchors itself. A subject pronoun anchors its governor, which is
/// the predicate agreeing with it; a pronoun hanging off the root or off
/// nothing contributes no anchor.
pub fn add_anchor(token: &AnnotatedToken, role: Role, masculine: bool, selection: &mut Selection) -> Option<usize> {
    let index = if is_verb_anchor(token, role) {
        token.index
    } else if is_subject_pronoun(token, role) {
        token.governor()?
    } else {
        return None;
    };
    selection.insert(index, masculine);
    Some(index)
}
