use genus_protocol::{ParsedSentence, Relation};

use crate::selection::Selection;

/// Lemma of the self-intensifier reached through an oblique arc.
const SELF_LEMMA: &str = "сам";

/// Relations whose dependent agrees in gender with its governor.
fn shares_gender(relation: &Relation) -> bool {
    matches!(relation, Relation::Copula | Relation::Conjunct | Relation::AdjectivalModifier)
}

/// Dependents one arc away from the selected tokens that must take the
/// same gender as their governor. `selection` is not modified; the caller
/// merges the result.
pub fn propagate(selection: &Selection, sentence: &ParsedSentence) -> Selection {
    let mut related = Selection::new();
    for (source, masculine) in selection.iter() {
        for arc in sentence.dependents(source) {
            let is_self = arc.relation == Relation::Oblique
                && sentence.token(arc.dependent).is_some_and(|t| t.lemma == SELF_LEMMA);
            if shares_gender(&arc.relation) || is_self {
                related.insert(arc.dependent, masculine);
            }
        }
    }
    related
}
