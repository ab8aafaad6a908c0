use std::collections::HashMap;

use genus_protocol::NounLexicon;

use crate::tables::NOUN_PAIRS;

/// Bidirectional lookup of gender-paired noun lemmas.
///
/// When a lemma has several partners the first pair seen wins, so built-in
/// pairs take precedence over pairs added with [`NounPairs::extend`].
#[derive(Debug, Clone, Default)]
pub struct NounPairs {
    masculine_to_feminine: HashMap<String, String>,
    feminine_to_masculine: HashMap<String, String>,
}

impl NounPairs {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut pairs = Self::empty();
        for &(masculine, feminine) in NOUN_PAIRS {
            pairs.insert(masculine, feminine);
        }
        pairs
    }

    pub fn insert(&mut self, masculine: &str, feminine: &str) {
        let masculine = masculine.to_lowercase();
        let feminine = feminine.to_lowercase();
        self.feminine_to_masculine
            .entry(feminine.clone())
            .or_insert_with(|| masculine.clone());
        self.masculine_to_feminine.entry(masculine).or_insert(feminine);
    }

    pub fn extend(&mut self, lexicon: &NounLexicon) {
        for pair in &lexicon.pairs {
            self.insert(&pair.masculine, &pair.feminine);
        }
    }

    /// The partner of `lemma` in the requested gender.
    pub fn partner(&self, lemma: &str, masculine: bool) -> Option<&str> {
        let map = if masculine {
            &self.feminine_to_masculine
        } else {
            &self.masculine_to_feminine
        };
        map.get(lemma).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.masculine_to_feminine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masculine_to_feminine.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genus_protocol::NounPair;

    #[test]
    fn test_builtin_lookup() {
        let pairs = NounPairs::builtin();
        assert_eq!(pairs.partner("учитель", false), Some("учительница"));
        assert_eq!(pairs.partner("учительница", true), Some("учитель"));
        assert_eq!(pairs.partner("учитель", true), None);
        assert_eq!(pairs.partner("дворник", false), None);
    }

    #[test]
    fn test_extension_does_not_override_builtin() {
        let mut pairs = NounPairs::builtin();
        let before = pairs.len();
        pairs.extend(&NounLexicon::new(vec![
            NounPair::new("учитель", "училка"),
            NounPair::new("Лётчик", "Лётчица"),
        ]));
        assert_eq!(pairs.partner("учитель", false), Some("учительница"));
        assert_eq!(pairs.partner("училка", true), Some("учитель"));
        assert_eq!(pairs.partner("лётчица", true), Some("лётчик"));
        assert_eq!(pairs.len(), before + 1);
    }
}
