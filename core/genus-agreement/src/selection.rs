use std::collections::BTreeMap;

/// Tokens chosen for regendering, keyed by index, each with its
/// "make masculine" target. Iterates in ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    targets: BTreeMap<usize, bool>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `index`, replacing any earlier target for it.
    pub fn insert(&mut self, index: usize, masculine: bool) {
        self.targets.insert(index, masculine);
    }

    pub fn merge(&mut self, other: Selection) {
        self.targets.extend(other.targets);
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.targets.get(&index).copied()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.targets.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// `(index, masculine)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.targets.iter().map(|(&index, &masculine)| (index, masculine))
    }
}

impl FromIterator<(usize, bool)> for Selection {
    fn from_iter<I: IntoIterator<Item = (usize, bool)>>(iter: I) -> Self {
        Self { targets: iter.into_iter().collect() }
    }
}
