use super::{ClosureEntry, ClosureMap};
use std::collections::HashSet;

/// The closures that carry information for building Armstrong relations.
///
/// Superkey closures are excluded and each closure value appears exactly once.
/// Entries are kept in the order of the closure map they come from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbridgedClosureMap {
    entries: Vec<ClosureEntry>,
}

impl AbridgedClosureMap {
    /// Returns the number of closures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` iff there is no closure.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &ClosureEntry> + '_ {
        self.entries.iter()
    }
}

/// Reduces a closure map to its abridged form.
///
/// First, the entries whose closure covers the `n_attributes` attributes of the schema (the superkeys) are removed.
/// Then, among the entries sharing the same closure, only the first one is kept.
/// Since closure maps are ordered by subset size and then by column indices,
/// the key that is kept is the smallest subset generating the closure,
/// the lexicographic order of the column indices breaking ties.
///
/// # Example
///
/// ```
/// # use strong_arms::fd::{DependencyInstance, FunctionalDependencies, Schema};
/// # use strong_arms::closures::{compute_closures, reduce_closures};
/// let instance = DependencyInstance::new(
///     Schema::try_from("ABC").unwrap(),
///     FunctionalDependencies::new_with_rules(&[('A', "B")]),
/// );
/// let closures = compute_closures(&instance).unwrap();
/// let abridged = reduce_closures(&closures, 3);
/// let keys = abridged.iter().map(|e| e.key().to_string()).collect::<Vec<String>>();
/// assert_eq!(vec!["A", "B", "C", "BC"], keys);
/// ```
pub fn reduce_closures(closures: &ClosureMap, n_attributes: usize) -> AbridgedClosureMap {
    let mut seen = HashSet::with_capacity(closures.len());
    let entries = closures
        .iter()
        .filter(|e| e.closure().len() < n_attributes)
        .filter(|e| seen.insert(e.closure().clone()))
        .cloned()
        .collect();
    AbridgedClosureMap { entries }
}
