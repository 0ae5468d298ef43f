use super::proper_subsets;
use crate::fd::{ArmstrongError, AttributeSet, DependencyInstance};
use anyhow::Result;
use std::collections::HashMap;

/// A subset of attributes associated with its closure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClosureEntry {
    key: AttributeSet,
    closure: AttributeSet,
}

impl ClosureEntry {
    pub(crate) fn new(key: AttributeSet, closure: AttributeSet) -> Self {
        ClosureEntry { key, closure }
    }

    /// Returns the subset that generated the closure.
    pub fn key(&self) -> &AttributeSet {
        &self.key
    }

    /// Returns the closure of the key.
    pub fn closure(&self) -> &AttributeSet {
        &self.closure
    }
}

/// The closures of all the proper, non-empty subsets of a schema.
///
/// Entries are kept in the order given by [proper_subsets](crate::closures::proper_subsets).
#[derive(Clone, Debug, Default)]
pub struct ClosureMap {
    entries: Vec<ClosureEntry>,
    key_to_index: HashMap<AttributeSet, usize>,
    n_passes: usize,
}

impl ClosureMap {
    /// Returns the closure of a subset, or `None` if the subset is not a key of the map.
    pub fn closure_of(&self, key: &AttributeSet) -> Option<&AttributeSet> {
        self.key_to_index
            .get(key)
            .map(|i| self.entries[*i].closure())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` iff the map has no entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries, in subset enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &ClosureEntry> + '_ {
        self.entries.iter()
    }

    /// Returns the number of passes over the whole map needed to reach the fixed point.
    ///
    /// The last pass is the one that changed nothing.
    pub fn n_passes(&self) -> usize {
        self.n_passes
    }
}

/// Computes the closure of each proper, non-empty subset of a schema.
///
/// Each closure starts as its subset.
/// Then, passes are made over the whole map: for each closure and each dependency `X -> Y`,
/// if `X` belongs to the closure and `Y` is not included in it, `Y` is added to the closure.
/// The computation stops after a pass that changed no closure.
///
/// If a dependency refers to an attribute that is not in the schema,
/// an [ArmstrongError::InvalidAttribute] error is returned.
///
/// # Example
///
/// ```
/// # use strong_arms::fd::{AttributeSet, DependencyInstance, FunctionalDependencies, Schema};
/// # use strong_arms::closures::compute_closures;
/// let instance = DependencyInstance::new(
///     Schema::try_from("ABC").unwrap(),
///     FunctionalDependencies::new_with_rules(&[('A', "B")]),
/// );
/// let closures = compute_closures(&instance).unwrap();
/// assert_eq!(
///     Some(&AttributeSet::from("ABC")),
///     closures.closure_of(&AttributeSet::from("AC"))
/// );
/// ```
pub fn compute_closures(instance: &DependencyInstance) -> Result<ClosureMap> {
    let schema = instance.schema();
    let dependencies = instance.dependencies();
    if let Some(a) = dependencies.unknown_attributes(schema).iter().next() {
        return Err(ArmstrongError::InvalidAttribute { attribute: *a }.into());
    }
    let keys = proper_subsets(schema);
    let mut closures = keys.clone();
    let mut n_passes = 0;
    loop {
        n_passes += 1;
        let mut changed = false;
        for closure in closures.iter_mut() {
            for (determinant, dependents) in dependencies {
                if closure.contains(determinant) && !dependents.is_subset(closure) {
                    closure.extend(dependents);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    let key_to_index = keys
        .iter()
        .enumerate()
        .map(|(i, k)| (k.clone(), i))
        .collect();
    let entries = keys
        .into_iter()
        .zip(closures)
        .map(|(k, c)| ClosureEntry::new(k, c))
        .collect();
    Ok(ClosureMap {
        entries,
        key_to_index,
        n_passes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fd::{FunctionalDependencies, Schema};

    fn closures_for(schema: &str, rules: &[(char, &str)]) -> ClosureMap {
        let instance = DependencyInstance::new(
            Schema::try_from(schema).unwrap(),
            FunctionalDependencies::new_with_rules(rules),
        );
        compute_closures(&instance).unwrap()
    }

    fn str_closures(closures: &ClosureMap) -> Vec<(String, String)> {
        closures
            .iter()
            .map(|e| (e.key().to_string(), e.closure().to_string()))
            .collect()
    }

    fn pairs(v: &[(&str, &str)]) -> Vec<(String, String)> {
        v.iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn test_single_dependency() {
        let closures = closures_for("ABC", &[('A', "B")]);
        assert_eq!(
            pairs(&[
                ("A", "AB"),
                ("B", "B"),
                ("C", "C"),
                ("AB", "AB"),
                ("AC", "ABC"),
                ("BC", "BC")
            ]),
            str_closures(&closures)
        );
    }

    #[test]
    fn test_transitive_dependencies() {
        let closures = closures_for("ABCD", &[('C', "D"), ('B', "C"), ('A', "B")]);
        assert_eq!(
            Some(&AttributeSet::from("ABCD")),
            closures.closure_of(&AttributeSet::from("A"))
        );
        assert_eq!(
            Some(&AttributeSet::from("BCD")),
            closures.closure_of(&AttributeSet::from("B"))
        );
        assert_eq!(
            Some(&AttributeSet::from("D")),
            closures.closure_of(&AttributeSet::from("D"))
        );
    }

    #[test]
    fn test_closures_have_no_duplicate_attributes() {
        let closures = closures_for("ABC", &[('A', "BC"), ('B', "C"), ('C', "B")]);
        assert_eq!(
            Some(&AttributeSet::from("BC")),
            closures.closure_of(&AttributeSet::from("B"))
        );
        assert_eq!("BC", closures.closure_of(&"C".into()).unwrap().to_string());
    }

    #[test]
    fn test_no_dependency() {
        let closures = closures_for("ABC", &[]);
        assert_eq!(6, closures.len());
        closures.iter().for_each(|e| assert_eq!(e.key(), e.closure()));
        assert_eq!(1, closures.n_passes());
    }

    #[test]
    fn test_single_attribute_schema() {
        let closures = closures_for("A", &[]);
        assert!(closures.is_empty());
    }

    #[test]
    fn test_unknown_determinant() {
        let instance = DependencyInstance::new(
            Schema::try_from("AB").unwrap(),
            FunctionalDependencies::new_with_rules(&[('Z', "A")]),
        );
        let err = compute_closures(&instance).unwrap_err();
        assert_eq!(
            Some(&ArmstrongError::InvalidAttribute {
                attribute: 'Z'.into()
            }),
            err.downcast_ref::<ArmstrongError>()
        );
    }

    #[test]
    fn test_unknown_dependent() {
        let instance = DependencyInstance::new(
            Schema::try_from("AB").unwrap(),
            FunctionalDependencies::new_with_rules(&[('A', "BX")]),
        );
        assert!(compute_closures(&instance).is_err());
    }

    #[test]
    fn test_extensivity() {
        let closures = closures_for("ABCDE", &[('A', "C"), ('C', "E"), ('D', "AB")]);
        closures
            .iter()
            .for_each(|e| assert!(e.closure().is_superset(e.key())));
    }

    #[test]
    fn test_idempotence() {
        let closures = closures_for("ABCDE", &[('A', "C"), ('C', "E"), ('D', "AB")]);
        let full = Schema::try_from("ABCDE").unwrap().full_set();
        closures.iter().for_each(|e| {
            let closure_of_closure = closures.closure_of(e.closure()).unwrap_or(&full);
            assert_eq!(e.closure(), closure_of_closure);
        });
    }

    #[test]
    fn test_monotonicity() {
        let smaller = closures_for("ABCD", &[('A', "B")]);
        let bigger = closures_for("ABCD", &[('A', "B"), ('B', "D")]);
        smaller.iter().for_each(|e| {
            assert!(e
                .closure()
                .is_subset(bigger.closure_of(e.key()).unwrap()))
        });
    }
}
