use crate::fd::{Attribute, AttributeSet, Schema};
use std::collections::{btree_map, BTreeMap};

/// A set of functional dependencies.
///
/// Determinants are single attributes.
/// A dependency with a composite left-hand side cannot be expressed here;
/// this restriction is part of the model, and the closure computation relies on it.
///
/// Adding several dependencies sharing the same determinant merges their right-hand sides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionalDependencies {
    dependencies: BTreeMap<Attribute, AttributeSet>,
}

impl FunctionalDependencies {
    /// Builds an empty set of dependencies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set of dependencies given `(determinant, dependents)` pairs.
    ///
    /// # Example
    ///
    /// ```
    /// # use strong_arms::fd::{AttributeSet, FunctionalDependencies};
    /// let deps = FunctionalDependencies::new_with_rules(&[('A', "B"), ('A', "C"), ('C', "D")]);
    /// assert_eq!(2, deps.len());
    /// assert_eq!(Some(&AttributeSet::from("BC")), deps.dependents_of(&'A'.into()));
    /// ```
    pub fn new_with_rules(rules: &[(char, &str)]) -> Self {
        let mut dependencies = Self::new();
        rules
            .iter()
            .for_each(|(lhs, rhs)| dependencies.add_dependency((*lhs).into(), &(*rhs).into()));
        dependencies
    }

    /// Adds a dependency, merging it with the one with the same determinant if it exists.
    pub fn add_dependency(&mut self, determinant: Attribute, dependents: &AttributeSet) {
        self.dependencies
            .entry(determinant)
            .or_default()
            .extend(dependents)
    }

    /// Returns the dependents of an attribute, or `None` if it determines nothing.
    pub fn dependents_of(&self, determinant: &Attribute) -> Option<&AttributeSet> {
        self.dependencies.get(determinant)
    }

    /// Returns the number of distinct determinants.
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    /// Returns `true` iff there is no dependency.
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Iterates over the `(determinant, dependents)` pairs, in determinant order.
    pub fn iter(&self) -> btree_map::Iter<'_, Attribute, AttributeSet> {
        self.dependencies.iter()
    }

    /// Returns the attributes mentioned by the dependencies that are absent from a schema.
    pub fn unknown_attributes(&self, schema: &Schema) -> AttributeSet {
        self.dependencies
            .iter()
            .flat_map(|(lhs, rhs)| std::iter::once(lhs).chain(rhs.iter()))
            .filter(|a| !schema.contains(a))
            .collect()
    }
}

impl<'a> IntoIterator for &'a FunctionalDependencies {
    type Item = (&'a Attribute, &'a AttributeSet);
    type IntoIter = btree_map::Iter<'a, Attribute, AttributeSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.dependencies.iter()
    }
}

/// A schema associated with its set of functional dependencies.
///
/// This is the input of every computation in this crate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DependencyInstance {
    schema: Schema,
    dependencies: FunctionalDependencies,
}

impl DependencyInstance {
    /// Builds a new instance.
    pub fn new(schema: Schema, dependencies: FunctionalDependencies) -> Self {
        DependencyInstance {
            schema,
            dependencies,
        }
    }

    /// Returns the schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the dependencies.
    pub fn dependencies(&self) -> &FunctionalDependencies {
        &self.dependencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_sharing_determinant_are_merged() {
        let deps = FunctionalDependencies::new_with_rules(&[('A', "B"), ('A', "CB")]);
        assert_eq!(1, deps.len());
        assert_eq!(
            Some(&AttributeSet::from("BC")),
            deps.dependents_of(&'A'.into())
        );
    }

    #[test]
    fn test_iter_in_determinant_order() {
        let deps = FunctionalDependencies::new_with_rules(&[('C', "A"), ('A', "B")]);
        let determinants = deps.iter().map(|(d, _)| d.symbol()).collect::<String>();
        assert_eq!("AC", determinants);
    }

    #[test]
    fn test_unknown_attributes() {
        let schema = Schema::try_from("ABC").unwrap();
        let deps = FunctionalDependencies::new_with_rules(&[('A', "BZ"), ('Y', "C")]);
        assert_eq!(AttributeSet::from("YZ"), deps.unknown_attributes(&schema));
        let deps = FunctionalDependencies::new_with_rules(&[('A', "B")]);
        assert!(deps.unknown_attributes(&schema).is_empty());
    }

    #[test]
    fn test_empty() {
        assert!(FunctionalDependencies::new().is_empty());
        assert!(FunctionalDependencies::new_with_rules(&[]).is_empty());
    }
}
