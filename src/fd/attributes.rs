use serde::{Serialize, Serializer};
use std::{
    collections::{btree_set, BTreeSet},
    fmt::Display,
};

/// A single attribute (a column of a relational schema).
///
/// Attributes are one-character symbols and have no identity beyond that symbol.
///
/// # Example
///
/// ```
/// # use strong_arms::fd::Attribute;
/// let a = Attribute::from('A');
/// assert_eq!('A', a.symbol());
/// assert_eq!("A", a.to_string());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Attribute(char);

impl Attribute {
    /// Returns the symbol of this attribute.
    pub fn symbol(&self) -> char {
        self.0
    }
}

impl From<char> for Attribute {
    fn from(c: char) -> Self {
        Attribute(c)
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Attribute {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A set of attributes.
///
/// The set is kept sorted and free of duplicates, so two sets are equal iff they contain the same attributes,
/// whatever the order in which these attributes were added.
/// Its textual form is the concatenation of its attribute symbols (`AB` for the set `{A, B}`).
///
/// # Example
///
/// ```
/// # use strong_arms::fd::AttributeSet;
/// let mut set = AttributeSet::from("BA");
/// set.extend(&AttributeSet::from("CB"));
/// assert_eq!(3, set.len());
/// assert_eq!("ABC", set.to_string());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AttributeSet(BTreeSet<Attribute>);

impl AttributeSet {
    /// Builds an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of attributes in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` iff the set contains no attribute.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` iff the attribute belongs to this set.
    pub fn contains(&self, attribute: &Attribute) -> bool {
        self.0.contains(attribute)
    }

    /// Adds an attribute, returning `true` iff it was not already present.
    pub fn insert(&mut self, attribute: Attribute) -> bool {
        self.0.insert(attribute)
    }

    /// Adds all the attributes of another set to this one.
    pub fn extend(&mut self, other: &AttributeSet) {
        self.0.extend(other.0.iter().copied())
    }

    /// Returns `true` iff all the attributes of this set belong to the other one.
    pub fn is_subset(&self, other: &AttributeSet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Returns `true` iff all the attributes of the other set belong to this one.
    pub fn is_superset(&self, other: &AttributeSet) -> bool {
        self.0.is_superset(&other.0)
    }

    /// Returns the attributes that belong to both sets.
    pub fn intersection(&self, other: &AttributeSet) -> AttributeSet {
        AttributeSet(self.0.intersection(&other.0).copied().collect())
    }

    /// Iterates over the attributes, in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> + '_ {
        self.0.iter()
    }
}

impl From<&str> for AttributeSet {
    fn from(symbols: &str) -> Self {
        symbols.chars().map(Attribute::from).collect()
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        AttributeSet(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = &'a Attribute>>(iter: I) -> Self {
        AttributeSet(iter.into_iter().copied().collect())
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = btree_set::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for AttributeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|a| write!(f, "{}", a))
    }
}

impl Serialize for AttributeSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
