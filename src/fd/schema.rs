use crate::fd::{ArmstrongError, Attribute, AttributeSet};
use anyhow::Result;
use std::collections::HashMap;

/// An ordered sequence of unique attributes.
///
/// The order of the attributes is only used to map attributes to column indices;
/// it has no semantic meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    attributes: Vec<Attribute>,
    attribute_to_index: HashMap<Attribute, usize>,
}

impl Schema {
    /// Builds a new schema given its attributes.
    ///
    /// Each attribute is given the column index equal to its position in the provided vector.
    /// If an attribute appears more than once, an [ArmstrongError::DuplicateAttribute] error is returned.
    ///
    /// # Arguments
    ///
    /// * `attributes` - the attributes
    ///
    /// # Example
    ///
    /// ```
    /// # use strong_arms::fd::{Attribute, Schema};
    /// let schema = Schema::new(vec!['A'.into(), 'B'.into()]).unwrap();
    /// assert_eq!(2, schema.len());
    /// assert_eq!(Some(1), schema.index_of(&Attribute::from('B')));
    /// assert!(Schema::new(vec!['A'.into(), 'A'.into()]).is_err());
    /// ```
    pub fn new(attributes: Vec<Attribute>) -> Result<Self> {
        let mut attribute_to_index = HashMap::with_capacity(attributes.len());
        for (i, a) in attributes.iter().enumerate() {
            if attribute_to_index.insert(*a, i).is_some() {
                return Err(ArmstrongError::DuplicateAttribute { attribute: *a }.into());
            }
        }
        Ok(Schema {
            attributes,
            attribute_to_index,
        })
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` iff the schema has no attribute.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Returns the attributes, in column order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns the column index of an attribute, or `None` if it does not belong to the schema.
    pub fn index_of(&self, attribute: &Attribute) -> Option<usize> {
        self.attribute_to_index.get(attribute).copied()
    }

    /// Returns `true` iff the attribute belongs to the schema.
    pub fn contains(&self, attribute: &Attribute) -> bool {
        self.attribute_to_index.contains_key(attribute)
    }

    /// Returns the set of all the attributes of the schema.
    pub fn full_set(&self) -> AttributeSet {
        self.attributes.iter().collect()
    }
}

impl TryFrom<&str> for Schema {
    type Error = anyhow::Error;

    fn try_from(symbols: &str) -> Result<Self, Self::Error> {
        Schema::new(symbols.chars().map(Attribute::from).collect())
    }
}
