use crate::{
    closures::ClosureMap,
    fd::{ArmstrongError, Attribute, AttributeSet},
};
use anyhow::Result;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// The trait for the values stored in relations.
///
/// Relations may hold any value type implementing some traits allowing their comparison, display and serialization.
/// This trait is just a shortcut used to combine them.
pub trait ValueType: Clone + Debug + Display + Eq + Serialize {}
impl<T: Clone + Debug + Display + Eq + Serialize> ValueType for T {}

/// A relation instance: an ordered sequence of rows over an ordered sequence of attributes.
///
/// Besides holding the rows, a relation can tell which functional dependencies it satisfies.
/// Two rows agree on an attribute if they hold equal values for its column.
/// A relation satisfies `X -> Y` if any two rows agreeing on all the attributes of `X` also agree on those of `Y`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relation<T>
where
    T: ValueType,
{
    attributes: Vec<Attribute>,
    rows: Vec<Vec<T>>,
}

impl<T> Relation<T>
where
    T: ValueType,
{
    /// Builds a new relation.
    ///
    /// Each row must have one value per attribute, in the same order.
    /// If it is not the case, an [ArmstrongError::InvariantViolation] error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use strong_arms::relations::Relation;
    /// let relation = Relation::new(vec!['A'.into(), 'B'.into()], vec![vec![0, 0], vec![0, 1]]).unwrap();
    /// assert_eq!(2, relation.n_rows());
    /// assert!(Relation::new(vec!['A'.into()], vec![vec![0, 0]]).is_err());
    /// ```
    pub fn new(attributes: Vec<Attribute>, rows: Vec<Vec<T>>) -> Result<Self> {
        if let Some(i) = rows.iter().position(|r| r.len() != attributes.len()) {
            return Err(ArmstrongError::InvariantViolation(format!(
                "row with index {} has {} values for {} attributes",
                i,
                rows[i].len(),
                attributes.len()
            ))
            .into());
        }
        Ok(Relation { attributes, rows })
    }

    /// Returns the attributes, in column order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the set of attributes on which two rows agree.
    ///
    /// # Panics
    ///
    /// Panics if a row index is out of bounds.
    pub fn agree_set(&self, i: usize, j: usize) -> AttributeSet {
        self.rows[i]
            .iter()
            .zip(self.rows[j].iter())
            .zip(self.attributes.iter())
            .filter_map(|((v1, v2), a)| if v1 == v2 { Some(*a) } else { None })
            .collect()
    }

    fn iter_agree_sets(&self) -> impl Iterator<Item = AttributeSet> + '_ {
        (0..self.rows.len())
            .flat_map(move |i| (i + 1..self.rows.len()).map(move |j| self.agree_set(i, j)))
    }

    /// Returns the set of the attributes functionally determined by a set of attributes in this relation.
    ///
    /// This is the intersection of the agree sets including `attributes`, or the set of all the attributes if there is none.
    pub fn closure_of(&self, attributes: &AttributeSet) -> AttributeSet {
        self.iter_agree_sets()
            .filter(|s| s.is_superset(attributes))
            .fold(self.attributes.iter().collect(), |acc, s| {
                acc.intersection(&s)
            })
    }

    /// Returns `true` iff this relation satisfies the dependency `lhs -> rhs`.
    pub fn satisfies(&self, lhs: &AttributeSet, rhs: &AttributeSet) -> bool {
        rhs.is_subset(&self.closure_of(lhs))
    }

    /// Returns `true` iff this relation is an Armstrong relation for the closures.
    ///
    /// This is the case if, for each subset in the closure map, the attributes it determines in the relation are exactly its closure.
    /// Such a relation satisfies the dependencies implied by the closures, and no other ones.
    pub fn is_armstrong_for(&self, closures: &ClosureMap) -> bool {
        closures
            .iter()
            .all(|e| &self.closure_of(e.key()) == e.closure())
    }
}
