use super::{Relation, ValueType};
use anyhow::Result;

/// A trait for objects able to build an Armstrong relation.
///
/// The relation satisfies exactly the functional dependencies implied by the closures the computer was built with.
pub trait ArmstrongRelationComputer<T>
where
    T: ValueType,
{
    /// Computes the Armstrong relation.
    ///
    /// In case an internal consistency check fails, an error is returned instead of a wrong relation.
    fn compute_armstrong_relation(&self) -> Result<Relation<T>>;
}
