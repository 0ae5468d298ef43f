use super::{ArmstrongRelationComputer, Relation, SymbolicRelation};
use crate::fd::ArmstrongError;
use anyhow::Result;

/// Builds strong Armstrong relations as the direct product of the groups of a symbolic regular relation.
///
/// The product of two relations has one row for each couple of rows taken from them,
/// each value being the concatenation of the labels of the two rows for the same column.
/// Folding this product from left to right over the groups gives values that tell, for each attribute,
/// its status with respect to every closure at the same time.
///
/// # Example
///
/// ```
/// # use strong_arms::fd::{DependencyInstance, FunctionalDependencies, Schema};
/// # use strong_arms::closures::{compute_closures, reduce_closures};
/// # use strong_arms::relations::{ArmstrongRelationComputer, RegularArmstrongComputer, RelationalProductComputer};
/// let schema = Schema::try_from("AB").unwrap();
/// let instance = DependencyInstance::new(
///     schema.clone(),
///     FunctionalDependencies::new_with_rules(&[('A', "B")]),
/// );
/// let closures = reduce_closures(&compute_closures(&instance).unwrap(), 2);
/// let symbolic = RegularArmstrongComputer::new(&schema, &closures).compute_symbolic_relation();
/// let relation = RelationalProductComputer::new(&symbolic)
///     .compute_armstrong_relation()
///     .unwrap();
/// assert_eq!(4, relation.n_rows());
/// assert_eq!(vec!["1_{\\varnothing}1_{B}", "1_{\\varnothing}1_{B}"], relation.rows()[0]);
/// ```
pub struct RelationalProductComputer<'a> {
    symbolic_relation: &'a SymbolicRelation,
}

impl<'a> RelationalProductComputer<'a> {
    /// Builds a new computer given the symbolic form of a regular Armstrong relation.
    pub fn new(symbolic_relation: &'a SymbolicRelation) -> Self {
        RelationalProductComputer { symbolic_relation }
    }
}

/// Computes the direct product of two relations defined on the same attributes.
///
/// Rows of the result are ordered by the row of the first relation, then by the row of the second one.
pub fn direct_product(r1: &Relation<String>, r2: &Relation<String>) -> Result<Relation<String>> {
    if r1.attributes() != r2.attributes() {
        return Err(ArmstrongError::InvariantViolation(
            "cannot compute the product of relations defined on different attributes".to_string(),
        )
        .into());
    }
    let mut rows = Vec::with_capacity(r1.n_rows() * r2.n_rows());
    for row_1 in r1.rows() {
        for row_2 in r2.rows() {
            rows.push(
                row_1
                    .iter()
                    .zip(row_2.iter())
                    .map(|(v1, v2)| format!("{}{}", v1, v2))
                    .collect(),
            );
        }
    }
    Relation::new(r1.attributes().to_vec(), rows)
}

impl ArmstrongRelationComputer<String> for RelationalProductComputer<'_> {
    fn compute_armstrong_relation(&self) -> Result<Relation<String>> {
        let attributes = self.symbolic_relation.schema().attributes().to_vec();
        let mut groups = self
            .symbolic_relation
            .groups()
            .iter()
            .map(|g| Relation::new(attributes.clone(), g.rows().to_vec()));
        let first = match groups.next() {
            Some(r) => r?,
            None => return Relation::new(attributes, vec![]),
        };
        groups.try_fold(first, |acc, r| direct_product(&acc, &r?))
    }
}
