use super::{
    ArmstrongRelationComputer, RegularArmstrongComputer, Relation, RelationalProductComputer,
    StrongArmstrongComputer, SymbolicRelation, ValueType,
};
use crate::{
    closures::{compute_closures, reduce_closures, AbridgedClosureMap, ClosureMap},
    fd::{ArmstrongError, DependencyInstance},
};
use anyhow::Result;
use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// The available Armstrong relation constructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ArmstrongConstruction {
    /// The regular construction, with two rows per closure
    Regular,
    /// The strong construction, using a bit-string encoding
    Strong,
    /// The strong construction, using the product of the regular symbolic groups
    Product,
}

impl ArmstrongConstruction {
    /// Returns the title used when displaying a relation built with this construction.
    pub fn title(&self) -> &'static str {
        match self {
            ArmstrongConstruction::Regular => "Armstrong relation table",
            ArmstrongConstruction::Strong => "Strong Armstrong relation table",
            ArmstrongConstruction::Product => "Strong Armstrong relation table (product)",
        }
    }
}

/// All the objects computed for a dependency instance.
///
/// Closures are computed and reduced, then the three Armstrong relations are built from the abridged closures.
/// Nothing is shared between two calls to [compute](Self::compute).
pub struct ArmstrongTables {
    closures: ClosureMap,
    abridged_closures: AbridgedClosureMap,
    regular: Relation<usize>,
    symbolic: SymbolicRelation,
    strong: Relation<String>,
    product: Relation<String>,
}

impl ArmstrongTables {
    /// Runs all the computations for an instance.
    ///
    /// # Example
    ///
    /// ```
    /// # use strong_arms::fd::{DependencyInstance, FunctionalDependencies, Schema};
    /// # use strong_arms::relations::ArmstrongTables;
    /// let instance = DependencyInstance::new(
    ///     Schema::try_from("ABC").unwrap(),
    ///     FunctionalDependencies::new_with_rules(&[('A', "B")]),
    /// );
    /// let tables = ArmstrongTables::compute(&instance).unwrap();
    /// assert_eq!(4, tables.abridged_closures().len());
    /// assert_eq!(10, tables.regular().n_rows());
    /// assert_eq!(32, tables.strong().n_rows());
    /// assert_eq!(32, tables.product().n_rows());
    /// ```
    pub fn compute(instance: &DependencyInstance) -> Result<Self> {
        let schema = instance.schema();
        let closures = compute_closures(instance)?;
        let abridged_closures = reduce_closures(&closures, schema.len());
        let regular_computer = RegularArmstrongComputer::new(schema, &abridged_closures);
        let regular = regular_computer.compute_armstrong_relation()?;
        let symbolic = regular_computer.compute_symbolic_relation();
        let strong = StrongArmstrongComputer::new(schema, &abridged_closures)
            .compute_armstrong_relation()?;
        let product = RelationalProductComputer::new(&symbolic).compute_armstrong_relation()?;
        Ok(ArmstrongTables {
            closures,
            abridged_closures,
            regular,
            symbolic,
            strong,
            product,
        })
    }

    /// Returns the closures of all the proper, non-empty subsets of the schema.
    pub fn closures(&self) -> &ClosureMap {
        &self.closures
    }

    /// Returns the abridged closures.
    pub fn abridged_closures(&self) -> &AbridgedClosureMap {
        &self.abridged_closures
    }

    /// Returns the regular Armstrong relation.
    pub fn regular(&self) -> &Relation<usize> {
        &self.regular
    }

    /// Returns the symbolic form of the regular Armstrong relation.
    pub fn symbolic(&self) -> &SymbolicRelation {
        &self.symbolic
    }

    /// Returns the strong Armstrong relation built with the bit-string encoding.
    pub fn strong(&self) -> &Relation<String> {
        &self.strong
    }

    /// Returns the strong Armstrong relation built with the relational product.
    pub fn product(&self) -> &Relation<String> {
        &self.product
    }

    /// Checks that the relation built by a construction satisfies exactly the implied dependencies.
    ///
    /// An [ArmstrongError::InvariantViolation] error is returned if it is not the case.
    pub fn verify(&self, construction: ArmstrongConstruction) -> Result<()> {
        match construction {
            ArmstrongConstruction::Regular => self.verify_relation(construction, &self.regular),
            ArmstrongConstruction::Strong => self.verify_relation(construction, &self.strong),
            ArmstrongConstruction::Product => self.verify_relation(construction, &self.product),
        }
    }

    fn verify_relation<T>(
        &self,
        construction: ArmstrongConstruction,
        relation: &Relation<T>,
    ) -> Result<()>
    where
        T: ValueType,
    {
        match self
            .closures
            .iter()
            .find(|e| &relation.closure_of(e.key()) != e.closure())
        {
            None => Ok(()),
            Some(e) => Err(ArmstrongError::InvariantViolation(format!(
                "{} relation determines {} from {}, while its closure is {}",
                construction.as_ref(),
                relation.closure_of(e.key()),
                e.key(),
                e.closure()
            ))
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fd::{FunctionalDependencies, Schema};
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn tables_for(schema: &str, rules: &[(char, &str)]) -> ArmstrongTables {
        let instance = DependencyInstance::new(
            Schema::try_from(schema).unwrap(),
            FunctionalDependencies::new_with_rules(rules),
        );
        ArmstrongTables::compute(&instance).unwrap()
    }

    macro_rules! test_for_instance {
        ($schema:literal, $rules:expr, $suffix:ident) => {
            paste::item! {
                #[test]
                fn [< test_all_constructions_verified_ $suffix >] () {
                    let tables = tables_for($schema, $rules);
                    ArmstrongConstruction::iter().for_each(|c| tables.verify(c).unwrap());
                }

                #[test]
                fn [< test_abridged_closures_ $suffix >] () {
                    let tables = tables_for($schema, $rules);
                    let n = $schema.len();
                    let mut seen = std::collections::HashSet::new();
                    tables.abridged_closures().iter().for_each(|e| {
                        assert!(e.closure().len() < n);
                        assert!(seen.insert(e.closure().clone()));
                    });
                }

                #[test]
                fn [< test_strong_and_product_agree_ $suffix >] () {
                    let tables = tables_for($schema, $rules);
                    assert_eq!(tables.strong().n_rows(), tables.product().n_rows());
                    tables.closures().iter().for_each(|e| {
                        assert_eq!(
                            tables.strong().closure_of(e.key()),
                            tables.product().closure_of(e.key())
                        );
                    });
                }
            }
        };
    }

    test_for_instance!("ABC", &[('A', "B")], single_dependency);
    test_for_instance!("ABCD", &[('A', "B"), ('B', "C"), ('C', "D")], chain);
    test_for_instance!("ABCD", &[('A', "B"), ('B', "A"), ('C', "D")], cycle);
    test_for_instance!("ABCD", &[('A', "C"), ('D', "B")], two_roots);
    test_for_instance!("ABC", &[], no_dependency);
    test_for_instance!("A", &[], single_attribute);

    #[test]
    fn test_single_attribute_schema() {
        let tables = tables_for("A", &[]);
        assert!(tables.closures().is_empty());
        assert!(tables.abridged_closures().is_empty());
        assert_eq!(&[vec![0], vec![1]], tables.regular().rows());
        assert_eq!(2, tables.strong().n_rows());
        assert_eq!(2, tables.product().n_rows());
    }

    #[test]
    fn test_unknown_attribute() {
        let instance = DependencyInstance::new(
            Schema::try_from("AB").unwrap(),
            FunctionalDependencies::new_with_rules(&[('A', "C")]),
        );
        assert!(ArmstrongTables::compute(&instance).is_err());
    }

    #[test]
    fn test_verify_detects_wrong_relation() {
        let mut tables = tables_for("ABC", &[('A', "B")]);
        tables.strong = Relation::new(
            tables.strong.attributes().to_vec(),
            vec![
                vec!["0".to_string(); 3],
                vec!["1".to_string(); 3],
            ],
        )
        .unwrap();
        assert!(tables.verify(ArmstrongConstruction::Strong).is_err());
        assert!(tables.verify(ArmstrongConstruction::Regular).is_ok());
    }

    #[test]
    fn test_construction_names() {
        assert_eq!(
            vec!["regular", "strong", "product"],
            ArmstrongConstruction::iter()
                .map(|c| c.as_ref().to_string())
                .collect::<Vec<String>>()
        );
        assert_eq!(
            ArmstrongConstruction::Strong,
            ArmstrongConstruction::from_str("strong").unwrap()
        );
        assert!(ArmstrongConstruction::from_str("foo").is_err());
    }
}
