use super::{ArmstrongRelationComputer, Relation};
use crate::{
    closures::AbridgedClosureMap,
    fd::{AttributeSet, Schema},
};
use anyhow::Result;
use serde::Serialize;

const EMPTY_SET_LABEL: &str = "\\varnothing";

/// A group of rows of a symbolic relation, associated with the closure that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SymbolicGroup {
    key: AttributeSet,
    rows: Vec<Vec<String>>,
}

impl SymbolicGroup {
    /// Returns the key of the closure this group witnesses.
    ///
    /// The baseline group, which stands for the empty set, has an empty key.
    pub fn key(&self) -> &AttributeSet {
        &self.key
    }

    /// Returns the rows of the group.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// A regular Armstrong relation with placeholders as values, grouped by closure.
///
/// Values are labels such as `1_{A}` and `0_{A}`, tagged with the key of the closure they witness.
/// The baseline group is first, followed by one group per abridged closure, in closure order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolicRelation {
    schema: Schema,
    groups: Vec<SymbolicGroup>,
}

impl SymbolicRelation {
    /// Returns the schema the relation is built on.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the groups of rows.
    pub fn groups(&self) -> &[SymbolicGroup] {
        &self.groups
    }

    /// Returns the relation made of the rows of all the groups, in group order.
    pub fn flatten(&self) -> Result<Relation<String>> {
        Relation::new(
            self.schema.attributes().to_vec(),
            self.groups.iter().flat_map(|g| g.rows.clone()).collect(),
        )
    }
}

/// Builds regular Armstrong relations.
///
/// The relation starts with two baseline rows that agree on no attribute (all zeros, then all ones).
/// Then, for the k-th closure (starting at 1), two rows are added:
/// the first one holds `2k` for each attribute, and the second one holds `2k` for the attributes of the closure and `2k+1` for the others.
/// These two rows agree exactly on the closure, while rows of distinct pairs never agree.
///
/// # Example
///
/// ```
/// # use strong_arms::fd::{DependencyInstance, FunctionalDependencies, Schema};
/// # use strong_arms::closures::{compute_closures, reduce_closures};
/// # use strong_arms::relations::{ArmstrongRelationComputer, RegularArmstrongComputer};
/// let schema = Schema::try_from("AB").unwrap();
/// let instance = DependencyInstance::new(
///     schema.clone(),
///     FunctionalDependencies::new_with_rules(&[('A', "B")]),
/// );
/// let closures = reduce_closures(&compute_closures(&instance).unwrap(), 2);
/// let computer = RegularArmstrongComputer::new(&schema, &closures);
/// let relation = computer.compute_armstrong_relation().unwrap();
/// assert_eq!(&[vec![0, 0], vec![1, 1], vec![2, 2], vec![3, 2]], relation.rows());
/// ```
pub struct RegularArmstrongComputer<'a> {
    schema: &'a Schema,
    closures: &'a AbridgedClosureMap,
}

impl<'a> RegularArmstrongComputer<'a> {
    /// Builds a new computer for a schema and its abridged closures.
    pub fn new(schema: &'a Schema, closures: &'a AbridgedClosureMap) -> Self {
        RegularArmstrongComputer { schema, closures }
    }

    fn row_pair<L, T, F>(&self, closure: &AttributeSet, high: L, low: L, f: F) -> [Vec<T>; 2]
    where
        L: Copy,
        T: Clone,
        F: Fn(L) -> T,
    {
        let first = vec![f(high); self.schema.len()];
        let second = self
            .schema
            .attributes()
            .iter()
            .map(|a| if closure.contains(a) { f(high) } else { f(low) })
            .collect();
        [first, second]
    }

    /// Computes the symbolic form of the relation.
    ///
    /// Its groups follow the same construction as the numeric form,
    /// with `1_{K}` in place of the first level and `0_{K}` in place of the second one,
    /// `K` being the key of the closure (or `\varnothing` for the baseline group).
    pub fn compute_symbolic_relation(&self) -> SymbolicRelation {
        let n_columns = self.schema.len();
        let baseline = SymbolicGroup {
            key: AttributeSet::new(),
            rows: vec![
                vec![symbolic_label('1', EMPTY_SET_LABEL); n_columns],
                vec![symbolic_label('0', EMPTY_SET_LABEL); n_columns],
            ],
        };
        let groups = std::iter::once(baseline)
            .chain(self.closures.iter().map(|entry| {
                let key = entry.key().to_string();
                SymbolicGroup {
                    key: entry.key().clone(),
                    rows: Vec::from(self.row_pair(entry.closure(), '1', '0', |c| {
                        symbolic_label(c, &key)
                    })),
                }
            }))
            .collect();
        SymbolicRelation {
            schema: self.schema.clone(),
            groups,
        }
    }
}

fn symbolic_label(level: char, key: &str) -> String {
    format!("{}_{{{}}}", level, key)
}

impl ArmstrongRelationComputer<usize> for RegularArmstrongComputer<'_> {
    fn compute_armstrong_relation(&self) -> Result<Relation<usize>> {
        let n_columns = self.schema.len();
        let mut rows = Vec::with_capacity(2 * (self.closures.len() + 1));
        rows.push(vec![0; n_columns]);
        rows.push(vec![1; n_columns]);
        for (k, entry) in self.closures.iter().enumerate() {
            let level = 2 * (k + 1);
            rows.extend(self.row_pair(entry.closure(), level, level + 1, |l| l));
        }
        Relation::new(self.schema.attributes().to_vec(), rows)
    }
}
