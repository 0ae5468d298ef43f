use super::{ArmstrongRelationComputer, Relation};
use crate::{
    closures::AbridgedClosureMap,
    fd::{ArmstrongError, Schema},
};
use anyhow::Result;

/// Builds strong Armstrong relations using a bit-string encoding.
///
/// For `m` abridged closures, the relation has `2^(m+1)` rows and its values are strings of `m+1` bits.
/// The first bit is `0` in the first half of the rows and `1` in the second half.
/// Then, one bit is appended for each closure:
/// it is `0` for the attributes of the closure, while for the other attributes it alternates
/// between `0` and `1` on successive blocks of rows.
/// Blocks have a size of a quarter of the rows for the first closure, and this size is halved for each following closure.
///
/// Two rows then agree exactly on the intersection of the closures associated with the blocks that separate them,
/// so the relation satisfies exactly the dependencies implied by the closures.
///
/// # Example
///
/// ```
/// # use strong_arms::fd::{DependencyInstance, FunctionalDependencies, Schema};
/// # use strong_arms::closures::{compute_closures, reduce_closures};
/// # use strong_arms::relations::{ArmstrongRelationComputer, StrongArmstrongComputer};
/// let schema = Schema::try_from("AB").unwrap();
/// let instance = DependencyInstance::new(
///     schema.clone(),
///     FunctionalDependencies::new_with_rules(&[('A', "B")]),
/// );
/// let closures = reduce_closures(&compute_closures(&instance).unwrap(), 2);
/// let relation = StrongArmstrongComputer::new(&schema, &closures)
///     .compute_armstrong_relation()
///     .unwrap();
/// let rows = relation
///     .rows()
///     .iter()
///     .map(|r| r.join("|"))
///     .collect::<Vec<String>>();
/// assert_eq!(vec!["00|00", "01|00", "10|10", "11|10"], rows);
/// ```
pub struct StrongArmstrongComputer<'a> {
    schema: &'a Schema,
    closures: &'a AbridgedClosureMap,
}

impl<'a> StrongArmstrongComputer<'a> {
    /// Builds a new computer for a schema and its abridged closures.
    pub fn new(schema: &'a Schema, closures: &'a AbridgedClosureMap) -> Self {
        StrongArmstrongComputer { schema, closures }
    }

    fn n_rows(&self) -> Result<usize> {
        let n_bits = self.closures.len() + 1;
        u32::try_from(n_bits)
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
            .ok_or_else(|| {
                ArmstrongError::InvariantViolation(format!(
                    "cannot allocate 2^{} rows for {} closures",
                    n_bits,
                    self.closures.len()
                ))
                .into()
            })
    }
}

impl ArmstrongRelationComputer<String> for StrongArmstrongComputer<'_> {
    fn compute_armstrong_relation(&self) -> Result<Relation<String>> {
        let n_rows = self.n_rows()?;
        let n_columns = self.schema.len();
        let mut rows = (0..n_rows)
            .map(|i| {
                let bit = if i < n_rows / 2 { "0" } else { "1" };
                vec![bit.to_string(); n_columns]
            })
            .collect::<Vec<Vec<String>>>();
        let mut interval = n_rows / 2;
        for entry in self.closures.iter() {
            if interval % 2 != 0 {
                return Err(ArmstrongError::InvariantViolation(format!(
                    "block size {} cannot be halved (closure {})",
                    interval,
                    entry.key()
                ))
                .into());
            }
            interval /= 2;
            let members = self
                .schema
                .attributes()
                .iter()
                .map(|a| entry.closure().contains(a))
                .collect::<Vec<bool>>();
            for (n, row) in rows.iter_mut().enumerate() {
                let switch_bit = if (n / interval) % 2 == 0 { '0' } else { '1' };
                row.iter_mut()
                    .zip(members.iter())
                    .for_each(|(value, member)| value.push(if *member { '0' } else { switch_bit }));
            }
        }
        Relation::new(self.schema.attributes().to_vec(), rows)
    }
}
