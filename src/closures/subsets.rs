use crate::fd::{AttributeSet, Schema};
use permutator::Combination;

/// Enumerates the proper, non-empty subsets of a schema.
///
/// The subsets are sorted by increasing size.
/// Subsets of the same size are sorted in the lexicographic order of their column indices,
/// which is the order in which combinations of the schema attributes are usually generated.
/// A schema with `n` attributes gives `2^n - 2` subsets (none if `n < 2`).
///
/// # Example
///
/// ```
/// # use strong_arms::fd::Schema;
/// # use strong_arms::closures::proper_subsets;
/// let schema = Schema::try_from("ABC").unwrap();
/// let subsets = proper_subsets(&schema)
///     .iter()
///     .map(|s| s.to_string())
///     .collect::<Vec<String>>();
/// assert_eq!(vec!["A", "B", "C", "AB", "AC", "BC"], subsets);
/// ```
pub fn proper_subsets(schema: &Schema) -> Vec<AttributeSet> {
    let n = schema.len();
    if n < 2 {
        return vec![];
    }
    let indices = (0..n).collect::<Vec<usize>>();
    let mut subsets = Vec::with_capacity((1 << n) - 2);
    for k in 1..n {
        let mut combinations = indices
            .combination(k)
            .map(|c| c.into_iter().copied().collect::<Vec<usize>>())
            .collect::<Vec<Vec<usize>>>();
        combinations.sort_unstable();
        subsets.extend(combinations.into_iter().map(|c| {
            c.into_iter()
                .map(|i| schema.attributes()[i])
                .collect::<AttributeSet>()
        }));
    }
    subsets
}
