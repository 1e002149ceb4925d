//! Sum-keyed grouping of the full enumeration for histogram binning.

use std::collections::BTreeMap;

use crate::enumerate::Subset;

/// Subsets grouped by sum value, keys ascending.
///
/// Within a group, insertion order follows enumeration order
/// (mask-ascending). Built from the full enumeration regardless of any
/// threshold; the threshold is only overlaid as a marker when rendering.
pub type SumGroups = BTreeMap<u64, Vec<Subset>>;

/// Groups every subset under its own sum.
///
/// A single-element input yields one group containing one subset; the group
/// sizes always add up to `2^N - 1`.
pub fn group_by_sum(subsets: &[Subset]) -> SumGroups {
    let mut groups: SumGroups = BTreeMap::new();
    for subset in subsets {
        groups.entry(subset.sum).or_default().push(subset.clone());
    }
    groups
}
