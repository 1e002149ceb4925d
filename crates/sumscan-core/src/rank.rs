//! Threshold filtering and deterministic ranking of enumerated subsets.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::enumerate::Subset;

/// A subset annotated with its 1-based position after filtering and sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    /// 1-based rank in the sorted result.
    pub rank: usize,
    /// Selected values in original array order.
    pub elements: Vec<u64>,
    /// Sum of the selected values.
    pub sum: u64,
    /// Number of selected values.
    pub size: usize,
}

/// Comma-joined element text used as the final sort key.
///
/// The comparison is over numeral text, not numeric values, so `"10"`
/// orders before `"2"`. Compatibility behavior; callers must not replace
/// this with a numeric comparison.
pub fn element_key(elements: &[u64]) -> String {
    elements
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Keeps subsets with `sum >= threshold` and ranks the survivors.
///
/// Sort keys, in descending priority: sum descending, size ascending, then
/// [`element_key`] ascending. Duplicate input values can yield identical
/// element text for distinct masks; the stable sort preserves
/// mask-ascending enumeration order for such full ties, so the output is
/// deterministic for every input.
pub fn select_and_rank(subsets: &[Subset], threshold: u64) -> Vec<ResultRow> {
    let mut survivors: Vec<&Subset> = subsets
        .iter()
        .filter(|subset| subset.sum >= threshold)
        .collect();
    survivors.sort_by_cached_key(|subset| {
        (
            Reverse(subset.sum),
            subset.size,
            element_key(&subset.elements),
        )
    });

    survivors
        .into_iter()
        .enumerate()
        .map(|(index, subset)| ResultRow {
            rank: index + 1,
            elements: subset.elements.clone(),
            sum: subset.sum,
            size: subset.size,
        })
        .collect()
}
