use std::cmp::Reverse;

use proptest::prelude::*;
use sumscan_core::{element_key, enumerate, scan, select_and_rank, ScanInput};

fn scan_values(values: &[u64], threshold: u64) -> sumscan_core::ScanOutcome {
    let input = ScanInput::new(values.to_vec(), threshold).expect("valid input");
    scan(&input)
}

#[test]
fn ranks_one_two_three_at_threshold_four() {
    let outcome = scan_values(&[1, 2, 3], 4);
    assert_eq!(outcome.total_subsets, 7);

    let got: Vec<(usize, Vec<u64>, u64, usize)> = outcome
        .rows
        .iter()
        .map(|row| (row.rank, row.elements.clone(), row.sum, row.size))
        .collect();
    assert_eq!(
        got,
        vec![
            (1, vec![1, 2, 3], 6, 3),
            (2, vec![2, 3], 5, 2),
            (3, vec![1, 3], 4, 2),
        ]
    );
}

#[test]
fn single_value_below_threshold_yields_empty_result() {
    let outcome = scan_values(&[5], 10);
    assert!(outcome.rows.is_empty());
    assert_eq!(
        outcome.summary(),
        "Found 0 subset(s) with sum \u{2265} 10 out of 1 non-empty subset(s)."
    );
}

#[test]
fn duplicate_values_rank_deterministically() {
    let outcome = scan_values(&[2, 2], 2);
    assert_eq!(outcome.rows.len(), 3);

    assert_eq!(outcome.rows[0].elements, vec![2, 2]);
    assert_eq!(outcome.rows[0].sum, 4);

    // The two singletons tie on every key; enumeration order breaks the tie.
    assert_eq!(outcome.rows[1].elements, vec![2]);
    assert_eq!(outcome.rows[2].elements, vec![2]);
    assert_eq!(outcome.rows[1].rank, 2);
    assert_eq!(outcome.rows[2].rank, 3);

    let rerun = scan_values(&[2, 2], 2);
    assert_eq!(outcome.rows, rerun.rows);
}

#[test]
fn equal_sum_prefers_smaller_subset() {
    // {4} and {1, 3} both sum to 4; the singleton ranks first.
    let outcome = scan_values(&[1, 3, 4], 4);
    let sum_four: Vec<Vec<u64>> = outcome
        .rows
        .iter()
        .filter(|row| row.sum == 4)
        .map(|row| row.elements.clone())
        .collect();
    assert_eq!(sum_four, vec![vec![4], vec![1, 3]]);
}

#[test]
fn tie_break_compares_element_text_not_numbers() {
    // {10, 2} and {9, 3} tie on sum and size; "10,2" < "9,3" as text.
    let subsets = enumerate(&[10, 2, 9, 3]);
    let rows = select_and_rank(&subsets, 12);
    let sum_twelve: Vec<Vec<u64>> = rows
        .iter()
        .filter(|row| row.sum == 12 && row.size == 2)
        .map(|row| row.elements.clone())
        .collect();
    assert_eq!(sum_twelve, vec![vec![10, 2], vec![9, 3]]);

    assert!(element_key(&[10]) < element_key(&[2]));
    assert!(element_key(&[10, 2]) < element_key(&[9, 3]));
}

#[test]
fn sum_ordering_dominates_for_distinct_sums() {
    let outcome = scan_values(&[1, 10], 1);
    let sums: Vec<u64> = outcome.rows.iter().map(|row| row.sum).collect();
    assert_eq!(sums, vec![11, 10, 1]);
}

proptest! {
    // With distinct values the three-level key is a strict total order.
    #[test]
    fn ordering_is_strict_for_distinct_values(
        values in prop::collection::btree_set(1u64..200, 1..8),
        threshold in 1u64..100,
    ) {
        let values: Vec<u64> = values.into_iter().collect();
        let rows = select_and_rank(&enumerate(&values), threshold);
        for pair in rows.windows(2) {
            let a = (Reverse(pair[0].sum), pair[0].size, element_key(&pair[0].elements));
            let b = (Reverse(pair[1].sum), pair[1].size, element_key(&pair[1].elements));
            prop_assert!(a < b);
        }
    }
}
