//! Run orchestration: validate once, enumerate once, hand out an explicit
//! outcome object.

use serde::{Deserialize, Serialize};

use crate::enumerate::{enumerate, total_subsets, MAX_VALUES};
use crate::errors::{ErrorInfo, ScanError};
use crate::group::{group_by_sum, SumGroups};
use crate::parse::{parse_threshold, parse_values};
use crate::rank::{select_and_rank, ResultRow};

/// Validated input for a single scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanInput {
    values: Vec<u64>,
    threshold: u64,
}

impl ScanInput {
    /// Validates an already-numeric value list and threshold.
    ///
    /// Enforces the same bounds as the text parser: a non-empty list of at
    /// most [`MAX_VALUES`] strictly positive values and a strictly positive
    /// threshold.
    pub fn new(values: Vec<u64>, threshold: u64) -> Result<Self, ScanError> {
        if values.is_empty() {
            return Err(ScanError::Values(ErrorInfo::new(
                "sumscan.values_empty",
                "Please enter at least one positive integer for A.",
            )));
        }
        if values.len() > MAX_VALUES {
            return Err(ScanError::Values(
                ErrorInfo::new(
                    "sumscan.values_cap",
                    format!(
                        "N is {}. For responsiveness, please keep N \u{2264} {MAX_VALUES}.",
                        values.len()
                    ),
                )
                .with_context("length", values.len().to_string())
                .with_context("max", MAX_VALUES.to_string()),
            ));
        }
        if let Some(position) = values.iter().position(|value| *value == 0) {
            return Err(ScanError::Values(
                ErrorInfo::new(
                    "sumscan.values_token",
                    format!("A[{position}] = \"0\" is invalid. Use only positive integers."),
                )
                .with_context("position", position.to_string())
                .with_context("token", "0"),
            ));
        }
        if threshold == 0 {
            return Err(ScanError::Threshold(
                ErrorInfo::new("sumscan.threshold", "M must be a positive integer.")
                    .with_context("token", "0"),
            ));
        }
        Ok(Self { values, threshold })
    }

    /// Validates raw text input for the value list and threshold.
    pub fn from_text(values_raw: &str, threshold_raw: &str) -> Result<Self, ScanError> {
        let values = parse_values(values_raw)?;
        let threshold = parse_threshold(threshold_raw)?;
        Ok(Self { values, threshold })
    }

    /// The validated value list.
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// The validated threshold.
    pub fn threshold(&self) -> u64 {
        self.threshold
    }
}

/// Everything a single scan produced.
///
/// Replaces ambient "latest results" state: presentation and export
/// consume an outcome value, so nothing depends on invocation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// The validated input values, in original order.
    pub values: Vec<u64>,
    /// The threshold applied when ranking.
    pub threshold: u64,
    /// Count of non-empty subsets visited (`2^N - 1`).
    pub total_subsets: u64,
    /// Ranked rows meeting the threshold, best first.
    pub rows: Vec<ResultRow>,
    /// Full sum distribution, independent of the threshold.
    pub groups: SumGroups,
}

impl ScanOutcome {
    /// One-line human readable result summary.
    pub fn summary(&self) -> String {
        format!(
            "Found {} subset(s) with sum \u{2265} {} out of {} non-empty subset(s).",
            self.rows.len(),
            self.threshold,
            self.total_subsets
        )
    }
}

/// Runs a full scan: enumerate, rank the survivors, group the distribution.
pub fn scan(input: &ScanInput) -> ScanOutcome {
    let subsets = enumerate(input.values());
    let rows = select_and_rank(&subsets, input.threshold());
    let groups = group_by_sum(&subsets);
    ScanOutcome {
        values: input.values().to_vec(),
        threshold: input.threshold(),
        total_subsets: total_subsets(input.values().len()),
        rows,
        groups,
    }
}

/// Validates raw text input and runs a full scan.
///
/// Fail fast: a validation error means no enumeration work is attempted.
pub fn scan_text(values_raw: &str, threshold_raw: &str) -> Result<ScanOutcome, ScanError> {
    let input = ScanInput::from_text(values_raw, threshold_raw)?;
    Ok(scan(&input))
}
