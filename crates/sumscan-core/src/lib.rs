#![deny(missing_docs)]
#![doc = "Subset-sum enumeration, ranking, and grouping for sumscan."]

pub mod enumerate;
pub mod errors;
pub mod group;
pub mod parse;
pub mod rank;
pub mod scan;

pub use enumerate::{enumerate, total_subsets, Subset, MAX_VALUES};
pub use errors::{ErrorInfo, ScanError};
pub use group::{group_by_sum, SumGroups};
pub use parse::{parse_threshold, parse_values};
pub use rank::{element_key, select_and_rank, ResultRow};
pub use scan::{scan, scan_text, ScanInput, ScanOutcome};
