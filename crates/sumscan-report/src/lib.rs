//! Presentation layer for sumscan scan outcomes.

pub mod export;
pub mod figures;
pub mod table;

pub use export::{csv_string, write_csv};
pub use figures::{render_histogram_svg, FigureConfig};
pub use table::{format_elements, render_table};
