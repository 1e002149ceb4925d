use serde::{Deserialize, Serialize};
use sumscan_core::ScanOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigureConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 240,
        }
    }
}

/// Renders the full subset-sum distribution as a stacked SVG bar chart.
///
/// One rectangle per subset, stacked within its sum's bin; fill intensity
/// tracks subset size and a dashed vertical line marks the threshold. The
/// x axis is linear in sum value, so the marker lands at the sum it names.
pub fn render_histogram_svg(outcome: &ScanOutcome, config: &FigureConfig) -> String {
    let mut parts = vec![format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}'>",
        w = config.width,
        h = config.height
    )];
    if outcome.groups.is_empty() {
        parts.push("</svg>".into());
        return parts.join("");
    }

    let min_sum = outcome.groups.keys().next().copied().unwrap_or(0);
    let max_sum = outcome.groups.keys().next_back().copied().unwrap_or(min_sum);
    let slots = max_sum - min_sum + 1;
    let slot_width = config.width as f64 / slots as f64;
    let max_count = outcome.groups.values().map(Vec::len).max().unwrap_or(1);
    let unit = config.height as f64 / max_count as f64;
    let n = outcome.values.len();

    for (sum, members) in &outcome.groups {
        let x = (sum - min_sum) as f64 * slot_width;
        let mut stack: Vec<_> = members.iter().collect();
        stack.sort_by_key(|subset| (subset.size, subset.mask));
        for (level, subset) in stack.iter().enumerate() {
            let y = config.height as f64 - unit * (level + 1) as f64;
            let opacity = if n <= 1 {
                1.0
            } else {
                0.35 + 0.65 * (subset.size - 1) as f64 / (n - 1) as f64
            };
            parts.push(format!(
                "<rect x='{x:.2}' y='{y:.2}' width='{w:.2}' height='{h:.2}' fill='#3b82f6' fill-opacity='{opacity:.3}' />",
                w = slot_width.max(1.0),
                h = unit,
            ));
        }
    }

    if outcome.threshold >= min_sum && outcome.threshold <= max_sum + 1 {
        let x = (outcome.threshold - min_sum) as f64 * slot_width;
        parts.push(format!(
            "<line x1='{x:.2}' y1='0' x2='{x:.2}' y2='{h}' stroke='#ef4444' stroke-width='1' stroke-dasharray='4 2' />",
            h = config.height,
        ));
    }

    parts.push("</svg>".into());
    parts.join("")
}
