use sumscan_core::ScanOutcome;

/// Formats a subset cell as `{a, b, c}` in original array order.
pub fn format_elements(elements: &[u64]) -> String {
    let inner = elements
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{inner}}}")
}

pub fn render_table(outcome: &ScanOutcome) -> String {
    if outcome.rows.is_empty() {
        return "No subsets satisfy the threshold.".to_string();
    }

    let headers = ["#", "subset", "sum", "size"];
    let cells: Vec<[String; 4]> = outcome
        .rows
        .iter()
        .map(|row| {
            [
                row.rank.to_string(),
                format_elements(&row.elements),
                row.sum.to_string(),
                row.size.to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 1);
    lines.push(format_line(&headers.map(String::from), &widths));
    for row in &cells {
        lines.push(format_line(row, &widths));
    }
    lines.join("\n")
}

fn format_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    format!(
        "{rank:>rank_w$}  {subset:<subset_w$}  {sum:>sum_w$}  {size:>size_w$}",
        rank = cells[0],
        subset = cells[1],
        sum = cells[2],
        size = cells[3],
        rank_w = widths[0],
        subset_w = widths[1],
        sum_w = widths[2],
        size_w = widths[3],
    )
}
