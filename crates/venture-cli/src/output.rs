use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    // Calculate column widths
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    // Print header
    let header_row: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_row.join("  "));

    // Print separator
    let sep: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep.join("  "));

    // Print rows
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let w = widths.get(i).copied().unwrap_or(0);
                format!("{:width$}", cell, width = w)
            })
            .collect();
        println!("{}", cells.join("  "));
    }
}

/// Render a horizontal ascii bar chart. Bars are scaled to the largest value;
/// an all-zero series renders empty bars.
pub fn bar_chart(title: &str, rows: &[(String, u64)], max_width: usize) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    let label_width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let max_value = rows.iter().map(|(_, v)| *v).max().unwrap_or(0);

    for (label, value) in rows {
        let bar_len = if max_value == 0 {
            0
        } else {
            ((*value as usize) * max_width).div_ceil(max_value as usize)
        };
        out.push_str(&format!(
            "  {:label_width$}  {} {}\n",
            label,
            "#".repeat(bar_len),
            value
        ));
    }
    out
}
