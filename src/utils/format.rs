//! Plain-text table and key/value rendering for command output.

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Render a bool as "yes"/"no" for table cells
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Render rows under a header line, columns padded to the widest cell.
/// Ragged rows are allowed; missing cells render empty.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().take(columns).enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = String::new();
    render_row(&mut out, &widths, headers.iter().copied());
    render_row(&mut out, &widths, separator.iter().map(String::as_str));
    for row in rows {
        render_row(
            &mut out,
            &widths,
            (0..columns).map(|i| row.get(i).map(String::as_str).unwrap_or("")),
        );
    }
    out
}

fn render_row<'a>(out: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    let mut line = String::new();
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = widths[i].saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(' ').take(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render a titled key/value block, keys right-padded to align values.
pub fn render_kv(title: &str, pairs: &[(&str, String)]) -> String {
    let key_width = pairs.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let mut out = format!("{}\n", title);
    for (key, value) in pairs {
        out.push_str(&format!("  {:<width$}  {}\n", key, value, width = key_width));
    }
    out
}
