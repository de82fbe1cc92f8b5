//! Pipe-delimited Markdown tables.

use std::borrow::Cow;

/// Separator cell written once per column.
const SEPARATOR_CELL: &str = "----";

/// Render a header row, a separator row and one row per entry of `rows`.
///
/// Every row is expected to have as many cells as `headers`. A `|` inside a
/// cell is written as `\|`.
pub fn render_table<S: AsRef<str>>(headers: &[S], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    push_row(&mut out, headers.iter().map(AsRef::as_ref));
    push_row(&mut out, headers.iter().map(|_| SEPARATOR_CELL));
    for row in rows {
        debug_assert_eq!(row.len(), headers.len());
        push_row(&mut out, row.iter().map(String::as_str));
    }
    out
}

/// Render a category block: title line, coverage sentence, then the table.
pub fn render_category<S: AsRef<str>>(
    heading: &str,
    sentence: &str,
    headers: &[S],
    rows: &[Vec<String>],
) -> String {
    format!(
        "# {heading} Support Table\n\n{sentence}\n\n{}",
        render_table(headers, rows)
    )
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    out.push('|');
    for cell in cells {
        out.push_str(&escape_cell(cell));
        out.push('|');
    }
    out.push('\n');
}

fn escape_cell(cell: &str) -> Cow<'_, str> {
    if cell.contains('|') {
        Cow::Owned(cell.replace('|', "\\|"))
    } else {
        Cow::Borrowed(cell)
    }
}
