//! Column alignment with elastic tabstops.
//!
//! Mirrors `text/tabwriter` as `go/printer` drives it: a column block is a
//! maximal run of consecutive lines that have a terminated cell in that
//! column, and blocks of column `n + 1` never extend past the block of
//! column `n` that contains them. Trailing text never takes part.

use super::config::{Indent, Layout};

/// One output line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct Line {
    /// Nesting level
    pub indent: usize,
    /// Terminated cells, aligned across lines
    pub cells: Vec<String>,
    /// Text after the last terminated cell
    pub trailing: String,
}

impl Line {
    fn has_column(&self, column: usize) -> bool {
        column < self.cells.len()
    }
}

/// Render one alignment section, one string per line.
pub(super) fn align(lines: &[Line], layout: &Layout) -> Vec<String> {
    let mut widths: Vec<Vec<usize>> = lines.iter().map(|l| vec![0; l.cells.len()]).collect();
    column_widths(lines, 0, 0, lines.len(), layout.padding, &mut widths);

    lines
        .iter()
        .zip(&widths)
        .map(|(line, widths)| render_line(line, widths, layout))
        .collect()
}

fn column_widths(
    lines: &[Line],
    column: usize,
    start: usize,
    end: usize,
    padding: usize,
    widths: &mut [Vec<usize>],
) {
    let mut this = start;
    while this < end {
        if !lines[this].has_column(column) {
            this += 1;
            continue;
        }

        let block_start = this;
        let mut width = 0;
        let mut discardable = true;
        while this < end && lines[this].has_column(column) {
            let cell = text_width(&lines[this].cells[column]);
            if cell > 0 {
                discardable = false;
            }
            width = width.max(cell + padding);
            this += 1;
        }
        // Columns made only of empty cells take no space at all.
        if discardable {
            width = 0;
        }

        for row in &mut widths[block_start..this] {
            row[column] = width;
        }
        column_widths(lines, column + 1, block_start, this, padding, widths);
    }
}

fn render_line(line: &Line, widths: &[usize], layout: &Layout) -> String {
    let mut out = indentation(line.indent, layout.indent);
    for (cell, &width) in line.cells.iter().zip(widths) {
        out.push_str(cell);
        let pad = width.saturating_sub(text_width(cell));
        out.extend(std::iter::repeat_n(' ', pad));
    }
    out.push_str(&line.trailing);
    out.truncate(out.trim_end().len());
    out
}

fn indentation(level: usize, indent: Indent) -> String {
    match indent {
        Indent::Tab => "\t".repeat(level),
        Indent::Spaces(n) => " ".repeat(level * n),
    }
}

fn text_width(s: &str) -> usize {
    s.chars().count()
}
