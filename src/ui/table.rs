//! Comparison tables.
//!
//! Tables that fit the pane are drawn as aligned columns. Narrower panes
//! fall back to one record per row, each cell prefixed by its header.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::theme::{body_style, card_title_style, label_style, COLOR_ACCENT, COLOR_BORDER};
use super::wrap::wrap_with_prefix;
use crate::models::Table;

const MARGIN: &str = "   ";
const SEPARATOR: &str = " │ ";

pub fn render_table(table: &Table, width: usize) -> Vec<Line<'static>> {
    let widths = table.column_widths();
    let total = MARGIN.width()
        + widths.iter().sum::<usize>()
        + SEPARATOR.width() * widths.len().saturating_sub(1);

    if total <= width {
        render_columns(table, &widths)
    } else {
        render_records(table, width)
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn row_line(cells: &[String], widths: &[usize], style_for: impl Fn(usize) -> Style) -> Line<'static> {
    let mut spans = vec![Span::raw(MARGIN)];
    for (i, (cell, &w)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(COLOR_BORDER)));
        }
        spans.push(Span::styled(pad(cell, w), style_for(i)));
    }
    Line::from(spans)
}

fn render_columns(table: &Table, widths: &[usize]) -> Vec<Line<'static>> {
    let mut lines = vec![row_line(&table.headers, widths, |_| label_style(COLOR_ACCENT))];

    let rule = widths
        .iter()
        .map(|&w| "─".repeat(w))
        .collect::<Vec<_>>()
        .join("─┼─");
    lines.push(Line::from(vec![
        Span::raw(MARGIN),
        Span::styled(rule, Style::default().fg(COLOR_BORDER)),
    ]));

    for row in &table.rows {
        // First column names the row
        lines.push(row_line(row, widths, |i| {
            if i == 0 {
                card_title_style()
            } else {
                body_style()
            }
        }));
    }
    lines
}

fn render_records(table: &Table, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for row in &table.rows {
        let mut cells = row.iter().zip(&table.headers);
        if let Some((name, _)) = cells.next() {
            lines.push(Line::from(vec![
                Span::raw(MARGIN),
                Span::styled(name.clone(), card_title_style()),
            ]));
        }
        for (cell, header) in cells {
            let segments = vec![
                Span::styled(format!("{}: ", header), label_style(COLOR_ACCENT)),
                Span::styled(cell.clone(), body_style()),
            ];
            let prefix = Span::styled(format!("{} ", SEPARATOR), Style::default().fg(COLOR_BORDER));
            lines.extend(wrap_with_prefix(segments, prefix.clone(), prefix, width));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::wrap::line_text;

    fn table() -> Table {
        Table {
            headers: vec!["".to_string(), "Pub/Sub".to_string(), "Kafka".to_string()],
            rows: vec![
                vec!["Ordering".to_string(), "Per key".to_string(), "Per partition".to_string()],
                vec!["Replay".to_string(), "Seek".to_string(), "Offsets".to_string()],
            ],
        }
    }

    #[test]
    fn test_wide_pane_uses_columns() {
        let lines = render_table(&table(), 80);
        assert_eq!(lines.len(), 4);
        let header = line_text(&lines[0]);
        let row = line_text(&lines[2]);
        assert_eq!(header.find("Pub/Sub"), row.find("Per key"));
        assert!(line_text(&lines[1]).contains("┼"));
    }

    #[test]
    fn test_narrow_pane_uses_records() {
        let lines = render_table(&table(), 24);
        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(text[0].trim(), "Ordering");
        assert!(text[1].contains("Pub/Sub: Per key"));
        for line in &text {
            assert!(line.width() <= 24);
        }
    }
}
