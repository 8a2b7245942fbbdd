//! The scrollable body of a section.
//!
//! [`build_document`] lays out every subsection of the mounted section into
//! pre-wrapped lines, recording where each focus target sits and which line
//! ranges are clickable. Rendering then only has to slice the visible window.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::card::{render_card, CardContext, GLYPH_CLOSED, GLYPH_OPEN};
use super::interaction::ClickAction;
use super::table::render_table;
use super::theme::{button_style, cursor_style, dim_style, subsection_style, COLOR_ACCENT};
use super::wrap::wrap_text;
use crate::models::{Section, Sheet, Subsection};
use crate::state::{SectionView, Target};

pub const EXPAND_ALL_LABEL: &str = "[Expand all]";
pub const COLLAPSE_ALL_LABEL: &str = "[Collapse all]";

/// A clickable range of document lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub first: usize,
    pub last: usize,
    /// Column offset and width; `None` spans the whole line
    pub columns: Option<(u16, u16)>,
    pub action: ClickAction,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    pub lines: Vec<Line<'static>>,
    /// Later anchors sit on top of earlier ones
    pub anchors: Vec<Anchor>,
    targets: Vec<(Target, usize, usize)>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// First and last line occupied by a focus target.
    pub fn target_span(&self, target: Target) -> Option<(usize, usize)> {
        self.targets
            .iter()
            .find(|(t, _, _)| *t == target)
            .map(|&(_, first, last)| (first, last))
    }

    fn push_lines(&mut self, lines: Vec<Line<'static>>) -> (usize, usize) {
        let first = self.lines.len();
        self.lines.extend(lines);
        (first, self.lines.len().saturating_sub(1).max(first))
    }
}

/// Lay out `section` for a pane `width` columns wide.
pub fn build_document(
    sheet: &Sheet,
    section: &Section,
    view: &SectionView,
    cursor: Option<Target>,
    width: u16,
) -> Document {
    let width = usize::from(width);
    let mut doc = Document::default();

    for (list, sub) in section.subsections.iter().enumerate() {
        if list > 0 {
            doc.lines.push(Line::default());
        }
        let hidden = view.is_hidden(list);
        push_header(&mut doc, sub, list, hidden, cursor, width);
        if hidden {
            continue;
        }

        if let Some(note) = &sub.note {
            let style = dim_style().add_modifier(Modifier::ITALIC);
            doc.push_lines(wrap_text(note, style, Span::raw(" "), width));
        }

        for (item_index, item) in sub.items.iter().enumerate() {
            let target = Target::Card {
                list,
                item: item_index,
            };
            let toggleable = view
                .list(list)
                .is_some_and(|l| l.is_expandable(item_index));
            let ctx = CardContext {
                open: view.is_open(list, item_index),
                toggleable,
                focused: cursor == Some(target),
                usage_label: sheet.usage_label(),
                width,
            };
            let card = render_card(item, &ctx);
            let (first, last) = doc.push_lines(card.lines);
            if toggleable {
                doc.targets.push((target, first, last));
                doc.anchors.push(Anchor {
                    first,
                    last,
                    columns: None,
                    action: ClickAction::ToggleCard {
                        list,
                        item: item_index,
                    },
                });
            }
        }

        if let Some(table) = &sub.table {
            if !sub.items.is_empty() {
                doc.lines.push(Line::default());
            }
            doc.push_lines(render_table(table, width));
        }
    }
    doc
}

fn push_header(
    doc: &mut Document,
    sub: &Subsection,
    list: usize,
    hidden: bool,
    cursor: Option<Target>,
    width: usize,
) {
    let mut spans = Vec::new();
    if sub.collapsible {
        let focused = cursor == Some(Target::Block { list });
        let marker = if focused { "▌" } else { " " };
        let glyph = if hidden { GLYPH_CLOSED } else { GLYPH_OPEN };
        spans.push(Span::styled(
            format!("{}{} ", marker, glyph),
            Style::default().fg(COLOR_ACCENT),
        ));
    } else {
        spans.push(Span::raw(" "));
    }
    let prefix_width: usize = spans.iter().map(|s| s.content.width()).sum();
    let title = truncate_to_width(&sub.title, width.saturating_sub(prefix_width));
    spans.push(Span::styled(title, subsection_style()));

    let title_width: usize = spans.iter().map(|s| s.content.width()).sum();
    let buttons_width = EXPAND_ALL_LABEL.width() + 1 + COLLAPSE_ALL_LABEL.width();
    let inline_buttons = sub.bulk_toggle && title_width + 2 + buttons_width <= width;

    let mut header = Line::from(spans);
    if cursor == Some(Target::Block { list }) {
        for span in header.spans.iter_mut() {
            span.style = span.style.patch(cursor_style());
        }
    }

    let header_line = doc.lines.len();
    let mut button_line = header_line;
    let mut button_x = 1;

    if inline_buttons {
        button_x = width - buttons_width;
        header.spans.push(Span::raw(" ".repeat(button_x - title_width)));
        push_buttons(&mut header);
        doc.lines.push(header);
    } else {
        doc.lines.push(header);
        if sub.bulk_toggle {
            let mut line = Line::from(vec![Span::raw(" ")]);
            push_buttons(&mut line);
            button_line = doc.lines.len();
            doc.lines.push(line);
        }
    }

    if sub.collapsible {
        doc.targets
            .push((Target::Block { list }, header_line, header_line));
        doc.anchors.push(Anchor {
            first: header_line,
            last: header_line,
            columns: None,
            action: ClickAction::ToggleBlock { list },
        });
    }

    if sub.bulk_toggle {
        let expand_w = EXPAND_ALL_LABEL.width() as u16;
        let collapse_x = button_x as u16 + expand_w + 1;
        doc.anchors.push(Anchor {
            first: button_line,
            last: button_line,
            columns: Some((button_x as u16, expand_w)),
            action: ClickAction::ExpandAll { list },
        });
        doc.anchors.push(Anchor {
            first: button_line,
            last: button_line,
            columns: Some((collapse_x, COLLAPSE_ALL_LABEL.width() as u16)),
            action: ClickAction::CollapseAll { list },
        });
    }
}

/// Cut `text` to at most `max` columns, marking the cut with an ellipsis.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    if max > 0 {
        out.push('…');
    }
    out
}

fn push_buttons(line: &mut Line<'static>) {
    line.spans.push(Span::styled(EXPAND_ALL_LABEL, button_style()));
    line.spans.push(Span::raw(" "));
    line.spans.push(Span::styled(COLLAPSE_ALL_LABEL, button_style()));
}
