//! Line rendering for individual cards.
//!
//! Each card starts with its headline, prefixed by a focus column and a
//! toggle glyph. Always-visible text follows with a plain indent; content
//! behind the toggle gets a `│` gutter.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::theme::{
    body_style, card_title_style, cursor_style, dim_style, label_color, label_style,
    COLOR_ACCENT, COLOR_BORDER, COLOR_GOOD, COLOR_MUTED, COLOR_QA, COLOR_WARN,
};
use super::wrap::{wrap_text, wrap_with_prefix};
use crate::models::{BulletList, FactCard, Field, Item, Part, ProfileCard, QaCard, GOTCHA_LABEL};

/// Glyph for a closed expandable card
pub const GLYPH_CLOSED: &str = "▸";
/// Glyph for an open card
pub const GLYPH_OPEN: &str = "▾";
/// Glyph for a card with nothing to expand
pub const GLYPH_PLAIN: &str = "•";

const INDENT: &str = "   ";
const GUTTER: &str = " │ ";

/// How a card should be drawn.
#[derive(Debug, Clone, Copy)]
pub struct CardContext<'a> {
    pub open: bool,
    /// False for cards that always show their body
    pub toggleable: bool,
    pub focused: bool,
    pub usage_label: &'a str,
    pub width: usize,
}

/// Rendered lines of one card.
#[derive(Debug, Clone, Default)]
pub struct CardLines {
    pub lines: Vec<Line<'static>>,
    /// Leading lines that make up the headline
    pub headline_len: usize,
}

impl CardLines {
    fn headline(mut self, lines: Vec<Line<'static>>) -> Self {
        self.headline_len = lines.len();
        self.lines = lines;
        self
    }

    fn extend(&mut self, lines: Vec<Line<'static>>) {
        self.lines.extend(lines);
    }
}

pub fn render_card(item: &Item, ctx: &CardContext<'_>) -> CardLines {
    let glyph = match (ctx.toggleable && item.is_expandable(), ctx.open) {
        (false, _) => GLYPH_PLAIN,
        (true, true) => GLYPH_OPEN,
        (true, false) => GLYPH_CLOSED,
    };

    let mut card = match item {
        Item::Fact(fact) => render_fact(fact, glyph, ctx),
        Item::Qa(qa) => render_qa(qa, glyph, ctx),
        Item::Profile(profile) => render_profile(profile, glyph, ctx),
    };

    if ctx.focused {
        for line in card.lines.iter_mut().take(card.headline_len) {
            for span in line.spans.iter_mut() {
                span.style = span.style.patch(cursor_style());
            }
        }
    }
    card
}

fn focus_span(ctx: &CardContext<'_>) -> Span<'static> {
    if ctx.focused {
        Span::styled("▌", Style::default().fg(COLOR_ACCENT))
    } else {
        Span::raw(" ")
    }
}

fn headline_lines(
    segments: Vec<Span<'static>>,
    glyph: &str,
    ctx: &CardContext<'_>,
) -> Vec<Line<'static>> {
    let glyph_style = if glyph == GLYPH_PLAIN {
        dim_style()
    } else {
        Style::default().fg(COLOR_ACCENT)
    };
    let prefix = Span::styled(format!("{}{} ", focus_span(ctx).content, glyph), glyph_style);
    let mut lines = wrap_with_prefix(segments, prefix, Span::raw(INDENT), ctx.width);
    // Focus marker keeps its own color
    if ctx.focused {
        if let Some(first) = lines.first_mut() {
            let rest = first.spans[0].content.chars().skip(1).collect::<String>();
            first.spans[0] = Span::styled(rest, glyph_style);
            first.spans.insert(0, focus_span(ctx));
        }
    }
    lines
}

fn indented(text: &str, style: Style, width: usize) -> Vec<Line<'static>> {
    wrap_text(text, style, Span::raw(INDENT), width)
}

fn gutter() -> Span<'static> {
    Span::styled(GUTTER, Style::default().fg(COLOR_BORDER))
}

fn gutter_text(text: &str, style: Style, width: usize) -> Vec<Line<'static>> {
    wrap_text(text, style, gutter(), width)
}

fn gutter_label(label: &str, color: ratatui::style::Color) -> Line<'static> {
    Line::from(vec![gutter(), Span::styled(label.to_uppercase(), label_style(color))])
}

fn render_fact(fact: &FactCard, glyph: &str, ctx: &CardContext<'_>) -> CardLines {
    let head = vec![Span::styled(fact.term.clone(), card_title_style())];
    let mut card = CardLines::default().headline(headline_lines(head, glyph, ctx));
    card.extend(indented(&fact.detail, body_style(), ctx.width));

    if ctx.open {
        if let Some(usage) = &fact.usage {
            card.lines.push(gutter_label(ctx.usage_label, COLOR_GOOD));
            card.extend(gutter_text(usage, body_style(), ctx.width));
        }
        if let Some(gotcha) = &fact.gotcha {
            card.lines.push(gutter_label(GOTCHA_LABEL, COLOR_WARN));
            card.extend(gutter_text(gotcha, body_style(), ctx.width));
        }
    }
    card
}

fn render_qa(qa: &QaCard, glyph: &str, ctx: &CardContext<'_>) -> CardLines {
    let head = vec![
        Span::styled("Q ", label_style(COLOR_ACCENT)),
        Span::styled(qa.q.clone(), card_title_style()),
    ];
    let mut card = CardLines::default().headline(headline_lines(head, glyph, ctx));

    if ctx.open {
        let answer = vec![
            Span::styled("A ", label_style(COLOR_QA)),
            Span::styled(qa.a.clone(), body_style()),
        ];
        card.extend(wrap_with_prefix(answer, gutter(), gutter(), ctx.width));
    }
    card
}

fn render_profile(profile: &ProfileCard, glyph: &str, ctx: &CardContext<'_>) -> CardLines {
    let mut head = vec![Span::styled(profile.title.clone(), card_title_style())];
    if let Some(badge) = &profile.badge {
        head.push(Span::raw(" "));
        head.push(Span::styled(
            format!("[{}]", badge),
            Style::default().fg(COLOR_ACCENT),
        ));
    }
    let mut card = CardLines::default().headline(headline_lines(head, glyph, ctx));

    if let Some(tagline) = &profile.tagline {
        card.extend(indented(
            tagline,
            dim_style().add_modifier(Modifier::ITALIC),
            ctx.width,
        ));
    }
    for line in &profile.summary {
        card.extend(indented(line, Style::default().fg(COLOR_MUTED), ctx.width));
    }

    if ctx.open {
        for field in &profile.fields {
            card.extend(field_lines(field, ctx.width));
        }
        for list in &profile.lists {
            card.extend(list_lines(list, ctx.width));
        }
        for part in &profile.parts {
            card.extend(part_lines(part, ctx.width));
        }
    }
    card
}

fn field_lines(field: &Field, width: usize) -> Vec<Line<'static>> {
    let segments = vec![
        Span::styled(
            format!("{}: ", field.label),
            label_style(label_color(&field.label)),
        ),
        Span::styled(field.value.clone(), body_style()),
    ];
    wrap_with_prefix(segments, gutter(), gutter(), width)
}

fn list_lines(list: &BulletList, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![gutter_label(&list.label, label_color(&list.label))];
    for (i, item) in list.items.iter().enumerate() {
        let marker = if list.numbered {
            format!("{}. ", i + 1)
        } else {
            "• ".to_string()
        };
        let pad = " ".repeat(unicode_width::UnicodeWidthStr::width(marker.as_str()));
        let first = Span::styled(format!("{}  {}", GUTTER, marker), Style::default().fg(COLOR_BORDER));
        let rest = Span::styled(format!("{}  {}", GUTTER, pad), Style::default().fg(COLOR_BORDER));
        lines.extend(wrap_with_prefix(
            vec![Span::styled(item.clone(), body_style())],
            first,
            rest,
            width,
        ));
    }
    lines
}

fn part_lines(part: &Part, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        gutter(),
        Span::styled(part.title.clone(), card_title_style()),
    ])];
    for field in &part.fields {
        let segments = vec![
            Span::styled(
                format!("{}: ", field.label),
                label_style(label_color(&field.label)),
            ),
            Span::styled(field.value.clone(), body_style()),
        ];
        let prefix = Span::styled(format!("{}  ", GUTTER), Style::default().fg(COLOR_BORDER));
        lines.extend(wrap_with_prefix(segments, prefix.clone(), prefix, width));
    }
    lines
}
