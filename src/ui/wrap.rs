//! Word wrapping for styled text with a per-line prefix.
//!
//! ratatui's `Wrap` does not repeat a prefix on continuation lines, so card
//! bodies are pre-wrapped here: every visual line gets the gutter prefix and
//! the content pane can count lines exactly.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Content narrower than this is not wrapped at all.
const MIN_CONTENT_WIDTH: usize = 5;

enum Token {
    Word(String, Style),
    Space(String, Style),
    Break,
}

fn tokenize(segments: &[Span<'static>]) -> Vec<Token> {
    let mut tokens = Vec::new();
    for span in segments {
        let style = span.style;
        let mut current = String::new();
        let mut in_space = false;

        let flush = |current: &mut String, in_space: bool, tokens: &mut Vec<Token>| {
            if current.is_empty() {
                return;
            }
            let text = std::mem::take(current);
            tokens.push(if in_space {
                Token::Space(text, style)
            } else {
                Token::Word(text, style)
            });
        };

        for c in span.content.chars() {
            if c == '\n' {
                flush(&mut current, in_space, &mut tokens);
                tokens.push(Token::Break);
                continue;
            }
            let is_space = c == ' ' || c == '\t';
            if is_space != in_space {
                flush(&mut current, in_space, &mut tokens);
                in_space = is_space;
            }
            current.push(if c == '\t' { ' ' } else { c });
        }
        flush(&mut current, in_space, &mut tokens);
    }
    tokens
}

struct LineBuilder {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    width: usize,
    pending_space: Option<(String, Style)>,
    rest_prefix: Span<'static>,
}

impl LineBuilder {
    fn new(first_prefix: Span<'static>, rest_prefix: Span<'static>) -> Self {
        Self {
            lines: Vec::new(),
            spans: vec![first_prefix],
            width: 0,
            pending_space: None,
            rest_prefix,
        }
    }

    fn push(&mut self, text: String, style: Style, width: usize) {
        if let Some((space, space_style)) = self.pending_space.take() {
            self.width += space.width();
            self.spans.push(Span::styled(space, space_style));
        }
        self.width += width;
        self.spans.push(Span::styled(text, style));
    }

    fn newline(&mut self) {
        let spans = std::mem::replace(&mut self.spans, vec![self.rest_prefix.clone()]);
        self.lines.push(Line::from(spans));
        self.width = 0;
        self.pending_space = None;
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        if self.spans.len() > 1 || self.lines.is_empty() {
            self.newline();
        }
        self.lines
    }
}

/// Wrap `segments` to `max_width` columns (prefix included).
///
/// The first visual line starts with `first_prefix`, later ones with
/// `rest_prefix`; both should have the same display width. Words wider
/// than the available space are broken at character boundaries.
pub fn wrap_with_prefix(
    segments: Vec<Span<'static>>,
    first_prefix: Span<'static>,
    rest_prefix: Span<'static>,
    max_width: usize,
) -> Vec<Line<'static>> {
    let content_width = max_width.saturating_sub(first_prefix.content.width());

    if content_width < MIN_CONTENT_WIDTH {
        let mut spans = vec![first_prefix];
        spans.extend(segments);
        return vec![Line::from(spans)];
    }

    let mut builder = LineBuilder::new(first_prefix, rest_prefix);
    for token in tokenize(&segments) {
        match token {
            Token::Break => builder.newline(),
            Token::Space(text, style) => {
                // Leading spaces on continuation lines are dropped
                if builder.width > 0 {
                    builder.pending_space = Some((text, style));
                }
            }
            Token::Word(text, style) => {
                let width = text.width();
                let space = builder
                    .pending_space
                    .as_ref()
                    .map(|(s, _)| s.width())
                    .unwrap_or(0);

                if builder.width + space + width <= content_width {
                    builder.push(text, style, width);
                    continue;
                }
                if builder.width > 0 {
                    builder.newline();
                }
                if width <= content_width {
                    builder.push(text, style, width);
                    continue;
                }

                let mut chunk = String::new();
                let mut chunk_width = 0;
                for c in text.chars() {
                    let w = c.width().unwrap_or(1);
                    if chunk_width + w > content_width && !chunk.is_empty() {
                        builder.push(std::mem::take(&mut chunk), style, chunk_width);
                        builder.newline();
                        chunk_width = 0;
                    }
                    chunk.push(c);
                    chunk_width += w;
                }
                if !chunk.is_empty() {
                    builder.push(chunk, style, chunk_width);
                }
            }
        }
    }
    builder.finish()
}

/// Wrap plain text with a single style and a uniform prefix.
pub fn wrap_text(
    text: &str,
    style: Style,
    prefix: Span<'static>,
    max_width: usize,
) -> Vec<Line<'static>> {
    wrap_with_prefix(
        vec![Span::styled(text.to_string(), style)],
        prefix.clone(),
        prefix,
        max_width,
    )
}

/// Plain text of a line, for tests and the text printer.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
