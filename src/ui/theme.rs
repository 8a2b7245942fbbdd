//! Color theme constants for the sdprep UI
//!
//! Indigo-on-navy palette: indigo accent for navigation and headings,
//! green/red/amber for pro/con/warning text.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Base palette
// ============================================================================

/// App background
pub const COLOR_BG: Color = Color::Rgb(15, 15, 35);

/// Card and bar background
pub const COLOR_SURFACE: Color = Color::Rgb(26, 26, 46);

/// Borders and inactive tab background
pub const COLOR_BORDER: Color = Color::Rgb(42, 42, 74);

/// Indigo accent (brand, active tab, table headers)
pub const COLOR_ACCENT: Color = Color::Rgb(129, 140, 248);

/// Primary text
pub const COLOR_TEXT: Color = Color::Rgb(226, 232, 240);

/// Secondary text
pub const COLOR_MUTED: Color = Color::Rgb(148, 163, 184);

/// Dim text (taglines, hints)
pub const COLOR_DIM: Color = Color::Rgb(100, 116, 139);

// ============================================================================
// Semantic colors
// ============================================================================

/// "Best for", decision answers, interview triggers
pub const COLOR_GOOD: Color = Color::Rgb(34, 197, 94);

/// "Not for", cons
pub const COLOR_BAD: Color = Color::Rgb(239, 68, 68);

/// Gotchas, warnings, key details
pub const COLOR_WARN: Color = Color::Rgb(251, 191, 36);

/// Q&A answers marker
pub const COLOR_QA: Color = Color::Rgb(244, 114, 182);

/// Focused card marker and header background
pub const COLOR_CURSOR_BG: Color = Color::Rgb(42, 42, 74);

// ============================================================================
// Styles
// ============================================================================

pub fn brand_style() -> Style {
    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
}

pub fn active_tab_style() -> Style {
    Style::default()
        .fg(COLOR_BG)
        .bg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn inactive_tab_style() -> Style {
    Style::default().fg(COLOR_MUTED).bg(COLOR_BORDER)
}

pub fn heading_style() -> Style {
    Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD)
}

pub fn subsection_style() -> Style {
    Style::default().fg(COLOR_MUTED).add_modifier(Modifier::BOLD)
}

pub fn card_title_style() -> Style {
    Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD)
}

pub fn body_style() -> Style {
    Style::default().fg(COLOR_MUTED)
}

pub fn dim_style() -> Style {
    Style::default().fg(COLOR_DIM)
}

pub fn label_style(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn button_style() -> Style {
    Style::default().fg(COLOR_MUTED).bg(COLOR_BORDER)
}

pub fn cursor_style() -> Style {
    Style::default().bg(COLOR_CURSOR_BG)
}

/// Label color for a profile field or list heading, keyed on its text.
pub fn label_color(label: &str) -> Color {
    let lower = label.to_lowercase();
    if lower.starts_with("best")
        || lower.starts_with("pros")
        || lower.contains("trigger")
        || lower == "cache"
    {
        COLOR_GOOD
    } else if lower.starts_with("not") || lower.starts_with("cons") || lower.starts_with("don't") {
        COLOR_BAD
    } else if lower.starts_with("gotcha")
        || lower.starts_with("key")
        || lower.starts_with("when")
        || lower.starts_with("trade")
    {
        COLOR_WARN
    } else {
        COLOR_ACCENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_color_semantics() {
        assert_eq!(label_color("Best for"), COLOR_GOOD);
        assert_eq!(label_color("Not for"), COLOR_BAD);
        assert_eq!(label_color("Cons"), COLOR_BAD);
        assert_eq!(label_color("Gotchas"), COLOR_WARN);
        assert_eq!(label_color("Model"), COLOR_ACCENT);
        assert_eq!(label_color("Cache"), COLOR_GOOD);
        assert_eq!(label_color("Don't cache"), COLOR_BAD);
        assert_eq!(label_color("Trade-off"), COLOR_WARN);
    }
}
