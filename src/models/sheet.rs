//! Sheet, section and subsection types.

use serde::{Deserialize, Serialize};

use super::item::Item;

/// Heading for a fact card's `usage` field when a sheet does not set one.
pub const DEFAULT_USAGE_LABEL: &str = "When / Example";

/// Heading for a fact card's `gotcha` field.
pub const GOTCHA_LABEL: &str = "Gotcha / Interview Tip";

/// One top-level cheat sheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Sheet {
    pub id: String,
    /// Short name for the navigation bar.
    pub label: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_label: Option<String>,
    pub sections: Vec<Section>,
}

impl Sheet {
    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// The section shown when the sheet is first selected.
    pub fn root_section(&self) -> Option<&Section> {
        self.sections.first()
    }

    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn usage_label(&self) -> &str {
        self.usage_label.as_deref().unwrap_or(DEFAULT_USAGE_LABEL)
    }

    /// Whether the sheet has more than one section worth a tab bar.
    pub fn is_tabbed(&self) -> bool {
        self.sections.len() > 1
    }
}

/// A tab within a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub subsections: Vec<Subsection>,
}

impl Section {
    /// Tab label, prefixed with the icon when there is one.
    pub fn tab_label(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", icon, self.title),
            None => self.title.clone(),
        }
    }
}

/// A titled list of cards, optionally followed by a table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Subsection {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,
    /// The whole block can be hidden from its header.
    #[serde(default)]
    pub collapsible: bool,
    /// Shows "Expand all" / "Collapse all" buttons.
    #[serde(default)]
    pub bulk_toggle: bool,
    /// Every card shows its full body and has no toggle of its own.
    #[serde(default)]
    pub always_open: bool,
    /// Card indices open when the section is mounted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expanded: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Display width of each column (max over header and cells).
    pub fn column_widths(&self) -> Vec<usize> {
        use unicode_width::UnicodeWidthStr;

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.width());
                }
            }
        }
        widths
    }
}
