//! Read-only lookup over the parsed sheets.

use std::collections::HashSet;

use crate::error::ContentError;
use crate::models::{Section, Sheet};

/// A named JSON document holding one sheet.
#[derive(Debug, Clone, Copy)]
pub struct SheetSource {
    pub name: &'static str,
    pub json: &'static str,
}

/// The ordered set of sheets. There is no mutation API.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    sheets: Vec<Sheet>,
}

impl ContentStore {
    /// Parse and validate sheet documents, keeping their order.
    pub fn from_sources(sources: &[SheetSource]) -> Result<Self, ContentError> {
        let mut sheets = Vec::with_capacity(sources.len());
        for source in sources {
            let sheet: Sheet =
                serde_json::from_str(source.json).map_err(|e| ContentError::Parse {
                    source_name: source.name.to_string(),
                    source: e,
                })?;
            sheets.push(sheet);
        }
        Self::from_sheets(sheets)
    }

    /// Build a store from already-constructed sheets, validating them.
    pub fn from_sheets(sheets: Vec<Sheet>) -> Result<Self, ContentError> {
        validate(&sheets)?;
        tracing::debug!(sheets = sheets.len(), "content store loaded");
        Ok(Self { sheets })
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_ids(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn sheet(&self, id: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.id == id)
    }

    pub fn sheet_index(&self, id: &str) -> Option<usize> {
        self.sheets.iter().position(|s| s.id == id)
    }

    pub fn sheet_at(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Look up a section within a sheet. Unknown ids yield `None`.
    pub fn section(&self, sheet_id: &str, section_id: &str) -> Option<&Section> {
        self.sheet(sheet_id)?.section(section_id)
    }
}

fn validate(sheets: &[Sheet]) -> Result<(), ContentError> {
    let mut sheet_ids = HashSet::new();
    for sheet in sheets {
        if !sheet_ids.insert(sheet.id.as_str()) {
            return Err(ContentError::DuplicateSheet(sheet.id.clone()));
        }
        if sheet.sections.is_empty() {
            return Err(ContentError::EmptySheet(sheet.id.clone()));
        }

        let mut section_ids = HashSet::new();
        for section in &sheet.sections {
            if !section_ids.insert(section.id.as_str()) {
                return Err(ContentError::DuplicateSection {
                    sheet: sheet.id.clone(),
                    section: section.id.clone(),
                });
            }

            for sub in &section.subsections {
                if let Some(&index) = sub.expanded.iter().find(|&&i| i >= sub.items.len()) {
                    return Err(ContentError::ExpandedOutOfRange {
                        sheet: sheet.id.clone(),
                        section: section.id.clone(),
                        subsection: sub.title.clone(),
                        index,
                        len: sub.items.len(),
                    });
                }

                if let Some(table) = &sub.table {
                    let expected = table.headers.len();
                    if let Some(row) = table.rows.iter().find(|r| r.len() != expected) {
                        return Err(ContentError::RaggedTable {
                            sheet: sheet.id.clone(),
                            section: section.id.clone(),
                            subsection: sub.title.clone(),
                            expected,
                            found: row.len(),
                        });
                    }
                }
            }
        }
    }
    Ok(())
}
