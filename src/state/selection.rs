//! Which sheet and section are active.

/// Active sheet and section ids.
///
/// Ids are stored as given even when they match nothing in the content
/// store; resolving them is the caller's job, and an unresolved id simply
/// renders an empty view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub sheet_id: Option<String>,
    pub section_id: Option<String>,
}

impl Selection {
    pub fn new(sheet_id: impl Into<String>, section_id: Option<String>) -> Self {
        Self {
            sheet_id: Some(sheet_id.into()),
            section_id,
        }
    }

    pub fn is_sheet(&self, id: &str) -> bool {
        self.sheet_id.as_deref() == Some(id)
    }

    pub fn is_section(&self, id: &str) -> bool {
        self.section_id.as_deref() == Some(id)
    }
}
