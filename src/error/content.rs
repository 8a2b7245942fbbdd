//! Errors raised while loading the sheet documents.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse sheet document {source_name}: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate sheet id '{0}'")]
    DuplicateSheet(String),

    #[error("sheet '{sheet}' has duplicate section id '{section}'")]
    DuplicateSection { sheet: String, section: String },

    #[error("sheet '{0}' has no sections")]
    EmptySheet(String),

    #[error("table '{subsection}' in {sheet}/{section} has a row of {found} cells, expected {expected}")]
    RaggedTable {
        sheet: String,
        section: String,
        subsection: String,
        expected: usize,
        found: usize,
    },

    #[error("subsection '{subsection}' in {sheet}/{section} opens card {index} but has {len} cards")]
    ExpandedOutOfRange {
        sheet: String,
        section: String,
        subsection: String,
        index: usize,
        len: usize,
    },
}

impl ContentError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ContentError::Parse { .. } => "CONTENT_PARSE",
            ContentError::DuplicateSheet(_) => "CONTENT_DUPLICATE_SHEET",
            ContentError::DuplicateSection { .. } => "CONTENT_DUPLICATE_SECTION",
            ContentError::EmptySheet(_) => "CONTENT_EMPTY_SHEET",
            ContentError::RaggedTable { .. } => "CONTENT_RAGGED_TABLE",
            ContentError::ExpandedOutOfRange { .. } => "CONTENT_EXPANDED_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_duplicate_section() {
        let err = ContentError::DuplicateSection {
            sheet: "caching".to_string(),
            section: "overview".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "sheet 'caching' has duplicate section id 'overview'"
        );
        assert_eq!(err.error_code(), "CONTENT_DUPLICATE_SECTION");
    }

    #[test]
    fn test_parse_error_keeps_source() {
        use std::error::Error as _;

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ContentError::Parse {
            source_name: "broken.json".to_string(),
            source: json_err,
        };
        assert!(err.to_string().contains("broken.json"));
        assert!(err.source().is_some());
    }
}
