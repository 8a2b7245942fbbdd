//! The bundled cheat sheets.
//!
//! Sheets are JSON documents under `content/` compiled into the binary and
//! parsed once on first use.

mod store;

pub use store::{ContentStore, SheetSource};

use once_cell::sync::Lazy;

use crate::error::ContentError;

/// Bundled sheets in navigation order.
pub const BUILTIN_SOURCES: &[SheetSource] = &[
    SheetSource {
        name: "gcp-databases.json",
        json: include_str!("../../content/gcp-databases.json"),
    },
    SheetSource {
        name: "messaging.json",
        json: include_str!("../../content/messaging.json"),
    },
    SheetSource {
        name: "caching.json",
        json: include_str!("../../content/caching.json"),
    },
    SheetSource {
        name: "networking.json",
        json: include_str!("../../content/networking.json"),
    },
    SheetSource {
        name: "consistency.json",
        json: include_str!("../../content/consistency.json"),
    },
    SheetSource {
        name: "api-design.json",
        json: include_str!("../../content/api-design.json"),
    },
    SheetSource {
        name: "reliability.json",
        json: include_str!("../../content/reliability.json"),
    },
];

static BUILTIN: Lazy<Result<ContentStore, ContentError>> =
    Lazy::new(|| ContentStore::from_sources(BUILTIN_SOURCES));

/// The parsed bundled store.
///
/// Returns a reference to the load error if the bundled content is broken;
/// callers at the process boundary turn that into an exit.
pub fn builtin() -> Result<&'static ContentStore, &'static ContentError> {
    BUILTIN.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    #[test]
    fn test_builtin_loads() {
        let store = builtin().expect("bundled content must parse");
        assert_eq!(
            store.sheet_ids().collect::<Vec<_>>(),
            vec![
                "gcp-databases",
                "messaging",
                "caching",
                "networking",
                "consistency",
                "api-design",
                "reliability"
            ]
        );
    }

    #[test]
    fn test_every_sheet_has_cards() {
        let store = builtin().unwrap();
        for sheet in store.sheets() {
            let cards: usize = sheet
                .sections
                .iter()
                .flat_map(|s| &s.subsections)
                .map(|sub| sub.items.len())
                .sum();
            assert!(cards > 0, "sheet {} has no cards", sheet.id);
        }
    }

    #[test]
    fn test_caching_first_strategy_open_by_default() {
        let store = builtin().unwrap();
        let section = store.section("caching", "overview").unwrap();
        let strategies = section
            .subsections
            .iter()
            .find(|s| s.title == "Caching Strategies")
            .unwrap();
        assert_eq!(strategies.expanded, vec![0]);
        assert!(strategies.bulk_toggle);
        assert!(matches!(strategies.items[0], Item::Profile(_)));
    }

    #[test]
    fn test_caching_reference_blocks_are_always_open() {
        let store = builtin().unwrap();
        let section = store.section("caching", "overview").unwrap();
        let always_open: Vec<&str> = section
            .subsections
            .iter()
            .filter(|s| s.always_open)
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(always_open, vec!["🏗️ Cache Layers", "🗑️ Cache Invalidation"]);
    }

    #[test]
    fn test_gcp_qa_tab_holds_qa_cards() {
        let store = builtin().unwrap();
        let qa = store.section("gcp-databases", "qa").unwrap();
        assert!(qa
            .subsections
            .iter()
            .flat_map(|s| &s.items)
            .all(|item| matches!(item, Item::Qa(_))));
    }
}
