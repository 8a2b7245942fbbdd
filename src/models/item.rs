//! Card shapes shown inside a subsection.
//!
//! Every card is one variant of [`Item`], discriminated by the `kind` tag
//! in the content documents.

use serde::{Deserialize, Serialize};

/// A single card in a subsection list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    /// Term plus explanation, with optional usage and gotcha notes.
    Fact(FactCard),
    /// Interview question with a hidden answer.
    Qa(QaCard),
    /// Rich card describing a product, pattern or strategy.
    Profile(ProfileCard),
}

impl Item {
    /// Whether the card has secondary content behind a toggle.
    ///
    /// Fact cards without `usage` or `gotcha` render fully collapsed and
    /// never react to activation.
    pub fn is_expandable(&self) -> bool {
        match self {
            Item::Fact(card) => card.usage.is_some() || card.gotcha.is_some(),
            Item::Qa(_) => true,
            Item::Profile(card) => card.has_body(),
        }
    }

    /// The primary text shown in the card header.
    pub fn headline(&self) -> &str {
        match self {
            Item::Fact(card) => &card.term,
            Item::Qa(card) => &card.q,
            Item::Profile(card) => &card.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FactCard {
    pub term: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gotcha: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QaCard {
    pub q: String,
    pub a: String,
}

/// Card with a header (title, badge, tagline, summary lines) and a body of
/// labelled fields, bullet lists and nested parts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProfileCard {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Short lines that stay visible while the card is collapsed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub summary: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lists: Vec<BulletList>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<Part>,
}

impl ProfileCard {
    pub fn has_body(&self) -> bool {
        !(self.fields.is_empty() && self.lists.is_empty() && self.parts.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BulletList {
    pub label: String,
    pub items: Vec<String>,
    #[serde(default)]
    pub numbered: bool,
}

/// A titled group of fields nested inside a profile card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Part {
    pub title: String,
    pub fields: Vec<Field>,
}
