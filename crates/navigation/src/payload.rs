//! Serialized navigation payloads — the frontend contract.
//!
//! These types are the stable shape handed to the rendering layer:
//! `{sidebar: [{label, items: [{name, label, icon, route, children,
//! badge, description}, ...]}, ...]}`. Optional fields serialize as
//! `null` so the frontend always sees the full field set.

use serde::{Deserialize, Serialize};

/// An opaque display value shown next to an item (a count or a tag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Badge {
    /// Numeric badge, e.g. an unread count.
    Count(i64),
    /// Text badge, e.g. "New".
    Text(String),
}

impl From<i64> for Badge {
    fn from(count: i64) -> Self {
        Badge::Count(count)
    }
}

impl From<&str> for Badge {
    fn from(text: &str) -> Self {
        Badge::Text(text.to_string())
    }
}

impl From<String> for Badge {
    fn from(text: String) -> Self {
        Badge::Text(text)
    }
}

/// One serialized navigation item, children already filtered and sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPayload {
    /// Stable identifier, for frontend keys and tests.
    pub name: String,
    /// Display label, already localized.
    pub label: String,
    /// Icon identifier, opaque to the engine.
    pub icon: Option<String>,
    /// Resolved href; `None` when the item has no target or resolution failed.
    pub route: Option<String>,
    /// Visible children, in display order.
    pub children: Vec<ItemPayload>,
    /// Badge value, if any.
    pub badge: Option<Badge>,
    /// Longer description for tooltips or dense layouts.
    pub description: Option<String>,
}

/// One serialized section, items already filtered and sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionPayload {
    /// Display label, already localized.
    pub label: String,
    /// Visible items, in display order.
    pub items: Vec<ItemPayload>,
}

/// The full navigation surface for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationPayload {
    /// Visible sections, in display order.
    pub sidebar: Vec<SectionPayload>,
}
