//! Declarative navigation definitions.
//!
//! Providers can contribute whole sections as JSON arrays of
//! [`SectionDef`] objects instead of building [`Item`] trees in code. A
//! malformed contribution is logged and skipped; startup composition
//! never panics over one bad provider.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::item::{DEFAULT_ORDER, Item, NavigationItem, Target, slug};
use crate::manager::NavigationManager;
use crate::payload::Badge;
use crate::section::Section;

fn default_order() -> i32 {
    DEFAULT_ORDER
}

/// Declarative form of an [`Item`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    /// Stable identifier; derived from the label when omitted.
    #[serde(default)]
    pub name: Option<String>,
    /// Display label.
    pub label: String,
    /// Icon identifier.
    #[serde(default)]
    pub icon: Option<String>,
    /// Raw target: a symbolic route name, or a literal URL/path.
    #[serde(default)]
    pub target: Option<String>,
    /// Child definitions.
    #[serde(default)]
    pub children: Vec<ItemDef>,
    /// Permission gate.
    #[serde(default)]
    pub permission: Option<String>,
    /// Feature flag.
    #[serde(default)]
    pub feature: Option<String>,
    /// Badge value (number or string).
    #[serde(default)]
    pub badge: Option<Badge>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Sort key among siblings.
    #[serde(default = "default_order")]
    pub order: i32,
}

impl ItemDef {
    /// Build the concrete item, recursively building children.
    pub fn build(self) -> Item {
        let name = self.name.unwrap_or_else(|| slug(&self.label));
        let mut item = Item::new(name, self.label).with_order(self.order);

        if let Some(icon) = self.icon {
            item = item.with_icon(icon);
        }
        if let Some(target) = self.target {
            item = item.with_target(Target::parse(target));
        }
        if let Some(permission) = self.permission {
            item = item.with_permission(permission);
        }
        if let Some(feature) = self.feature {
            item = item.with_feature(feature);
        }
        if let Some(badge) = self.badge {
            item = item.with_badge(badge);
        }
        if let Some(description) = self.description {
            item = item.with_description(description);
        }

        item.with_children(
            self.children
                .into_iter()
                .map(|child| Box::new(child.build()) as Box<dyn NavigationItem>)
                .collect(),
        )
    }
}

/// Declarative form of a [`Section`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDef {
    /// Display label.
    pub label: String,
    /// Item definitions, in registration order.
    #[serde(default)]
    pub items: Vec<ItemDef>,
    /// Sort key among sections.
    #[serde(default = "default_order")]
    pub order: i32,
}

impl SectionDef {
    /// Build the concrete section.
    pub fn build(self) -> Section {
        Section::new(self.label).with_order(self.order).with_items(
            self.items
                .into_iter()
                .map(|item| Box::new(item.build()) as Box<dyn NavigationItem>)
                .collect(),
        )
    }
}

/// Parse a provider's JSON array of section definitions.
///
/// Returns an empty list (after a structured warning) when the JSON does
/// not parse; one bad provider must not take down composition.
pub fn sections_from_json(provider: &str, json: &str) -> Vec<Section> {
    match serde_json::from_str::<Vec<SectionDef>>(json) {
        Ok(defs) => defs.into_iter().map(SectionDef::build).collect(),
        Err(e) => {
            warn!(
                provider = %provider,
                error = %e,
                "failed to parse navigation definitions"
            );
            Vec::new()
        }
    }
}

impl NavigationManager {
    /// Register every section a provider contributes as JSON.
    pub fn register_json(&mut self, provider: &str, json: &str) -> &mut Self {
        for section in sections_from_json(provider, json) {
            self.register(section);
        }
        self
    }
}
