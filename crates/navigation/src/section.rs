//! Navigation sections — named top-level groups of items.

use crate::item::{DEFAULT_ORDER, NavigationItem};
use crate::payload::SectionPayload;
use crate::visibility::VisibilityContext;

/// A named, ordered collection of top-level navigation items.
///
/// Like [`NavigationItem`], the provided method bodies carry the engine's
/// algorithms; implementations supply the accessors. A section with zero
/// visible items is never shown.
pub trait NavigationSection: Send + Sync {
    /// Display label, already localized.
    fn label(&self) -> String;

    /// The section's items, owned by the section.
    fn items(&self) -> &[Box<dyn NavigationItem>];

    /// Sort key among sections (lower = earlier); ties keep registration order.
    fn order(&self) -> i32 {
        DEFAULT_ORDER
    }

    /// A section shows iff at least one of its items shows.
    fn should_show(&self, ctx: &VisibilityContext<'_>) -> bool {
        self.items().iter().any(|item| item.should_show(ctx))
    }

    /// Serialize the section: visible items, stable-sorted by order.
    ///
    /// Usable standalone, without a manager — page-scoped navigation
    /// (settings, notifications) serializes a single section this way.
    fn to_payload(&self, ctx: &VisibilityContext<'_>) -> SectionPayload {
        let mut visible: Vec<_> = self
            .items()
            .iter()
            .filter(|item| item.should_show(ctx))
            .collect();
        visible.sort_by_key(|item| item.order());

        SectionPayload {
            label: self.label(),
            items: visible.iter().map(|item| item.to_payload(ctx)).collect(),
        }
    }
}

/// The concrete configured section.
pub struct Section {
    label: String,
    items: Vec<Box<dyn NavigationItem>>,
    order: i32,
}

impl Section {
    /// Create an empty section with a display label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            items: Vec::new(),
            order: DEFAULT_ORDER,
        }
    }

    /// Append an item.
    pub fn with_item(mut self, item: impl NavigationItem + 'static) -> Self {
        self.items.push(Box::new(item));
        self
    }

    /// Append already-boxed items, preserving their order.
    pub fn with_items(mut self, items: Vec<Box<dyn NavigationItem>>) -> Self {
        self.items.extend(items);
        self
    }

    /// Set the sort key among sections.
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }
}

impl NavigationSection for Section {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn items(&self) -> &[Box<dyn NavigationItem>] {
        &self.items
    }

    fn order(&self) -> i32 {
        self.order
    }
}
