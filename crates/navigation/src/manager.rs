//! Navigation manager — the process-wide section registry.
//!
//! Two-phase lifecycle: sections are registered once at startup
//! (single-threaded, `&mut self`), then the manager is shared read-only —
//! typically behind an `Arc` in application state — and every request
//! runs an independent filter-and-serialize pass against its own
//! [`VisibilityContext`]. Nothing is cached between passes.

use crate::payload::NavigationPayload;
use crate::section::NavigationSection;
use crate::visibility::VisibilityContext;

/// Registry of all navigation sections, in registration order.
#[derive(Default)]
pub struct NavigationManager {
    sections: Vec<Box<dyn NavigationSection>>,
}

impl NavigationManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a section. Registration order breaks sort-order ties.
    pub fn register(&mut self, section: impl NavigationSection + 'static) -> &mut Self {
        self.sections.push(Box::new(section));
        self
    }

    /// Register a batch of boxed sections, preserving their order.
    pub fn register_many(&mut self, sections: Vec<Box<dyn NavigationSection>>) -> &mut Self {
        self.sections.extend(sections);
        self
    }

    /// All registered sections, in registration order.
    pub fn sections(&self) -> &[Box<dyn NavigationSection>] {
        &self.sections
    }

    /// The sections visible under the given context, in registration order.
    pub fn visible_sections<'m>(
        &'m self,
        ctx: &VisibilityContext<'_>,
    ) -> Vec<&'m dyn NavigationSection> {
        self.sections
            .iter()
            .filter(|section| section.should_show(ctx))
            .map(AsRef::as_ref)
            .collect()
    }

    /// Serialize the full navigation surface for one request.
    ///
    /// Visible sections are stable-sorted by order and serialized; the
    /// result is the single value handed to the rendering layer.
    pub fn to_payload(&self, ctx: &VisibilityContext<'_>) -> NavigationPayload {
        let mut visible = self.visible_sections(ctx);
        visible.sort_by_key(|section| section.order());

        NavigationPayload {
            sidebar: visible
                .iter()
                .map(|section| section.to_payload(ctx))
                .collect(),
        }
    }

    /// Number of registered sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check whether no sections are registered.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
