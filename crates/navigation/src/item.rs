//! Navigation items — the nodes of the navigation tree.
//!
//! [`NavigationItem`] is the node contract; the provided method bodies
//! carry the visibility and serialization algorithms so an implementation
//! only supplies accessors. [`Item`] is the one concrete variant: it
//! holds every field optionally and covers static leaves, configured
//! subtrees, and plain links alike.
//!
//! Children are supplied at construction and owned exclusively by their
//! parent, so the structure is a tree by construction: no sharing, no
//! cycles.

use crate::payload::{Badge, ItemPayload};
use crate::visibility::VisibilityContext;

/// Default sort key for items and sections.
pub const DEFAULT_ORDER: i32 = 100;

/// Where an item points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Symbolic route name, expanded by the [`RouteResolver`] collaborator.
    ///
    /// [`RouteResolver`]: crate::visibility::RouteResolver
    Route(String),
    /// Literal URL (absolute, or an absolute path), passed through as-is.
    Url(String),
}

impl Target {
    /// Classify a raw target string.
    ///
    /// Strings starting with `http` or `/` are literal URLs; everything
    /// else is a symbolic route name.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.starts_with("http") || raw.starts_with('/') {
            Target::Url(raw)
        } else {
            Target::Route(raw)
        }
    }

    /// Materialize the target into an href, or `None` when resolution fails.
    pub fn resolve(&self, ctx: &VisibilityContext<'_>) -> Option<String> {
        match self {
            Target::Url(url) => Some(url.clone()),
            Target::Route(name) => ctx.resolve_route(name),
        }
    }
}

/// A node in the navigation tree: leaf, link, or grouping parent.
///
/// Object-safe so collaborators can register their own item types; the
/// provided `should_show` and `to_payload` are the engine's algorithms
/// and are not meant to be overridden.
pub trait NavigationItem: Send + Sync {
    /// Stable identifier, unique among siblings by convention.
    fn name(&self) -> &str;

    /// Display label. Implementations localize before returning; the
    /// engine treats the string as opaque.
    fn label(&self) -> String;

    /// Icon identifier, opaque to the engine.
    fn icon(&self) -> Option<String> {
        None
    }

    /// Link target, absent for pure grouping nodes.
    fn target(&self) -> Option<Target> {
        None
    }

    /// Child items, owned by this node.
    fn children(&self) -> &[Box<dyn NavigationItem>] {
        &[]
    }

    /// Badge value for display.
    fn badge(&self) -> Option<Badge> {
        None
    }

    /// Longer description for tooltips or dense layouts.
    fn description(&self) -> Option<String> {
        None
    }

    /// Permission gate guarding this item.
    fn permission(&self) -> Option<&str> {
        None
    }

    /// Feature flag guarding this item.
    fn feature(&self) -> Option<&str> {
        None
    }

    /// Sort key among siblings (lower = earlier); ties keep registration order.
    fn order(&self) -> i32 {
        DEFAULT_ORDER
    }

    /// Decide visibility for this evaluation pass.
    ///
    /// A failed permission or feature gate hides the item and, with it,
    /// its whole subtree: a denied parent short-circuits even children
    /// that would be visible on their own. An item without a target must
    /// have at least one visible child, otherwise it would render as a
    /// dead entry.
    fn should_show(&self, ctx: &VisibilityContext<'_>) -> bool {
        if !ctx.permission_granted(self.permission()) {
            return false;
        }

        if !ctx.feature_active(self.feature()) {
            return false;
        }

        if self.target().is_none() && !self.children().iter().any(|c| c.should_show(ctx)) {
            return false;
        }

        true
    }

    /// Serialize this item for the frontend.
    ///
    /// Recomputes the visible-children subset, stable-sorts it by order,
    /// resolves the target (resolution failure becomes a null route), and
    /// recurses. Pure: same context state, same payload.
    fn to_payload(&self, ctx: &VisibilityContext<'_>) -> ItemPayload {
        let mut visible: Vec<_> = self
            .children()
            .iter()
            .filter(|c| c.should_show(ctx))
            .collect();
        visible.sort_by_key(|c| c.order());

        ItemPayload {
            name: self.name().to_string(),
            label: self.label(),
            icon: self.icon(),
            route: self.target().and_then(|t| t.resolve(ctx)),
            children: visible.iter().map(|c| c.to_payload(ctx)).collect(),
            badge: self.badge(),
            description: self.description(),
        }
    }
}

/// The concrete configured item.
///
/// Every field beyond `name` and `label` is optional and set through
/// chained setters:
///
/// ```
/// use sentiero_navigation::Item;
///
/// let item = Item::new("platform", "Platform")
///     .with_icon("layers")
///     .with_child(Item::new("projects", "Projects").with_route("projects.index"))
///     .with_order(20);
/// ```
pub struct Item {
    name: String,
    label: String,
    icon: Option<String>,
    target: Option<Target>,
    children: Vec<Box<dyn NavigationItem>>,
    badge: Option<Badge>,
    description: Option<String>,
    permission: Option<String>,
    feature: Option<String>,
    order: i32,
}

impl Item {
    /// Create an item with a stable name and a display label.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            icon: None,
            target: None,
            children: Vec::new(),
            badge: None,
            description: None,
            permission: None,
            feature: None,
            order: DEFAULT_ORDER,
        }
    }

    /// Create a plain link item, deriving the name from the label.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        let label = label.into();
        let name = slug(&label);
        Self::new(name, label).with_target(Target::parse(href))
    }

    /// Set the icon identifier.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Point the item at a symbolic route name.
    pub fn with_route(self, name: impl Into<String>) -> Self {
        self.with_target(Target::Route(name.into()))
    }

    /// Point the item at a literal URL.
    pub fn with_url(self, url: impl Into<String>) -> Self {
        self.with_target(Target::Url(url.into()))
    }

    /// Set the target directly.
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    /// Append a child item.
    pub fn with_child(mut self, child: impl NavigationItem + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append already-boxed children, preserving their order.
    pub fn with_children(mut self, children: Vec<Box<dyn NavigationItem>>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set the badge value.
    pub fn with_badge(mut self, badge: impl Into<Badge>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Guard the item behind a permission gate.
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    /// Guard the item behind a feature flag.
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.feature = Some(feature.into());
        self
    }

    /// Set the sort key among siblings.
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }
}

impl NavigationItem for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self) -> String {
        self.label.clone()
    }

    fn icon(&self) -> Option<String> {
        self.icon.clone()
    }

    fn target(&self) -> Option<Target> {
        self.target.clone()
    }

    fn children(&self) -> &[Box<dyn NavigationItem>] {
        &self.children
    }

    fn badge(&self) -> Option<Badge> {
        self.badge.clone()
    }

    fn description(&self) -> Option<String> {
        self.description.clone()
    }

    fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    fn feature(&self) -> Option<&str> {
        self.feature.as_deref()
    }

    fn order(&self) -> i32 {
        self.order
    }
}

/// Derive a stable name from a display label: lowercase alphanumeric runs
/// joined by `-`.
pub(crate) fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut gap = false;

    for ch in label.chars() {
        if ch.is_alphanumeric() {
            if gap && !out.is_empty() {
                out.push('-');
            }
            gap = false;
            out.extend(ch.to_lowercase());
        } else {
            gap = true;
        }
    }

    out
}
