//! Sentiero navigation engine.
//!
//! Composes the application's sidebar from a polymorphic tree of sections
//! and items, filters it per request against permission gates and feature
//! flags, orders it deterministically, and serializes it into the stable
//! payload the frontend consumes.
//!
//! The engine performs no I/O of its own. Identity, gate evaluation,
//! feature flags, and route resolution are collaborator traits supplied
//! through a per-request [`VisibilityContext`]; a broken or unknown gate
//! fails open rather than hiding part of the UI.
//!
//! Lifecycle: build a [`NavigationManager`] and register sections during
//! startup, then share it read-only (typically in an `Arc`) and call
//! [`NavigationManager::to_payload`] once per request.

pub mod definition;
pub mod error;
pub mod item;
pub mod manager;
pub mod payload;
pub mod section;
pub mod visibility;

pub use definition::{ItemDef, SectionDef, sections_from_json};
pub use error::{GateError, RouteError};
pub use item::{DEFAULT_ORDER, Item, NavigationItem, Target};
pub use manager::NavigationManager;
pub use payload::{Badge, ItemPayload, NavigationPayload, SectionPayload};
pub use section::{NavigationSection, Section};
pub use visibility::{FeatureFlags, GateEvaluator, RouteResolver, Subject, VisibilityContext};
