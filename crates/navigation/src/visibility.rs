//! Visibility predicates and the per-request evaluation context.
//!
//! All per-request inputs — the authenticated subject and the gate, flag,
//! and route collaborators — travel in an explicit [`VisibilityContext`].
//! Nothing here touches global state, so many requests can walk one
//! registered tree concurrently, each with its own context.
//!
//! The predicates are permissive by default: an unknown gate or a gate
//! whose evaluation errors must never hide a feature unintentionally, so
//! both resolve to "visible". A broken check degrades to showing too
//! much, never to a blank sidebar.

use tracing::debug;
use uuid::Uuid;

use crate::error::{GateError, RouteError};

/// The authenticated principal a navigation tree is evaluated for.
///
/// Deliberately minimal: the engine only needs an identity to hand to the
/// gate and flag collaborators. Anonymous requests carry no subject.
#[derive(Debug, Clone)]
pub struct Subject {
    /// Unique identifier (UUIDv7).
    pub id: Uuid,

    /// Account name, for logging and collaborator lookups.
    pub name: String,
}

impl Subject {
    /// Create a subject with a fresh UUIDv7.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
        }
    }
}

/// Evaluates named permission gates for a subject.
///
/// `Ok(false)` means the gate ran and denied the subject. `Err` means the
/// gate could not be consulted, which visibility treats as an allow.
pub trait GateEvaluator: Send + Sync {
    /// Evaluate a named gate for a subject.
    fn check(&self, subject: &Subject, gate: &str) -> Result<bool, GateError>;
}

/// Resolves feature flags for a subject.
///
/// Anonymous behavior (no subject) is whatever the flag backend defines
/// for unauthenticated scope; the engine passes `None` through unchanged.
pub trait FeatureFlags: Send + Sync {
    /// Check whether a named feature is active for the subject.
    fn active(&self, subject: Option<&Subject>, feature: &str) -> bool;
}

/// Resolves symbolic route names into concrete URLs.
pub trait RouteResolver: Send + Sync {
    /// Resolve a route name to a URL.
    fn resolve(&self, name: &str) -> Result<String, RouteError>;
}

/// Per-request evaluation context.
///
/// Borrowed for the duration of one tree walk; visibility is computed
/// fresh on every walk and never cached on the nodes, because permission
/// and flag state can change between requests.
pub struct VisibilityContext<'a> {
    subject: Option<&'a Subject>,
    gates: &'a dyn GateEvaluator,
    features: &'a dyn FeatureFlags,
    routes: &'a dyn RouteResolver,
}

impl<'a> VisibilityContext<'a> {
    /// Build a context for one evaluation pass.
    pub fn new(
        subject: Option<&'a Subject>,
        gates: &'a dyn GateEvaluator,
        features: &'a dyn FeatureFlags,
        routes: &'a dyn RouteResolver,
    ) -> Self {
        Self {
            subject,
            gates,
            features,
            routes,
        }
    }

    /// The subject this pass evaluates for, if any.
    pub fn subject(&self) -> Option<&Subject> {
        self.subject
    }

    /// Check a permission gate, failing open on evaluation problems.
    ///
    /// - No gate (or an empty identifier) is always granted.
    /// - A non-empty gate with no authenticated subject is denied.
    /// - An unregistered gate, or one whose evaluation errors, is granted.
    pub fn permission_granted(&self, permission: Option<&str>) -> bool {
        let Some(gate) = permission.filter(|p| !p.is_empty()) else {
            return true;
        };

        let Some(subject) = self.subject else {
            return false;
        };

        match self.gates.check(subject, gate) {
            Ok(allowed) => allowed,
            Err(e) => {
                debug!(gate, subject = %subject.name, error = %e, "gate check failed open");
                true
            }
        }
    }

    /// Check a feature flag. No flag (or an empty identifier) is active.
    pub fn feature_active(&self, feature: Option<&str>) -> bool {
        let Some(flag) = feature.filter(|f| !f.is_empty()) else {
            return true;
        };

        self.features.active(self.subject, flag)
    }

    /// Resolve a symbolic route name, mapping failure to "no URL".
    pub fn resolve_route(&self, name: &str) -> Option<String> {
        match self.routes.resolve(name) {
            Ok(url) => Some(url),
            Err(e) => {
                debug!(route = name, error = %e, "route resolution failed");
                None
            }
        }
    }
}
