//! Sentiero test utilities.
//!
//! In-memory implementations of the engine's collaborator traits, for
//! unit and integration tests: a gate table with per-gate outcomes, a
//! feature-flag table, and a route table. All of them are plain maps
//! built with `with_*` methods.

use std::collections::HashMap;

use anyhow::anyhow;
use uuid::Uuid;

use sentiero_navigation::error::{GateError, RouteError};
use sentiero_navigation::visibility::{FeatureFlags, GateEvaluator, RouteResolver, Subject};

/// Create a test subject with a fixed name.
pub fn test_subject() -> Subject {
    Subject {
        id: Uuid::now_v7(),
        name: "test-user".to_string(),
    }
}

/// What a registered test gate does when checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Gate runs and allows the subject.
    Allow,
    /// Gate runs and denies the subject.
    Deny,
    /// Gate evaluation errors (the engine fails open on this).
    Fail,
}

/// Gate evaluator backed by a fixed table.
///
/// Gates absent from the table report themselves as unregistered.
#[derive(Debug, Default)]
pub struct StaticGates {
    gates: HashMap<String, GateOutcome>,
}

impl StaticGates {
    /// Create an evaluator with no registered gates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a gate with a fixed outcome.
    pub fn with_gate(mut self, gate: &str, outcome: GateOutcome) -> Self {
        self.gates.insert(gate.to_string(), outcome);
        self
    }

    /// Register a gate that allows.
    pub fn with_allowed(self, gate: &str) -> Self {
        self.with_gate(gate, GateOutcome::Allow)
    }

    /// Register a gate that denies.
    pub fn with_denied(self, gate: &str) -> Self {
        self.with_gate(gate, GateOutcome::Deny)
    }

    /// Register a gate whose evaluation errors.
    pub fn with_failing(self, gate: &str) -> Self {
        self.with_gate(gate, GateOutcome::Fail)
    }
}

impl GateEvaluator for StaticGates {
    fn check(&self, _subject: &Subject, gate: &str) -> Result<bool, GateError> {
        match self.gates.get(gate) {
            Some(GateOutcome::Allow) => Ok(true),
            Some(GateOutcome::Deny) => Ok(false),
            Some(GateOutcome::Fail) => Err(GateError::Evaluation(anyhow!(
                "test gate `{gate}` configured to fail"
            ))),
            None => Err(GateError::Unregistered(gate.to_string())),
        }
    }
}

/// Feature flags backed by a fixed table; unlisted flags are inactive.
#[derive(Debug, Default)]
pub struct StaticFlags {
    flags: HashMap<String, bool>,
}

impl StaticFlags {
    /// Create a flag table with every flag inactive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flag's state.
    pub fn with_flag(mut self, flag: &str, active: bool) -> Self {
        self.flags.insert(flag.to_string(), active);
        self
    }
}

impl FeatureFlags for StaticFlags {
    fn active(&self, _subject: Option<&Subject>, feature: &str) -> bool {
        self.flags.get(feature).copied().unwrap_or(false)
    }
}

/// Route resolver backed by a fixed table.
#[derive(Debug, Default)]
pub struct StaticRoutes {
    routes: HashMap<String, String>,
}

impl StaticRoutes {
    /// Create a resolver with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route name and its URL.
    pub fn with_route(mut self, name: &str, url: &str) -> Self {
        self.routes.insert(name.to_string(), url.to_string());
        self
    }
}

impl RouteResolver for StaticRoutes {
    fn resolve(&self, name: &str) -> Result<String, RouteError> {
        self.routes
            .get(name)
            .cloned()
            .ok_or_else(|| RouteError::Unknown(name.to_string()))
    }
}
