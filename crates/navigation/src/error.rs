//! Engine error types.
//!
//! Gate and route failures are never fatal to a request: callers recover
//! locally (gates fail open, unresolvable routes serialize as a null
//! href). The error types exist so collaborators can report *why* a call
//! failed, and so a denial is never conflated with a broken check.

use thiserror::Error;

/// Failure modes of a permission-gate evaluation.
///
/// A denial is not an error: `GateEvaluator::check` returns `Ok(false)`
/// for "subject lacks the permission". Both variants here fail open when
/// deciding visibility.
#[derive(Debug, Error)]
pub enum GateError {
    /// No gate with this name is registered with the authorization system.
    #[error("gate `{0}` is not registered")]
    Unregistered(String),

    /// The gate exists but evaluating it failed.
    #[error("gate evaluation failed")]
    Evaluation(#[from] anyhow::Error),
}

/// Failure modes of symbolic route resolution.
#[derive(Debug, Error)]
pub enum RouteError {
    /// No route with this name is registered.
    #[error("no route named `{0}`")]
    Unknown(String),

    /// The route exists but generating a URL for it failed.
    #[error("route generation failed")]
    Generation(#[from] anyhow::Error),
}
