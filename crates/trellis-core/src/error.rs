//! Compile-time error taxonomy.

use thiserror::Error;

/// Errors raised while compiling an input tree into a scene.
///
/// All variants are fatal: a build error aborts the pipeline before any
/// solving occurs and no partial scene is returned. The solver and the
/// emitter are infallible by design — numerical non-convergence and
/// unresolvable arrow endpoints are best-effort situations, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The input tree fails structural validation.
    #[error("invalid scene: {detail}")]
    Schema { detail: String },

    /// An explicit `key` or `id` was used by more than one node.
    #[error("duplicate id `{id}`")]
    DuplicateId { id: String },

    /// A `Ref` target (or operator participant) names an unknown node.
    #[error("unresolved reference `{id}`")]
    UnresolvedRef { id: String },
}

impl BuildError {
    /// Shorthand for a schema violation.
    pub fn schema(detail: impl Into<String>) -> Self {
        Self::Schema { detail: detail.into() }
    }
}
