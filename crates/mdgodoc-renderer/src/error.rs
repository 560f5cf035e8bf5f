//! Error types for rendering.

/// Error that aborts a render.
///
/// A failed render produces no output; callers must not persist anything
/// written before the failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// The tree contains a node the renderer has no rule for.
    #[error("unsupported node kind: {kind}")]
    UnsupportedNodeKind {
        /// Name of the offending node kind.
        kind: &'static str,
    },
}
