//! Mesh buffer errors.

/// Errors raised when editing mesh buffers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// A replacement vertex buffer does not match the index buffer's vertices.
    #[error("expected {expected} vertex positions, got {actual}")]
    VertexCountMismatch {
        /// Current vertex count.
        expected: usize,
        /// Length of the rejected buffer.
        actual: usize,
    },
}
