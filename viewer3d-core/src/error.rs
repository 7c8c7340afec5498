use thiserror::Error;

/// Errors raised by [`crate::ObjectTransformer`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// `transform_model` was called before any strategy was bound
    #[error("no transformation strategy is bound")]
    NoStrategy,
}

/// An unrecognised [`crate::Movement`] name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown movement `{0}`, expected one of move-x, move-y, move-z, rotate-x, rotate-y, rotate-z, scale")]
pub struct ParseMovementError(pub String);

/// Errors raised while loading a Wavefront OBJ model
#[derive(Debug, Error)]
pub enum ObjError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid `{statement}` statement")]
    Syntax { line: usize, statement: String },

    #[error("line {line}: vertex coordinates must be finite numbers")]
    NonFinite { line: usize },

    #[error("line {line}: face references vertex {index}, but only {available} vertices are defined")]
    IndexOutOfRange {
        line: usize,
        index: i64,
        available: usize,
    },

    #[error("line {line}: face has {count} vertices, at least 3 are required")]
    DegenerateFace { line: usize, count: usize },
}
