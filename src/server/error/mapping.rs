use thiserror::Error;

/// Failure to apply a transfer object onto a persisted row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The target row does not exist.
    #[error("Cannot map onto a missing entity.")]
    NullEntity,

    /// A required column was explicitly set to null.
    #[error("The field '{0}' is required.")]
    RequiredField(&'static str),
}
