//! Metadata model errors

use thiserror::Error;

/// Errors raised while assembling metadata
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MetaError {
    /// A type with the same name is already part of the assembly
    #[error("Duplicate type `{name}` in assembly `{assembly}`")]
    DuplicateType {
        /// Assembly name
        assembly: String,
        /// Type name
        name: String,
    },
}
