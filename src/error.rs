//! Error types for fiber-section analysis

use thiserror::Error;

/// Main error type for section operations
#[derive(Error, Debug)]
pub enum SectionError {
    #[error("Material '{0}' not found in model")]
    MaterialNotFound(String),

    #[error("Section geometry '{0}' not found in model")]
    GeometryNotFound(String),

    #[error("Section '{0}' not found in model")]
    SectionNotFound(String),

    #[error("Duplicate name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid resultant component: {0}")]
    InvalidComponent(String),

    #[error("Material response error: {0}")]
    MaterialResponse(String),

    #[error("Singular section stiffness - section may have no fibers or a fully yielded tangent")]
    SingularStiffness,

    #[error("State determination failed to converge after {0} iterations")]
    ConvergenceFailed(usize),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for section operations
pub type SectionResult<T> = Result<T, SectionError>;
