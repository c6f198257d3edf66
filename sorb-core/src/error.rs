/// Error types for the sorbent explorer core
use thiserror::Error;

/// Main error type for view building and selection handling
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SorbError {
    /// Requested gas is not present in the dataset
    #[error("Unknown gas: {0}")]
    UnknownGas(String),

    /// Selection index does not address a point of the current view
    #[error("Selection index {index} out of range for {len} materials")]
    IndexOutOfRange { index: usize, len: usize },

    /// Pressure step is not available for a material
    #[error("Pressure step {step} out of range for {material} ({gas}): {available} steps available")]
    PressureStepOutOfRange {
        gas: String,
        material: String,
        step: usize,
        available: usize,
    },

    /// Pressure slider moved past the configured steps
    #[error("Pressure step {step} out of range: {steps} steps configured")]
    InvalidPressureStep { step: usize, steps: usize },

    /// Gas pair preset index is not configured
    #[error("Unknown gas pair preset: {0}")]
    UnknownGasPair(usize),

    /// A material record failed validation
    #[error("Invalid material record: {0}")]
    InvalidRecord(String),

    /// The same material appears twice for one gas
    #[error("Duplicate material {material} for gas {gas}")]
    DuplicateMaterial { gas: String, material: String },

    /// Dashboard configuration failed validation
    #[error("Invalid dashboard configuration: {0}")]
    InvalidConfig(String),
}

/// Type alias for Results using SorbError
pub type Result<T> = std::result::Result<T, SorbError>;
