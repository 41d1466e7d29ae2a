//! Error types for the mechanics engine.

use sv_core::CoreError;

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The computed dice pool is empty or negative. No dice were drawn.
    #[error("invalid pool: {size} dice (the pool must hold at least one die)")]
    InvalidPool {
        /// Computed pool size.
        size: i64,
    },

    /// The computed dice pool is larger than a die source can be asked for.
    #[error("invalid pool: {size} dice (at most {max} can be drawn at once)")]
    PoolTooLarge {
        /// Computed pool size.
        size: i64,
        /// Largest drawable pool.
        max: u32,
    },

    /// The die source failed. Fatal for the roll in progress.
    #[error("die source failed: {0}")]
    DiceSource(String),

    /// A circle or star index outside the range shown on the sheet.
    #[error("index {index} out of range 1..={max}")]
    InvalidIndex {
        /// Requested index.
        index: u32,
        /// Largest valid index.
        max: u32,
    },

    /// The clicked control does not exist on this actor's sheet.
    #[error("{control} is not shown on this sheet: {reason}")]
    NotOnSheet {
        /// What was clicked.
        control: &'static str,
        /// Why the sheet has no such control.
        reason: &'static str,
    },

    /// A field command carried a value of the wrong type for its field.
    #[error("field {field} expects {expected}")]
    FieldType {
        /// Field name.
        field: String,
        /// Expected value type.
        expected: &'static str,
    },

    /// The settings document could not be read.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A document store error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
