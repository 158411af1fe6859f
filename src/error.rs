use thiserror::Error;

/// Errors raised by the engine and its input surfaces.
///
/// Insufficient history is not represented here: indicators degrade to
/// undefined values instead of failing the run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("missing required column: {column}")]
    MissingColumn { column: String },

    #[error("malformed timestamp in column {column} at row {row}: {value:?}")]
    MalformedTimestamp {
        column: String,
        row: usize,
        value: String,
    },

    #[error("malformed numeric value in column {column} at row {row}: {value:?}")]
    MalformedValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("series is empty; supply a table with at least one row")]
    EmptySeries,

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl EngineError {
    /// Column the error refers to, if any.
    pub fn column(&self) -> Option<&str> {
        match self {
            EngineError::MissingColumn { column }
            | EngineError::MalformedTimestamp { column, .. }
            | EngineError::MalformedValue { column, .. } => Some(column),
            _ => None,
        }
    }

    /// True for errors caused by the shape or content of the input table.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::MissingColumn { .. }
                | EngineError::MalformedTimestamp { .. }
                | EngineError::MalformedValue { .. }
        )
    }
}
