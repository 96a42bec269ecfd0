// error.rs - Error types for board construction and configuration

use thiserror::Error;

/// Faults that keep a game from being built.
///
/// Everything past construction is total: stepping, painting and rendering
/// cannot fail on a validated board.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LifeError {
    /// A board needs at least one column and one row.
    #[error("invalid board dimensions {columns}x{rows}: both must be at least 1")]
    InvalidDimensions { columns: usize, rows: usize },

    /// Cell edge in pixels must be finite and positive.
    #[error("invalid cell size {0}: must be a finite number greater than 0")]
    InvalidCellSize(f32),

    /// The delay between generations while running.
    #[error("invalid step interval: must be greater than zero")]
    InvalidInterval,

    /// No pattern in the catalogue has this name.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}

/// Result type for fallible game setup.
pub type LifeResult<T> = Result<T, LifeError>;
