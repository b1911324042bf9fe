//! Error types for the polars adapters.

use lagpanel_engine::LagError;

/// Errors that can occur while lagging a data frame.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Engine error.
    #[error("lag error: {0}")]
    Lag(#[from] LagError),

    /// Missing column.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// Number of column names does not match the table width.
    #[error("expected {expected} column names, got {actual}")]
    ColumnCount {
        /// Table width.
        expected: usize,
        /// Names supplied.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FrameError::MissingColumn("group_id".to_string());
        assert!(err.to_string().contains("group_id"));

        let err = FrameError::ColumnCount { expected: 4, actual: 3 };
        assert_eq!(err.to_string(), "expected 4 column names, got 3");
    }
}
