//! Error types for the shift-and-mask engine.

use lagpanel_primitives::{ColumnRole, Steps};

/// Errors that can occur while lagging a table.
///
/// Every variant is raised before the input table is modified.
#[derive(Debug, thiserror::Error)]
pub enum LagError {
    /// A configured column index does not exist in the table.
    #[error("{role} column {index} out of range for table of width {width}")]
    ColumnOutOfRange {
        /// Role of the offending column.
        role: ColumnRole,
        /// Requested index.
        index: usize,
        /// Table width.
        width: usize,
    },

    /// Shift width is larger than the time grid.
    #[error("shift of {steps} periods exceeds the {distinct} distinct time values")]
    StepsExceedTimeGrid {
        /// Requested shift.
        steps: Steps,
        /// Number of distinct time values in the table.
        distinct: usize,
    },

    /// Groups differ in length, which the rotation strategy cannot handle.
    #[error("group starting at row {group_start} has {actual} rows, expected {expected}")]
    UnequalGroupLengths {
        /// Length of the first group.
        expected: usize,
        /// Length of the offending group.
        actual: usize,
        /// First row of the offending group.
        group_start: usize,
    },

    /// A group does not cover the table's time grid, which the rotation
    /// strategy needs to keep values inside their own group.
    #[error("group starting at row {group_start} does not span the {distinct} distinct time values in order")]
    GroupOffTimeGrid {
        /// First row of the offending group.
        group_start: usize,
        /// Number of distinct time values in the table.
        distinct: usize,
    },

    /// A per-row input does not cover the table.
    #[error("{what} covers {actual} rows, table has {expected}")]
    LengthMismatch {
        /// Name of the mismatched input.
        what: &'static str,
        /// Table height.
        expected: usize,
        /// Rows covered by the input.
        actual: usize,
    },

    /// Array shape error.
    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl LagError {
    /// Returns whether this error comes from the caller's configuration
    /// rather than from the shape of the data.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ColumnOutOfRange { .. } | Self::StepsExceedTimeGrid { .. })
    }
}
