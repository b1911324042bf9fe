//! Lag entry point.

use lagpanel_primitives::{ColumnRole, ComputePlacement, Steps, Table};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    LagError, censor::filter_undefined, mask, shift,
    validate::{check_column, check_full_time_grid, check_steps, check_uniform_groups},
};

/// How the shifted column is gathered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStrategy {
    /// Global time mask plus one whole-table rotation.
    ///
    /// Requires every group to span the table's full time grid in order;
    /// unequal lengths and offset or gapped groups are rejected.
    #[default]
    Rotate,
    /// Per-group rank mask plus group-relative offset copy.
    GroupOffset,
}

/// Options for lagging a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftOptions {
    /// Column to read pre-shift values from (`None` for the last column).
    pub source_col: Option<usize>,
    /// Column to overwrite (`None` for the source column). Ignored when appending.
    pub target_col: Option<usize>,
    /// Column holding the time index.
    pub time_col: usize,
    /// Column holding the group id.
    pub group_col: usize,
    /// Signed shift width; positive lags, negative leads.
    pub steps: Steps,
    /// Write shifted values to a new trailing column instead of overwriting.
    pub append: bool,
    /// Keep censored rows instead of dropping them.
    pub keep_all: bool,
    /// Execution placement hint.
    pub compute_placement: ComputePlacement,
    /// Gather strategy.
    pub strategy: ShiftStrategy,
}

impl Default for ShiftOptions {
    fn default() -> Self {
        Self {
            source_col: None,
            target_col: None,
            time_col: 1,
            group_col: 2,
            steps: Steps::new(1),
            append: false,
            keep_all: false,
            compute_placement: ComputePlacement::Sequential,
            strategy: ShiftStrategy::Rotate,
        }
    }
}

impl ShiftOptions {
    /// Options for a shift of `steps` with every other setting at its default.
    #[must_use]
    pub fn with_steps(steps: i64) -> Self {
        Self { steps: Steps::new(steps), ..Self::default() }
    }
}

/// Result of lagging a table.
#[derive(Debug, Clone)]
pub struct LagOutput {
    /// Resulting table.
    pub table: Table,
    /// Index of the column holding the shifted values.
    pub shifted_col: usize,
    /// Number of boundary rows found by the mask.
    pub boundary_rows: usize,
    /// Rows removed by censoring (or that would have been, under `keep_all`).
    pub censored: usize,
}

#[derive(Debug, Clone, Copy)]
struct Resolved {
    source: usize,
    target: usize,
    time: usize,
    group: usize,
}

/// Shift-and-mask engine.
///
/// Runs mask → shift → censor over a table sorted by group and then time.
/// The sort order is not checked; an unsorted table silently produces wrong
/// boundaries.
#[derive(Debug, Clone, Default)]
pub struct LagEngine {
    options: ShiftOptions,
}

impl LagEngine {
    /// Create an engine with default options (lag of one, last column).
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ShiftOptions::default())
    }

    /// Create an engine with custom options.
    #[must_use]
    pub const fn with_options(options: ShiftOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    #[must_use]
    pub const fn options(&self) -> &ShiftOptions {
        &self.options
    }

    /// Lag the configured column of `table`.
    ///
    /// # Errors
    /// Returns a `LagError` if a column index is out of range, if `|steps|`
    /// exceeds the number of distinct time values, or if the rotation
    /// strategy is used on groups of unequal length or groups that do not
    /// span the full time grid. Nothing is modified when an error is returned.
    pub fn apply(&self, table: Table) -> Result<LagOutput, LagError> {
        let opts = &self.options;
        let cols = self.resolve(&table)?;

        let view = table.view();
        let time = view.column(cols.time);
        let distinct = mask::distinct_times(time);
        check_steps(opts.steps, distinct.len(), table.height())?;

        let boundaries = mask::group_boundaries(view.column(cols.group));
        let width = table.width();

        let (shifted, boundary_rows) = match opts.strategy {
            ShiftStrategy::Rotate => {
                check_uniform_groups(&boundaries)?;
                check_full_time_grid(time, &boundaries, &distinct)?;
                let boundary = mask::boundary_mask_from_grid(time, &distinct, opts.steps);
                let marked = boundary.iter().filter(|m| **m).count();
                let shifted = shift::shift_column(
                    table,
                    cols.source,
                    cols.target,
                    opts.steps,
                    boundary.view(),
                    opts.append,
                    opts.compute_placement,
                )?;
                (shifted, marked)
            }
            ShiftStrategy::GroupOffset => {
                let boundary = mask::group_mask_from_boundaries(&boundaries, opts.steps);
                let marked = boundary.iter().filter(|m| **m).count();
                let shifted = shift::shift_column_by_group(
                    table,
                    cols.source,
                    cols.target,
                    &boundaries,
                    opts.steps,
                    opts.append,
                    opts.compute_placement,
                )?;
                (shifted, marked)
            }
        };

        let shifted_col = if opts.append { width } else { cols.target };
        let censored = shifted.count_undefined(shifted_col);
        let table = filter_undefined(shifted, shifted_col, opts.keep_all)?;

        debug!(
            rows = table.height(),
            groups = mask::group_count(&boundaries),
            steps = %opts.steps,
            strategy = ?opts.strategy,
            boundary_rows,
            censored,
            keep_all = opts.keep_all,
            "lagged column {} into {}",
            cols.source,
            shifted_col,
        );

        Ok(LagOutput { table, shifted_col, boundary_rows, censored })
    }

    fn resolve(&self, table: &Table) -> Result<Resolved, LagError> {
        let opts = &self.options;
        let width = table.width();

        let source = check_column(
            width,
            opts.source_col.unwrap_or_else(|| width.saturating_sub(1)),
            ColumnRole::Source,
        )?;
        let target = if opts.append {
            width
        } else {
            check_column(width, opts.target_col.unwrap_or(source), ColumnRole::Target)?
        };
        let time = check_column(width, opts.time_col, ColumnRole::Time)?;
        let group = check_column(width, opts.group_col, ColumnRole::Group)?;

        Ok(Resolved { source, target, time, group })
    }
}

/// Lag `table` with the given options.
///
/// Shorthand for `LagEngine::with_options(options.clone()).apply(table)`.
///
/// # Errors
/// See [`LagEngine::apply`].
pub fn lag_table(table: Table, options: &ShiftOptions) -> Result<LagOutput, LagError> {
    LagEngine::with_options(options.clone()).apply(table)
}
