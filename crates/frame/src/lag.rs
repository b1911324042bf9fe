//! Lagging polars frames.

use lagpanel_engine::{ComputePlacement, LagEngine, LagError, ShiftOptions, ShiftStrategy, Steps};
use lagpanel_primitives::is_undefined;
use ndarray::Array1;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{FrameError, sort::sort_panel, table_from_frame};

/// Column names and shift settings for lagging a data frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameLagConfig {
    /// Column to shift.
    pub source: String,
    /// Column to write shifted values to (`None` overwrites `source`).
    pub output: Option<String>,
    /// Time index column.
    pub time: String,
    /// Group id column.
    pub group: String,
    /// Signed shift width; positive lags, negative leads.
    pub steps: Steps,
    /// Keep censored rows (shifted value null) instead of dropping them.
    pub keep_all: bool,
    /// Gather strategy used by [`lag_dataframe`].
    pub strategy: ShiftStrategy,
    /// Execution placement hint used by [`lag_dataframe`].
    pub compute_placement: ComputePlacement,
}

impl Default for FrameLagConfig {
    fn default() -> Self {
        Self {
            source: "target".to_string(),
            output: None,
            time: "time_index".to_string(),
            group: "group_id".to_string(),
            steps: Steps::new(1),
            keep_all: false,
            strategy: ShiftStrategy::default(),
            compute_placement: ComputePlacement::default(),
        }
    }
}

impl FrameLagConfig {
    /// Name of the column the shifted values end up in.
    #[must_use]
    pub fn output_name(&self) -> &str {
        self.output.as_deref().unwrap_or(&self.source)
    }
}

/// Lag a panel lazily with polars window expressions.
///
/// The frame is sorted by group then time, and the source column is shifted
/// within each group, so groups never exchange values and may have any
/// length. Rows whose shifted value is null are dropped unless
/// `cfg.keep_all` is set. `cfg.strategy` and `cfg.compute_placement` are not
/// used here.
pub fn lag_frame(df: LazyFrame, cfg: &FrameLagConfig) -> LazyFrame {
    let output = cfg.output_name();
    let lagged = sort_panel(df, &cfg.group, &cfg.time).with_column(
        col(cfg.source.as_str())
            .shift(lit(cfg.steps.get()))
            .over([col(cfg.group.as_str())])
            .alias(output),
    );

    if cfg.keep_all { lagged } else { lagged.filter(col(output).is_not_null()) }
}

/// Lag a panel eagerly through the [`LagEngine`].
///
/// The frame is sorted by group then time, the time, group and source
/// columns are handed to the engine, and the shifted values are written back
/// under [`FrameLagConfig::output_name`]. Every other column is carried
/// through unchanged. Group ids may be of any type; they are compared for
/// equality only.
///
/// # Errors
/// Returns `FrameError::MissingColumn` for an unknown column name,
/// `FrameError::Lag` if the engine rejects the panel (for instance unequal
/// group lengths under [`ShiftStrategy::Rotate`]) and `FrameError::Polars`
/// for failures inside polars.
pub fn lag_dataframe(df: &DataFrame, cfg: &FrameLagConfig) -> Result<DataFrame, FrameError> {
    for name in [&cfg.source, &cfg.time, &cfg.group] {
        if df.column(name).is_err() {
            return Err(FrameError::MissingColumn(name.clone()));
        }
    }

    let mut sorted = sort_panel(df.clone().lazy(), &cfg.group, &cfg.time).collect()?;

    let codes = Array1::from(group_codes(sorted.column(&cfg.group)?));
    let table = table_from_frame(&sorted, &[cfg.time.as_str(), cfg.source.as_str()])?
        .with_column_appended(codes.view())
        .map_err(LagError::from)?;

    let options = ShiftOptions {
        source_col: Some(1),
        target_col: Some(1),
        time_col: 0,
        group_col: 2,
        steps: cfg.steps,
        append: false,
        keep_all: true,
        compute_placement: cfg.compute_placement,
        strategy: cfg.strategy,
    };
    let out = LagEngine::with_options(options).apply(table)?;

    let shifted: Vec<Option<f64>> = out
        .table
        .view()
        .column(out.shifted_col)
        .iter()
        .map(|v| (!is_undefined(*v)).then_some(*v))
        .collect();

    let output = cfg.output_name();
    sorted.with_column(Column::new(output.into(), shifted))?;

    debug!(
        rows = sorted.height(),
        output,
        boundary_rows = out.boundary_rows,
        censored = out.censored,
        keep_all = cfg.keep_all,
        "lagged data frame"
    );

    if cfg.keep_all {
        Ok(sorted)
    } else {
        Ok(sorted.lazy().filter(col(output).is_not_null()).collect()?)
    }
}

/// Number each contiguous run of equal group ids, starting from zero.
fn group_codes(column: &Column) -> Vec<f64> {
    let series = column.as_materialized_series().rechunk();
    let mut codes = Vec::with_capacity(series.len());
    let mut code = 0.0;
    let mut prev: Option<AnyValue<'_>> = None;

    for value in series.iter() {
        if prev.as_ref().is_some_and(|p| *p != value) {
            code += 1.0;
        }
        codes.push(code);
        prev = Some(value);
    }
    codes
}
