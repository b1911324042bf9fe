#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod mask;
pub use mask::{
    build_boundary_mask, build_group_boundary_mask, distinct_times, group_boundaries, group_count,
    group_ranks,
};

mod shift;
pub use shift::{
    group_source_index, rotate, shift_column, shift_column_by_group, shift_values_by_group,
};

mod censor;
pub use censor::{expected_censored_rows, filter_undefined};

mod validate;
pub use validate::{check_full_time_grid, check_uniform_groups};

mod engine;
pub use engine::{LagEngine, LagOutput, ShiftOptions, ShiftStrategy, lag_table};

mod error;
pub use error::LagError;

pub use lagpanel_primitives::{ComputePlacement, Steps, Table};
