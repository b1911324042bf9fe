#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod table;
pub use table::{Table, UNDEFINED, is_undefined};

mod steps;
pub use steps::{Direction, Steps};

mod column;
pub use column::ColumnRole;

mod placement;
pub use placement::ComputePlacement;
