#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod sort;
pub use sort::sort_panel;

mod convert;
pub use convert::{table_from_frame, table_to_frame};

mod lag;
pub use lag::{FrameLagConfig, lag_dataframe, lag_frame};

mod error;
pub use error::FrameError;
