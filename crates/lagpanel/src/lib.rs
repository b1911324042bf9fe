//! # lagpanel
//!
//! Lag and lead features for panel tables ordered by group then time.
//!
//! This crate provides a unified interface to the lagpanel crates.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Table, steps and placement types
//! - `engine`: Boundary masks, shifting and censoring
//! - `frame`: Polars adapters
//! - `cli`: The `lagpanel` command line tool
//!
//! ## Example
//!
//! ```rust,ignore
//! use lagpanel::engine::{ShiftOptions, lag_table};
//!
//! let out = lag_table(table, &ShiftOptions::with_steps(1))?;
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use lagpanel_primitives as primitives;
#[cfg(feature = "engine")]
#[doc(inline)]
pub use lagpanel_engine as engine;
#[cfg(feature = "frame")]
#[doc(inline)]
pub use lagpanel_frame as frame;
