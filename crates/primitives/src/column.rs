//! Column role names.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Role a column index plays in a shift operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    /// Column the pre-shift values are read from.
    #[display("source")]
    Source,
    /// Column the shifted values are written to.
    #[display("target")]
    Target,
    /// Column holding the per-row time index.
    #[display("time")]
    Time,
    /// Column holding the group identifier.
    #[display("group")]
    Group,
}
