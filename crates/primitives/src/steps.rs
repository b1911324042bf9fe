//! Signed shift width.

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Direction of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Each row sees a value from an earlier period of its group.
    Lag,
    /// Each row sees a value from a later period of its group.
    Lead,
}

/// Signed number of periods to shift by.
///
/// `Steps(1)` means "look back one period": row *t* of a group receives the
/// value observed at *t - 1*. Negative values look forward instead.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Steps(pub i64);

impl Steps {
    /// Create a new shift width.
    #[must_use]
    pub const fn new(steps: i64) -> Self {
        Self(steps)
    }

    /// Shift magnitude in periods.
    #[must_use]
    pub const fn width(self) -> usize {
        self.0.unsigned_abs() as usize
    }

    /// Check if this shift is a no-op.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Shift direction, or `None` for a zero shift.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self.0 {
            0 => None,
            n if n > 0 => Some(Direction::Lag),
            _ => Some(Direction::Lead),
        }
    }

    /// Raw signed value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_magnitude() {
        assert_eq!(Steps::new(3).width(), 3);
        assert_eq!(Steps::new(-2).width(), 2);
        assert_eq!(Steps::default().width(), 0);
    }

    #[test]
    fn direction_from_sign() {
        assert_eq!(Steps::new(1).direction(), Some(Direction::Lag));
        assert_eq!(Steps::new(-1).direction(), Some(Direction::Lead));
        assert_eq!(Steps::new(0).direction(), None);
        assert!(Steps::new(0).is_zero());
    }

    #[test]
    fn serde_transparent() {
        let s: Steps = serde_json::from_str("-4").unwrap();
        assert_eq!(s, Steps::new(-4));
        assert_eq!(serde_json::to_string(&Steps::new(2)).unwrap(), "2");
    }

    #[test]
    fn conversions() {
        let s: Steps = 5i64.into();
        let raw: i64 = s.into();
        assert_eq!(raw, 5);
        assert_eq!(s.to_string(), "5");
    }
}
