//! Construction limits for hive shapes.
//!
//! [`HiveConfig`] bounds how far a [`Shape`](crate::Shape) may grow while it
//! is walked. Shapes are caller code, so a `dy` that never answers `false`
//! has to be cut off somewhere.

use crate::error::HiveError;

/// Limits applied while walking a shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiveConfig {
    /// Maximum rings appended along one axis. Default: 65 536.
    pub max_rings: u32,
    /// Maximum total slot count. Default: 2^26.
    pub max_slots: usize,
}

impl Default for HiveConfig {
    fn default() -> Self {
        Self {
            max_rings: 1 << 16,
            max_slots: 1 << 26,
        }
    }
}

impl HiveConfig {
    /// Ring indices are stored in `i32` coordinates.
    pub const MAX_RINGS: u32 = i32::MAX as u32;

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), HiveError> {
        if self.max_rings == 0 {
            return Err(HiveError::InvalidConfig {
                reason: "max_rings must be at least 1".into(),
            });
        }
        if self.max_rings > Self::MAX_RINGS {
            return Err(HiveError::InvalidConfig {
                reason: format!("max_rings {} exceeds {}", self.max_rings, Self::MAX_RINGS),
            });
        }
        if self.max_slots == 0 {
            return Err(HiveError::InvalidConfig {
                reason: "max_slots must be at least 1".into(),
            });
        }
        Ok(())
    }
}
