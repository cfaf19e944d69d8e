use core::fmt;
use core::str::FromStr;

use uuid::Uuid;

use crate::CieError;

/// Opaque identifier assigned to a point by the store that owns it.
///
/// - random v4 uuid, so ids never collide within a session
/// - never part of the exchange format
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointId(Uuid);

impl PointId {
    /// Generate a fresh id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Debug for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PointId({})", self.0)
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PointId {
    type Err = CieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| CieError::InvalidId {
                value: s.to_string(),
            })
    }
}
