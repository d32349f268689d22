//! Static line-segment boundary

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::SpawnError;

/// An immovable wall segment. Conceptually infinite mass: wherever the
/// collision formulas need an inverse mass for a wall, it is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub start: Vec2,
    pub end: Vec2,
}

impl Wall {
    /// Create a wall segment.
    ///
    /// # Errors
    /// Rejects coincident endpoints.
    pub fn new(start: Vec2, end: Vec2) -> Result<Self, SpawnError> {
        if start == end {
            return Err(SpawnError::DegenerateSegment);
        }
        Ok(Self { start, end })
    }

    /// Unit direction from start toward end.
    pub fn direction(&self) -> Vec2 {
        (self.end - self.start).normalize_or_zero()
    }

    /// Closest point on the segment to `p`.
    ///
    /// When the projection of `p` onto the infinite line falls outside the
    /// segment, the nearer endpoint is returned exactly.
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let dir = self.direction();
        let t = (p - self.start).dot(dir);
        if t <= 0.0 {
            self.start
        } else if t >= (self.end - self.start).length() {
            self.end
        } else {
            self.start + dir * t
        }
    }
}
