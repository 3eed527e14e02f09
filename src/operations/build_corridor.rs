use crate::error::{GeometryError, Result};
use crate::geometry::{Corridor, LineSegment};
use crate::math::rotate_cw;

/// Builds the rectangular corridor of half-width `s` around a slice line.
///
/// # Algorithm
///
/// 1. `b1 = A′ − A`
/// 2. `b2 = rot(−90°) · b1 = (b1.y, −b1.x)`
/// 3. `ds = (s / |b2|) · b2`, perpendicular to the line with length `s`
/// 4. Ring: `A+ds`, `A′+ds`, `A′−ds`, `A−ds`, `A+ds`
#[derive(Debug)]
pub struct BuildCorridor {
    segment: LineSegment,
    half_width: f64,
}

impl BuildCorridor {
    /// Creates a new corridor construction.
    #[must_use]
    pub fn new(segment: LineSegment, half_width: f64) -> Self {
        Self {
            segment,
            half_width,
        }
    }

    /// Executes the construction.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonPositiveHalfWidth` if the half-width is
    /// zero, negative, or not finite.
    pub fn execute(&self) -> Result<Corridor> {
        let s = self.half_width;
        if !s.is_finite() || s <= 0.0 {
            tracing::warn!(half_width = s, "rejected corridor half-width");
            return Err(GeometryError::NonPositiveHalfWidth { value: s }.into());
        }

        let a = *self.segment.start();
        let a_prime = *self.segment.end();
        let b2 = rotate_cw(&self.segment.direction());
        let ds = b2 * (s / b2.norm());

        let vertices = [a + ds, a_prime + ds, a_prime - ds, a - ds, a + ds];
        tracing::debug!(half_width = s, ?vertices, "built corridor");

        Ok(Corridor::from_parts(self.segment, s, vertices))
    }
}
