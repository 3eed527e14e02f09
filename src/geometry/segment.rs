use crate::error::{GeometryError, Result};
use crate::math::{is_finite_2d, Point2, Vector2, TOLERANCE};

/// The slice line: an ordered pair of anchors `A` → `A′`.
///
/// Construction guarantees distinct, finite anchors with a finite distance
/// between them, so the unit direction is always well defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    start: Point2,
    end: Point2,
}

impl LineSegment {
    /// Creates a new slice line from anchor `A` (`start`) to anchor `A′` (`end`).
    ///
    /// # Errors
    ///
    /// - `GeometryError::NonFinite` if either anchor has a NaN or infinite
    ///   coordinate, or the anchors are too far apart for `|A′ − A|` to be finite
    /// - `GeometryError::ZeroLengthLine` if the anchors coincide
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        if !is_finite_2d(&start) || !is_finite_2d(&end) {
            tracing::warn!(?start, ?end, "rejected slice line with non-finite anchor");
            return Err(GeometryError::NonFinite { what: "slice anchor" }.into());
        }
        let length = (end - start).norm();
        if !length.is_finite() {
            tracing::warn!(?start, ?end, "rejected slice line with overflowing length");
            return Err(GeometryError::NonFinite {
                what: "slice length",
            }
            .into());
        }
        if length < TOLERANCE {
            tracing::warn!(?start, "rejected zero-length slice line");
            return Err(GeometryError::ZeroLengthLine {
                x: start.x,
                y: start.y,
            }
            .into());
        }
        Ok(Self { start, end })
    }

    /// Anchor `A`.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Anchor `A′`.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// The along-line vector `A′ − A`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// The unit vector pointing from `A` to `A′`.
    #[must_use]
    pub fn unit_direction(&self) -> Vector2 {
        self.direction() / self.length()
    }

    /// Euclidean distance between the anchors.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Point at along-line distance `t` from `A` (not clamped to the segment).
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + self.unit_direction() * t
    }

    /// Signed distance of `p` along the line, measured from `A`.
    #[must_use]
    pub fn along(&self, p: &Point2) -> f64 {
        (p - self.start).dot(&self.unit_direction())
    }
}
