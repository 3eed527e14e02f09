use crate::math::polygon_2d::{point_in_polygon, signed_area_2d};
use crate::math::Point2;

use super::LineSegment;

/// Rectangular selection window of half-width `s` around a slice line.
///
/// Stored as a closed ring of 5 vertices: `A+ds`, `A′+ds`, `A′−ds`, `A−ds`,
/// `A+ds`, where `ds` is perpendicular to the line with length `s`.
/// Built by [`crate::operations::BuildCorridor`].
#[derive(Debug, Clone, PartialEq)]
pub struct Corridor {
    segment: LineSegment,
    half_width: f64,
    vertices: [Point2; 5],
}

impl Corridor {
    pub(crate) fn from_parts(segment: LineSegment, half_width: f64, vertices: [Point2; 5]) -> Self {
        Self {
            segment,
            half_width,
            vertices,
        }
    }

    /// The closed ring (first vertex repeated last).
    #[must_use]
    pub fn vertices(&self) -> &[Point2; 5] {
        &self.vertices
    }

    /// The four distinct corners.
    #[must_use]
    pub fn corners(&self) -> &[Point2] {
        &self.vertices[..4]
    }

    /// Perpendicular distance from the slice line to each long side.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// The slice line this corridor was built around.
    #[must_use]
    pub fn segment(&self) -> &LineSegment {
        &self.segment
    }

    /// Enclosed area, `2s · |A′ − A|`.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(self.corners()).abs()
    }

    /// Returns `true` if `p` is inside or within `boundary_tolerance` of the boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2, boundary_tolerance: f64) -> bool {
        point_in_polygon(p, &self.vertices, boundary_tolerance)
    }
}
