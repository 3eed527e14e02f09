use crate::cloud::PointCloud;
use crate::geometry::LineSegment;

/// A vertical section: along-line coordinates paired with depths.
///
/// Only [`ProjectToLine`] builds sections, so both columns always have the
/// same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    newx: Vec<f64>,
    depth: Vec<f64>,
    line_length: f64,
}

impl Section {
    /// Number of projected points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.newx.len()
    }

    /// Returns `true` if no point was projected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.newx.is_empty()
    }

    /// Signed distance along the slice line from `A`, per point.
    #[must_use]
    pub fn newx(&self) -> &[f64] {
        &self.newx
    }

    /// Depth per point, index-aligned with [`Section::newx`].
    #[must_use]
    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    /// `|A′ − A|`.
    #[must_use]
    pub fn line_length(&self) -> f64 {
        self.line_length
    }

    /// Iterates over `(newx, depth)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.newx.iter().copied().zip(self.depth.iter().copied())
    }

    /// `(min, max)` of the depth column, or `None` when empty.
    #[must_use]
    pub fn depth_range(&self) -> Option<(f64, f64)> {
        min_max(&self.depth)
    }

    /// `(min, max)` of the along-line column, or `None` when empty.
    #[must_use]
    pub fn newx_range(&self) -> Option<(f64, f64)> {
        min_max(&self.newx)
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Projects points onto the slice line's along-line axis.
///
/// `newx = (p − A) · (A′ − A) / |A′ − A|`. Values are not clipped to
/// `[0, line_length]`.
#[derive(Debug)]
pub struct ProjectToLine<'a> {
    segment: &'a LineSegment,
}

impl<'a> ProjectToLine<'a> {
    /// Creates a new projection onto `segment`.
    #[must_use]
    pub fn new(segment: &'a LineSegment) -> Self {
        Self { segment }
    }

    /// Executes the projection. Depths are carried through unchanged.
    #[must_use]
    pub fn execute(&self, cloud: &PointCloud) -> Section {
        let origin = self.segment.start();
        let unit = self.segment.unit_direction();
        let line_length = self.segment.length();

        let newx: Vec<f64> = cloud
            .plan_points()
            .map(|p| (p - origin).dot(&unit))
            .collect();

        tracing::debug!(points = newx.len(), line_length, "projected onto slice line");
        Section {
            newx,
            depth: cloud.depth().to_vec(),
            line_length,
        }
    }
}
