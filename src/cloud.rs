use crate::error::{CloudError, Result};
use crate::math::{Point2, Point3};

/// Column-oriented point set: index `i` of each column is the same point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    easting: Vec<f64>,
    northing: Vec<f64>,
    depth: Vec<f64>,
}

impl PointCloud {
    /// Creates an empty cloud.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cloud from three aligned columns.
    ///
    /// # Errors
    ///
    /// Returns `CloudError::LengthMismatch` if the columns differ in length.
    pub fn from_columns(easting: Vec<f64>, northing: Vec<f64>, depth: Vec<f64>) -> Result<Self> {
        if easting.len() != northing.len() || easting.len() != depth.len() {
            return Err(CloudError::LengthMismatch {
                easting: easting.len(),
                northing: northing.len(),
                depth: depth.len(),
            }
            .into());
        }
        Ok(Self {
            easting,
            northing,
            depth,
        })
    }

    /// Creates a cloud from `(easting, northing, depth)` points.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Self {
        let mut cloud = Self {
            easting: Vec::with_capacity(points.len()),
            northing: Vec::with_capacity(points.len()),
            depth: Vec::with_capacity(points.len()),
        };
        for p in points {
            cloud.easting.push(p.x);
            cloud.northing.push(p.y);
            cloud.depth.push(p.z);
        }
        cloud
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.easting.len(), self.northing.len());
        debug_assert_eq!(self.easting.len(), self.depth.len());
        self.easting.len()
    }

    /// Returns `true` if the cloud has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Easting column.
    #[must_use]
    pub fn easting(&self) -> &[f64] {
        &self.easting
    }

    /// Northing column.
    #[must_use]
    pub fn northing(&self) -> &[f64] {
        &self.northing
    }

    /// Depth column, positive down.
    #[must_use]
    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    /// The point at index `i`, or `None` if out of range.
    #[must_use]
    pub fn point(&self, i: usize) -> Option<Point3> {
        Some(Point3::new(
            *self.easting.get(i)?,
            *self.northing.get(i)?,
            *self.depth.get(i)?,
        ))
    }

    /// The plan position `(easting, northing)` at index `i`.
    #[must_use]
    pub fn plan_point(&self, i: usize) -> Option<Point2> {
        Some(Point2::new(*self.easting.get(i)?, *self.northing.get(i)?))
    }

    /// Iterates over all points in order.
    pub fn iter(&self) -> impl Iterator<Item = Point3> + '_ {
        self.easting
            .iter()
            .zip(&self.northing)
            .zip(&self.depth)
            .map(|((&e, &n), &d)| Point3::new(e, n, d))
    }

    /// Iterates over the plan positions in order.
    pub fn plan_points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.easting
            .iter()
            .zip(&self.northing)
            .map(|(&e, &n)| Point2::new(e, n))
    }

    /// Returns the sub-cloud at `indices`, in the order given.
    ///
    /// Out-of-range indices are skipped.
    #[must_use]
    pub fn select(&self, indices: &[usize]) -> Self {
        let mut out = Self {
            easting: Vec::with_capacity(indices.len()),
            northing: Vec::with_capacity(indices.len()),
            depth: Vec::with_capacity(indices.len()),
        };
        for &i in indices {
            if let Some(p) = self.point(i) {
                out.easting.push(p.x);
                out.northing.push(p.y);
                out.depth.push(p.z);
            }
        }
        out
    }
}
