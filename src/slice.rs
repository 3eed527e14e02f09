use crate::cloud::PointCloud;
use crate::error::Result;
use crate::geometry::{Corridor, LineSegment};
use crate::math::Point2;
use crate::operations::{
    BuildCorridor, ContainmentFilter, ContainmentParams, ProjectToLine, Section,
};

/// Parameters for building a [`Slice`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SliceParams {
    /// Corridor half-width. `None` keeps every point.
    pub half_width: Option<f64>,
    /// Corridor membership settings, used only when `half_width` is set.
    pub containment: ContainmentParams,
}

/// Derived state shared by both slice kinds.
#[derive(Debug, Clone, PartialEq)]
struct SliceData {
    segment: LineSegment,
    cloud: PointCloud,
    section: Section,
}

impl SliceData {
    fn project(segment: LineSegment, cloud: PointCloud) -> Self {
        let section = ProjectToLine::new(&segment).execute(&cloud);
        Self {
            segment,
            cloud,
            section,
        }
    }
}

/// Which points a slice keeps, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
enum Window {
    /// Every input point.
    Unbounded,
    /// Only points inside the corridor.
    Corridor(Corridor),
}

/// A vertical cross-section of a point cloud along a slice line.
///
/// All derived data is computed when the slice is built. The fields are
/// private, so everything a slice reports belongs to the same line and
/// corridor:
///
/// ```compile_fail
/// use xsection::math::Point2;
/// use xsection::{LineSegment, PointCloud, Slice};
///
/// let line = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)).unwrap();
/// let mut slice = Slice::windowed(line, PointCloud::new(), 2.0).unwrap();
/// slice.window = None;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    data: SliceData,
    window: Window,
}

impl Slice {
    /// Builds a slice, windowed when `half_width` is `Some`.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::InvalidGeometry` if `half_width` is not positive.
    pub fn new(segment: LineSegment, cloud: PointCloud, half_width: Option<f64>) -> Result<Self> {
        Self::with_params(
            segment,
            cloud,
            &SliceParams {
                half_width,
                ..SliceParams::default()
            },
        )
    }

    /// Builds a slice from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::InvalidGeometry` if `params.half_width` is not positive.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(points = cloud.len(), half_width = ?params.half_width)
    )]
    pub fn with_params(
        segment: LineSegment,
        cloud: PointCloud,
        params: &SliceParams,
    ) -> Result<Self> {
        match params.half_width {
            None => Ok(Self::unbounded(segment, cloud)),
            Some(s) => {
                let corridor = BuildCorridor::new(segment, s).execute()?;
                let kept =
                    ContainmentFilter::with_params(&corridor, params.containment).execute(&cloud);
                Ok(Self {
                    data: SliceData::project(segment, kept),
                    window: Window::Corridor(corridor),
                })
            }
        }
    }

    /// Builds a slice that keeps every point.
    #[must_use]
    pub fn unbounded(segment: LineSegment, cloud: PointCloud) -> Self {
        Self {
            data: SliceData::project(segment, cloud),
            window: Window::Unbounded,
        }
    }

    /// Builds a slice restricted to the corridor of half-width `half_width`.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::InvalidGeometry` if `half_width` is not positive.
    pub fn windowed(segment: LineSegment, cloud: PointCloud, half_width: f64) -> Result<Self> {
        Self::new(segment, cloud, Some(half_width))
    }

    /// Whether the slice was restricted to a corridor.
    #[must_use]
    pub fn is_windowed(&self) -> bool {
        matches!(self.window, Window::Corridor(_))
    }

    /// The corridor polygon, present only for a windowed slice.
    #[must_use]
    pub fn corridor_polygon(&self) -> Option<&Corridor> {
        match &self.window {
            Window::Unbounded => None,
            Window::Corridor(corridor) => Some(corridor),
        }
    }

    /// Corridor half-width, `None` for an unbounded slice.
    #[must_use]
    pub fn half_width(&self) -> Option<f64> {
        self.corridor_polygon().map(Corridor::half_width)
    }

    /// The slice line `A` → `A′`.
    #[must_use]
    pub fn segment(&self) -> &LineSegment {
        &self.data.segment
    }

    /// Anchors `(A, A′)`.
    #[must_use]
    pub fn anchors(&self) -> (Point2, Point2) {
        let seg = self.segment();
        (*seg.start(), *seg.end())
    }

    /// The retained points with their depths.
    #[must_use]
    pub fn filtered_cloud(&self) -> &PointCloud {
        &self.data.cloud
    }

    /// Plan positions `(easting, northing)` of the retained points.
    pub fn filtered_points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.filtered_cloud().plan_points()
    }

    /// Along-line coordinates, depths and line length.
    #[must_use]
    pub fn projected_section(&self) -> &Section {
        &self.data.section
    }

    /// Distance between the anchors.
    #[must_use]
    pub fn line_length(&self) -> f64 {
        self.data.section.line_length()
    }

    /// Number of retained points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filtered_cloud().len()
    }

    /// Whether no points were retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered_cloud().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use approx::assert_relative_eq;

    fn line(ax: f64, ay: f64, bx: f64, by: f64) -> LineSegment {
        LineSegment::new(Point2::new(ax, ay), Point2::new(bx, by)).unwrap()
    }

    fn example_cloud() -> PointCloud {
        PointCloud::from_columns(
            vec![5.0, 5.0, -1.0],
            vec![1.0, 5.0, 0.0],
            vec![3.0, 3.0, 1.0],
        )
        .unwrap()
    }

    #[test]
    fn worked_example_windowed() {
        let slice = Slice::new(line(0.0, 0.0, 10.0, 0.0), example_cloud(), Some(2.0)).unwrap();
        assert!(slice.is_windowed());

        let corridor = slice.corridor_polygon().unwrap();
        let v = corridor.vertices();
        assert_eq!(v[0], v[4]);
        for expected in [
            Point2::new(0.0, 2.0),
            Point2::new(10.0, 2.0),
            Point2::new(10.0, -2.0),
            Point2::new(0.0, -2.0),
        ] {
            assert!(
                corridor.corners().iter().any(|c| (c - expected).norm() < 1e-10),
                "missing corner {expected:?}"
            );
        }

        assert_eq!(slice.len(), 1);
        assert_eq!(slice.filtered_points().collect::<Vec<_>>(), vec![Point2::new(5.0, 1.0)]);
        let section = slice.projected_section();
        assert_relative_eq!(section.newx()[0], 5.0);
        assert_relative_eq!(section.depth()[0], 3.0);
        assert_relative_eq!(slice.line_length(), 10.0);
    }

    #[test]
    fn unbounded_keeps_everything() {
        let cloud = example_cloud();
        let slice = Slice::new(line(0.0, 0.0, 10.0, 0.0), cloud.clone(), None).unwrap();
        assert!(!slice.is_windowed());
        assert!(slice.corridor_polygon().is_none());
        assert_eq!(slice.half_width(), None);
        assert_eq!(slice.len(), cloud.len());
        assert_eq!(slice.filtered_cloud(), &cloud);

        let section = slice.projected_section();
        assert_eq!(section.len(), 3);
        assert_relative_eq!(section.newx()[2], -1.0);
    }

    #[test]
    fn degenerate_line_produces_no_slice() {
        let p = Point2::new(4.0, 4.0);
        let err = LineSegment::new(p, p).unwrap_err();
        assert!(err.is_invalid_geometry());
    }

    #[test]
    fn bad_half_width_produces_no_slice() {
        for s in [0.0, -2.0] {
            let err = Slice::windowed(line(0.0, 0.0, 1.0, 1.0), example_cloud(), s).unwrap_err();
            assert!(err.is_invalid_geometry());
        }
    }

    #[test]
    fn empty_window_is_valid() {
        let slice =
            Slice::windowed(line(100.0, 100.0, 110.0, 100.0), example_cloud(), 1.0).unwrap();
        assert!(slice.is_empty());
        assert!(slice.projected_section().is_empty());
        assert_relative_eq!(slice.line_length(), 10.0);
        assert_eq!(slice.half_width(), Some(1.0));
    }

    #[test]
    fn anchors_round_trip() {
        let seg = line(1.0, 2.0, 3.0, 4.0);
        let slice = Slice::unbounded(seg, PointCloud::new());
        assert_eq!(slice.anchors(), (Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)));
        assert_eq!(slice.segment(), &seg);
    }

    #[test]
    fn params_tolerance_reaches_filter() {
        let cloud = PointCloud::from_points(&[Point3::new(5.0, 2.0005, 7.0)]);
        let strict = Slice::with_params(
            line(0.0, 0.0, 10.0, 0.0),
            cloud.clone(),
            &SliceParams {
                half_width: Some(2.0),
                ..SliceParams::default()
            },
        )
        .unwrap();
        let loose = Slice::with_params(
            line(0.0, 0.0, 10.0, 0.0),
            cloud,
            &SliceParams {
                half_width: Some(2.0),
                containment: ContainmentParams {
                    boundary_tolerance: 1e-3,
                },
            },
        )
        .unwrap();
        assert!(strict.is_empty());
        assert_eq!(loose.len(), 1);
    }

    #[test]
    fn corridor_matches_slice_line() {
        let seg = line(2.0, -1.0, 7.0, 11.0);
        let slice = Slice::windowed(seg, example_cloud(), 0.5).unwrap();
        let corridor = slice.corridor_polygon().unwrap();
        assert_eq!(corridor.segment(), slice.segment());
        assert_eq!(slice.half_width(), Some(corridor.half_width()));
        assert_relative_eq!(corridor.half_width(), 0.5);

        let copy = slice.clone();
        assert_eq!(copy, slice);
        assert_eq!(copy.corridor_polygon(), Some(corridor));
    }

    #[test]
    fn windowed_equals_filter_then_project() {
        let seg = line(-3.0, 2.0, 8.0, 9.0);
        let mut pts = Vec::new();
        for i in -5..15 {
            for j in -5..15 {
                pts.push(Point3::new(f64::from(i), f64::from(j), f64::from(i + j)));
            }
        }
        let cloud = PointCloud::from_points(&pts);
        let slice = Slice::windowed(seg, cloud.clone(), 1.5).unwrap();

        let corridor = BuildCorridor::new(seg, 1.5).execute().unwrap();
        let kept = ContainmentFilter::new(&corridor).execute(&cloud);
        let section = ProjectToLine::new(&seg).execute(&kept);

        assert_eq!(slice.filtered_cloud(), &kept);
        assert_eq!(slice.projected_section(), &section);
        for x in section.newx() {
            assert!(*x >= -1e-9 && *x <= section.line_length() + 1e-9);
        }
    }
}
