use super::distance_2d::point_to_segment_dist;
use super::{is_finite_2d, Point2};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. A repeated
/// closing vertex contributes nothing.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if `point` lies within `tolerance` of any polygon edge.
#[must_use]
pub fn point_on_boundary(point: &Point2, polygon: &[Point2], tolerance: f64) -> bool {
    let n = polygon.len();
    if n < 2 {
        return false;
    }
    (0..n).any(|i| point_to_segment_dist(point, &polygon[i], &polygon[(i + 1) % n]) <= tolerance)
}

/// Point-in-polygon test, inclusive on the boundary.
///
/// Points within `boundary_tolerance` of an edge count as inside; all other
/// points are classified with the non-zero winding rule. The polygon may be
/// given open or closed (first vertex repeated last). Non-finite points are
/// never inside.
#[must_use]
pub fn point_in_polygon(point: &Point2, polygon: &[Point2], boundary_tolerance: f64) -> bool {
    if polygon.len() < 3 || !is_finite_2d(point) {
        return false;
    }
    if point_on_boundary(point, polygon, boundary_tolerance) {
        return true;
    }
    winding_number_2d(point, polygon) != 0
}

/// Winding number of `p` with respect to polygon `verts`.
///
/// Non-zero => inside, zero => outside.
fn winding_number_2d(p: &Point2, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let v0 = verts[i];
        let v1 = verts[(i + 1) % n];
        let edge = v1 - v0;
        let to_p = p - v0;

        if v0.y <= p.y {
            if v1.y > p.y && edge.perp(&to_p) > 0.0 {
                winding += 1;
            }
        } else if v1.y <= p.y && edge.perp(&to_p) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area_2d(&unit_square());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square_closed() {
        let mut pts = unit_square();
        pts.reverse();
        pts.push(pts[0]);
        let area = signed_area_2d(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!((signed_area_2d(&[Point2::new(0.0, 0.0)])).abs() < TOLERANCE);
        assert!((signed_area_2d(&[])).abs() < TOLERANCE);
    }

    #[test]
    fn inside_and_outside() {
        let sq = unit_square();
        assert!(point_in_polygon(&Point2::new(0.5, 0.5), &sq, 1e-9));
        assert!(!point_in_polygon(&Point2::new(1.5, 0.5), &sq, 1e-9));
        assert!(!point_in_polygon(&Point2::new(0.5, -0.1), &sq, 1e-9));
    }

    #[test]
    fn boundary_is_inclusive() {
        let sq = unit_square();
        // Edges on every side, including the top and right edges that the
        // half-open winding rule alone would reject.
        assert!(point_in_polygon(&Point2::new(0.5, 0.0), &sq, 1e-9));
        assert!(point_in_polygon(&Point2::new(1.0, 0.5), &sq, 1e-9));
        assert!(point_in_polygon(&Point2::new(0.5, 1.0), &sq, 1e-9));
        assert!(point_in_polygon(&Point2::new(0.0, 0.5), &sq, 1e-9));
        // Corners.
        assert!(point_in_polygon(&Point2::new(1.0, 1.0), &sq, 1e-9));
        assert!(point_in_polygon(&Point2::new(0.0, 0.0), &sq, 1e-9));
    }

    #[test]
    fn clockwise_polygon_contains() {
        let mut sq = unit_square();
        sq.reverse();
        assert!(point_in_polygon(&Point2::new(0.25, 0.75), &sq, 1e-9));
        assert!(!point_in_polygon(&Point2::new(-0.25, 0.75), &sq, 1e-9));
    }

    #[test]
    fn closed_ring_same_as_open() {
        let open = unit_square();
        let mut closed = open.clone();
        closed.push(closed[0]);
        for p in [
            Point2::new(0.5, 0.5),
            Point2::new(2.0, 0.5),
            Point2::new(1.0, 0.3),
        ] {
            assert_eq!(
                point_in_polygon(&p, &open, 1e-9),
                point_in_polygon(&p, &closed, 1e-9)
            );
        }
    }

    #[test]
    fn non_finite_point_is_outside() {
        let sq = unit_square();
        assert!(!point_in_polygon(&Point2::new(f64::NAN, 0.5), &sq, 1e-9));
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        let line = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(!point_in_polygon(&Point2::new(0.5, 0.0), &line, 1e-9));
    }
}
