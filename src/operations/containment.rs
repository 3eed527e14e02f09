use crate::cloud::PointCloud;
use crate::geometry::Corridor;

use super::ContainmentParams;

/// Keeps the points of a cloud whose plan position lies in a corridor.
///
/// Inclusive on the boundary: a point within
/// [`ContainmentParams::boundary_tolerance`] of a corridor edge is kept.
/// Surviving points keep their relative order and their depth.
#[derive(Debug)]
pub struct ContainmentFilter<'a> {
    corridor: &'a Corridor,
    params: ContainmentParams,
}

impl<'a> ContainmentFilter<'a> {
    /// Creates a filter with default parameters.
    #[must_use]
    pub fn new(corridor: &'a Corridor) -> Self {
        Self::with_params(corridor, ContainmentParams::default())
    }

    /// Creates a filter with explicit parameters.
    #[must_use]
    pub fn with_params(corridor: &'a Corridor, params: ContainmentParams) -> Self {
        Self { corridor, params }
    }

    /// Per-point membership, index-aligned with `cloud`.
    #[must_use]
    pub fn mask(&self, cloud: &PointCloud) -> Vec<bool> {
        cloud
            .plan_points()
            .map(|p| self.corridor.contains(&p, self.params.boundary_tolerance))
            .collect()
    }

    /// Executes the filter, returning the retained sub-cloud.
    ///
    /// An empty result is valid.
    #[must_use]
    pub fn execute(&self, cloud: &PointCloud) -> PointCloud {
        let keep: Vec<usize> = self
            .mask(cloud)
            .into_iter()
            .enumerate()
            .filter_map(|(i, inside)| inside.then_some(i))
            .collect();

        tracing::debug!(
            input = cloud.len(),
            kept = keep.len(),
            dropped = cloud.len() - keep.len(),
            "corridor containment"
        );
        cloud.select(&keep)
    }
}
