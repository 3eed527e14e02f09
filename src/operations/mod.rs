mod build_corridor;
mod containment;
mod project;

pub use build_corridor::BuildCorridor;
pub use containment::ContainmentFilter;
pub use project::{ProjectToLine, Section};

/// Parameters controlling corridor membership.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainmentParams {
    /// Points within this distance of a corridor edge count as inside.
    pub boundary_tolerance: f64,
}

impl Default for ContainmentParams {
    fn default() -> Self {
        Self {
            boundary_tolerance: 1e-9,
        }
    }
}
