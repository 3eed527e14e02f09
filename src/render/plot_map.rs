use crate::error::Result;
use crate::slice::Slice;

use super::{LineStyle, MarkerStyle, PatchStyle, RenderTarget, LABEL_A, LABEL_A_PRIME, LABEL_SIZE};

/// Draws the plan view of a slice: corridor, retained points, anchor line.
pub struct PlotMap<'a> {
    slice: &'a Slice,
    marker: MarkerStyle,
    corridor: PatchStyle,
    line: LineStyle,
}

impl<'a> PlotMap<'a> {
    /// Creates a plan-view plot with default styles.
    #[must_use]
    pub fn new(slice: &'a Slice) -> Self {
        Self {
            slice,
            marker: MarkerStyle::default(),
            corridor: PatchStyle::default(),
            line: LineStyle::default(),
        }
    }

    /// Sets the style of the retained points.
    #[must_use]
    pub fn with_marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = marker;
        self
    }

    /// Sets the corridor fill and outline.
    #[must_use]
    pub fn with_corridor_style(mut self, corridor: PatchStyle) -> Self {
        self.corridor = corridor;
        self
    }

    /// Sets the stroke of the anchor line.
    #[must_use]
    pub fn with_line_style(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    /// Issues the draw commands on `target`.
    ///
    /// Order: corridor patch (windowed slices only), point scatter, anchor
    /// line, anchor labels, equal aspect.
    ///
    /// # Errors
    ///
    /// Propagates the first error reported by `target`.
    pub fn draw<T: RenderTarget + ?Sized>(&self, target: &mut T) -> Result<()> {
        if let Some(corridor) = self.slice.corridor_polygon() {
            target.polygon_patch(corridor.vertices(), &self.corridor)?;
        }

        let cloud = self.slice.filtered_cloud();
        target.scatter(cloud.easting(), cloud.northing(), &self.marker)?;

        let (a, a_prime) = self.slice.anchors();
        target.polyline(&[a, a_prime], &self.line)?;
        target.annotate(LABEL_A, a, LABEL_SIZE)?;
        target.annotate(LABEL_A_PRIME, a_prime, LABEL_SIZE)?;

        target.set_aspect_equal()
    }
}
