use crate::error::Result;
use crate::math::Point2;
use crate::slice::Slice;

use super::{MarkerStyle, RenderTarget, LABEL_A, LABEL_A_PRIME, LABEL_SIZE};

/// Depth at which the anchor labels sit, just below the surface.
const LABEL_DEPTH: f64 = 1.0;

/// Along-line position of the `A` label, a little before the line starts.
const LABEL_A_OFFSET: f64 = -0.2;

/// Draws the vertical section of a slice: along-line distance against depth.
///
/// Depth is positive down, so the vertical axis is inverted.
pub struct PlotSection<'a> {
    slice: &'a Slice,
    marker: MarkerStyle,
}

impl<'a> PlotSection<'a> {
    /// Creates a section plot with the default marker.
    #[must_use]
    pub fn new(slice: &'a Slice) -> Self {
        Self {
            slice,
            marker: MarkerStyle::default(),
        }
    }

    /// Sets the style of the section points.
    #[must_use]
    pub fn with_marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = marker;
        self
    }

    /// Issues the draw commands on `target`.
    ///
    /// Labels sit at depth 1, with `A` just before `newx = 0` and `A′` at
    /// `newx = line_length`, whatever points the section holds.
    ///
    /// # Errors
    ///
    /// Propagates the first error reported by `target`.
    pub fn draw<T: RenderTarget + ?Sized>(&self, target: &mut T) -> Result<()> {
        let section = self.slice.projected_section();
        let line_length = section.line_length();
        target.scatter(section.newx(), section.depth(), &self.marker)?;

        target.annotate(LABEL_A, Point2::new(LABEL_A_OFFSET, LABEL_DEPTH), LABEL_SIZE)?;
        target.annotate(LABEL_A_PRIME, Point2::new(line_length, LABEL_DEPTH), LABEL_SIZE)?;

        target.set_x_limits(0.0, line_length)?;
        target.invert_y_axis()
    }
}
