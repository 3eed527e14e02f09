//! Drawing a [`Slice`](crate::Slice) onto a caller-supplied target.
//!
//! The crate has no plotting backend of its own. Draw operations translate
//! a slice into primitive commands on a [`RenderTarget`], which the caller
//! passes explicitly; there is no ambient "current" target.

mod plot_map;
mod plot_section;
mod style;

pub use plot_map::PlotMap;
pub use plot_section::PlotSection;
pub use style::{Color, LineStyle, MarkerStyle, PatchStyle};

use crate::error::Result;
use crate::math::Point2;

/// Anchor labels used on both plots.
pub const LABEL_A: &str = "A";
pub const LABEL_A_PRIME: &str = "A'";

/// Font size of the anchor labels.
pub const LABEL_SIZE: f64 = 15.0;

/// A sink for 2D drawing primitives.
pub trait RenderTarget {
    /// Fills a closed polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot draw the patch.
    fn polygon_patch(&mut self, vertices: &[Point2], style: &PatchStyle) -> Result<()>;

    /// Draws one marker per `(xs[i], ys[i])`.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot draw the markers.
    fn scatter(&mut self, xs: &[f64], ys: &[f64], style: &MarkerStyle) -> Result<()>;

    /// Strokes an open polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot draw the line.
    fn polyline(&mut self, points: &[Point2], style: &LineStyle) -> Result<()>;

    /// Places a text label at `at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot draw text.
    fn annotate(&mut self, text: &str, at: Point2, size: f64) -> Result<()>;

    /// Forces one data unit to the same length on both axes.
    ///
    /// # Errors
    ///
    /// Returns an error if the target does not support it.
    fn set_aspect_equal(&mut self) -> Result<()>;

    /// Bounds the horizontal axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the target does not support it.
    fn set_x_limits(&mut self, min: f64, max: f64) -> Result<()>;

    /// Makes the vertical axis grow downwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the target does not support it.
    fn invert_y_axis(&mut self) -> Result<()>;
}

/// A primitive recorded by [`RecordingTarget`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    PolygonPatch {
        vertices: Vec<Point2>,
        style: PatchStyle,
    },
    Scatter {
        xs: Vec<f64>,
        ys: Vec<f64>,
        style: MarkerStyle,
    },
    Polyline {
        points: Vec<Point2>,
        style: LineStyle,
    },
    Annotate {
        text: String,
        at: Point2,
        size: f64,
    },
    AspectEqual,
    XLimits {
        min: f64,
        max: f64,
    },
    InvertYAxis,
}

/// A target that stores every command, for headless use and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    pub commands: Vec<DrawCommand>,
}

impl RecordingTarget {
    /// Creates a target with no recorded commands.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every annotation, in draw order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Annotate { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderTarget for RecordingTarget {
    fn polygon_patch(&mut self, vertices: &[Point2], style: &PatchStyle) -> Result<()> {
        self.commands.push(DrawCommand::PolygonPatch {
            vertices: vertices.to_vec(),
            style: *style,
        });
        Ok(())
    }

    fn scatter(&mut self, xs: &[f64], ys: &[f64], style: &MarkerStyle) -> Result<()> {
        self.commands.push(DrawCommand::Scatter {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            style: *style,
        });
        Ok(())
    }

    fn polyline(&mut self, points: &[Point2], style: &LineStyle) -> Result<()> {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            style: *style,
        });
        Ok(())
    }

    fn annotate(&mut self, text: &str, at: Point2, size: f64) -> Result<()> {
        self.commands.push(DrawCommand::Annotate {
            text: text.to_owned(),
            at,
            size,
        });
        Ok(())
    }

    fn set_aspect_equal(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::AspectEqual);
        Ok(())
    }

    fn set_x_limits(&mut self, min: f64, max: f64) -> Result<()> {
        self.commands.push(DrawCommand::XLimits { min, max });
        Ok(())
    }

    fn invert_y_axis(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::InvertYAxis);
        Ok(())
    }
}
