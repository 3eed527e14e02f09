use crate::error::{RenderError, Result};

/// An RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const ORANGE: Self = Self::rgb(1.0, 0.647, 0.0);
    pub const BLUE: Self = Self::rgb(0.122, 0.467, 0.706);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Creates a color from its red, green and blue components.
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Fill and outline of a polygon patch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchStyle {
    pub face_color: Color,
    pub line_width: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl Default for PatchStyle {
    fn default() -> Self {
        Self {
            face_color: Color::ORANGE,
            line_width: 2.0,
            alpha: 0.5,
        }
    }
}

/// Scatter marker appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub color: Color,
    size: f64,
}

impl MarkerStyle {
    /// Creates a marker style.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidStyle` if `size` is not positive.
    pub fn new(color: Color, size: f64) -> Result<Self> {
        if size.is_nan() || size <= 0.0 {
            return Err(RenderError::InvalidStyle("marker size must be positive".to_owned()).into());
        }
        Ok(Self { color, size })
    }

    /// Marker size in points.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: Color::RED,
            size: 20.0,
        }
    }
}

/// Polyline stroke appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    width: f64,
    /// Draw a marker at every vertex.
    pub vertex_markers: bool,
}

impl LineStyle {
    /// Creates a line style.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidStyle` if `width` is not positive.
    pub fn new(color: Color, width: f64, vertex_markers: bool) -> Result<Self> {
        if width.is_nan() || width <= 0.0 {
            return Err(RenderError::InvalidStyle("line width must be positive".to_owned()).into());
        }
        Ok(Self {
            color,
            width,
            vertex_markers,
        })
    }

    /// Stroke width in points.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }
}

impl Default for LineStyle {
    // Red line with round vertex markers.
    fn default() -> Self {
        Self {
            color: Color::RED,
            width: 1.5,
            vertex_markers: true,
        }
    }
}
