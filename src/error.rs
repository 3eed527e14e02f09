use thiserror::Error;

/// Top-level error type for cross-section extraction.
#[derive(Debug, Error)]
pub enum SectionError {
    #[error(transparent)]
    InvalidGeometry(#[from] GeometryError),

    #[error(transparent)]
    Cloud(#[from] CloudError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl SectionError {
    /// Returns `true` if this error was caused by an unusable slice line or corridor.
    #[must_use]
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, Self::InvalidGeometry(_))
    }
}

/// Errors related to the slice line and corridor geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("zero-length slice line: anchors coincide at ({x}, {y})")]
    ZeroLengthLine { x: f64, y: f64 },

    #[error("corridor half-width must be positive, got {value}")]
    NonPositiveHalfWidth { value: f64 },

    #[error("non-finite value in {what}")]
    NonFinite { what: &'static str },
}

/// Errors related to the input point cloud.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CloudError {
    #[error(
        "point cloud columns must have equal length \
         (easting = {easting}, northing = {northing}, depth = {depth})"
    )]
    LengthMismatch {
        easting: usize,
        northing: usize,
        depth: usize,
    },
}

/// Errors reported by a render target.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("render target rejected command: {0}")]
    Rejected(String),

    #[error("render target failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`SectionError`].
pub type Result<T> = std::result::Result<T, SectionError>;
