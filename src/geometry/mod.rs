pub mod corridor;
pub mod segment;

pub use corridor::Corridor;
pub use segment::LineSegment;
