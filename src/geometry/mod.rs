mod bbox;
mod hit;
mod path;
mod types;

pub use bbox::{BoundingBox, BoundingBoxBuilder};
pub use hit::{FillRule, CURVE_STEPS};
pub use path::{Geometry, Segment, Subpath};
pub use types::{fstr, strp, Point, Size};
