//! Constants used throughout wanderstate

/// Width of the logical coordinate space region outlines are drawn in
pub const VIEW_BOX_WIDTH: f64 = 959.;
/// Height of the logical coordinate space region outlines are drawn in
pub const VIEW_BOX_HEIGHT: f64 = 593.;

/// Space left around the map inside the canvas
pub const MAP_PADDING: f64 = 12.;
/// Smallest zoom factor a map can be shown at
pub const MIN_ZOOM: f64 = 0.5;
/// Largest zoom factor a map can be shown at
pub const MAX_ZOOM: f64 = 5.0;

/// Fill for regions with no photos
pub const UNVISITED_FILL: &str = "#CCCCCC";
/// Fill for regions with 1..=10 photos
pub const LIGHT_FILL: &str = "#90EE90";
/// Fill for regions with 11..=25 photos
pub const MEDIUM_FILL: &str = "#32CD32";
/// Fill for regions with more than 25 photos
pub const HEAVY_FILL: &str = "#228B22";

pub const LIGHT_MAX_PHOTOS: u32 = 10;
pub const MEDIUM_MAX_PHOTOS: u32 = 25;

pub const REGION_STROKE: &str = "white";
pub const REGION_STROKE_WIDTH: f64 = 0.75;
pub const SELECTED_STROKE: &str = "blue";
pub const SELECTED_STROKE_WIDTH: f64 = 2.0;
