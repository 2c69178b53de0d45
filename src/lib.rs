//! ## wanderstate - SVG region maps
//!
//! `wanderstate` reads the outlines of map regions (US states, by default)
//! given as SVG path data, fits them into an output frame, and draws a
//! heat-map coloured by how many photos each region has.
//!
//! The core is two pure functions:
//!
//! - [`parse`] turns path data into absolute [`Geometry`]. It never fails;
//!   input it cannot make sense of is skipped.
//! - [`scale`] fits geometry authored in a view box into a target size,
//!   using one factor for both axes so shapes are never distorted.
//!
//! Around these are a [`RegionMap`] model with hit testing, a
//! [`MapLayout`] for padding, zoom and pan, and a renderer producing SVG.
//!
//! ## Example
//!
//! ```
//! use wanderstate::{parse, scale, Size};
//!
//! let square = parse("M 0 0 L 10 0 L 10 10 Z");
//! let big = scale(&square, Size::new(10., 10.), Size::new(100., 100.));
//! assert_eq!(big.to_string(), "M 0 0 L 100 0 L 100 100 Z");
//! ```

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "json")]
use std::io::{BufRead, Write};

mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod constants;
pub mod errors;
pub mod geometry;
#[cfg(feature = "json")]
pub mod json_api;
mod layout;
#[cfg(any(feature = "cli", feature = "server"))]
pub mod logging;
pub mod path;
mod region;
mod render;
#[cfg(feature = "server")]
pub mod server;
mod viewport;

pub use cache::GeometryCache;
pub use errors::{Error, Result};
pub use geometry::{BoundingBox, FillRule, Geometry, Point, Segment, Size, Subpath};
pub use layout::{MapLayout, Selection, ZoomPan};
pub use path::{parse, parse_with, ArcMode, ParseOptions, SmoothCurves, UnknownCommands};
pub use region::{FillBand, Region, RegionMap};
#[cfg(feature = "json")]
pub use render::render_map_json;
pub use render::{render_map, write_map};
pub use viewport::{scale, uniform_scale, ViewportTransform};

use constants::{MAP_PADDING, VIEW_BOX_HEIGHT, VIEW_BOX_WIDTH};

// Allow users of this as a library to easily retrieve the version being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings for drawing one map.
///
/// Front-ends (the CLI, the server) build this from their own options;
/// library users can construct it directly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(serde_derive::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct RenderConfig {
    /// Output size (default 959x593)
    pub canvas: Size,
    /// Space kept clear around the map (default 12)
    pub padding: f64,
    /// Zoom factor, clamped to 0.5..=5.0 when laid out
    pub zoom: f64,
    /// Pan offset of the map centre from the canvas centre
    pub offset: Point,
    /// Code of the region drawn with the selection stroke
    pub selected: Option<String>,
    /// How path data is read
    pub parse: ParseOptions,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(VIEW_BOX_WIDTH, VIEW_BOX_HEIGHT),
            padding: MAP_PADDING,
            zoom: 1.,
            offset: Point::ORIGIN,
            selected: None,
            parse: ParseOptions::default(),
        }
    }
}

/// Output produced from a map document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "json", derive(serde_derive::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
}

/// Reads a JSON map document from `reader`, renders it, and writes the
/// result to `writer`.
#[cfg(feature = "json")]
pub fn render_stream(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    config: &RenderConfig,
    format: OutputFormat,
) -> Result<()> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    let map = RegionMap::from_json(&input)?;
    match format {
        OutputFormat::Svg => write_map(&map, config, &mut GeometryCache::new(), writer),
        OutputFormat::Json => {
            writer.write_all(render_map_json(&map, config)?.as_bytes())?;
            writer.write_all(b"\n")?;
            Ok(())
        }
    }
}

/// Render a JSON map document given as a string to an SVG string.
#[cfg(feature = "json")]
pub fn render_str<T: AsRef<str>>(input: T, config: &RenderConfig) -> Result<String> {
    let map = RegionMap::from_json(input.as_ref())?;
    render_map(&map, config)
}

/// Render a JSON map document to SVG with default settings, optionally
/// highlighting one region.
#[cfg(feature = "json")]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn render_string(input: String, selected: Option<String>) -> core::result::Result<String, String> {
    let cfg = RenderConfig {
        selected,
        ..Default::default()
    };
    render_str(input, &cfg).map_err(|e| e.to_string())
}
