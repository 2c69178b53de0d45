//! Writing a region map out as SVG (or JSON) for a given layout.

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::cache::GeometryCache;
use crate::constants::{
    REGION_STROKE, REGION_STROKE_WIDTH, SELECTED_STROKE, SELECTED_STROKE_WIDTH,
};
use crate::errors::{Error, Result};
use crate::geometry::fstr;
use crate::layout::MapLayout;
use crate::region::{Region, RegionMap};
use crate::RenderConfig;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

impl RenderConfig {
    pub fn layout(&self) -> MapLayout {
        MapLayout::new(self.canvas)
            .with_padding(self.padding)
            .with_zoom(self.zoom)
            .with_offset(self.offset)
    }

    fn is_selected(&self, region: &Region) -> bool {
        self.selected.as_deref() == Some(region.code.as_str())
    }

    fn stroke(&self, region: &Region) -> (&'static str, f64) {
        if self.is_selected(region) {
            (SELECTED_STROKE, SELECTED_STROKE_WIDTH)
        } else {
            (REGION_STROKE, REGION_STROKE_WIDTH)
        }
    }
}

fn write_event(writer: &mut Writer<&mut dyn Write>, event: Event) -> Result<()> {
    writer.write_event(event).map_err(Error::from_err)
}

/// Write `map` as an SVG document sized to the configured canvas.
///
/// Each region becomes a `<g>` with the region code as its id, holding a
/// `<title>` and one `<path>` per part. Path data is scaled to the canvas;
/// the frame offset is applied by a single enclosing translate.
pub fn write_map(
    map: &RegionMap,
    config: &RenderConfig,
    cache: &mut GeometryCache,
    writer: &mut dyn Write,
) -> Result<()> {
    let xf = config.layout().transform(map.view_box);
    let (width, height) = (fstr(config.canvas.width), fstr(config.canvas.height));
    let mut writer = Writer::new_with_indent(writer, b' ', 2);

    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", SVG_NS));
    svg.push_attribute(("width", width.as_str()));
    svg.push_attribute(("height", height.as_str()));
    svg.push_attribute(("viewBox", format!("0 0 {width} {height}").as_str()));
    write_event(&mut writer, Event::Start(svg))?;

    let mut frame = BytesStart::new("g");
    frame.push_attribute((
        "transform",
        format!("translate({} {})", fstr(xf.origin.x), fstr(xf.origin.y)).as_str(),
    ));
    write_event(&mut writer, Event::Start(frame))?;

    for region in &map.regions {
        let (stroke, stroke_width) = config.stroke(region);
        let mut g = BytesStart::new("g");
        g.push_attribute(("id", region.code.as_str()));
        g.push_attribute(("fill", region.fill_band().colour()));
        g.push_attribute(("stroke", stroke));
        g.push_attribute(("stroke-width", fstr(stroke_width).as_str()));
        write_event(&mut writer, Event::Start(g))?;

        write_event(&mut writer, Event::Start(BytesStart::new("title")))?;
        write_event(&mut writer, Event::Text(BytesText::new(&region.title())))?;
        write_event(&mut writer, Event::End(BytesEnd::new("title")))?;

        for data in region.parts() {
            let geom = cache.get(data, &config.parse);
            if geom.is_empty() {
                tracing::debug!("region '{}' has a part with no drawable path", region.code);
                continue;
            }
            let d = geom.scaled(xf.scale).to_string();
            let mut path = BytesStart::new("path");
            path.push_attribute(("d", d.as_str()));
            write_event(&mut writer, Event::Empty(path))?;
        }
        write_event(&mut writer, Event::End(BytesEnd::new("g")))?;
    }

    write_event(&mut writer, Event::End(BytesEnd::new("g")))?;
    write_event(&mut writer, Event::End(BytesEnd::new("svg")))?;
    writer.get_mut().write_all(b"\n")?;
    Ok(())
}

/// Render `map` to an SVG document string.
pub fn render_map(map: &RegionMap, config: &RenderConfig) -> Result<String> {
    let mut out = Vec::new();
    write_map(map, config, &mut GeometryCache::new(), &mut out)?;
    tracing::info!(
        "rendered {} region(s) at {}x{}",
        map.regions.len(),
        fstr(config.canvas.width),
        fstr(config.canvas.height)
    );
    String::from_utf8(out).map_err(Error::from_err)
}

#[cfg(feature = "json")]
mod json {
    use serde_derive::Serialize;

    use super::*;
    use crate::region::FillBand;
    use crate::viewport::ViewportTransform;

    #[derive(Serialize)]
    struct RenderedRegion<'a> {
        code: &'a str,
        name: &'a str,
        photo_count: u32,
        band: FillBand,
        fill: &'static str,
        stroke: &'static str,
        stroke_width: f64,
        selected: bool,
        paths: Vec<String>,
    }

    #[derive(Serialize)]
    struct RenderedMap<'a> {
        canvas: [f64; 2],
        transform: ViewportTransform,
        regions: Vec<RenderedRegion<'a>>,
    }

    /// Render `map` as JSON: the viewport transform plus, for each region,
    /// its styling and path data in canvas coordinates (offset included).
    pub fn render_map_json(map: &RegionMap, config: &RenderConfig) -> Result<String> {
        let xf = config.layout().transform(map.view_box);
        let mut cache = GeometryCache::new();
        let regions = map
            .regions
            .iter()
            .map(|r| {
                let (stroke, stroke_width) = config.stroke(r);
                let paths = r
                    .parts()
                    .map(|d| xf.apply_geometry(cache.get(d, &config.parse)))
                    .filter(|g| !g.is_empty())
                    .map(|g| g.to_string())
                    .collect();
                RenderedRegion {
                    code: &r.code,
                    name: &r.name,
                    photo_count: r.photo_count,
                    band: r.fill_band(),
                    fill: r.fill_band().colour(),
                    stroke,
                    stroke_width,
                    selected: config.is_selected(r),
                    paths,
                }
            })
            .collect();
        let out = RenderedMap {
            canvas: [config.canvas.width, config.canvas.height],
            transform: xf,
            regions,
        };
        Ok(serde_json::to_string_pretty(&out)?)
    }
}

#[cfg(feature = "json")]
pub use json::render_map_json;
