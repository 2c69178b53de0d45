//! Regions of a map and hit testing against them.

use crate::cache::GeometryCache;
use crate::constants::{
    HEAVY_FILL, LIGHT_FILL, LIGHT_MAX_PHOTOS, MEDIUM_FILL, MEDIUM_MAX_PHOTOS, UNVISITED_FILL,
    VIEW_BOX_HEIGHT, VIEW_BOX_WIDTH,
};
use crate::errors::{Error, Result};
use crate::geometry::{FillRule, Geometry, Point, Size};
use crate::path::{parse_with, ParseOptions};

/// Colour band a region is filled with, chosen from its photo count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde_derive::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum FillBand {
    Unvisited,
    Light,
    Medium,
    Heavy,
}

impl FillBand {
    pub fn from_photo_count(count: u32) -> Self {
        match count {
            0 => Self::Unvisited,
            c if c <= LIGHT_MAX_PHOTOS => Self::Light,
            c if c <= MEDIUM_MAX_PHOTOS => Self::Medium,
            _ => Self::Heavy,
        }
    }

    pub fn colour(&self) -> &'static str {
        match self {
            Self::Unvisited => UNVISITED_FILL,
            Self::Light => LIGHT_FILL,
            Self::Medium => MEDIUM_FILL,
            Self::Heavy => HEAVY_FILL,
        }
    }
}

/// One named region: a primary outline plus any detached parts (islands
/// and the like), each given as separate path data.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde_derive::Deserialize, serde_derive::Serialize))]
pub struct Region {
    pub code: String,
    pub name: String,
    pub path: String,
    #[cfg_attr(feature = "json", serde(default))]
    pub additional_paths: Vec<String>,
    /// Maintained by the caller; only used to pick a fill band.
    #[cfg_attr(feature = "json", serde(default))]
    pub photo_count: u32,
}

impl Region {
    pub fn new(code: impl Into<String>, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_additional_path(mut self, path: impl Into<String>) -> Self {
        self.additional_paths.push(path.into());
        self
    }

    pub fn with_photo_count(mut self, count: u32) -> Self {
        self.photo_count = count;
        self
    }

    /// Path data for every part, primary first.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.path.as_str()).chain(self.additional_paths.iter().map(String::as_str))
    }

    /// Parse each part on its own; parts never share parser state.
    pub fn geometries(&self, options: &ParseOptions) -> Vec<Geometry> {
        self.parts().map(|d| parse_with(d, options)).collect()
    }

    pub fn fill_band(&self) -> FillBand {
        FillBand::from_photo_count(self.photo_count)
    }

    /// Text shown when hovering over the region, e.g. "Texas: 3 photos".
    pub fn title(&self) -> String {
        let noun = if self.photo_count == 1 {
            "photo"
        } else {
            "photos"
        };
        format!("{}: {} {noun}", self.name, self.photo_count)
    }

    /// True if any part of this region contains `p` (view-box coordinates).
    pub fn contains(&self, p: Point, cache: &mut GeometryCache, options: &ParseOptions) -> bool {
        self.parts()
            .any(|d| cache.get(d, options).contains(p, FillRule::NonZero))
    }
}

/// A set of regions drawn in one shared view box, in paint order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde_derive::Deserialize))]
#[cfg_attr(feature = "json", serde(try_from = "MapDocument"))]
pub struct RegionMap {
    pub view_box: Size,
    pub regions: Vec<Region>,
}

impl Default for RegionMap {
    fn default() -> Self {
        Self::new(Size::new(VIEW_BOX_WIDTH, VIEW_BOX_HEIGHT))
    }
}

#[cfg(feature = "json")]
#[derive(serde_derive::Deserialize)]
struct MapDocument {
    view_box: Option<[f64; 2]>,
    regions: Vec<Region>,
}

#[cfg(feature = "json")]
impl TryFrom<MapDocument> for RegionMap {
    type Error = Error;

    fn try_from(doc: MapDocument) -> Result<Self> {
        let mut map = match doc.view_box {
            Some([w, h]) => Self::new(Size::new(w, h)),
            None => Self::default(),
        };
        map.regions = doc.regions;
        map.validate()?;
        Ok(map)
    }
}

impl RegionMap {
    pub fn new(view_box: Size) -> Self {
        Self {
            view_box,
            regions: Vec::new(),
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    /// Load a map from its JSON form:
    ///
    /// ```json
    /// { "view_box": [959, 593], "regions": [{ "code": "TX", "name": "Texas", "path": "M..." }] }
    /// ```
    ///
    /// `view_box` is optional and defaults to 959×593.
    #[cfg(feature = "json")]
    pub fn from_json(input: &str) -> Result<Self> {
        let doc: MapDocument = serde_json::from_str(input)?;
        doc.try_into()
    }

    /// Check region codes are non-empty and unique; they are used as
    /// element ids when rendering.
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for r in &self.regions {
            if r.code.is_empty() {
                return Err(Error::InvalidData(format!(
                    "region '{}' has an empty code",
                    r.name
                )));
            }
            if !seen.insert(r.code.as_str()) {
                return Err(Error::InvalidData(format!(
                    "duplicate region code '{}'",
                    r.code
                )));
            }
        }
        if !self.view_box.is_drawable() {
            tracing::warn!(
                "view box {}x{} is degenerate; regions will not be visible",
                self.view_box.width,
                self.view_box.height
            );
        }
        Ok(())
    }

    pub fn get(&self, code: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.code == code)
    }

    /// The topmost region containing `p` (in view-box coordinates).
    ///
    /// Regions later in the map are painted over earlier ones, so are
    /// tested first.
    pub fn hit_test(&self, p: Point, options: &ParseOptions) -> Option<&Region> {
        self.hit_test_cached(p, &mut GeometryCache::new(), options)
    }

    pub fn hit_test_cached(
        &self,
        p: Point,
        cache: &mut GeometryCache,
        options: &ParseOptions,
    ) -> Option<&Region> {
        self.regions
            .iter()
            .rev()
            .find(|r| r.contains(p, cache, options))
    }
}
