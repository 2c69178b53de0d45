//! Request and response bodies for the JSON HTTP API.

use serde_derive::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::region::RegionMap;
use crate::RenderConfig;

pub const JSON_API_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub version: u32,
    pub map: RegionMap,
    #[serde(default)]
    pub config: RenderConfig,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RenderResponse {
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RenderResponse {
    pub fn success(svg: String) -> Self {
        Self {
            version: JSON_API_VERSION,
            svg: Some(svg),
            error: None,
        }
    }

    pub fn error(error: String) -> Self {
        Self {
            version: JSON_API_VERSION,
            svg: None,
            error: Some(error),
        }
    }
}

/// Which region, if any, lies under `point` (canvas coordinates) when the
/// map is laid out with `config`.
#[derive(Debug, Deserialize)]
pub struct HitRequest {
    pub version: u32,
    pub map: RegionMap,
    #[serde(default)]
    pub config: RenderConfig,
    pub point: Point,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HitResponse {
    pub version: u32,
    /// `point` mapped into view-box coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HitResponse {
    pub fn error(error: String) -> Self {
        Self {
            version: JSON_API_VERSION,
            error: Some(error),
            ..Default::default()
        }
    }
}

impl HitRequest {
    /// Lay out the map and find the topmost region under the point.
    pub fn resolve(&self) -> HitResponse {
        let layout = self.config.layout();
        let Some(location) = layout.locate(self.map.view_box, self.point) else {
            return HitResponse::error("map has no visible area".to_string());
        };
        let hit = self.map.hit_test(location, &self.config.parse);
        HitResponse {
            version: JSON_API_VERSION,
            location: Some(location),
            code: hit.map(|r| r.code.clone()),
            name: hit.map(|r| r.name.clone()),
            error: None,
        }
    }
}
