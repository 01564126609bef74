//! Configuration for the volcano viewer
//!
//! Everything the viewer tunes (asset paths, image calibration, panel
//! metrics, marker encoding) lives in [`ViewerConfig`]. Defaults reproduce
//! the bundled world image; a JSON file can override any subset of fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::constants::*;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub assets: AssetConfig,
    pub projection: ProjectionConfig,
    pub layout: LayoutConfig,
    pub markers: MarkerConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            assets: AssetConfig::default(),
            projection: ProjectionConfig::default(),
            layout: LayoutConfig::default(),
            markers: MarkerConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads `path` if it exists, otherwise falls back to the defaults.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub table_path: PathBuf,
    pub image_path: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            table_path: PathBuf::from(DEFAULT_TABLE_PATH),
            image_path: PathBuf::from(DEFAULT_IMAGE_PATH),
        }
    }
}

/// Image calibration for the equirectangular projection.
///
/// Insets are fractions of the image (0-1) where the map content starts
/// and ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub lon_center: f64,
    pub img_left: f64,
    pub img_right: f64,
    pub img_top: f64,
    pub img_bottom: f64,
}

impl ProjectionConfig {
    /// Calibration for an image whose map content fills the whole raster.
    #[cfg(test)]
    pub(crate) fn full_bleed() -> Self {
        Self {
            lon_center: LON_CENTER,
            img_left: 0.0,
            img_right: 1.0,
            img_top: 0.0,
            img_bottom: 1.0,
        }
    }
}

/// Defaults match the bundled world image, which has whitespace borders.
impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            lon_center: LON_CENTER,
            img_left: IMG_LEFT,
            img_right: IMG_RIGHT,
            img_top: IMG_TOP,
            img_bottom: IMG_BOTTOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub margin: f64,
    pub header_height: f64,
    pub legend_height: f64,
    pub info_height: f64,
    pub min_map_width: f64,
    pub min_map_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: MARGIN,
            header_height: HEADER_HEIGHT,
            legend_height: LEGEND_HEIGHT,
            info_height: INFO_HEIGHT,
            min_map_width: MIN_MAP_WIDTH,
            min_map_height: MIN_MAP_HEIGHT,
        }
    }
}

impl LayoutConfig {
    /// Smallest viewport in which the floor clamp never kicks in.
    pub fn min_viewport(&self) -> (f64, f64) {
        let map_w = self.min_map_width.max(self.min_map_height * MAP_ASPECT);
        let map_h = self.min_map_height.max(self.min_map_width / MAP_ASPECT);
        let width = map_w + 2.0 * self.margin;
        let height = self.header_height
            + self.legend_height
            + self.info_height
            + 4.0 * self.margin
            + map_h;
        (width, height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub radius_min: f64,
    pub radius_max: f64,
    /// Radius for records with unknown elevation
    pub default_radius: f64,
    pub hover_slop: f64,
    pub color_elevation_min: f64,
    pub color_elevation_max: f64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius_min: MARKER_RADIUS_MIN,
            radius_max: MARKER_RADIUS_MAX,
            default_radius: MARKER_RADIUS_MIN,
            hover_slop: HOVER_SLOP,
            color_elevation_min: VIS_ELEV_MIN,
            color_elevation_max: VIS_ELEV_MAX,
        }
    }
}
