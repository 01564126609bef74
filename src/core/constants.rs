//! Default values for the viewer, gathered in one place so the magic numbers
//! of projection, layout and marker encoding are easy to tweak.

/// Default tabular data file, resolved relative to the working directory.
pub const DEFAULT_TABLE_PATH: &str = "data.csv";

/// Default background raster.
pub const DEFAULT_IMAGE_PATH: &str = "map.jpg";

/// Optional JSON override for [`crate::core::config::ViewerConfig`].
pub const DEFAULT_CONFIG_PATH: &str = "volcano-map.json";

/// Longitude shown at the horizontal center of the source image.
pub const LON_CENTER: f64 = 0.0;

/// Fractional crop insets of the bundled world image (map content bounds).
pub const IMG_LEFT: f64 = 0.085;
pub const IMG_RIGHT: f64 = 0.975;
pub const IMG_TOP: f64 = 0.060;
pub const IMG_BOTTOM: f64 = 0.965;

/// Outer margin around the stacked panels.
pub const MARGIN: f64 = 32.0;

/// Height reserved for the title row.
pub const HEADER_HEIGHT: f64 = 64.0;

/// Fixed panel heights below the map.
pub const LEGEND_HEIGHT: f64 = 140.0;
pub const INFO_HEIGHT: f64 = 140.0;

/// Degenerate-viewport floor for the map rectangle.
pub const MIN_MAP_WIDTH: f64 = 200.0;
pub const MIN_MAP_HEIGHT: f64 = 120.0;

/// Width:height ratio of an equirectangular world map.
pub const MAP_ASPECT: f64 = 2.0;

/// Marker radius range in pixels; records without elevation use the minimum.
pub const MARKER_RADIUS_MIN: f64 = 3.5;
pub const MARKER_RADIUS_MAX: f64 = 8.0;

/// Extra pick tolerance around a marker, in pixels.
pub const HOVER_SLOP: f64 = 2.0;

/// Elevation range (meters) used for color mapping only.
pub const VIS_ELEV_MIN: f64 = -6000.0;
pub const VIS_ELEV_MAX: f64 = 7000.0;

/// Graticule spacing in degrees.
pub const GRID_STEP_DEG: f64 = 30.0;
