use serde::{Deserialize, Serialize};

use crate::core::{config::LayoutConfig, constants::MAP_ASPECT, geo::Point};

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Grows the rectangle by `amount` on every side.
    pub fn expand(&self, amount: f64) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + 2.0 * amount,
            self.height + 2.0 * amount,
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// True when the interiors overlap; shared edges do not count.
    pub fn intersects(&self, other: &ScreenRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// The three stacked panels of the viewer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelLayout {
    pub map: ScreenRect,
    pub legend: ScreenRect,
    pub info: ScreenRect,
}

/// Computes map, legend and info rectangles for a viewport.
///
/// The map keeps a 2:1 ratio, shrinking to the available height when
/// needed, is floored at the configured minimum size and centered
/// horizontally. Legend and info share its width and x offset and stack
/// below it separated by half a margin.
pub fn compute_layout(viewport_width: f64, viewport_height: f64, config: &LayoutConfig) -> PanelLayout {
    let margin = config.margin;
    let avail_w = viewport_width - 2.0 * margin;
    let avail_h = viewport_height
        - config.header_height
        - config.legend_height
        - config.info_height
        - 4.0 * margin;

    let mut w = avail_w;
    let mut h = w / MAP_ASPECT;
    if h > avail_h {
        h = avail_h;
        w = h * MAP_ASPECT;
    }

    let map_w = w.max(config.min_map_width);
    let map_h = h.max(config.min_map_height);
    let map = ScreenRect::new(
        (viewport_width - map_w) / 2.0,
        config.header_height + margin,
        map_w,
        map_h,
    );

    let legend = ScreenRect::new(
        map.x,
        map.bottom() + margin / 2.0,
        map.width,
        config.legend_height,
    );

    let info = ScreenRect::new(
        map.x,
        legend.bottom() + margin / 2.0,
        map.width,
        config.info_height,
    );

    log::debug!(
        "Layout for {}x{}: map {:.0}x{:.0} at ({:.0}, {:.0})",
        viewport_width,
        viewport_height,
        map.width,
        map.height,
        map.x,
        map.y
    );

    PanelLayout { map, legend, info }
}
