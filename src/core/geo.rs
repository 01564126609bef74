use serde::{Deserialize, Serialize};

use crate::core::{config::ProjectionConfig, layout::ScreenRect};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a point in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Wraps a longitude into `[-180, 180)` relative to `center`.
///
/// Any finite input is accepted, so points across the antimeridian of an
/// off-Greenwich source image land on the correct side.
pub fn wrap_lon(lng: f64, center: f64) -> f64 {
    let wrapped = (lng - center + 540.0).rem_euclid(360.0) - 180.0;
    // rem_euclid may round up to the modulus for inputs just below a multiple
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Equirectangular projection from geographic coordinates onto a map rectangle.
///
/// The projection honours the crop insets of the background image: the
/// geographic extent maps onto `[left, right] x [top, bottom]` fractions of
/// the rectangle, not onto its full area.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoProjector {
    projection: ProjectionConfig,
    rect: ScreenRect,
}

impl GeoProjector {
    pub fn new(projection: ProjectionConfig, rect: ScreenRect) -> Self {
        Self { projection, rect }
    }

    pub fn rect(&self) -> ScreenRect {
        self.rect
    }

    pub fn projection(&self) -> &ProjectionConfig {
        &self.projection
    }

    /// Horizontal fraction of the image (0 = left border, 1 = right border).
    pub fn lon_fraction(&self, lng: f64) -> f64 {
        let p = &self.projection;
        let u = (wrap_lon(lng, p.lon_center) + 180.0) / 360.0;
        p.img_left + u * (p.img_right - p.img_left)
    }

    /// Vertical fraction of the image (0 = top border, 1 = bottom border).
    pub fn lat_fraction(&self, lat: f64) -> f64 {
        let p = &self.projection;
        let v = (90.0 - lat) / 180.0;
        p.img_top + v * (p.img_bottom - p.img_top)
    }

    pub fn lon_to_x(&self, lng: f64) -> f64 {
        self.rect.x + self.lon_fraction(lng) * self.rect.width
    }

    pub fn lat_to_y(&self, lat: f64) -> f64 {
        self.rect.y + self.lat_fraction(lat) * self.rect.height
    }

    pub fn project(&self, position: LatLng) -> Point {
        Point::new(self.lon_to_x(position.lng), self.lat_to_y(position.lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn projector() -> GeoProjector {
        GeoProjector::new(
            ProjectionConfig::default(),
            ScreenRect::new(100.0, 50.0, 800.0, 400.0),
        )
    }

    #[test]
    fn test_wrap_lon_basic() {
        assert_eq!(wrap_lon(0.0, 0.0), 0.0);
        assert_eq!(wrap_lon(180.0, 0.0), -180.0);
        assert_eq!(wrap_lon(-180.0, 0.0), -180.0);
        assert_eq!(wrap_lon(190.0, 0.0), -170.0);
        assert_eq!(wrap_lon(-190.0, 0.0), 170.0);
        assert_eq!(wrap_lon(720.0, 0.0), 0.0);
        assert_eq!(wrap_lon(-900.0, 0.0), -180.0);
    }

    #[test]
    fn test_wrap_lon_with_center() {
        // A Pacific-centered image puts 150°E in the middle
        assert_eq!(wrap_lon(150.0, 150.0), 0.0);
        assert_eq!(wrap_lon(-170.0, 150.0), 40.0);
        assert_eq!(wrap_lon(-30.0, 150.0), -180.0);
    }

    #[test]
    fn test_edges_map_to_crop_fractions() {
        let p = projector();
        let cfg = ProjectionConfig::default();

        assert!((p.lon_fraction(-180.0) - cfg.img_left).abs() < 1e-12);
        assert!((p.lat_fraction(90.0) - cfg.img_top).abs() < 1e-12);
        assert!((p.lat_fraction(-90.0) - cfg.img_bottom).abs() < 1e-12);
        // +180 wraps onto the left edge; the right edge is only approached
        assert!((p.lon_fraction(180.0) - cfg.img_left).abs() < 1e-12);
        assert!((p.lon_fraction(179.999_999) - cfg.img_right).abs() < 1e-6);

        let rect = p.rect();
        assert!((p.lon_to_x(-180.0) - (rect.x + cfg.img_left * rect.width)).abs() < 1e-9);
        assert!((p.lat_to_y(-90.0) - (rect.y + cfg.img_bottom * rect.height)).abs() < 1e-9);
    }

    #[test]
    fn test_project_greenwich_equator() {
        let p = GeoProjector::new(
            ProjectionConfig::full_bleed(),
            ScreenRect::new(0.0, 0.0, 360.0, 180.0),
        );
        let pt = p.project(LatLng::new(0.0, 0.0));
        assert!((pt.x - 180.0).abs() < 1e-9);
        assert!((pt.y - 90.0).abs() < 1e-9);

        let pt = p.project(LatLng::new(45.0, 90.0));
        assert!((pt.x - 270.0).abs() < 1e-9);
        assert!((pt.y - 45.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_wrap_lon_in_range_and_idempotent(lng in -1.0e6f64..1.0e6, center in -360.0f64..360.0) {
            let once = wrap_lon(lng, center);
            prop_assert!((-180.0..180.0).contains(&once));
            let twice = wrap_lon(once, 0.0);
            prop_assert!((-180.0..180.0).contains(&twice));
            prop_assert!((twice - once).abs() < 1e-9);
        }

        #[test]
        fn prop_projection_is_monotonic(a in -180.0f64..179.9, b in -180.0f64..179.9,
                                        lat_a in -90.0f64..90.0, lat_b in -90.0f64..90.0) {
            let p = projector();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(p.lon_to_x(lo) <= p.lon_to_x(hi));
            // latitude grows northwards, screen y grows downwards
            let (south, north) = if lat_a <= lat_b { (lat_a, lat_b) } else { (lat_b, lat_a) };
            prop_assert!(p.lat_to_y(north) <= p.lat_to_y(south));
        }
    }
}
