use serde::{Deserialize, Serialize};

use crate::core::config::MarkerConfig;

/// 8-bit RGBA color, unmultiplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation per channel, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

#[cfg(feature = "egui")]
impl From<Rgba> for egui::Color32 {
    fn from(c: Rgba) -> Self {
        egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }
}

/// Deep blue for the lowest elevations
pub const LOW_STOP: Rgba = Rgba::rgb(37, 99, 235);
/// Cyan at the middle of the visualization range
pub const MID_STOP: Rgba = Rgba::rgb(52, 211, 235);
/// Light green for the highest elevations
pub const HIGH_STOP: Rgba = Rgba::rgb(132, 239, 172);

/// Three-stop piecewise-linear ramp over a fixed elevation range.
///
/// The range is independent of the loaded data so colors are comparable
/// between datasets. Unknown elevations take the lowest color.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationColorRamp {
    pub min: f64,
    pub max: f64,
    pub stops: [Rgba; 3],
}

impl ElevationColorRamp {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            stops: [LOW_STOP, MID_STOP, HIGH_STOP],
        }
    }

    pub fn from_config(config: &MarkerConfig) -> Self {
        Self::new(config.color_elevation_min, config.color_elevation_max)
    }

    /// Position of an elevation on the ramp, clamped to `[0, 1]`.
    pub fn position(&self, elevation: Option<f64>) -> f64 {
        let e = elevation.unwrap_or(self.min);
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((e - self.min) / span).clamp(0.0, 1.0)
    }

    pub fn color_at(&self, t: f64) -> Rgba {
        let [low, mid, high] = self.stops;
        if t < 0.5 {
            low.lerp(mid, t / 0.5)
        } else {
            mid.lerp(high, (t - 0.5) / 0.5)
        }
    }

    pub fn color_for(&self, elevation: Option<f64>) -> Rgba {
        self.color_at(self.position(elevation))
    }

    /// Elevation at ramp position `t`.
    pub fn elevation_at(&self, t: f64) -> f64 {
        self.min + (self.max - self.min) * t
    }
}

impl Default for ElevationColorRamp {
    fn default() -> Self {
        Self::from_config(&MarkerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_are_exact() {
        let ramp = ElevationColorRamp::default();
        assert_eq!(ramp.color_at(0.0), LOW_STOP);
        assert_eq!(ramp.color_at(0.5), MID_STOP);
        assert_eq!(ramp.color_at(1.0), HIGH_STOP);

        assert_eq!(ramp.color_for(Some(-6000.0)), LOW_STOP);
        assert_eq!(ramp.color_for(Some(500.0)), MID_STOP);
        assert_eq!(ramp.color_for(Some(7000.0)), HIGH_STOP);
    }

    #[test]
    fn test_out_of_range_and_missing() {
        let ramp = ElevationColorRamp::default();
        assert_eq!(ramp.color_for(None), LOW_STOP);
        assert_eq!(ramp.color_for(Some(-11000.0)), LOW_STOP);
        assert_eq!(ramp.color_for(Some(8848.0)), HIGH_STOP);
    }

    #[test]
    fn test_continuous_across_midpoint() {
        let ramp = ElevationColorRamp::default();
        let below = ramp.color_at(0.5 - 1e-6);
        let above = ramp.color_at(0.5 + 1e-6);
        for (a, b) in [(below.r, above.r), (below.g, above.g), (below.b, above.b)] {
            assert!((a as i16 - b as i16).abs() <= 1);
        }
    }

    #[test]
    fn test_lerp_quarter() {
        let ramp = ElevationColorRamp::default();
        // halfway between blue and cyan
        assert_eq!(ramp.color_at(0.25), Rgba::rgb(45, 155, 235));
    }

    #[test]
    fn test_elevation_at() {
        let ramp = ElevationColorRamp::default();
        assert_eq!(ramp.elevation_at(0.0), -6000.0);
        assert_eq!(ramp.elevation_at(0.5), 500.0);
        assert_eq!(ramp.elevation_at(1.0), 7000.0);
    }
}
