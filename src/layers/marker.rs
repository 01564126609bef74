use crate::{
    core::{
        config::MarkerConfig,
        geo::{GeoProjector, Point},
    },
    data::record::{Dataset, ElevationRange},
    rendering::color::{ElevationColorRamp, Rgba},
};

/// A projected, styled volcano marker
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Index of the record in the dataset
    pub index: usize,
    pub center: Point,
    pub radius: f64,
    pub color: Rgba,
}

impl Marker {
    /// Whether `pointer` is within the pick radius (`radius + slop`).
    pub fn hit(&self, pointer: Point, slop: f64) -> bool {
        self.center.distance_to(&pointer) <= self.radius + slop
    }
}

/// Marker radius for an elevation.
///
/// Known elevations are normalized against the dataset range and passed
/// through a square root so that perceived size grows closer to linearly.
pub fn marker_radius(elevation: Option<f64>, range: ElevationRange, config: &MarkerConfig) -> f64 {
    match elevation {
        Some(e) => {
            let norm = range.normalize(e);
            config.radius_min + norm.sqrt() * (config.radius_max - config.radius_min)
        }
        None => config.default_radius,
    }
}

/// Projects and styles every record, in dataset (draw) order.
pub fn build_markers(
    dataset: &Dataset,
    projector: &GeoProjector,
    config: &MarkerConfig,
    ramp: &ElevationColorRamp,
) -> Vec<Marker> {
    let range = dataset.elevation_range();
    dataset
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| Marker {
            index,
            center: projector.project(record.position()),
            radius: marker_radius(record.elevation, range, config),
            color: ramp.color_for(record.elevation),
        })
        .collect()
}
