use serde::{Deserialize, Serialize};

use crate::core::geo::LatLng;

/// One volcano, immutable once loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolcanoRecord {
    pub latitude: f64,
    pub longitude: f64,
    /// Meters above sea level; `None` when the source cell was unknown
    pub elevation: Option<f64>,
    pub name: String,
    pub country: String,
    pub kind: String,
    pub type_category: String,
    pub status: String,
    pub last_eruption: String,
}

impl VolcanoRecord {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// Min/max of the known elevations, used for marker sizing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationRange {
    pub min: f64,
    pub max: f64,
}

impl ElevationRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range over all present elevations, `[0, 1]` when there are none.
    pub fn from_records(records: &[VolcanoRecord]) -> Self {
        records
            .iter()
            .filter_map(|r| r.elevation)
            .fold(None, |acc: Option<Self>, e| match acc {
                Some(range) => Some(Self::new(range.min.min(e), range.max.max(e))),
                None => Some(Self::new(e, e)),
            })
            .unwrap_or_default()
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` inside the range, clamped to `[0, 1]`.
    ///
    /// A zero-width range (a single distinct elevation) normalizes to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

impl Default for ElevationRange {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// The immutable inputs of the viewer: every valid record plus derived stats
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<VolcanoRecord>,
    elevation_range: ElevationRange,
}

impl Dataset {
    pub fn new(records: Vec<VolcanoRecord>) -> Self {
        let elevation_range = ElevationRange::from_records(&records);
        Self {
            records,
            elevation_range,
        }
    }

    pub fn records(&self) -> &[VolcanoRecord] {
        &self.records
    }

    pub fn elevation_range(&self) -> ElevationRange {
        self.elevation_range
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VolcanoRecord> {
        self.records.get(index)
    }
}

#[cfg(test)]
pub(crate) fn test_record(lat: f64, lng: f64, elevation: Option<f64>) -> VolcanoRecord {
    VolcanoRecord {
        latitude: lat,
        longitude: lng,
        elevation,
        name: "Test".to_string(),
        country: String::new(),
        kind: String::new(),
        type_category: String::new(),
        status: String::new(),
        last_eruption: String::new(),
    }
}
