//! # volcano-map
//!
//! An interactive world map of volcanoes. Point data is read from a CSV
//! table, projected onto an equirectangular background image and drawn as
//! markers whose color and size encode elevation. Hovering a marker shows
//! its details in the info panel.
//!
//! The crate is split into backend-agnostic logic (projection, layout,
//! loading, hover picking and a display list) and an egui view behind the
//! `egui` feature.

pub mod app;
pub mod core;
pub mod data;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod rendering;
#[cfg(feature = "egui")]
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::ViewerConfig,
    geo::{wrap_lon, GeoProjector, LatLng, Point},
    layout::{compute_layout, PanelLayout, ScreenRect},
};

pub use app::state::{LoadState, VolcanoMap};

pub use data::{
    loader::{load_table, load_table_from_reader, MapImage, PendingImage},
    parse::parse_number,
    record::{Dataset, ElevationRange, VolcanoRecord},
};

pub use input::hover::{find_hovered, HoverState, PointerState};

pub use layers::marker::Marker;

pub use rendering::{
    color::{ElevationColorRamp, Rgba},
    scene::{DrawCommand, Scene},
};

#[cfg(feature = "egui")]
pub use ui::view::VolcanoMapView;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, VolcanoError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum VolcanoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("No valid rows")]
    NoValidRows,
}

/// Error type alias for convenience
pub type Error = VolcanoError;
