//! Prelude module for common volcano-map types
//!
//! This module re-exports the most commonly used types and functions
//! for easy importing with `use volcano_map::prelude::*;`

pub use crate::core::{
    config::{
        AssetConfig, LayoutConfig, MarkerConfig, ProjectionConfig, ViewerConfig,
    },
    geo::{wrap_lon, GeoProjector, LatLng, Point},
    layout::{compute_layout, PanelLayout, ScreenRect},
};

pub use crate::data::{
    loader::{load_table, load_table_from_reader, ImageEvent, MapImage, PendingImage},
    parse::parse_number,
    record::{Dataset, ElevationRange, VolcanoRecord},
};

pub use crate::app::state::{LoadState, VolcanoMap};

pub use crate::input::hover::{find_hovered, HoverState, PointerState};

pub use crate::layers::marker::{build_markers, marker_radius, Marker};

pub use crate::rendering::{
    color::{ElevationColorRamp, Rgba},
    scene::{DrawCommand, Scene, TextAlign},
};

#[cfg(feature = "egui")]
pub use crate::ui::{
    painter::paint_scene,
    style::{ViewStyle, ViewThemes},
    view::VolcanoMapView,
};

pub use crate::{Error as VolcanoError, Result};
