pub mod marker;

pub use marker::{build_markers, marker_radius, Marker};
