pub mod color;
pub mod scene;

pub use color::{ElevationColorRamp, Rgba};
pub use scene::{DrawCommand, Scene, TextAlign};
