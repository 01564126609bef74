pub mod painter;
pub mod style;
pub mod view;

pub use painter::paint_scene;
pub use style::{StyleExt, ViewStyle, ViewThemes};
pub use view::{VolcanoMapExt, VolcanoMapView};
