pub mod hover;

pub use hover::{find_hovered, HoverState, PointerState};
