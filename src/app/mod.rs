pub mod state;

pub use state::{LoadState, VolcanoMap};
