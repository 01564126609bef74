//! Application state of the viewer
//!
//! [`VolcanoMap`] separates the immutable inputs (config, loaded dataset)
//! from the state derived per frame (layout, markers, hover, display list).
//! Derived state is rebuilt lazily behind a dirty flag whenever the
//! viewport, the pointer or the image availability changes.

use std::path::Path;

use crate::{
    core::{
        config::ViewerConfig,
        geo::GeoProjector,
        layout::{compute_layout, PanelLayout},
    },
    data::{
        loader::load_table,
        record::{Dataset, VolcanoRecord},
    },
    input::hover::{find_hovered, HoverState, PointerState},
    layers::marker::{build_markers, Marker},
    rendering::{
        color::ElevationColorRamp,
        scene::{build_map_scene, build_message_scene, Scene, SceneInputs, LOADING_MESSAGE},
    },
    Result, VolcanoError,
};

/// Lifecycle of the viewer: `Loading` then either `Ready` or `Error`.
///
/// `Error` is terminal for the process.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Dataset),
    Error(String),
}

impl LoadState {
    /// Converts a table load result, turning failures into on-screen messages.
    pub fn from_result(result: Result<Dataset>, table_path: &Path) -> Self {
        match result {
            Ok(dataset) => Self::Ready(dataset),
            Err(e) => {
                let message = describe_load_error(&e, table_path);
                log::error!("{}", message);
                Self::Error(message)
            }
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            Self::Ready(dataset) => Some(dataset),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

fn describe_load_error(error: &VolcanoError, table_path: &Path) -> String {
    match error {
        VolcanoError::NoValidRows => {
            "CSV loaded, but no valid rows (check column names).".to_string()
        }
        VolcanoError::MissingColumn(column) => {
            format!("CSV loaded, but column \"{column}\" is missing (check column names).")
        }
        other => format!("Unable to read {}: {}", table_path.display(), other),
    }
}

/// The viewer's complete state
pub struct VolcanoMap {
    config: ViewerConfig,
    ramp: ElevationColorRamp,
    load_state: LoadState,

    viewport: (f64, f64),
    pointer: PointerState,
    image_available: bool,

    layout: PanelLayout,
    markers: Vec<Marker>,
    scene: Scene,
    dirty: bool,
}

impl VolcanoMap {
    /// Creates a viewer in the `Loading` state.
    pub fn new(config: ViewerConfig) -> Self {
        let ramp = ElevationColorRamp::from_config(&config.markers);
        Self {
            config,
            ramp,
            load_state: LoadState::Loading,
            viewport: (0.0, 0.0),
            pointer: PointerState::default(),
            image_available: false,
            layout: PanelLayout::default(),
            markers: Vec::new(),
            scene: Scene::default(),
            dirty: true,
        }
    }

    /// Creates a viewer with an already loaded dataset.
    pub fn with_dataset(config: ViewerConfig, dataset: Dataset) -> Self {
        let mut map = Self::new(config);
        map.set_load_state(LoadState::Ready(dataset));
        map
    }

    /// Loads the table named in the config synchronously.
    ///
    /// Only acts while `Loading`; failures leave the viewer in `Error`.
    pub fn load(&mut self) -> &LoadState {
        if matches!(self.load_state, LoadState::Loading) {
            let path = self.config.assets.table_path.clone();
            let state = LoadState::from_result(load_table(&path), &path);
            self.set_load_state(state);
        }
        &self.load_state
    }

    /// Moves to `state` unless the viewer is already in `Error`, which is
    /// never left.
    pub fn set_load_state(&mut self, state: LoadState) {
        if let LoadState::Error(message) = &self.load_state {
            log::warn!("Ignoring load state change after error: {}", message);
            return;
        }
        self.load_state = state;
        self.relayout();
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Updates the viewport size; a change triggers a full relayout.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if self.viewport != (width, height) {
            self.viewport = (width, height);
            self.relayout();
        }
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        if self.pointer != pointer {
            self.pointer = pointer;
            self.dirty = true;
        }
    }

    pub fn set_image_available(&mut self, available: bool) {
        if self.image_available != available {
            self.image_available = available;
            self.dirty = true;
        }
    }

    pub fn image_available(&self) -> bool {
        self.image_available
    }

    fn relayout(&mut self) {
        let (width, height) = self.viewport;
        self.layout = compute_layout(width, height, &self.config.layout);
        self.markers = match &self.load_state {
            LoadState::Ready(dataset) => {
                let projector = GeoProjector::new(self.config.projection.clone(), self.layout.map);
                build_markers(dataset, &projector, &self.config.markers, &self.ramp)
            }
            _ => Vec::new(),
        };
        self.dirty = true;
    }

    /// Current hover, derived from the latest pointer and markers.
    pub fn hover(&self) -> HoverState {
        find_hovered(&self.markers, &self.pointer, self.config.markers.hover_slop)
    }

    pub fn hovered_record(&self) -> Option<&VolcanoRecord> {
        let dataset = self.load_state.dataset()?;
        self.hover().index().and_then(|i| dataset.get(i))
    }

    /// Returns the display list, rebuilding it only if something changed.
    pub fn scene(&mut self) -> &Scene {
        if self.dirty {
            self.scene = self.build_scene();
            self.dirty = false;
        }
        &self.scene
    }

    fn build_scene(&self) -> Scene {
        match &self.load_state {
            LoadState::Loading => build_message_scene(&self.config, LOADING_MESSAGE, false),
            LoadState::Error(message) => build_message_scene(&self.config, message, true),
            LoadState::Ready(dataset) => build_map_scene(&SceneInputs {
                config: &self.config,
                dataset,
                layout: &self.layout,
                markers: &self.markers,
                hover: self.hover(),
                ramp: &self.ramp,
                image_available: self.image_available,
            }),
        }
    }
}
