use egui::{ColorImage, Context, TextureHandle, Ui};

use crate::{
    app::state::VolcanoMap,
    core::{config::ViewerConfig, geo::Point},
    data::loader::{ImageEvent, MapImage, PendingImage},
    input::hover::PointerState,
    ui::{painter::paint_scene, style::ViewStyle},
};

/// egui front end of the viewer.
///
/// Feeds the window size and pointer into [`VolcanoMap`] every frame, uploads
/// the background image once it has been decoded and paints the resulting
/// display list. egui only runs frames on input, so redraws happen on
/// pointer movement, resize and image arrival.
pub struct VolcanoMapView {
    map: VolcanoMap,
    pending_image: Option<PendingImage>,
    texture: Option<TextureHandle>,
    style: ViewStyle,
}

impl VolcanoMapView {
    /// Loads the table synchronously and starts decoding the image.
    pub fn new(ctx: &Context, config: ViewerConfig) -> Self {
        let image_path = config.assets.image_path.clone();
        let mut map = VolcanoMap::new(config);
        map.load();

        let repaint_ctx = ctx.clone();
        let pending = PendingImage::spawn(image_path, move || repaint_ctx.request_repaint());

        Self::from_parts(map, Some(pending))
    }

    pub fn from_parts(map: VolcanoMap, pending_image: Option<PendingImage>) -> Self {
        Self {
            map,
            pending_image,
            texture: None,
            style: ViewStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ViewStyle) -> Self {
        self.style = style;
        self
    }

    pub fn map(&self) -> &VolcanoMap {
        &self.map
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }

    /// Uploads decoded pixels as the background texture.
    pub fn set_image(&mut self, ctx: &Context, image: &MapImage) {
        let color_image = ColorImage::from_rgba_unmultiplied(image.size, &image.rgba);
        self.texture = Some(ctx.load_texture("volcano-map-image", color_image, self.style.texture_options));
        self.map.set_image_available(true);
    }

    fn poll_image(&mut self, ctx: &Context) {
        let Some(pending) = self.pending_image.as_mut() else {
            return;
        };
        match pending.poll() {
            Some(ImageEvent::Loaded(image)) => {
                self.set_image(ctx, &image);
                self.pending_image = None;
            }
            Some(ImageEvent::Failed) => self.pending_image = None,
            None => {}
        }
    }

    fn sync_input(&mut self, ctx: &Context) {
        let screen = ctx.screen_rect();
        self.map
            .set_viewport(screen.width() as f64, screen.height() as f64);

        let pointer = ctx
            .input(|i| i.pointer.hover_pos())
            .map(|pos| Point::new(pos.x as f64, pos.y as f64));
        self.map.set_pointer(PointerState::new(pointer));
    }

    /// Paints the viewer into `ui`, covering the whole window.
    pub fn ui(&mut self, ui: &mut Ui) {
        let ctx = ui.ctx().clone();
        self.poll_image(&ctx);
        self.sync_input(&ctx);

        let texture_id = self.texture.as_ref().map(|t| t.id());
        let painter = ui.painter().clone();
        paint_scene(&painter, self.map.scene(), texture_id, &self.style);
    }

    /// Runs one frame as a frameless central panel.
    pub fn show(&mut self, ctx: &Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.ui(ui));
    }
}

pub trait VolcanoMapExt {
    fn volcano_map(&mut self, view: &mut VolcanoMapView);
}

impl VolcanoMapExt for Ui {
    fn volcano_map(&mut self, view: &mut VolcanoMapView) {
        view.ui(self);
    }
}
