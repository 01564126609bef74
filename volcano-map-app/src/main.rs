use volcano_map::{
    constants::DEFAULT_CONFIG_PATH, ui::VolcanoMapExt, ViewerConfig, VolcanoMapView,
};

/// Standalone volcano map viewer
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ViewerConfig::load_or_default(DEFAULT_CONFIG_PATH).unwrap_or_else(|e| {
        log::warn!("Ignoring {}: {}", DEFAULT_CONFIG_PATH, e);
        ViewerConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 1000.0])
            .with_title("Volcanoes of the World"),
        ..Default::default()
    };

    eframe::run_native(
        "volcano-map-app",
        options,
        Box::new(move |cc| Box::new(VolcanoMapApp::new(cc, config))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))?;

    Ok(())
}

/// The main application struct
struct VolcanoMapApp {
    view: VolcanoMapView,
}

impl VolcanoMapApp {
    fn new(cc: &eframe::CreationContext<'_>, config: ViewerConfig) -> Self {
        Self {
            view: VolcanoMapView::new(&cc.egui_ctx, config),
        }
    }
}

impl eframe::App for VolcanoMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| ui.volcano_map(&mut self.view));
    }
}
