//! Display list for one frame of the viewer
//!
//! A [`Scene`] is a backend-agnostic list of [`DrawCommand`]s built from the
//! dataset, the layout and the current hover. The egui view paints it, tests
//! inspect it directly.

use crate::{
    core::{
        config::ViewerConfig,
        constants::GRID_STEP_DEG,
        geo::{GeoProjector, Point},
        layout::{PanelLayout, ScreenRect},
    },
    data::record::{Dataset, VolcanoRecord},
    input::hover::HoverState,
    layers::marker::Marker,
    rendering::color::{ElevationColorRamp, Rgba},
};

pub const TITLE: &str = "Volcanoes of the World";
pub const LOADING_MESSAGE: &str = "Loading data…";
pub const LEGEND_HEADING: &str = "Elevation above sea level - marker color";
pub const LEGEND_CAPTION: &str = "Size = volcano elevation";
pub const INFO_HEADING: &str = "Volcano details";
pub const INFO_PROMPT: &str = "Hover over a point on the map to see its details.";
pub const NOT_AVAILABLE: &str = "n.d.";

const BACKGROUND: Rgba = Rgba::rgb(5, 7, 10);
const ERROR_TEXT: Rgba = Rgba::rgb(255, 120, 120);
const MAP_CARD: Rgba = Rgba::rgba(0, 0, 0, 220);
const MAP_PLACEHOLDER: Rgba = Rgba::gray(20);
const MAP_TINT: Rgba = Rgba::rgb(60, 60, 65);
const GRID: Rgba = Rgba::rgba(40, 40, 50, 180);
const HOVER_RING: Rgba = Rgba::rgb(255, 80, 80);
const PANEL: Rgba = Rgba::rgba(5, 7, 15, 230);
const SEPARATOR: Rgba = Rgba::rgb(40, 45, 60);

const CARD_PADDING: f64 = 12.0;
const CARD_ROUNDING: f32 = 18.0;
const PANEL_ROUNDING: f32 = 14.0;
const LEGEND_BAR_MAX_WIDTH: f64 = 260.0;
const LEGEND_BAR_HEIGHT: f64 = 18.0;

/// Horizontal anchor for text; text always hangs from its top edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    LeftTop,
    CenterTop,
}

/// A single drawing primitive in screen coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Rgba,
    },
    Rect {
        rect: ScreenRect,
        rounding: f32,
        fill: Rgba,
    },
    RectStroke {
        rect: ScreenRect,
        rounding: f32,
        width: f32,
        color: Rgba,
    },
    /// The background map image, stretched over `rect`
    MapImage {
        rect: ScreenRect,
        tint: Rgba,
    },
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: Rgba,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Rgba,
    },
    Ring {
        center: Point,
        radius: f64,
        width: f32,
        color: Rgba,
    },
    Text {
        pos: Point,
        align: TextAlign,
        text: String,
        size: f32,
        color: Rgba,
    },
}

/// One frame worth of drawing commands plus the hover it was built with
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
    pub hover: HoverState,
}

impl Scene {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn text(&mut self, x: f64, y: f64, align: TextAlign, text: impl Into<String>, size: f32, color: Rgba) {
        self.push(DrawCommand::Text {
            pos: Point::new(x, y),
            align,
            text: text.into(),
            size,
            color,
        });
    }

    fn title(&mut self, config: &ViewerConfig) {
        self.push(DrawCommand::Clear { color: BACKGROUND });
        self.text(config.layout.margin, 8.0, TextAlign::LeftTop, TITLE, 28.0, Rgba::WHITE);
    }
}

/// Title plus a single status line; used for the Loading and Error states.
pub fn build_message_scene(config: &ViewerConfig, message: &str, is_error: bool) -> Scene {
    let mut scene = Scene::default();
    scene.title(config);
    let color = if is_error { ERROR_TEXT } else { Rgba::gray(200) };
    scene.text(config.layout.margin, 52.0, TextAlign::LeftTop, message, 16.0, color);
    scene
}

/// Everything the full map frame depends on
pub struct SceneInputs<'a> {
    pub config: &'a ViewerConfig,
    pub dataset: &'a Dataset,
    pub layout: &'a PanelLayout,
    pub markers: &'a [Marker],
    pub hover: HoverState,
    pub ramp: &'a ElevationColorRamp,
    pub image_available: bool,
}

/// Builds the complete map frame: card, image, graticule, markers, legend
/// and info panel.
pub fn build_map_scene(inputs: &SceneInputs<'_>) -> Scene {
    let mut scene = Scene {
        commands: Vec::with_capacity(inputs.markers.len() * 2 + 400),
        hover: inputs.hover,
    };
    scene.title(inputs.config);

    let map = inputs.layout.map;
    draw_map_background(&mut scene, map, inputs.image_available);

    let projector = GeoProjector::new(inputs.config.projection.clone(), map);
    draw_graticule(&mut scene, &projector);
    draw_markers(&mut scene, inputs.markers, inputs.hover);

    draw_legend(&mut scene, inputs.layout.legend, inputs.ramp);
    let hovered = inputs.hover.index().and_then(|i| inputs.dataset.get(i));
    draw_info_panel(&mut scene, inputs.layout.info, hovered);

    scene
}

fn draw_map_background(scene: &mut Scene, map: ScreenRect, image_available: bool) {
    scene.push(DrawCommand::Rect {
        rect: map.expand(CARD_PADDING),
        rounding: CARD_ROUNDING,
        fill: MAP_CARD,
    });

    if image_available {
        scene.push(DrawCommand::MapImage {
            rect: map,
            tint: MAP_TINT,
        });
    } else {
        scene.push(DrawCommand::Rect {
            rect: map,
            rounding: 0.0,
            fill: MAP_PLACEHOLDER,
        });
    }
}

fn draw_graticule(scene: &mut Scene, projector: &GeoProjector) {
    let map = projector.rect();

    let mut lon = -180.0;
    while lon <= 180.0 {
        let x = projector.lon_to_x(lon);
        scene.push(DrawCommand::Line {
            from: Point::new(x, map.y),
            to: Point::new(x, map.bottom()),
            width: 1.0,
            color: GRID,
        });
        lon += GRID_STEP_DEG;
    }

    let mut lat = -60.0;
    while lat <= 60.0 {
        let y = projector.lat_to_y(lat);
        scene.push(DrawCommand::Line {
            from: Point::new(map.x, y),
            to: Point::new(map.right(), y),
            width: 1.0,
            color: GRID,
        });
        lat += GRID_STEP_DEG;
    }
}

fn draw_markers(scene: &mut Scene, markers: &[Marker], hover: HoverState) {
    for marker in markers {
        let hovered = hover.is_hovered(marker.index);

        scene.push(DrawCommand::Circle {
            center: marker.center,
            radius: marker.radius * 1.2,
            fill: marker.color.with_alpha(if hovered { 180 } else { 100 }),
        });
        scene.push(DrawCommand::Circle {
            center: marker.center,
            radius: marker.radius * 0.8,
            fill: marker.color,
        });

        if hovered {
            scene.push(DrawCommand::Ring {
                center: marker.center,
                radius: marker.radius * 1.4,
                width: 1.3,
                color: HOVER_RING,
            });
        }
    }
}

/// Formats an elevation tick label: `-6000 m`, `0 m`, `+7000 m`.
pub fn elevation_label(meters: f64) -> String {
    if meters > 0.0 {
        format!("+{meters:.0} m")
    } else if meters < 0.0 {
        format!("{meters:.0} m")
    } else {
        "0 m".to_string()
    }
}

fn draw_legend(scene: &mut Scene, legend: ScreenRect, ramp: &ElevationColorRamp) {
    scene.push(DrawCommand::Rect {
        rect: legend,
        rounding: PANEL_ROUNDING,
        fill: PANEL,
    });

    let center_x = legend.x + legend.width / 2.0;
    scene.text(center_x, legend.y + 10.0, TextAlign::CenterTop, LEGEND_HEADING, 14.0, Rgba::WHITE);

    let bar_w = LEGEND_BAR_MAX_WIDTH.min(legend.width * 0.4);
    let bar = ScreenRect::new(
        legend.x + (legend.width - bar_w) / 2.0,
        legend.y + 32.0,
        bar_w,
        LEGEND_BAR_HEIGHT,
    );

    // one vertical line per pixel column
    let columns = bar_w.ceil().max(0.0) as usize;
    let denom = (bar_w - 1.0).max(1.0);
    for i in 0..columns {
        let t = (i as f64 / denom).min(1.0);
        let x = bar.x + i as f64;
        scene.push(DrawCommand::Line {
            from: Point::new(x, bar.y),
            to: Point::new(x, bar.bottom()),
            width: 1.0,
            color: ramp.color_at(t),
        });
    }
    scene.push(DrawCommand::RectStroke {
        rect: bar,
        rounding: 8.0,
        width: 1.0,
        color: Rgba::gray(240),
    });

    let label_y = bar.bottom() + 5.0;
    for (t, x) in [(0.0, bar.x), (0.5, bar.x + bar_w / 2.0), (1.0, bar.right())] {
        let label = elevation_label(ramp.elevation_at(t));
        scene.text(x, label_y, TextAlign::CenterTop, label, 11.0, Rgba::gray(220));
    }

    scene.text(
        center_x,
        bar.bottom() + 24.0,
        TextAlign::CenterTop,
        LEGEND_CAPTION,
        12.0,
        Rgba::gray(200),
    );
}

fn format_number(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.3}")
    } else {
        NOT_AVAILABLE.to_string()
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// Heading line of the info panel: `Name (Country)`.
pub fn record_heading(record: &VolcanoRecord) -> String {
    let name = if record.name.is_empty() { "—" } else { record.name.as_str() };
    if record.country.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, record.country)
    }
}

/// Detail lines shown under the heading for a hovered record.
pub fn record_details(record: &VolcanoRecord) -> Vec<String> {
    vec![
        format!("Type: {}", or_dash(&record.kind)),
        format!("Category: {}", or_dash(&record.type_category)),
        format!("Status: {}", or_dash(&record.status)),
        String::new(),
        format!("Lat: {}", format_number(record.latitude)),
        format!("Lon: {}", format_number(record.longitude)),
        match record.elevation {
            Some(e) => format!("Elevation: {} m", format_number(e)),
            None => format!("Elevation: {NOT_AVAILABLE}"),
        },
        if record.last_eruption.is_empty() {
            format!("Last Known Eruption: {NOT_AVAILABLE}")
        } else {
            format!("Last Known Eruption: {}", record.last_eruption)
        },
    ]
}

fn draw_info_panel(scene: &mut Scene, info: ScreenRect, hovered: Option<&VolcanoRecord>) {
    scene.push(DrawCommand::Rect {
        rect: info,
        rounding: PANEL_ROUNDING,
        fill: PANEL,
    });
    scene.push(DrawCommand::Line {
        from: Point::new(info.x + 12.0, info.y + 26.0),
        to: Point::new(info.right() - 12.0, info.y + 26.0),
        width: 1.0,
        color: SEPARATOR,
    });
    scene.text(info.x + 12.0, info.y + 8.0, TextAlign::LeftTop, INFO_HEADING, 14.0, Rgba::WHITE);

    let x = info.x + 16.0;
    let mut y = info.y + 36.0;

    let Some(record) = hovered else {
        scene.text(x, y, TextAlign::LeftTop, INFO_PROMPT, 13.0, Rgba::gray(220));
        return;
    };

    scene.text(x, y, TextAlign::LeftTop, record_heading(record), 15.0, Rgba::WHITE);
    y += 22.0;

    for line in record_details(record) {
        if !line.is_empty() {
            scene.text(x, y, TextAlign::LeftTop, line, 13.0, Rgba::WHITE);
        }
        y += 18.0;
    }
}
