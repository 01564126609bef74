use egui::{Align2, Color32, Painter, Pos2, Rect, Stroke, TextureId};

use crate::{
    core::{geo::Point, layout::ScreenRect},
    rendering::scene::{DrawCommand, Scene, TextAlign},
    ui::style::{StyleExt, ViewStyle},
};

fn to_pos(point: Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

fn to_rect(rect: ScreenRect) -> Rect {
    Rect::from_min_size(
        Pos2::new(rect.x as f32, rect.y as f32),
        egui::vec2(rect.width as f32, rect.height as f32),
    )
}

fn to_align(align: TextAlign) -> Align2 {
    match align {
        TextAlign::LeftTop => Align2::LEFT_TOP,
        TextAlign::CenterTop => Align2::CENTER_TOP,
    }
}

/// Paints a display list with egui.
///
/// `map_texture` backs [`DrawCommand::MapImage`]; without it the image
/// command is skipped, which leaves the dark map card visible.
pub fn paint_scene(painter: &Painter, scene: &Scene, map_texture: Option<TextureId>, style: &ViewStyle) {
    for command in &scene.commands {
        match command {
            DrawCommand::Clear { color } => {
                painter.rect_filled(painter.clip_rect(), 0.0, Color32::from(*color));
            }
            DrawCommand::Rect {
                rect,
                rounding,
                fill,
            } => {
                painter.rect_filled(to_rect(*rect), *rounding, Color32::from(*fill));
            }
            DrawCommand::RectStroke {
                rect,
                rounding,
                width,
                color,
            } => {
                painter.rect_stroke(
                    to_rect(*rect),
                    *rounding,
                    Stroke::new(*width, Color32::from(*color)),
                );
            }
            DrawCommand::MapImage { rect, tint } => {
                if let Some(texture_id) = map_texture {
                    painter.image(
                        texture_id,
                        to_rect(*rect),
                        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                        Color32::from(*tint),
                    );
                }
            }
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => {
                painter.line_segment(
                    [to_pos(*from), to_pos(*to)],
                    Stroke::new(*width, Color32::from(*color)),
                );
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
            } => {
                painter.circle_filled(to_pos(*center), *radius as f32, Color32::from(*fill));
            }
            DrawCommand::Ring {
                center,
                radius,
                width,
                color,
            } => {
                painter.circle_stroke(
                    to_pos(*center),
                    *radius as f32,
                    Stroke::new(*width, Color32::from(*color)),
                );
            }
            DrawCommand::Text {
                pos,
                align,
                text,
                size,
                color,
            } => {
                painter.text(
                    to_pos(*pos),
                    to_align(*align),
                    text,
                    style.font_for(*size),
                    Color32::from(*color),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let rect = to_rect(ScreenRect::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(rect.min, Pos2::new(10.0, 20.0));
        assert_eq!(rect.max, Pos2::new(40.0, 60.0));
        assert_eq!(to_pos(Point::new(1.5, 2.5)), Pos2::new(1.5, 2.5));
        assert_eq!(to_align(TextAlign::CenterTop), Align2::CENTER_TOP);
    }
}
