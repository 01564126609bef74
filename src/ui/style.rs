use egui::{FontFamily, FontId, TextureOptions};

/// How the display list is mapped onto egui
#[derive(Debug, Clone)]
pub struct ViewStyle {
    /// Font family for every text command
    pub font_family: FontFamily,
    /// Multiplier applied to text sizes from the scene
    pub text_scale: f32,
    /// Sampling of the background map texture
    pub texture_options: TextureOptions,
}

impl Default for ViewStyle {
    fn default() -> Self {
        Self {
            font_family: FontFamily::Proportional,
            text_scale: 1.0,
            texture_options: TextureOptions::LINEAR,
        }
    }
}

/// Predefined view styles
pub struct ViewThemes;

impl ViewThemes {
    /// Proportional text, smooth image (default)
    pub fn standard() -> ViewStyle {
        ViewStyle::default()
    }

    /// Larger text for presentations
    pub fn large_text() -> ViewStyle {
        ViewStyle {
            text_scale: 1.25,
            ..ViewStyle::default()
        }
    }

    /// Monospace text and unfiltered image pixels
    pub fn technical() -> ViewStyle {
        ViewStyle {
            font_family: FontFamily::Monospace,
            texture_options: TextureOptions::NEAREST,
            ..ViewStyle::default()
        }
    }
}

/// Extension trait for resolving scene text sizes against a style
pub trait StyleExt {
    fn font_for(&self, size: f32) -> FontId;
}

impl StyleExt for ViewStyle {
    fn font_for(&self, size: f32) -> FontId {
        FontId::new(size * self.text_scale, self.font_family.clone())
    }
}
