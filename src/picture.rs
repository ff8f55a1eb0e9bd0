use std::path::Path;

use raylib::prelude::*;

/// Slide payload for the viewer: an uploaded texture and the name shown in the marquee.
pub struct Picture {
    texture: Texture2D,
    pub name: String,
}

impl Picture {
    pub fn new(texture: Texture2D, path: &Path) -> Self {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { texture, name }
    }

    /// Scale that fits the whole picture inside `width` x `height`.
    fn fit_scale(&self, width: f32, height: f32) -> f32 {
        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;
        if tex_width <= 0.0 || tex_height <= 0.0 {
            return 1.0;
        }
        (width / tex_width).min(height / tex_height)
    }

    /// Draw letterboxed and centered on a `width` x `height` screen, shifted by `offset_x`.
    pub fn draw(&self, d: &mut RaylibDrawHandle, width: f32, height: f32, offset_x: f32, scale: f32, opacity: f32) {
        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;
        let scale = self.fit_scale(width, height) * scale;

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;
        let dest = Rectangle::new(
            (width - scaled_width) * 0.5 + offset_x,
            (height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;

        d.draw_texture_pro(
            &self.texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, alpha),
        );
    }
}
