//! Browser backends: `CanvasRenderingContext2d` and a DOM text element

use web_sys::{CanvasRenderingContext2d, Element};

use super::{Color, Font, ScoreDisplay, Surface};
use crate::sim::Aabb;

/// Draws onto a 2D canvas context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, region: Aabb) {
        self.ctx.clear_rect(
            region.min.x as f64,
            region.min.y as f64,
            region.size.x as f64,
            region.size.y as f64,
        );
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            rect.min.x as f64,
            rect.min.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_text(&mut self, text: &str, x: i32, y: i32, font: Font, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&font.to_css());
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}

/// Writes the score into a DOM element's text
pub struct ElementLabel(pub Element);

impl ScoreDisplay for ElementLabel {
    fn set_text(&mut self, label: &str) {
        self.0.set_text_content(Some(label));
    }
}
