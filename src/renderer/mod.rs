//! 2D rendering module
//!
//! The game draws through two small traits so the simulation never touches the DOM:
//! [`Surface`] for the canvas and [`ScoreDisplay`] for the score label.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(test)]
pub(crate) mod recorder;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasSurface, ElementLabel};
pub use scene::{draw_game_over, draw_scene};

use crate::sim::Aabb;

/// An RGBA fill colour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity, 0.0 - 1.0
    pub a: f32,
}

impl Color {
    pub const PLAYER: Color = Color::rgb(0, 0, 255);
    pub const OBSTACLE: Color = Color::rgb(255, 0, 0);
    pub const OVERLAY: Color = Color::rgba(0, 0, 0, 0.5);
    pub const TEXT: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS colour string for canvas fill styles
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A canvas font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub size_px: u32,
    pub family: &'static str,
}

impl Font {
    pub const TITLE: Font = Font::new(30, "Arial");
    pub const BODY: Font = Font::new(20, "Arial");

    pub const fn new(size_px: u32, family: &'static str) -> Self {
        Self { size_px, family }
    }

    /// CSS font shorthand, e.g. `30px Arial`
    pub fn to_css(&self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }
}

/// A 2D drawing surface
pub trait Surface {
    /// Erase a region to transparent
    fn clear(&mut self, region: Aabb);

    fn fill_rect(&mut self, rect: Aabb, color: Color);

    /// Draw text with its baseline starting at (x, y)
    fn fill_text(&mut self, text: &str, x: i32, y: i32, font: Font, color: Color);
}

/// A text label showing the score
pub trait ScoreDisplay {
    fn set_text(&mut self, label: &str);
}

/// A missing label swallows updates
impl<T: ScoreDisplay> ScoreDisplay for Option<T> {
    fn set_text(&mut self, label: &str) {
        if let Some(display) = self {
            display.set_text(label);
        }
    }
}
