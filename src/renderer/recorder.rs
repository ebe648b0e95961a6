//! Recording surface for tests

use super::{Color, Font, ScoreDisplay, Surface};
use crate::sim::Aabb;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Aabb),
    Rect(Aabb, Color),
    Text(String, i32, i32, Font, Color),
    Label(String),
}

/// Logs every call in order
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text(text, ..) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn rects_of(&self, color: Color) -> Vec<Aabb> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Rect(rect, c) if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, region: Aabb) {
        self.calls.push(DrawCall::Clear(region));
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        self.calls.push(DrawCall::Rect(rect, color));
    }

    fn fill_text(&mut self, text: &str, x: i32, y: i32, font: Font, color: Color) {
        self.calls.push(DrawCall::Text(text.to_string(), x, y, font, color));
    }
}

impl ScoreDisplay for Recorder {
    fn set_text(&mut self, label: &str) {
        self.calls.push(DrawCall::Label(label.to_string()));
    }
}
