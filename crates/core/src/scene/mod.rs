//! Pure renderers for the clock face.
//!
//! Each renderer takes the frame's [`Layout`](crate::layout::Layout) plus
//! whatever values it presents and returns a [`CommandList`](crate::render::CommandList).
//! None of them touch a live surface or read the clock.

mod face;
mod hands;
mod labels;
mod overlay;

pub use face::draw_face;
pub use hands::{draw_hand, Hand};
pub use labels::{draw_hour_labels, draw_minute_labels};
pub use overlay::{draw_caption, draw_clock_text, draw_date};

use crate::render::{Color, CommandList, HorizontalAlign, Surface, VerticalAlign};

/// Immutable drawing state shared by the text renderers of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawContext {
    /// Already resolved against the host's available fonts.
    pub font: String,
}

impl DrawContext {
    pub fn new(font: impl Into<String>) -> Self {
        Self { font: font.into() }
    }

    /// Centred, black, unstroked text at `size`.
    fn text_style(&self, commands: &mut CommandList, size: f32) {
        commands.set_text_size(size);
        commands.set_text_align(HorizontalAlign::Center, VerticalAlign::Center);
        commands.set_font(&self.font);
        commands.set_fill(Some(Color::BLACK));
        commands.set_stroke(None);
    }
}

/// Font size for hour numerals, the digital readout and the date.
fn large_text(radius: f32) -> f32 {
    radius / 10.0
}

/// Font size for minute numerals and the caption.
fn small_text(radius: f32) -> f32 {
    radius / 30.0
}
