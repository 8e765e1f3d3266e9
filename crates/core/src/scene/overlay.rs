use super::{large_text, small_text, DrawContext};
use crate::{
    layout::Layout,
    render::{CommandList, Point, Surface},
    timeline::TimeSnapshot,
};

/// `HH:MM:SS` below the hub.
pub fn draw_clock_text(
    context: &DrawContext,
    layout: &Layout,
    time: &TimeSnapshot,
) -> CommandList {
    let size = large_text(layout.radius);
    draw_line_of_text(context, layout, &time.clock_text(), 0.5, size)
}

/// `D/M/YYYY` above the hub.
pub fn draw_date(context: &DrawContext, layout: &Layout, time: &TimeSnapshot) -> CommandList {
    let size = large_text(layout.radius);
    draw_line_of_text(context, layout, &time.date_text(), -0.5, size)
}

/// Attribution just under the digital readout.
pub fn draw_caption(context: &DrawContext, layout: &Layout, caption: &str) -> CommandList {
    draw_line_of_text(context, layout, caption, 0.55, small_text(layout.radius))
}

/// `offset` is a fraction of the radius below (positive) or above the centre.
fn draw_line_of_text(
    context: &DrawContext,
    layout: &Layout,
    text: &str,
    offset: f32,
    size: f32,
) -> CommandList {
    let mut commands = CommandList::new();
    context.text_style(&mut commands, size);
    commands.draw_text(
        text,
        Point::new(layout.center.x, layout.center.y + layout.radius * offset),
    );
    commands
}
