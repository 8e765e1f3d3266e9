use crate::{
    layout::Layout,
    render::{Color, CommandList, Stroke, Surface},
};

const RIM_WIDTH: f32 = 2.0;
const HUB_DIAMETER: f32 = 8.0;

/// White disc with a black rim, and the black hub at the centre.
pub fn draw_face(layout: &Layout) -> CommandList {
    let mut commands = CommandList::new();
    let diameter = layout.radius * 2.0;

    commands.set_stroke(Some(Stroke::new(Color::BLACK, RIM_WIDTH)));
    commands.set_fill(Some(Color::WHITE));
    commands.draw_ellipse(layout.center, diameter, diameter);

    commands.set_fill(Some(Color::BLACK));
    commands.set_stroke(None);
    commands.draw_ellipse(layout.center, HUB_DIAMETER, HUB_DIAMETER);

    commands
}
