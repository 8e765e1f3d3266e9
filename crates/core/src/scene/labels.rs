use super::{large_text, small_text, DrawContext};
use crate::{
    layout::Layout,
    mapping::{linear_map, polar_point},
    render::{CommandList, Surface},
};

const HOUR_LABEL_RADIUS: f32 = 0.9;
const MINUTE_LABEL_RADIUS: f32 = 0.97;

/// Numerals 1 to 12, just inside the rim.
pub fn draw_hour_labels(context: &DrawContext, layout: &Layout) -> CommandList {
    draw_ring(
        context,
        layout,
        12,
        HOUR_LABEL_RADIUS,
        large_text(layout.radius),
    )
}

/// Numerals 1 to 60, hugging the rim.
pub fn draw_minute_labels(context: &DrawContext, layout: &Layout) -> CommandList {
    draw_ring(
        context,
        layout,
        60,
        MINUTE_LABEL_RADIUS,
        small_text(layout.radius),
    )
}

fn draw_ring(
    context: &DrawContext,
    layout: &Layout,
    count: u32,
    distance: f32,
    size: f32,
) -> CommandList {
    let mut commands = CommandList::new();
    context.text_style(&mut commands, size);

    for i in 1..=count {
        let angle = linear_map(i as f32, 0.0, count as f32, -90.0, 270.0);
        let at = polar_point(layout.center, angle, layout.radius * distance);
        commands.draw_text(&i.to_string(), at);
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        layout::SurfaceSize,
        render::{Color, DrawCommand, Point},
    };

    const EPSILON: f32 = 1e-3;

    fn layout() -> Layout {
        Layout::compute(SurfaceSize::new(620.0, 620.0))
    }

    fn position(commands: &CommandList, label: &str) -> Point {
        commands
            .texts()
            .find(|(text, _)| *text == label)
            .map(|(_, at)| at)
            .expect("label is drawn")
    }

    #[test]
    fn hour_labels_run_clockwise_from_one() {
        let commands = draw_hour_labels(&DrawContext::new("Helvetica"), &layout());
        let labels: Vec<_> = commands.texts().map(|(text, _)| text.to_string()).collect();
        let expected: Vec<_> = (1..=12).map(|i| i.to_string()).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn twelve_sits_on_top_and_six_at_bottom() {
        let layout = layout();
        let commands = draw_hour_labels(&DrawContext::new("Helvetica"), &layout);

        let twelve = position(&commands, "12");
        let top = polar_point(layout.center, -90.0, layout.radius * 0.9);
        assert!((twelve.x - top.x).abs() <= EPSILON);
        assert!((twelve.y - top.y).abs() <= EPSILON);
        assert!((twelve.y - 40.0).abs() <= EPSILON);

        let six = position(&commands, "6");
        assert!((six.x - 310.0).abs() <= EPSILON);
        assert!((six.y - 580.0).abs() <= EPSILON);
    }

    #[test]
    fn minute_labels_use_small_black_unstroked_text() {
        let layout = layout();
        let commands = draw_minute_labels(&DrawContext::new("Helvetica"), &layout);

        assert_eq!(commands.texts().count(), 60);
        assert_eq!(commands.commands()[0], DrawCommand::SetTextSize(10.0));
        assert!(commands
            .commands()
            .contains(&DrawCommand::SetFill(Some(Color::BLACK))));
        assert!(commands.commands().contains(&DrawCommand::SetStroke(None)));

        let fifteen = position(&commands, "15");
        assert!((fifteen.x - (310.0 + 300.0 * 0.97)).abs() <= EPSILON);
    }
}
