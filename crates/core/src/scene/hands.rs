use crate::{
    layout::Layout,
    mapping::polar_point,
    render::{Color, CommandList, Stroke, Surface},
    timeline::HandAngles,
};

const HAND_WIDTH: f32 = 2.0;

/// One hand for one frame. Built fresh from the frame's angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hand {
    /// Degrees, screen orientation.
    pub angle: f32,
    /// Fraction of the face radius, in `(0, 1]`.
    pub length: f32,
    pub color: Color,
}

impl Hand {
    pub fn hour(angle: f32) -> Self {
        Self {
            angle,
            length: 0.7,
            color: Color::BLACK,
        }
    }

    pub fn minute(angle: f32) -> Self {
        Self {
            angle,
            length: 0.8,
            color: Color::BLACK,
        }
    }

    pub fn second(angle: f32) -> Self {
        Self {
            angle,
            length: 0.9,
            color: Color::RED,
        }
    }

    /// Hour, minute and second hands, in draw order.
    pub fn set(angles: &HandAngles) -> [Self; 3] {
        [
            Self::hour(angles.hour),
            Self::minute(angles.minute),
            Self::second(angles.second),
        ]
    }
}

pub fn draw_hand(layout: &Layout, hand: &Hand) -> CommandList {
    let mut commands = CommandList::new();
    let tip = polar_point(layout.center, hand.angle, hand.length * layout.radius);

    commands.set_stroke(Some(Stroke::new(hand.color, HAND_WIDTH)));
    commands.draw_line(layout.center, tip);
    commands
}
