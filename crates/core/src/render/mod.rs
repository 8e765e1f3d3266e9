//! Draw-command model shared by the renderers and the host surfaces.
//!
//! Renderers never talk to a live surface. They build a [`CommandList`],
//! which the frame controller replays onto whatever [`Surface`] the host
//! provides. A [`CommandList`] is itself a [`Surface`], so it doubles as a
//! recording backend in tests.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const BACKGROUND: Self = Self::rgb(220, 220, 220);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Baseline,
    Bottom,
}

/// One host drawing primitive. State commands (`Set*`) persist until the
/// next command of the same kind, exactly like the host's drawing context.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    /// `None` disables outlines.
    SetStroke(Option<Stroke>),
    /// `None` disables filling.
    SetFill(Option<Color>),
    Ellipse {
        center: Point,
        width: f32,
        height: f32,
    },
    Line {
        from: Point,
        to: Point,
    },
    SetTextSize(f32),
    SetTextAlign(HorizontalAlign, VerticalAlign),
    SetFont(String),
    Text {
        content: String,
        at: Point,
    },
}

impl DrawCommand {
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            Self::Clear(color) => surface.clear(*color),
            Self::SetStroke(stroke) => surface.set_stroke(*stroke),
            Self::SetFill(fill) => surface.set_fill(*fill),
            Self::Ellipse {
                center,
                width,
                height,
            } => surface.draw_ellipse(*center, *width, *height),
            Self::Line { from, to } => surface.draw_line(*from, *to),
            Self::SetTextSize(size) => surface.set_text_size(*size),
            Self::SetTextAlign(horizontal, vertical) => {
                surface.set_text_align(*horizontal, *vertical)
            }
            Self::SetFont(name) => surface.set_font(name),
            Self::Text { content, at } => surface.draw_text(content, *at),
        }
    }
}

/// Drawing primitives a host graphics environment must provide.
pub trait Surface {
    fn clear(&mut self, background: Color);
    fn set_stroke(&mut self, stroke: Option<Stroke>);
    fn set_fill(&mut self, fill: Option<Color>);
    /// Ellipse centred on `center` with the given full width and height.
    fn draw_ellipse(&mut self, center: Point, width: f32, height: f32);
    fn draw_line(&mut self, from: Point, to: Point);
    fn set_text_size(&mut self, size: f32);
    fn set_text_align(&mut self, horizontal: HorizontalAlign, vertical: VerticalAlign);
    fn set_font(&mut self, name: &str);
    fn draw_text(&mut self, text: &str, at: Point);

    /// Whether the host can render `family`. Hosts without font discovery
    /// accept everything.
    fn supports_font(&self, _family: &str) -> bool {
        true
    }
}

/// Ordered list of draw commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn append(&mut self, mut other: CommandList) {
        self.commands.append(&mut other.commands);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text draws in order, as `(content, position)`.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { content, at } => Some((content.as_str(), *at)),
            _ => None,
        })
    }

    /// Replays every command, in order, onto `surface`.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            command.apply(surface);
        }
    }
}

impl Surface for CommandList {
    fn clear(&mut self, background: Color) {
        self.push(DrawCommand::Clear(background));
    }

    fn set_stroke(&mut self, stroke: Option<Stroke>) {
        self.push(DrawCommand::SetStroke(stroke));
    }

    fn set_fill(&mut self, fill: Option<Color>) {
        self.push(DrawCommand::SetFill(fill));
    }

    fn draw_ellipse(&mut self, center: Point, width: f32, height: f32) {
        self.push(DrawCommand::Ellipse {
            center,
            width,
            height,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.push(DrawCommand::Line { from, to });
    }

    fn set_text_size(&mut self, size: f32) {
        self.push(DrawCommand::SetTextSize(size));
    }

    fn set_text_align(&mut self, horizontal: HorizontalAlign, vertical: VerticalAlign) {
        self.push(DrawCommand::SetTextAlign(horizontal, vertical));
    }

    fn set_font(&mut self, name: &str) {
        self.push(DrawCommand::SetFont(name.to_string()));
    }

    fn draw_text(&mut self, text: &str, at: Point) {
        self.push(DrawCommand::Text {
            content: text.to_string(),
            at,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_reproduces_commands() {
        let mut source = CommandList::new();
        source.clear(Color::BACKGROUND);
        source.set_stroke(Some(Stroke::new(Color::BLACK, 2.0)));
        source.draw_line(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        source.set_font("Helvetica");
        source.draw_text("12", Point::new(5.0, 5.0));

        let mut target = CommandList::new();
        source.replay(&mut target);

        assert_eq!(source, target);
        assert_eq!(target.len(), 5);
    }

    #[test]
    fn texts_skips_non_text_commands() {
        let mut list = CommandList::new();
        list.set_fill(Some(Color::BLACK));
        list.draw_text("1", Point::new(1.0, 2.0));
        list.draw_ellipse(Point::default(), 8.0, 8.0);
        list.draw_text("2", Point::new(3.0, 4.0));

        let texts: Vec<_> = list.texts().map(|(text, _)| text).collect();
        assert_eq!(texts, vec!["1", "2"]);
    }
}
