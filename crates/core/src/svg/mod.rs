//! Headless SVG surface used by the command line host.

use std::path::Path;

use crate::{
    layout::SurfaceSize,
    render::{Color, HorizontalAlign, Point, Stroke, Surface, VerticalAlign},
    Result,
};

/// Accumulates drawing primitives into an SVG document. Drawing state
/// (stroke, fill, text settings) persists between calls like a canvas.
///
/// Font families are written through as `font-family` and resolved by the
/// SVG viewer, so every family is accepted and the configured fallback is
/// never chosen here.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: SurfaceSize,
    elements: Vec<String>,
    stroke: Option<Stroke>,
    fill: Option<Color>,
    text_size: f32,
    align: (HorizontalAlign, VerticalAlign),
    font: String,
}

impl SvgSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            elements: Vec::new(),
            stroke: Some(Stroke::new(Color::BLACK, 1.0)),
            fill: Some(Color::WHITE),
            text_size: 12.0,
            align: (HorizontalAlign::Left, VerticalAlign::Baseline),
            font: "sans-serif".to_string(),
        }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Changes the canvas dimensions and drops whatever was drawn.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.elements.clear();
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn to_svg(&self) -> String {
        let mut document = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.size.width,
            h = self.size.height,
        );
        document.push('\n');
        for element in &self.elements {
            document.push_str("  ");
            document.push_str(element);
            document.push('\n');
        }
        document.push_str("</svg>\n");
        document
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_svg())?;
        Ok(())
    }

    fn stroke_attributes(&self) -> String {
        match self.stroke {
            Some(stroke) => format!(
                r#"stroke="{}" stroke-width="{}""#,
                paint(Some(stroke.color)),
                stroke.width
            ),
            None => r#"stroke="none""#.to_string(),
        }
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self, background: Color) {
        self.elements.clear();
        self.elements.push(format!(
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            paint(Some(background))
        ));
    }

    fn set_stroke(&mut self, stroke: Option<Stroke>) {
        self.stroke = stroke;
    }

    fn set_fill(&mut self, fill: Option<Color>) {
        self.fill = fill;
    }

    fn draw_ellipse(&mut self, center: Point, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let element = format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}" {}/>"#,
            center.x,
            center.y,
            width / 2.0,
            height / 2.0,
            paint(self.fill),
            self.stroke_attributes()
        );
        self.elements.push(element);
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        let element = format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            self.stroke_attributes()
        );
        self.elements.push(element);
    }

    fn set_text_size(&mut self, size: f32) {
        self.text_size = size;
    }

    fn set_text_align(&mut self, horizontal: HorizontalAlign, vertical: VerticalAlign) {
        self.align = (horizontal, vertical);
    }

    fn set_font(&mut self, name: &str) {
        self.font = name.to_string();
    }

    fn draw_text(&mut self, text: &str, at: Point) {
        if self.text_size <= 0.0 {
            return;
        }
        let anchor = match self.align.0 {
            HorizontalAlign::Left => "start",
            HorizontalAlign::Center => "middle",
            HorizontalAlign::Right => "end",
        };
        let baseline = match self.align.1 {
            VerticalAlign::Top => "hanging",
            VerticalAlign::Center => "central",
            VerticalAlign::Baseline => "alphabetic",
            VerticalAlign::Bottom => "text-after-edge",
        };

        let element = format!(
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" text-anchor="{anchor}" dominant-baseline="{baseline}" fill="{}" {}>{}</text>"#,
            at.x,
            at.y,
            escape(&self.font),
            self.text_size,
            paint(self.fill),
            self.stroke_attributes(),
            escape(text)
        );
        self.elements.push(element);
    }
}

fn paint(color: Option<Color>) -> String {
    match color {
        Some(Color { r, g, b }) => format!("rgb({r},{g},{b})"),
        None => "none".to_string(),
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
