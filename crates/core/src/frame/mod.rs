use crate::{
    config::ClockConfig,
    layout::{Layout, SurfaceSize},
    render::{CommandList, Surface},
    scene::{self, DrawContext, Hand},
    timeline::{HandAngles, TimeSnapshot, TimeSource},
};

/// Callbacks a host delivers to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Scheduled animation tick.
    Frame,
    /// The drawable area changed size.
    Resize(SurfaceSize),
}

/// Turns host ticks and resizes into complete redraws.
///
/// Nothing carries over between frames except the surface size: every
/// frame reads one time snapshot and recomputes the layout from scratch.
#[derive(Debug)]
pub struct FrameController<T> {
    config: ClockConfig,
    time_source: T,
    size: SurfaceSize,
    font: Option<String>,
    frames_rendered: u64,
}

impl<T: TimeSource> FrameController<T> {
    pub fn new(config: ClockConfig, time_source: T, size: SurfaceSize) -> Self {
        Self {
            config,
            time_source,
            size,
            font: None,
            frames_rendered: 0,
        }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Layout for the current surface size.
    pub fn layout(&self) -> Layout {
        Layout::compute(self.size)
    }

    pub fn handle<S: Surface + ?Sized>(&mut self, event: HostEvent, surface: &mut S) -> Layout {
        match event {
            HostEvent::Frame => self.on_frame(surface),
            HostEvent::Resize(size) => self.on_resize(size, surface),
        }
    }

    /// Redraws the whole clock for the current instant.
    pub fn on_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Layout {
        let time = self.time_source.now();
        let layout = self.layout();
        let context = DrawContext::new(self.resolve_font(surface));

        self.compose(&context, &layout, &time).replay(surface);
        self.frames_rendered += 1;
        tracing::trace!(
            frame = self.frames_rendered,
            time = %time.clock_text(),
            "rendered frame"
        );
        layout
    }

    /// Adopts the new size and redraws straight away so the surface never
    /// shows a face laid out for the old dimensions.
    pub fn on_resize<S: Surface + ?Sized>(
        &mut self,
        size: SurfaceSize,
        surface: &mut S,
    ) -> Layout {
        tracing::debug!(width = size.width, height = size.height, "surface resized");
        self.size = size;
        self.on_frame(surface)
    }

    /// Builds the full frame in draw order: face, hands, hour labels, minute
    /// labels, digital time, date, caption. A degenerate layout only clears.
    pub fn compose(
        &self,
        context: &DrawContext,
        layout: &Layout,
        time: &TimeSnapshot,
    ) -> CommandList {
        let mut commands = CommandList::new();
        commands.clear(self.config.background);

        if layout.is_degenerate() {
            tracing::debug!(
                width = self.size.width,
                height = self.size.height,
                "surface too small for a clock face"
            );
            return commands;
        }

        commands.append(scene::draw_face(layout));
        for hand in Hand::set(&HandAngles::from_time(time)) {
            commands.append(scene::draw_hand(layout, &hand));
        }
        commands.append(scene::draw_hour_labels(context, layout));
        commands.append(scene::draw_minute_labels(context, layout));
        commands.append(scene::draw_clock_text(context, layout, time));
        commands.append(scene::draw_date(context, layout, time));
        commands.append(scene::draw_caption(context, layout, &self.config.caption));
        commands
    }

    fn resolve_font<S: Surface + ?Sized>(&mut self, surface: &S) -> String {
        if let Some(font) = &self.font {
            return font.clone();
        }

        let font = self
            .config
            .font
            .resolve(|family| surface.supports_font(family))
            .to_string();
        self.font = Some(font.clone());
        font
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        render::{Color, DrawCommand, Point},
        timeline::FixedTimeSource,
    };

    fn controller(width: f32, height: f32) -> FrameController<FixedTimeSource> {
        let time = TimeSnapshot {
            hour: 1,
            minute: 2,
            second: 3,
            day: 7,
            month: 3,
            year: 2024,
        };
        FrameController::new(
            ClockConfig::default(),
            FixedTimeSource(time),
            SurfaceSize::new(width, height),
        )
    }

    /// Records like a [`CommandList`] but only knows one font family.
    struct LimitedFonts(CommandList);

    impl Surface for LimitedFonts {
        fn clear(&mut self, background: Color) {
            self.0.clear(background)
        }
        fn set_stroke(&mut self, stroke: Option<crate::render::Stroke>) {
            self.0.set_stroke(stroke)
        }
        fn set_fill(&mut self, fill: Option<Color>) {
            self.0.set_fill(fill)
        }
        fn draw_ellipse(&mut self, center: Point, width: f32, height: f32) {
            self.0.draw_ellipse(center, width, height)
        }
        fn draw_line(&mut self, from: Point, to: Point) {
            self.0.draw_line(from, to)
        }
        fn set_text_size(&mut self, size: f32) {
            self.0.set_text_size(size)
        }
        fn set_text_align(
            &mut self,
            horizontal: crate::render::HorizontalAlign,
            vertical: crate::render::VerticalAlign,
        ) {
            self.0.set_text_align(horizontal, vertical)
        }
        fn set_font(&mut self, name: &str) {
            self.0.set_font(name)
        }
        fn draw_text(&mut self, text: &str, at: Point) {
            self.0.draw_text(text, at)
        }
        fn supports_font(&self, family: &str) -> bool {
            family == "sans-serif"
        }
    }

    #[test]
    fn frame_layers_in_fixed_order() {
        let mut controller = controller(400.0, 400.0);
        let mut surface = CommandList::new();
        controller.on_frame(&mut surface);

        assert_eq!(surface.commands()[0], DrawCommand::Clear(Color::BACKGROUND));

        let ellipses = surface
            .commands()
            .iter()
            .filter(|command| matches!(command, DrawCommand::Ellipse { .. }))
            .count();
        let lines = surface
            .commands()
            .iter()
            .filter(|command| matches!(command, DrawCommand::Line { .. }))
            .count();
        assert_eq!((ellipses, lines), (2, 3));

        let texts: Vec<_> = surface.texts().map(|(text, _)| text.to_string()).collect();
        assert_eq!(texts.len(), 12 + 60 + 3);
        assert_eq!(texts[0], "1");
        assert_eq!(texts[11], "12");
        assert_eq!(texts[12], "1");
        assert_eq!(texts[71], "60");
        assert_eq!(texts[72], "01:02:03");
        assert_eq!(texts[73], "7/3/2024");
        assert_eq!(texts[74], crate::config::DEFAULT_CAPTION);

        let last_line = surface
            .commands()
            .iter()
            .rposition(|command| matches!(command, DrawCommand::Line { .. }))
            .unwrap();
        let first_text = surface
            .commands()
            .iter()
            .position(|command| matches!(command, DrawCommand::Text { .. }))
            .unwrap();
        assert!(last_line < first_text);
        assert_eq!(controller.frames_rendered(), 1);
    }

    #[test]
    fn resize_redraws_with_new_dimensions() {
        let mut controller = controller(400.0, 400.0);
        let mut surface = CommandList::new();
        controller.on_frame(&mut surface);

        let mut resized = CommandList::new();
        let layout = controller.handle(
            HostEvent::Resize(SurfaceSize::new(200.0, 100.0)),
            &mut resized,
        );

        assert_eq!(layout.center, Point::new(100.0, 50.0));
        assert_eq!(layout.radius, 40.0);
        assert_eq!(controller.layout(), layout);
        assert_eq!(controller.size(), SurfaceSize::new(200.0, 100.0));
        assert!(resized.commands().contains(&DrawCommand::Ellipse {
            center: Point::new(100.0, 50.0),
            width: 80.0,
            height: 80.0,
        }));
        assert_eq!(controller.frames_rendered(), 2);
    }

    #[test]
    fn margin_is_not_configurable() {
        let config = ClockConfig::from_json_str(r#"{ "margin": 50 }"#).unwrap();
        let time = FixedTimeSource(TimeSnapshot::parse("2024-03-07T01:02:03").unwrap());
        let controller = FrameController::new(config, time, SurfaceSize::new(400.0, 400.0));

        assert_eq!(controller.layout().radius, 190.0);
    }

    #[test]
    fn degenerate_surface_only_clears() {
        let mut controller = controller(15.0, 300.0);
        let mut surface = CommandList::new();
        let layout = controller.handle(HostEvent::Frame, &mut surface);

        assert!(layout.is_degenerate());
        assert_eq!(surface.commands(), &[DrawCommand::Clear(Color::BACKGROUND)]);
    }

    #[test]
    fn missing_font_falls_back() {
        let mut controller = controller(400.0, 400.0);
        let mut surface = LimitedFonts(CommandList::new());
        controller.on_frame(&mut surface);

        assert!(surface
            .0
            .commands()
            .contains(&DrawCommand::SetFont("sans-serif".to_string())));
        assert!(!surface
            .0
            .commands()
            .contains(&DrawCommand::SetFont("Helvetica".to_string())));
    }
}
