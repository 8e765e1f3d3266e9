//! Core library for the analog clock.
//!
//! Everything that decides what the clock looks like lives here: the face
//! layout, hand angles, tick labels and text overlays. Renderers produce
//! draw commands rather than painting directly, and the [`FrameController`]
//! replays them onto whichever [`Surface`] the host provides.

pub mod config;
pub mod error;
pub mod frame;
pub mod layout;
pub mod mapping;
pub mod render;
pub mod scene;
pub mod svg;
pub mod timeline;

pub use config::{ClockConfig, FontConfig};
pub use error::{ClockError, Result};
pub use frame::{FrameController, HostEvent};
pub use layout::{Layout, SurfaceSize};
pub use mapping::{linear_map, polar_point};
pub use render::{Color, CommandList, DrawCommand, Point, Stroke, Surface};
pub use scene::{DrawContext, Hand};
pub use svg::SvgSurface;
pub use timeline::{
    FixedTimeSource, HandAngles, SystemTimeSource, Ticker, TimeSnapshot, TimeSource,
};
