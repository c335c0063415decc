//! Playback controller and its periodic feeds.
//!
//! `Player` is the command/query surface the UI talks to; `marquee`,
//! `visualizer` and `nav` hold the pure pieces it composes, and `Ticker`
//! schedules the periodic feeds from the runtime event loop.

pub mod marquee;
mod model;
mod nav;
mod ticker;
mod visualizer;

pub use model::{Player, SLIDER_MAX, format_time};
pub use ticker::Ticker;
pub use visualizer::MAX_MAGNITUDE;
