//! Autoplay hero carousel.
//!
//! [`CarouselController`] is a deterministic state machine over a fixed list of slides: manual
//! navigation, pause/resume, and a 0–100 countdown that moves to the next slide when it fills.
//! [`Ticker`] turns frame time into fixed-cadence ticks for it. The remaining modules hold the
//! pieces a renderer needs around it: control layout and hit testing, and small animations.

pub mod constants;
pub mod controller;
pub mod hud;
pub mod motion;
pub mod slide;
pub mod state;
pub mod timer;

pub use controller::{CarouselController, Control, normalize};
pub use slide::Slide;
pub use state::{CarouselState, Direction};
pub use timer::Ticker;
