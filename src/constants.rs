use std::time::Duration;

pub const TICK_INTERVAL: Duration = Duration::from_millis(30); // Cadence of the autoplay timer
pub const TICK_DELTA: f32 = 0.5;              // Progress added per tick (out of PROGRESS_MAX)
pub const PROGRESS_MAX: f32 = 100.0;          // Progress value that triggers the next slide

pub const RENDER_WIDTH: i32 = 1920;           // Default window width
pub const RENDER_HEIGHT: i32 = 1080;          // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const TRANSITION_DURATION: f32 = 0.8;     // Slide-in animation (seconds)
pub const ENTER_SCALE: f32 = 0.95;            // Scale of a slide when it starts entering
pub const COUNT_UP_DURATION: f32 = 2.5;       // Statistics counter animation (seconds)
pub const MARQUEE_SPEED: f32 = 60.0;          // Marquee scroll speed (pixels per second)
pub const SCROLL_TOP_THRESHOLD: f32 = 500.0;  // Scroll distance before the back-to-top ring shows
