use crate::constants::{PROGRESS_MAX, RENDER_HEIGHT};
use crate::controller::Control;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Where the carousel controls sit on screen.
///
/// Dot indicators run along the bottom-left corner; play/pause, previous and next sit in the
/// bottom-right corner. Sizes scale with screen height so the layout holds at any window size.
#[derive(Debug, Clone)]
pub struct HudLayout {
    pub previous: Bounds,
    pub next: Bounds,
    pub play: Bounds,
    pub dots: Vec<Bounds>,
}

impl HudLayout {
    pub fn new(screen_width: f32, screen_height: f32, slide_count: usize) -> Self {
        let unit = screen_height / RENDER_HEIGHT as f32;
        let margin = 48.0 * unit;
        let gap = 12.0 * unit;
        let button = 48.0 * unit;
        let play_button = 40.0 * unit;

        let bottom = screen_height - margin;
        let next = Bounds::new(screen_width - margin - button, bottom - button, button, button);
        let previous = Bounds::new(next.x - gap - button, next.y, button, button);
        let play = Bounds::new(
            previous.x - 2.0 * gap - play_button,
            bottom - button + (button - play_button) * 0.5,
            play_button,
            play_button,
        );
        // dots and their gaps shrink together to fit left of the play button
        let room = play.x - 2.0 * gap - margin;
        let natural_pitch = 64.0 * unit + gap;
        let pitch = if slide_count > 0 {
            natural_pitch.min((room + gap) / slide_count as f32).max(0.0)
        } else {
            natural_pitch
        };
        let shrink = pitch / natural_pitch;
        let dot_width = 64.0 * unit * shrink;
        let dots = (0..slide_count)
            .map(|i| Bounds::new(margin + i as f32 * pitch, bottom - button, dot_width, button))
            .collect();

        Self { previous, next, play, dots }
    }

    /// Control under a click, if any.
    pub fn hit(&self, x: f32, y: f32) -> Option<Control> {
        if self.previous.contains(x, y) {
            return Some(Control::Previous);
        }
        if self.next.contains(x, y) {
            return Some(Control::Next);
        }
        if self.play.contains(x, y) {
            return Some(Control::TogglePlay);
        }
        self.dots
            .iter()
            .position(|dot| dot.contains(x, y))
            .map(Control::Select)
    }
}

/// Width of the filled part of a progress bar `width` wide.
pub fn progress_fill(width: f32, progress: f32) -> f32 {
    width * (progress / PROGRESS_MAX).clamp(0.0, 1.0)
}
