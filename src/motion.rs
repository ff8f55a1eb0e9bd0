//! Small timer-driven animations: the slide-in transition, the statistics counter, the partner
//! marquee and the back-to-top progress ring. All of them are advanced with `update(dt)` in
//! seconds and read back as plain numbers.

use std::f32::consts::PI;

use crate::constants::{ENTER_SCALE, SCROLL_TOP_THRESHOLD};
use crate::state::Direction;

fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

pub fn ease_out_quart(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(4)
}

/// Horizontal offsets, opacity and scale for one frame of a slide change.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct TransitionFrame {
    pub incoming_x: f32,
    pub outgoing_x: f32,
    pub opacity: f32, // incoming slide; the outgoing one uses 1 - opacity
    pub scale: f32,
    pub outgoing_scale: f32,
}

/// Direction-aware slide-in. Forward moves enter from the right, anything else from the left.
#[derive(Debug, Clone)]
pub struct SlideTransition {
    duration: f32,
    timer: f32,
    direction: Direction,
    pub is_animating: bool,
}

impl SlideTransition {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            timer: 0.0,
            direction: Direction::Still,
            is_animating: false,
        }
    }

    pub fn start(&mut self, direction: Direction) {
        self.direction = direction;
        self.timer = 0.0;
        self.is_animating = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.timer += dt;
        if self.timer >= self.duration {
            self.timer = self.duration;
            self.is_animating = false;
        }
    }

    pub fn frame(&self, width: f32) -> TransitionFrame {
        if !self.is_animating {
            return TransitionFrame {
                incoming_x: 0.0,
                outgoing_x: 0.0,
                opacity: 1.0,
                scale: 1.0,
                outgoing_scale: 1.0,
            };
        }
        let t = ease_out_cubic((self.timer / self.duration).min(1.0));
        let side = if self.direction == Direction::Forward { 1.0 } else { -1.0 };
        TransitionFrame {
            incoming_x: lerp(side * width, 0.0, t),
            outgoing_x: lerp(0.0, -side * width, t),
            opacity: t,
            scale: lerp(ENTER_SCALE, 1.0, t),
            outgoing_scale: lerp(1.0, ENTER_SCALE, t),
        }
    }
}

/// Counter that eases from 0 up to `target` once it has been triggered.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u64,
    duration: f32,
    elapsed: f32,
    triggered: bool,
}

impl CountUp {
    pub fn new(target: u64, duration: f32) -> Self {
        Self {
            target,
            duration,
            elapsed: 0.0,
            triggered: false,
        }
    }

    /// Start counting. Later calls are ignored, the counter only runs once.
    pub fn trigger(&mut self) {
        self.triggered = true;
    }

    pub fn update(&mut self, dt: f32) {
        if self.triggered {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.triggered && self.elapsed >= self.duration
    }

    pub fn value(&self) -> u64 {
        if !self.triggered {
            return 0;
        }
        if self.is_finished() || self.duration <= 0.0 {
            return self.target;
        }
        let t = self.elapsed / self.duration;
        (ease_out_quart(t) as f64 * self.target as f64).floor() as u64
    }
}

/// `1188000` -> `"1,188,000"`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Endless horizontal scroll over a track of fixed width.
#[derive(Debug, Clone)]
pub struct Marquee {
    track_width: f32,
    speed: f32,
    offset: f32,
    pub paused: bool,
}

impl Marquee {
    pub fn new(track_width: f32, speed: f32) -> Self {
        Self {
            track_width,
            speed,
            offset: 0.0,
            paused: false,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.paused || self.track_width <= 0.0 {
            return;
        }
        self.offset = (self.offset + self.speed * dt).rem_euclid(self.track_width);
    }

    pub fn track_width(&self) -> f32 {
        self.track_width
    }

    /// Distance scrolled into the current lap, in `[0, track_width)`.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn set_track_width(&mut self, track_width: f32) {
        self.track_width = track_width;
        if track_width > 0.0 {
            self.offset = self.offset.rem_euclid(track_width);
        } else {
            self.offset = 0.0;
        }
    }
}

/// Page scroll position expressed as the back-to-top ring's fill.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ScrollProgress {
    pub percent: f32,
    pub visible: bool,
}

impl ScrollProgress {
    pub fn measure(scrolled: f32, content_height: f32, viewport_height: f32) -> Self {
        let max_scroll = content_height - viewport_height;
        let percent = if max_scroll > 0.0 {
            (scrolled / max_scroll * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            percent,
            visible: scrolled > SCROLL_TOP_THRESHOLD,
        }
    }

    /// Stroke dash offset of a ring of `radius`: full circumference when empty, 0 when full.
    pub fn ring_offset(&self, radius: f32) -> f32 {
        2.0 * PI * radius * (1.0 - self.percent / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_transition_enters_from_the_right() {
        let mut tr = SlideTransition::new(1.0);
        tr.start(Direction::Forward);
        let first = tr.frame(800.0);
        assert_eq!(first.incoming_x, 800.0);
        assert_eq!(first.outgoing_x, 0.0);
        assert_eq!(first.scale, ENTER_SCALE);

        tr.update(0.5);
        let mid = tr.frame(800.0);
        assert!(mid.incoming_x > 0.0 && mid.incoming_x < 800.0);
        assert!(mid.outgoing_x < 0.0);
    }

    #[test]
    fn outgoing_slide_shrinks_while_leaving() {
        let mut tr = SlideTransition::new(1.0);
        tr.start(Direction::Forward);
        assert_eq!(tr.frame(800.0).outgoing_scale, 1.0);

        tr.update(0.5);
        let mid = tr.frame(800.0).outgoing_scale;
        assert!(mid < 1.0 && mid > ENTER_SCALE);

        tr.update(0.4999);
        let late = tr.frame(800.0).outgoing_scale;
        assert!(late < mid);
        assert!((late - ENTER_SCALE).abs() < 1e-3);
    }

    #[test]
    fn backward_transition_enters_from_the_left_and_settles() {
        let mut tr = SlideTransition::new(0.8);
        tr.start(Direction::Backward);
        assert_eq!(tr.frame(100.0).incoming_x, -100.0);

        tr.update(0.5);
        tr.update(0.5);
        assert!(!tr.is_animating);
        let done = tr.frame(100.0);
        assert_eq!(done.incoming_x, 0.0);
        assert_eq!(done.opacity, 1.0);
    }

    #[test]
    fn count_up_waits_for_trigger() {
        let mut counter = CountUp::new(1188, 2.5);
        counter.update(1.0);
        assert_eq!(counter.value(), 0);
        counter.trigger();
        counter.update(1.0);
        assert!(counter.value() > 0);
        assert!(counter.value() < 1188);
    }

    #[test]
    fn count_up_is_monotonic_and_lands_on_target() {
        let mut counter = CountUp::new(50, 2.0);
        counter.trigger();
        let mut last = 0;
        for _ in 0..30 {
            counter.update(0.1);
            let v = counter.value();
            assert!(v >= last);
            last = v;
        }
        assert!(counter.is_finished());
        assert_eq!(counter.value(), 50);
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1188), "1,188");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn marquee_wraps_and_pauses() {
        let mut m = Marquee::new(100.0, 60.0);
        m.update(1.0);
        assert_eq!(m.offset(), 60.0);
        m.update(1.0);
        assert_eq!(m.offset(), 20.0);

        m.paused = true;
        m.update(5.0);
        assert_eq!(m.offset(), 20.0);
        m.paused = false;
        m.update(0.5);
        assert_eq!(m.offset(), 50.0);
    }

    #[test]
    fn marquee_keeps_offset_inside_a_narrower_track() {
        let mut m = Marquee::new(100.0, 90.0);
        m.update(1.0);
        m.set_track_width(40.0);
        assert_eq!(m.offset(), 10.0);
    }

    #[test]
    fn scroll_progress_is_clamped_and_ring_empties() {
        let top = ScrollProgress::measure(0.0, 3000.0, 1000.0);
        assert_eq!(top.percent, 0.0);
        assert!(!top.visible);
        assert!((top.ring_offset(28.0) - 2.0 * PI * 28.0).abs() < 1e-3);

        let bottom = ScrollProgress::measure(2500.0, 3000.0, 1000.0);
        assert_eq!(bottom.percent, 100.0);
        assert!(bottom.visible);
        assert_eq!(bottom.ring_offset(28.0), 0.0);

        let half = ScrollProgress::measure(1000.0, 3000.0, 1000.0);
        assert_eq!(half.percent, 50.0);
    }

    #[test]
    fn short_page_has_no_scroll_progress() {
        let p = ScrollProgress::measure(0.0, 600.0, 800.0);
        assert_eq!(p.percent, 0.0);
    }
}
