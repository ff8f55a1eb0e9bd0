use anyhow::{Result, ensure};
use tracing::{debug, info};

use crate::constants::PROGRESS_MAX;
use crate::slide::Slide;
use crate::state::{CarouselState, Direction};

/// Wrap any integer into `[0, count)`, negative values included.
///
/// `count` must be at least 1.
pub fn normalize(n: i64, count: usize) -> usize {
    n.rem_euclid(count as i64) as usize
}

/// Manual input the carousel understands.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Control {
    Previous,
    Next,
    Select(usize), // dot indicator
    TogglePlay,
}

/// Owns the slides and the carousel state.
///
/// The controller never reads a clock. A timing source (see [`crate::timer::Ticker`]) feeds it
/// progress increments through [`tick`](Self::tick), and the only way the current slide changes
/// by itself is progress reaching [`PROGRESS_MAX`].
#[derive(Debug)]
pub struct CarouselController<C> {
    slides: Vec<Slide<C>>,
    state: CarouselState,
    slide_changes: u64,
}

impl<C> CarouselController<C> {
    pub fn new(slides: Vec<Slide<C>>) -> Result<Self> {
        ensure!(!slides.is_empty(), "a carousel needs at least one slide");
        info!(slides = slides.len(), "carousel created");
        Ok(Self {
            slides,
            state: CarouselState::default(),
            slide_changes: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: construction rejects empty slide lists.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide<C>] {
        &self.slides
    }

    pub fn current_slide(&self) -> &Slide<C> {
        &self.slides[self.state.current_index]
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// Number of slide changes since construction, manual or automatic.
    pub fn slide_changes(&self) -> u64 {
        self.slide_changes
    }

    /// Move by `step` slides, wrapping at both ends.
    pub fn advance(&mut self, step: i64) {
        let from = self.state.current_index;
        // reduce first so huge steps cannot overflow
        let to = normalize(from as i64 + normalize(step, self.len()) as i64, self.len());
        self.show(to, Direction::from_step(step));
        debug!(from, to, step, "advanced");
    }

    /// Jump to a slide. The target wraps with the same rule as [`advance`](Self::advance).
    pub fn go_to(&mut self, target: i64) {
        let from = self.state.current_index;
        let to = normalize(target, self.len());
        let direction = if to > from {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.show(to, direction);
        debug!(from, to, "jumped");
    }

    /// Pause or resume. Progress is kept, so resuming continues the countdown.
    pub fn toggle_autoplay(&mut self) {
        self.state.autoplay = !self.state.autoplay;
        debug!(autoplay = self.state.autoplay, "autoplay toggled");
    }

    /// Add `delta` to the countdown. Returns true when this tick moved to the next slide.
    ///
    /// Has no effect while paused, or when `delta` is negative or not finite.
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.state.autoplay || !delta.is_finite() || delta < 0.0 {
            return false;
        }
        self.state.progress += delta;
        if self.state.progress >= PROGRESS_MAX {
            // autoplay only ever moves forward
            self.advance(1);
            return true;
        }
        false
    }

    pub fn apply(&mut self, control: Control) {
        match control {
            Control::Previous => self.advance(-1),
            Control::Next => self.advance(1),
            Control::Select(index) => self.go_to(index as i64),
            Control::TogglePlay => self.toggle_autoplay(),
        }
    }

    fn show(&mut self, index: usize, direction: Direction) {
        self.state.current_index = index;
        self.state.direction = direction;
        self.state.progress = 0.0;
        self.slide_changes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::slides_from;

    fn carousel(count: usize) -> CarouselController<usize> {
        CarouselController::new(slides_from(0..count)).unwrap()
    }

    #[test]
    fn empty_slide_list_is_rejected() {
        let result = CarouselController::<()>::new(Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn normalize_stays_in_range_and_is_periodic() {
        for count in 1..=6usize {
            for n in -25i64..25 {
                let wrapped = normalize(n, count);
                assert!(wrapped < count);
                assert_eq!(wrapped, normalize(n + count as i64, count));
            }
        }
    }

    #[test]
    fn starts_on_first_slide_playing() {
        let c = carousel(3);
        assert_eq!(c.state(), CarouselState::default());
        assert_eq!(c.current_slide().id, 1);
        assert_eq!(c.slide_changes(), 0);
    }

    #[test]
    fn previous_from_first_slide_wraps_to_last() {
        let mut c = carousel(4);
        c.advance(-1);
        assert_eq!(c.state().current_index, 3);
        assert_eq!(c.state().direction, Direction::Backward);
    }

    #[test]
    fn large_steps_wrap() {
        let mut c = carousel(4);
        c.advance(9);
        assert_eq!(c.state().current_index, 1);
        c.advance(-6);
        assert_eq!(c.state().current_index, 3);
    }

    #[test]
    fn extreme_steps_wrap_without_overflow() {
        let mut c = carousel(4);
        c.advance(1);
        c.advance(i64::MAX);
        // i64::MAX = 4k + 3
        assert_eq!(c.state().current_index, 0);
        assert_eq!(c.state().direction, Direction::Forward);

        c.advance(i64::MIN);
        // i64::MIN = 4k
        assert_eq!(c.state().current_index, 0);
        assert_eq!(c.state().direction, Direction::Backward);

        c.advance(3);
        c.advance(i64::MAX);
        assert_eq!(c.state().current_index, 2);
    }

    #[test]
    fn bad_deltas_leave_progress_alone() {
        let mut c = carousel(3);
        c.tick(10.0);
        assert!(!c.tick(-10.0));
        assert!(!c.tick(f32::NAN));
        assert!(!c.tick(f32::INFINITY));
        assert_eq!(c.state().progress, 10.0);

        // autoplay still completes afterwards
        assert!(c.tick(90.0));
        assert_eq!(c.state().current_index, 1);
        assert_eq!(c.state().progress, 0.0);
    }

    #[test]
    fn go_to_sets_direction_by_comparison() {
        let mut c = carousel(5);
        c.go_to(3);
        assert_eq!(c.state().direction, Direction::Forward);
        c.go_to(1);
        assert_eq!(c.state().direction, Direction::Backward);
        c.go_to(1);
        assert_eq!(c.state().direction, Direction::Backward);
        assert_eq!(c.state().current_index, 1);
    }

    #[test]
    fn go_to_wraps_out_of_range_targets() {
        let mut c = carousel(4);
        c.go_to(6);
        assert_eq!(c.state().current_index, 2);
        c.go_to(-1);
        assert_eq!(c.state().current_index, 3);
    }

    #[test]
    fn navigation_resets_progress() {
        let mut c = carousel(4);
        c.tick(40.0);
        c.advance(1);
        assert_eq!(c.state().progress, 0.0);
        c.tick(40.0);
        c.go_to(0);
        assert_eq!(c.state().progress, 0.0);
        assert_eq!(c.slide_changes(), 2);
    }

    #[test]
    fn ticks_do_nothing_while_paused() {
        let mut c = carousel(2);
        c.tick(30.0);
        c.toggle_autoplay();
        assert!(!c.tick(90.0));
        assert_eq!(c.state().progress, 30.0);
        assert_eq!(c.state().current_index, 0);
    }

    #[test]
    fn toggling_twice_changes_nothing_else() {
        let mut c = carousel(3);
        c.advance(1);
        c.tick(12.5);
        let before = c.state();
        c.toggle_autoplay();
        assert!(!c.state().autoplay);
        c.toggle_autoplay();
        assert_eq!(c.state(), before);
    }

    #[test]
    fn reaching_the_ceiling_advances_without_overshoot() {
        let mut c = carousel(3);
        c.go_to(2);
        assert!(!c.tick(99.5));
        assert!(c.tick(5.0));
        let state = c.state();
        assert_eq!(state.current_index, 0);
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.direction, Direction::Forward);
    }

    #[test]
    fn controls_map_to_operations() {
        let mut c = carousel(4);
        c.apply(Control::Previous);
        assert_eq!(c.state().current_index, 3);
        c.apply(Control::Next);
        assert_eq!(c.state().current_index, 0);
        c.apply(Control::Select(2));
        assert_eq!(c.state().current_index, 2);
        c.apply(Control::TogglePlay);
        assert!(!c.state().autoplay);
    }

    #[test]
    fn single_slide_carousel_stays_put() {
        let mut c = carousel(1);
        c.advance(1);
        c.advance(-1);
        assert_eq!(c.state().current_index, 0);
        assert!(c.tick(100.0));
        assert_eq!(c.state().current_index, 0);
    }
}
