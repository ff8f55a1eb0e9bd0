use std::time::Duration;

use carousel::constants::{COUNT_UP_DURATION, MARQUEE_SPEED, TRANSITION_DURATION};
use carousel::hud::{Bounds, HudLayout, progress_fill};
use carousel::motion::{CountUp, Marquee, SlideTransition, format_thousands};
use carousel::{CarouselController, Control, Ticker};
use raylib::prelude::*;
use tracing::debug;

use crate::picture::Picture;

const GOLD: Color = Color::new(208, 175, 57, 255);
const NAVY: Color = Color::new(34, 48, 89, 255);
const GLASS: Color = Color::new(255, 255, 255, 40);
const DIM: Color = Color::new(255, 255, 255, 90);

const DIGIT_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

const MARQUEE_FONT: i32 = 20;
const MARQUEE_BAND: f32 = 36.0;

/// Hero carousel scene: the controller plus everything that animates around it.
pub struct HeroEngine {
    carousel: CarouselController<Picture>,
    ticker: Ticker,

    transition: SlideTransition,
    shown_index: usize,
    outgoing: Option<usize>,
    seen_changes: u64,

    counter: CountUp,
    marquee: Marquee,
    marquee_text: String,
}

impl HeroEngine {
    pub fn new(carousel: CarouselController<Picture>, ticker: Ticker) -> Self {
        let marquee_text = carousel
            .slides()
            .iter()
            .map(|slide| slide.content.name.as_str())
            .collect::<Vec<_>>()
            .join("   |   ")
            + "   |   ";
        // rough advance width of the default raylib font
        let track_width = marquee_text.len() as f32 * MARQUEE_FONT as f32 * 0.6;
        let mut counter = CountUp::new(carousel.len() as u64, COUNT_UP_DURATION);
        counter.trigger();

        Self {
            carousel,
            ticker,
            transition: SlideTransition::new(TRANSITION_DURATION),
            shown_index: 0,
            outgoing: None,
            seen_changes: 0,
            counter,
            marquee: Marquee::new(track_width, MARQUEE_SPEED),
            marquee_text,
        }
    }

    /// Turn this frame's key presses and clicks into carousel controls.
    pub fn handle_input(&mut self, rl: &RaylibHandle) {
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;
        let hud = HudLayout::new(width, height, self.carousel.len());

        let mut controls = Vec::new();
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            controls.push(Control::Previous);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            controls.push(Control::Next);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            controls.push(Control::TogglePlay);
        }
        for (index, key) in DIGIT_KEYS.iter().enumerate() {
            if index < self.carousel.len() && rl.is_key_pressed(*key) {
                controls.push(Control::Select(index));
            }
        }

        let mouse = rl.get_mouse_position();
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            controls.extend(hud.hit(mouse.x, mouse.y));
        }
        self.marquee.paused = mouse.y >= height - MARQUEE_BAND;

        for control in controls {
            debug!(?control, "control");
            self.carousel.apply(control);
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.ticker.drive(&mut self.carousel, Duration::from_secs_f32(dt.max(0.0)));

        if self.carousel.slide_changes() != self.seen_changes {
            self.seen_changes = self.carousel.slide_changes();
            let state = self.carousel.state();
            if state.current_index != self.shown_index {
                self.outgoing = Some(self.shown_index);
                self.shown_index = state.current_index;
                self.transition.start(state.direction);
            }
        }

        self.transition.update(dt);
        if !self.transition.is_animating {
            self.outgoing = None;
        }
        self.counter.update(dt);
        self.marquee.update(dt);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let width = d.get_screen_width() as f32;
        let height = d.get_screen_height() as f32;
        let state = self.carousel.state();
        let frame = self.transition.frame(width);

        d.clear_background(NAVY);

        if let Some(index) = self.outgoing {
            let picture = &self.carousel.slides()[index].content;
            picture.draw(d, width, height, frame.outgoing_x, frame.outgoing_scale, 1.0 - frame.opacity);
        }
        self.carousel
            .current_slide()
            .content
            .draw(d, width, height, frame.incoming_x, frame.scale, frame.opacity);

        let hud = HudLayout::new(width, height, self.carousel.len());
        draw_round_button(d, &hud.previous, "<");
        draw_round_button(d, &hud.next, ">");
        draw_play_button(d, &hud.play, state.autoplay);

        let bar_height = (hud.next.height * 0.12).max(2.0);
        for (index, dot) in hud.dots.iter().enumerate() {
            let bar = Rectangle::new(dot.x, dot.y + (dot.height - bar_height) * 0.5, dot.width, bar_height);
            d.draw_rectangle_rounded(bar, 1.0, 4, DIM);
            if index == state.current_index {
                let fill = Rectangle::new(bar.x, bar.y, progress_fill(bar.width, state.progress), bar.height);
                d.draw_rectangle_rounded(fill, 1.0, 4, GOLD);
            }
        }

        let counter = format!("{} slides", format_thousands(self.counter.value()));
        d.draw_text(&counter, 24, 24, 28, GOLD);
        let position = format!("{:02} / {:02}", state.current_index + 1, self.carousel.len());
        d.draw_text(&position, 24, 60, 20, Color::WHITE);

        self.draw_marquee(d, width, height);
    }

    fn draw_marquee(&self, d: &mut RaylibDrawHandle, width: f32, height: f32) {
        let top = height - MARQUEE_BAND;
        d.draw_rectangle_rec(Rectangle::new(0.0, top, width, MARQUEE_BAND), Color::new(0, 0, 0, 120));

        let lap = self.marquee.track_width();
        if lap <= 0.0 {
            return;
        }
        let y = (top + (MARQUEE_BAND - MARQUEE_FONT as f32) * 0.5) as i32;
        let color = if self.marquee.paused { GOLD } else { DIM };
        let mut x = -self.marquee.offset();
        while x < width {
            d.draw_text(&self.marquee_text, x as i32, y, MARQUEE_FONT, color);
            x += lap;
        }
    }
}

fn draw_round_button(d: &mut RaylibDrawHandle, bounds: &Bounds, label: &str) {
    let (cx, cy) = bounds.center();
    d.draw_circle(cx as i32, cy as i32, bounds.width * 0.5, GLASS);
    let font = (bounds.height * 0.5) as i32;
    d.draw_text(label, (cx - font as f32 * 0.25) as i32, (cy - font as f32 * 0.5) as i32, font, Color::WHITE);
}

fn draw_play_button(d: &mut RaylibDrawHandle, bounds: &Bounds, playing: bool) {
    let (cx, cy) = bounds.center();
    let r = bounds.width * 0.5;
    d.draw_circle(cx as i32, cy as i32, r, GLASS);
    let s = r * 0.4;
    if playing {
        // pause glyph
        d.draw_rectangle_rec(Rectangle::new(cx - s, cy - s, s * 0.7, s * 2.0), Color::WHITE);
        d.draw_rectangle_rec(Rectangle::new(cx + s * 0.3, cy - s, s * 0.7, s * 2.0), Color::WHITE);
    } else {
        d.draw_triangle(
            Vector2::new(cx - s * 0.7, cy - s),
            Vector2::new(cx - s * 0.7, cy + s),
            Vector2::new(cx + s, cy),
            Color::WHITE,
        );
    }
}
