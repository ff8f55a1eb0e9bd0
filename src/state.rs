/// Which way the last slide change moved. Only used to pick a transition animation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Direction {
    Backward, // -1
    #[default]
    Still,    // 0, nothing has moved yet
    Forward,  // +1
}

impl Direction {
    pub fn from_step(step: i64) -> Self {
        match step.signum() {
            1 => Direction::Forward,
            -1 => Direction::Backward,
            _ => Direction::Still,
        }
    }

    pub fn sign(self) -> i32 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }
}

/// Read-only snapshot handed to the rendering layer after every mutation.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CarouselState {
    pub current_index: usize,
    pub direction: Direction,
    pub autoplay: bool,
    pub progress: f32, // 0..=100
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            current_index: 0,
            direction: Direction::Still,
            autoplay: true,
            progress: 0.0,
        }
    }
}
