use crate::timer::TimerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    pub fn delta(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    // DOM `KeyboardEvent.key` names
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::ArrowLeft => Some(Direction::Previous),
            Key::ArrowRight => Some(Direction::Next),
            Key::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Everything a carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Autoplay tick from the armed timer.
    Tick(TimerId),
    /// Next / previous button.
    Navigate(Direction),
    /// Indicator dot.
    Select(usize),
    Key(Key),
    TouchStart { x: f32 },
    TouchEnd { x: f32 },
    PointerEnter,
    PointerLeave,
    Visibility(Visibility),
}

/// Direction of a horizontal swipe, if its travel strictly exceeds `threshold`.
/// Finger moving left (start right of end) means next.
pub fn swipe_direction(start_x: f32, end_x: f32, threshold: f32) -> Option<Direction> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold {
        return None;
    }
    if diff > 0.0 {
        Some(Direction::Next)
    } else {
        Some(Direction::Previous)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn finish(&mut self, x: f32, threshold: f32) -> Option<Direction> {
        let start_x = self.start_x.take()?;
        swipe_direction(start_x, x, threshold)
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
