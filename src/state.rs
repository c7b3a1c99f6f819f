use crate::constants::*;
use crate::input::{Direction, Event, SwipeTracker, Visibility};
use crate::timer::{AutoplayTimer, TimerId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub interval_ms: u64,
    pub swipe_threshold: f32,
    pub transition_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval_ms: AUTOPLAY_INTERVAL_MS,
            swipe_threshold: SWIPE_THRESHOLD_PX,
            transition_ms: TRANSITION_MS,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Phase {
    Idle,                       // Ready for the next slide change
    Transitioning { until: u64 }, // Lock held until the animation ends
}

/// Side effects the render layer and logs care about.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Effect {
    Activated { from: usize, to: usize },
    TimerArmed { id: TimerId, due_at: u64 },
    TimerCanceled(TimerId),
}

/// Carousel state machine. `step` is pure: it takes the state by value and
/// returns the next state with the effects to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselState {
    len: usize,
    current: usize,
    phase: Phase,
    autoplay: AutoplayTimer,
    hovered: bool,
    hidden: bool,
    swipe: SwipeTracker,
    settings: Settings,
}

impl CarouselState {
    /// Index 0 active, autoplay not yet armed. `None` for an empty carousel.
    pub fn new(len: usize, settings: Settings) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            len,
            current: 0,
            phase: Phase::Idle,
            autoplay: AutoplayTimer::new(),
            hovered: false,
            hidden: false,
            swipe: SwipeTracker::default(),
            settings,
        })
    }

    /// Arms autoplay for a freshly mounted carousel.
    pub fn start(mut self, now: u64) -> (Self, Vec<Effect>) {
        let mut effects = Vec::new();
        self.resume(now, &mut effects);
        (self, effects)
    }

    pub fn step(mut self, event: Event, now: u64) -> (Self, Vec<Effect>) {
        let mut effects = Vec::new();
        self.settle(now);

        match event {
            Event::Tick(id) => {
                if self.autoplay.fire(id) {
                    let target = self.target_for(Direction::Next);
                    self.go_to(target, now, &mut effects);
                }
            }
            Event::Navigate(direction) => {
                let target = self.target_for(direction);
                self.navigate(target, now, &mut effects);
            }
            Event::Select(index) => {
                if index < self.len {
                    self.navigate(index, now, &mut effects);
                }
            }
            Event::Key(key) => {
                if let Some(direction) = key.direction() {
                    let target = self.target_for(direction);
                    self.navigate(target, now, &mut effects);
                }
            }
            Event::TouchStart { x } => self.swipe.begin(x),
            Event::TouchEnd { x } => {
                if let Some(direction) = self.swipe.finish(x, self.settings.swipe_threshold) {
                    let target = self.target_for(direction);
                    self.navigate(target, now, &mut effects);
                }
            }
            Event::PointerEnter => {
                self.hovered = true;
                self.suspend(&mut effects);
            }
            Event::PointerLeave => {
                self.hovered = false;
                self.resume(now, &mut effects);
            }
            Event::Visibility(Visibility::Hidden) => {
                self.hidden = true;
                self.suspend(&mut effects);
            }
            Event::Visibility(Visibility::Visible) => {
                self.hidden = false;
                self.resume(now, &mut effects);
            }
        }

        (self, effects)
    }

    /// `(current + delta + len) mod len`
    pub fn target_for(&self, direction: Direction) -> usize {
        let len = self.len as isize;
        ((self.current as isize + direction.delta() + len) % len) as usize
    }

    // Manual navigation: move, then restart autoplay from zero
    fn navigate(&mut self, target: usize, now: u64, effects: &mut Vec<Effect>) {
        if self.is_locked() {
            return;
        }
        self.go_to(target, now, effects);
        self.reset_autoplay(now, effects);
    }

    fn go_to(&mut self, target: usize, now: u64, effects: &mut Vec<Effect>) {
        if self.is_locked() || target == self.current {
            return;
        }
        effects.push(Effect::Activated { from: self.current, to: target });
        self.current = target;
        if self.settings.transition_ms > 0 {
            let until = now.saturating_add(self.settings.transition_ms);
            self.phase = Phase::Transitioning { until };
        }
    }

    fn reset_autoplay(&mut self, now: u64, effects: &mut Vec<Effect>) {
        self.suspend(effects);
        self.resume(now, effects);
    }

    fn suspend(&mut self, effects: &mut Vec<Effect>) {
        if let Some(id) = self.autoplay.cancel() {
            effects.push(Effect::TimerCanceled(id));
        }
    }

    fn resume(&mut self, now: u64, effects: &mut Vec<Effect>) {
        if self.is_suspended() || self.autoplay.is_armed() {
            return;
        }
        let id = self.autoplay.arm(now, self.settings.interval_ms);
        let due_at = self.autoplay.deadline().unwrap_or(now);
        effects.push(Effect::TimerArmed { id, due_at });
    }

    fn settle(&mut self, now: u64) {
        if let Phase::Transitioning { until } = self.phase {
            if now >= until {
                self.phase = Phase::Idle;
            }
        }
    }

    fn is_locked(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn autoplay(&self) -> &AutoplayTimer {
        &self.autoplay
    }

    pub fn is_suspended(&self) -> bool {
        self.hovered || self.hidden
    }

    pub fn is_transitioning(&self, now: u64) -> bool {
        matches!(self.phase, Phase::Transitioning { until } if now < until)
    }
}
