use tracing::{debug, info, trace};

use crate::clock::Clock;
use crate::input::{Direction, Event};
use crate::slide::Slide;
use crate::state::{CarouselState, Effect, Settings};
use crate::surface::{MountError, Surface};

/// Drives a [`CarouselState`] against a clock and renders its effects onto a surface.
pub struct Carousel<S: Surface, C: Clock> {
    slides: Vec<Slide>,
    state: CarouselState,
    surface: S,
    clock: C,
}

impl<S: Surface, C: Clock> Carousel<S, C> {
    /// Renders the slides, activates the first one and arms autoplay.
    /// Fails without side effects when there is nothing to show or nowhere to show it.
    pub fn mount(slides: Vec<Slide>, settings: Settings, mut surface: S, clock: C) -> Result<Self, MountError> {
        let state = CarouselState::new(slides.len(), settings).ok_or(MountError::NoSlides)?;
        surface.mount(&slides)?;

        let (state, effects) = state.start(clock.now());
        let mut carousel = Self { slides, state, surface, clock };
        carousel.apply(effects);

        info!(slides = carousel.slides.len(), interval_ms = settings.interval_ms, "carousel mounted");
        Ok(carousel)
    }

    /// Shows `index` and restarts autoplay.
    pub fn go_to_slide(&mut self, index: usize) {
        self.handle(Event::Select(index));
    }

    /// Steps one slide in `direction`, wrapping at both ends, and restarts autoplay.
    pub fn advance(&mut self, direction: Direction) {
        self.handle(Event::Navigate(direction));
    }

    pub fn handle(&mut self, event: Event) {
        // Ticks that came due before this event run first
        self.poll();
        let now = self.clock.now();
        self.dispatch(event, now);
    }

    /// Runs every autoplay tick due by now, each at its own due time.
    pub fn poll(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some((id, due_at)) = self.state.autoplay().due(now) {
            self.dispatch(Event::Tick(id), due_at);
            fired += 1;
        }
        fired
    }

    fn dispatch(&mut self, event: Event, now: u64) {
        let (state, effects) = self.state.step(event, now);
        self.state = state;
        self.apply(effects);
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Activated { from, to } => {
                    debug!(from, to, alt = %self.slides[to].alt, "slide changed");
                    self.surface.activate(from, to);
                }
                Effect::TimerArmed { id, due_at } => trace!(?id, due_at, "autoplay armed"),
                Effect::TimerCanceled(id) => trace!(?id, "autoplay canceled"),
            }
        }
    }

    /// Detaches from the surface and hands it back.
    pub fn dispose(mut self) -> S {
        self.surface.unmount();
        info!(slides = self.slides.len(), "carousel disposed");
        self.surface
    }

    pub fn current_index(&self) -> usize {
        self.state.current()
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.state.current()]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn next_autoplay_at(&self) -> Option<u64> {
        self.state.autoplay().deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.state.autoplay().pending()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::VirtualClock;
    use crate::input::{Key, Visibility};

    // Records what the controller asked the render layer to do
    #[derive(Debug, Default)]
    struct Recorder {
        active: Vec<bool>,
        fail_with: Option<MountError>,
        unmounted: bool,
    }

    impl Recorder {
        fn active_indices(&self) -> Vec<usize> {
            self.active.iter().enumerate().filter(|(_, on)| **on).map(|(i, _)| i).collect()
        }
    }

    impl Surface for Recorder {
        fn mount(&mut self, slides: &[Slide]) -> Result<(), MountError> {
            if let Some(err) = self.fail_with.take() {
                return Err(err);
            }
            self.active = (0..slides.len()).map(|i| i == 0).collect();
            Ok(())
        }

        fn activate(&mut self, from: usize, to: usize) {
            self.active[from] = false;
            self.active[to] = true;
        }

        fn unmount(&mut self) {
            self.unmounted = true;
        }
    }

    fn slides(n: usize) -> Vec<Slide> {
        (0..n).map(|i| Slide::new(format!("{i}.jpg"), format!("slide {i}"))).collect()
    }

    fn mounted(n: usize) -> (Carousel<Recorder, VirtualClock>, VirtualClock) {
        let clock = VirtualClock::new();
        let carousel = Carousel::mount(slides(n), Settings::default(), Recorder::default(), clock.clone()).unwrap();
        (carousel, clock)
    }

    fn assert_single_active(carousel: &Carousel<Recorder, VirtualClock>) {
        assert_eq!(carousel.surface().active_indices(), vec![carousel.current_index()]);
    }

    #[test]
    fn autoplay_walks_every_slide_and_wraps() {
        let (mut carousel, clock) = mounted(3);
        for expected in [1, 2, 0, 1] {
            clock.advance(3000);
            assert_eq!(carousel.poll(), 1);
            assert_eq!(carousel.current_index(), expected);
            assert_single_active(&carousel);
        }
    }

    #[test]
    fn long_gap_fires_each_tick_once() {
        let (mut carousel, clock) = mounted(4);
        clock.advance(9500);
        assert_eq!(carousel.poll(), 3);
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(carousel.next_autoplay_at(), Some(12_000));
    }

    #[test]
    fn wrap_around_at_both_boundaries() {
        let (mut carousel, _clock) = mounted(5);
        carousel.advance(Direction::Previous);
        assert_eq!(carousel.current_index(), 4);
        carousel.advance(Direction::Next);
        assert_eq!(carousel.current_index(), 0);
        assert_single_active(&carousel);
    }

    #[test]
    fn going_to_current_slide_changes_nothing() {
        let (mut carousel, clock) = mounted(3);
        carousel.go_to_slide(2);
        let before = carousel.surface().active.clone();

        clock.advance(1000);
        carousel.go_to_slide(2);
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.surface().active, before);
        assert_eq!(carousel.next_autoplay_at(), Some(4000));
    }

    #[test]
    fn manual_action_restarts_full_interval() {
        let (mut carousel, clock) = mounted(4);
        clock.advance(2000);
        carousel.handle(Event::Key(Key::ArrowRight));
        assert_eq!(carousel.current_index(), 1);

        clock.advance(2999);
        carousel.poll();
        assert_eq!(carousel.current_index(), 1);

        clock.advance(1);
        carousel.poll();
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn burst_of_navigation_leaves_one_timer() {
        let (mut carousel, clock) = mounted(6);
        for _ in 0..5 {
            clock.advance(100);
            carousel.advance(Direction::Next);
        }
        assert_eq!(carousel.current_index(), 5);
        assert_eq!(carousel.pending_timers(), 1);

        clock.advance(3000);
        assert_eq!(carousel.poll(), 1);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn swipe_threshold_is_strict() {
        let (mut carousel, _clock) = mounted(3);
        carousel.handle(Event::TouchStart { x: 200.0 });
        carousel.handle(Event::TouchEnd { x: 151.0 });
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.next_autoplay_at(), Some(3000));

        carousel.handle(Event::TouchStart { x: 200.0 });
        carousel.handle(Event::TouchEnd { x: 149.0 });
        assert_eq!(carousel.current_index(), 1);

        carousel.handle(Event::TouchStart { x: 100.0 });
        carousel.handle(Event::TouchEnd { x: 151.0 });
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn hidden_page_pauses_autoplay() {
        let (mut carousel, clock) = mounted(3);
        clock.advance(1000);
        carousel.handle(Event::Visibility(Visibility::Hidden));
        clock.advance(10_000);
        assert_eq!(carousel.poll(), 0);
        assert_eq!(carousel.pending_timers(), 0);

        carousel.handle(Event::Visibility(Visibility::Visible));
        assert_eq!(carousel.next_autoplay_at(), Some(14_000));
    }

    #[test]
    fn failed_mount_renders_nothing() {
        let surface = Recorder { fail_with: Some(MountError::MissingContainer("dots".into())), ..Recorder::default() };
        let result = Carousel::mount(slides(3), Settings::default(), surface, VirtualClock::new());
        assert_eq!(result.err(), Some(MountError::MissingContainer("dots".into())));

        let result = Carousel::mount(Vec::new(), Settings::default(), Recorder::default(), VirtualClock::new());
        assert_eq!(result.err(), Some(MountError::NoSlides));
    }

    #[test]
    fn dispose_unmounts_surface() {
        let (carousel, _clock) = mounted(2);
        assert!(carousel.dispose().unmounted);
    }

    #[test]
    fn previous_click_resets_schedule() {
        let (mut carousel, clock) = mounted(4);
        clock.set(3000);
        carousel.poll();
        assert_eq!(carousel.current_index(), 1);

        clock.set(3100);
        carousel.advance(Direction::Previous);
        assert_eq!(carousel.current_index(), 0);

        clock.set(6099);
        carousel.poll();
        assert_eq!(carousel.current_index(), 0);

        clock.set(6100);
        carousel.poll();
        assert_eq!(carousel.current_index(), 1);
        assert_single_active(&carousel);
    }
}
