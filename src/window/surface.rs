use raylib::prelude::*;

use crate::slide::Slide;
use crate::surface::{MountError, Surface};
use crate::window::chrome::Chrome;
use crate::window::slide_view::SlideView;

/// Window render layer: one [`SlideView`] per slide, crossfading on change.
pub struct RaylibSurface {
    views: Vec<SlideView>,
    active: usize,
}

impl RaylibSurface {
    pub fn new(views: Vec<SlideView>) -> Self {
        Self { views, active: 0 }
    }

    pub fn update(&mut self, dt: f32) {
        for view in self.views.iter_mut() {
            view.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, chrome: &Chrome) {
        // Outgoing slides underneath, active slide on top
        for (i, view) in self.views.iter().enumerate() {
            if i != self.active {
                view.draw(d, chrome.region);
            }
        }
        if let Some(view) = self.views.get(self.active) {
            view.draw(d, chrome.region);
            view.draw_caption(d, chrome.region, chrome.cta);
        }

        for (rect, label) in [(chrome.prev, "<"), (chrome.next, ">")] {
            d.draw_rectangle_rec(rect, Color::BLACK.fade(0.4));
            d.draw_text(label, (rect.x + rect.width * 0.5) as i32 - 8, (rect.y + rect.height * 0.5) as i32 - 16, 32, Color::WHITE);
        }

        for (i, dot) in chrome.dots.iter().enumerate() {
            let color = if i == self.active { Color::WHITE } else { Color::GRAY.fade(0.7) };
            d.draw_circle(
                (dot.x + dot.width * 0.5) as i32,
                (dot.y + dot.height * 0.5) as i32,
                dot.width * 0.5,
                color,
            );
        }
    }
}

impl Surface for RaylibSurface {
    fn mount(&mut self, slides: &[Slide]) -> Result<(), MountError> {
        if slides.is_empty() {
            return Err(MountError::NoSlides);
        }
        if slides.len() != self.views.len() {
            return Err(MountError::SlideCountMismatch { surface: self.views.len(), slides: slides.len() });
        }
        self.active = 0;
        self.views[0].show();
        Ok(())
    }

    fn activate(&mut self, from: usize, to: usize) {
        if let Some(view) = self.views.get_mut(from) {
            view.fade_out();
        }
        if let Some(view) = self.views.get_mut(to) {
            view.fade_in();
        }
        self.active = to;
    }
}
