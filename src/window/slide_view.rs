use raylib::prelude::*;

use crate::constants::*;
use crate::slide::Slide;

/// A slide as drawn in the window: its texture (or a placeholder when the
/// image failed to load) and a crossfade driven by a tween.
pub struct SlideView {
    slide: Slide,
    image: Option<Texture2D>,

    pub visible: bool,
    alpha: f32,

    start_alpha: f32,
    end_alpha: f32,
    tween: Option<ease::Tween>,
    animation_timer: f32,
    pub is_animating: bool,
}

impl SlideView {
    pub fn new(slide: Slide, image: Option<Texture2D>) -> Self {
        Self {
            slide,
            image,
            visible: false,
            alpha: 0.0,
            start_alpha: 0.0,
            end_alpha: 0.0,
            tween: None,
            animation_timer: 0.0,
            is_animating: false,
        }
    }

    pub fn slide(&self) -> &Slide {
        &self.slide
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.alpha = 1.0;
        self.is_animating = false;
        self.tween = None;
    }

    pub fn fade_in(&mut self) {
        self.visible = true;
        self.fade_to(1.0);
    }

    pub fn fade_out(&mut self) {
        self.fade_to(0.0);
    }

    fn fade_to(&mut self, target: f32) {
        self.start_alpha = self.alpha;
        self.end_alpha = target;
        self.tween = Some(ease::Tween::new(ease::cubic_out, self.start_alpha, target, FADE_DURATION));
        self.animation_timer = 0.0;
        self.is_animating = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        if let Some(tween) = self.tween.as_mut() {
            self.alpha = tween.apply(dt).clamp(0.0, 1.0);
        }

        self.animation_timer += dt;
        if self.animation_timer >= FADE_DURATION {
            self.is_animating = false;
            self.tween = None;
            self.alpha = self.end_alpha;
            self.visible = self.end_alpha > 0.0;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        if !self.visible {
            return;
        }
        let tint = Color::WHITE.fade(self.alpha);

        let Some(image) = &self.image else {
            d.draw_rectangle_rec(area, Color::new(30, 27, 75, 255).fade(self.alpha));
            d.draw_text(&self.slide.alt, area.x as i32 + 40, (area.y + area.height * 0.5) as i32, 30, tint);
            return;
        };

        let tex_width = image.width() as f32;
        let tex_height = image.height() as f32;

        // Fit inside the area, keeping aspect ratio
        let scale = (area.width / tex_width).min(area.height / tex_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let dest = Rectangle::new(
            area.x + (area.width - scaled_width) * 0.5,
            area.y + (area.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            tint,
        );
    }

    pub fn draw_caption(&self, d: &mut RaylibDrawHandle, area: Rectangle, cta: Rectangle) {
        if !self.visible || !self.slide.has_caption() {
            return;
        }
        let tint = Color::WHITE.fade(self.alpha);
        let x = area.x as i32 + 60;
        let mut y = (area.y + area.height * 0.55) as i32;

        if let Some(title) = &self.slide.title {
            d.draw_text(title, x, y, 44, tint);
            y += 56;
        }
        if let Some(text) = &self.slide.text {
            d.draw_text(text, x, y, 22, tint);
        }
        if let Some(button) = &self.slide.button {
            d.draw_rectangle_rec(cta, Color::new(16, 185, 129, 255).fade(self.alpha));
            d.draw_text(button, cta.x as i32 + 16, cta.y as i32 + 12, 20, tint);
        }
    }
}
