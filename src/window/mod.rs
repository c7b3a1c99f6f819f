//! raylib front-end for the first configured carousel.

use anyhow::{Context, Result};
use raylib::prelude::*;
use tracing::{info, warn};

use crate::carousel::Carousel;
use crate::clock::SystemClock;
use crate::config::Config;
use crate::input::{Direction, Event, Key, Visibility};
use crate::texture_loader::load_texture_with_exif_rotation;

pub mod chrome;
pub mod slide_view;
pub mod surface;

use chrome::Chrome;
use slide_view::SlideView;
use surface::RaylibSurface;

pub fn run(config: &Config) -> Result<()> {
    let entry = config.carousels.first().context("No carousel configured")?;

    let (mut rl, thread) = raylib::init()
        .size(config.window.width, config.window.height)
        .title(&config.window.title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.window.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut views = Vec::with_capacity(entry.slides.len());
    for slide in &entry.slides {
        let path = config.resolve(&slide.src);
        let image = match load_texture_with_exif_rotation(&mut rl, &thread, &path) {
            Ok(texture) => Some(texture),
            Err(e) => {
                warn!(error = %e, alt = %slide.alt, "image unavailable, drawing placeholder");
                None
            }
        };
        views.push(SlideView::new(slide.clone(), image));
    }

    let mut carousel = Carousel::mount(
        entry.slides.clone(),
        entry.settings(),
        RaylibSurface::new(views),
        SystemClock::new(),
    )?;

    let mut hovering = false;
    let mut visible = true;
    let mut dragging = false;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let chrome = Chrome::new(rl.get_screen_width(), rl.get_screen_height(), carousel.slides().len());

        let now_visible = !rl.is_window_minimized() && !rl.is_window_hidden();
        if now_visible != visible {
            visible = now_visible;
            let visibility = if visible { Visibility::Visible } else { Visibility::Hidden };
            carousel.handle(Event::Visibility(visibility));
        }

        let mouse = rl.get_mouse_position();
        let inside = chrome.hovered(mouse, rl.is_cursor_on_screen());
        if inside != hovering {
            hovering = inside;
            carousel.handle(if inside { Event::PointerEnter } else { Event::PointerLeave });
        }

        // Arrow keys belong to the carousel only while its window has focus
        if rl.is_window_focused() {
            if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
                carousel.handle(Event::Key(Key::ArrowLeft));
            }
            if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
                carousel.handle(Event::Key(Key::ArrowRight));
            }
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if chrome.prev.check_collision_point_rec(mouse) {
                carousel.handle(Event::Navigate(Direction::Previous));
            } else if chrome.next.check_collision_point_rec(mouse) {
                carousel.handle(Event::Navigate(Direction::Next));
            } else if let Some(index) = chrome.dot_at(mouse) {
                carousel.handle(Event::Select(index));
            } else if chrome.cta.check_collision_point_rec(mouse) && carousel.current_slide().button.is_some() {
                let link = carousel.current_slide().link.as_deref().unwrap_or("#");
                info!(link, "call to action");
            } else if inside {
                // Mouse drag stands in for touch
                dragging = true;
                carousel.handle(Event::TouchStart { x: mouse.x });
            }
        }
        if dragging && rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            dragging = false;
            carousel.handle(Event::TouchEnd { x: mouse.x });
        }

        carousel.poll();
        carousel.surface_mut().update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        carousel.surface().draw(&mut d, &chrome);
    }

    carousel.dispose();
    Ok(())
}
