pub const RENDER_WIDTH: i32 = 1280;           // Default window width
pub const RENDER_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const AUTOPLAY_INTERVAL_MS: u64 = 3000;   // Time between automatic advances
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;     // Horizontal travel a touch must exceed to count as a swipe
pub const TRANSITION_MS: u64 = 0;             // Transition lock, 0 disables it
pub const FADE_DURATION: f32 = 0.6;           // Crossfade between slides in the window (seconds)

pub const SLIDE_TRACK_ID: &str = "heroSlider";
pub const INDICATOR_STRIP_ID: &str = "dots";
pub const NEXT_BUTTON_ID: &str = "nextSlide";
pub const PREV_BUTTON_ID: &str = "prevSlide";

pub const ACTIVE_CLASS: &str = "active";
pub const SLIDE_CLASS: &str = "slide";
pub const DOT_CLASS: &str = "dot";
