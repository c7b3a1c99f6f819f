//! Hero image carousel.
//!
//! The carousel is a small state machine ([`state::CarouselState`]) with one
//! active slide, a single autoplay timer and four manual inputs (buttons,
//! indicator dots, arrow keys, swipes). Manual input always restarts autoplay
//! from a full interval. Rendering sits behind the [`surface::Surface`] trait:
//! an in-memory document for the headless page and tests, and a raylib window
//! behind the `window` feature.

pub mod carousel;
pub mod clock;
pub mod config;
pub mod constants;
pub mod dom;
pub mod input;
pub mod page;
pub mod simulate;
pub mod slide;
pub mod state;
pub mod surface;
pub mod texture_loader;
pub mod timer;
#[cfg(feature = "window")]
pub mod window;

pub use carousel::Carousel;
pub use clock::{Clock, SystemClock, VirtualClock};
pub use config::Config;
pub use input::{Direction, Event, Key, Visibility};
pub use slide::Slide;
pub use state::{CarouselState, Settings};
pub use surface::{MountError, Surface};
