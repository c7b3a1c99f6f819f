//! Render layer behind the carousel state machine.

use thiserror::Error;

use crate::slide::Slide;

pub mod dom;

pub use dom::DomSurface;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("carousel container #{0} not found")]
    MissingContainer(String),
    #[error("carousel container #{0} already belongs to another carousel")]
    ContainerInUse(String),
    #[error("carousel has no slides")]
    NoSlides,
    #[error("surface holds {surface} slides but {slides} were configured")]
    SlideCountMismatch { surface: usize, slides: usize },
}

/// Where a carousel draws itself.
///
/// `mount` renders one node per slide and one indicator per slide with index 0
/// active. It must either succeed completely or fail without touching
/// anything. `activate` moves the single active marker.
pub trait Surface {
    fn mount(&mut self, slides: &[Slide]) -> Result<(), MountError>;

    fn activate(&mut self, from: usize, to: usize);

    fn unmount(&mut self) {}
}
