//! Headless run: mounts the configured carousels on a skeleton page and lets
//! autoplay play out against a virtual clock.

use std::collections::HashMap;
use std::fmt;

use crate::clock::{Clock, VirtualClock};
use crate::config::Config;
use crate::page::{InstanceId, Page, skeleton};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub at_ms: u64,
    pub track: String,
    pub index: usize,
    pub len: usize,
    pub alt: String,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={:>6}ms  #{}  slide {}/{}  {}",
            self.at_ms,
            self.track,
            self.index + 1,
            self.len,
            self.alt
        )
    }
}

/// Slide shown by each carousel at mount and after every change, up to `duration_ms`.
pub fn run(config: &Config, duration_ms: u64) -> Vec<Frame> {
    let clock = VirtualClock::new();
    let mut page = Page::new(skeleton(config), clock.clone());
    page.init(config);

    let mut shown = HashMap::new();
    let mut frames = Vec::new();
    record(&page, &mut shown, &mut frames);

    while let Some(deadline) = page.next_deadline() {
        if deadline > duration_ms {
            break;
        }
        clock.set(deadline);
        page.tick();
        record(&page, &mut shown, &mut frames);
    }
    frames
}

fn record(page: &Page<VirtualClock>, shown: &mut HashMap<InstanceId, usize>, frames: &mut Vec<Frame>) {
    let now = page.clock().now();
    for (id, track, carousel) in page.instances() {
        let index = carousel.current_index();
        if shown.insert(id, index) == Some(index) {
            continue;
        }
        frames.push(Frame {
            at_ms: now,
            track: track.to_string(),
            index,
            len: carousel.slides().len(),
            alt: carousel.current_slide().alt.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_cycles_every_three_seconds() {
        let frames = run(&Config::default(), 12_000);
        let timeline: Vec<(u64, usize)> = frames.iter().map(|f| (f.at_ms, f.index)).collect();
        assert_eq!(timeline, vec![(0, 0), (3000, 1), (6000, 2), (9000, 3), (12_000, 0)]);
        assert_eq!(frames[1].alt, "Fire Insurance");
        assert!(frames[1].to_string().contains("slide 2/4"));
    }
}
