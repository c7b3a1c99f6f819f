//! Host page: owns the document and every carousel mounted on it.
//!
//! Each carousel binds to its own elements when mounted (region, track,
//! indicators, optional buttons) and DOM-level events are routed to the one
//! instance that owns the target. Disposing an instance drops its bindings, so
//! nothing keeps listening on its behalf. A carousel that fails to mount is
//! logged and skipped; the rest of the page still initialises.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn};

use crate::carousel::Carousel;
use crate::clock::Clock;
use crate::config::{CarouselConfig, Config};
use crate::dom::{Document, NodeId};
use crate::input::{Direction, Event, Key, Visibility};
use crate::surface::{DomSurface, MountError};

pub type HeroCarousel<C> = Carousel<DomSurface, C>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(u32);

/// Events as the page receives them, before routing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    Click(NodeId),
    KeyDown(Key),
    Focus(Option<NodeId>),
    PointerEnter(NodeId),
    PointerLeave(NodeId),
    TouchStart { target: NodeId, x: f32 },
    TouchEnd { target: NodeId, x: f32 },
    Visibility(Visibility),
}

#[derive(Debug, Clone, Copy)]
struct Bindings {
    region: NodeId,
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

struct Mounted<C: Clock> {
    id: InstanceId,
    track_id: String,
    strip_id: String,
    carousel: HeroCarousel<C>,
    bindings: Bindings,
}

impl<C: Clock> Mounted<C> {
    fn owns(&self, container: &str) -> bool {
        self.track_id == container || self.strip_id == container
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct InitReport {
    pub mounted: Vec<InstanceId>,
    pub skipped: Vec<(String, MountError)>,
}

pub struct Page<C: Clock + Clone> {
    doc: Rc<RefCell<Document>>,
    clock: C,
    instances: Vec<Mounted<C>>,
    focused: Option<NodeId>,
    issued: u32,
}

impl<C: Clock + Clone> Page<C> {
    pub fn new(doc: Document, clock: C) -> Self {
        Self {
            doc: Rc::new(RefCell::new(doc)),
            clock,
            instances: Vec::new(),
            focused: None,
            issued: 0,
        }
    }

    /// Mounts every configured carousel; failures are logged and skipped.
    pub fn init(&mut self, config: &Config) -> InitReport {
        let mut report = InitReport::default();
        for entry in &config.carousels {
            match self.mount_carousel(entry) {
                Ok(id) => report.mounted.push(id),
                Err(e) => {
                    warn!(track = %entry.track, error = %e, "carousel skipped");
                    report.skipped.push((entry.track.clone(), e));
                }
            }
        }
        info!(mounted = report.mounted.len(), skipped = report.skipped.len(), "page initialised");
        report
    }

    pub fn mount_carousel(&mut self, entry: &CarouselConfig) -> Result<InstanceId, MountError> {
        for id in [&entry.track, &entry.indicators] {
            if self.instances.iter().any(|m| m.owns(id)) {
                return Err(MountError::ContainerInUse(id.clone()));
            }
        }

        let region = self
            .doc
            .borrow()
            .get_element_by_id(entry.region_id())
            .ok_or_else(|| MountError::MissingContainer(entry.region_id().to_string()))?;

        let surface = DomSurface::new(Rc::clone(&self.doc), &entry.track, &entry.indicators);
        let carousel = Carousel::mount(entry.slides.clone(), entry.settings(), surface, self.clock.clone())?;

        let bindings = {
            let doc = self.doc.borrow();
            let button = |id: &Option<String>| id.as_deref().and_then(|id| doc.get_element_by_id(id));
            Bindings { region, next: button(&entry.next), prev: button(&entry.prev) }
        };

        self.issued += 1;
        let id = InstanceId(self.issued);
        self.instances.push(Mounted {
            id,
            track_id: entry.track.clone(),
            strip_id: entry.indicators.clone(),
            carousel,
            bindings,
        });
        Ok(id)
    }

    /// Unmounts an instance and drops its bindings.
    pub fn dispose(&mut self, id: InstanceId) -> bool {
        let Some(position) = self.instances.iter().position(|m| m.id == id) else {
            return false;
        };
        let mounted = self.instances.remove(position);
        info!(track = %mounted.track_id, "carousel detached");
        mounted.carousel.dispose();
        true
    }

    /// Runs autoplay ticks that are due on every instance.
    pub fn tick(&mut self) -> usize {
        self.instances.iter_mut().map(|m| m.carousel.poll()).sum()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.instances.iter().filter_map(|m| m.carousel.next_autoplay_at()).min()
    }

    pub fn dispatch(&mut self, event: PageEvent) {
        // Keep instances in step with the clock before routing
        self.tick();

        match event {
            PageEvent::Click(target) => {
                let routed = {
                    let doc = self.doc.borrow();
                    let hit = |node: Option<NodeId>| node.is_some_and(|n| doc.contains(n, target));
                    self.instances.iter().find_map(|m| {
                        if hit(m.bindings.next) {
                            Some((m.id, Event::Navigate(Direction::Next)))
                        } else if hit(m.bindings.prev) {
                            Some((m.id, Event::Navigate(Direction::Previous)))
                        } else {
                            m.carousel.surface().indicator_index(target).map(|i| (m.id, Event::Select(i)))
                        }
                    })
                };
                if let Some((id, event)) = routed {
                    self.send(id, event);
                }
            }
            PageEvent::KeyDown(key) => {
                if let Some(id) = self.keyboard_owner() {
                    self.send(id, Event::Key(key));
                }
            }
            PageEvent::Focus(target) => self.focused = target,
            PageEvent::PointerEnter(target) => self.send_to_region(target, Event::PointerEnter),
            PageEvent::PointerLeave(target) => self.send_to_region(target, Event::PointerLeave),
            PageEvent::TouchStart { target, x } => self.send_to_region(target, Event::TouchStart { x }),
            PageEvent::TouchEnd { target, x } => self.send_to_region(target, Event::TouchEnd { x }),
            PageEvent::Visibility(visibility) => {
                for mounted in &mut self.instances {
                    mounted.carousel.handle(Event::Visibility(visibility));
                }
            }
        }
    }

    // Focused carousel, else the only carousel when focus is not on a form field
    fn keyboard_owner(&self) -> Option<InstanceId> {
        let doc = self.doc.borrow();
        if let Some(focused) = self.focused {
            if let Some(m) = self.instances.iter().find(|m| doc.contains(m.bindings.region, focused)) {
                return Some(m.id);
            }
            let tag = doc.element(focused).tag.as_str();
            if matches!(tag, "input" | "textarea" | "select") {
                return None;
            }
        }
        match self.instances.as_slice() {
            [only] => Some(only.id),
            _ => None,
        }
    }

    fn send_to_region(&mut self, target: NodeId, event: Event) {
        let owner = {
            let doc = self.doc.borrow();
            self.instances
                .iter()
                .find(|m| doc.contains(m.bindings.region, target))
                .map(|m| m.id)
        };
        if let Some(id) = owner {
            self.send(id, event);
        }
    }

    fn send(&mut self, id: InstanceId, event: Event) {
        if let Some(mounted) = self.instances.iter_mut().find(|m| m.id == id) {
            mounted.carousel.handle(event);
        }
    }

    pub fn carousel(&self, id: InstanceId) -> Option<&HeroCarousel<C>> {
        self.instances.iter().find(|m| m.id == id).map(|m| &m.carousel)
    }

    /// Mounted instances with the id of their slide track.
    pub fn instances(&self) -> impl Iterator<Item = (InstanceId, &str, &HeroCarousel<C>)> {
        self.instances.iter().map(|m| (m.id, m.track_id.as_str(), &m.carousel))
    }

    pub fn document(&self) -> std::cell::Ref<'_, Document> {
        self.doc.borrow()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

/// Skeleton markup for the configured carousels: a section per carousel
/// holding the track, the indicator strip and the optional buttons.
pub fn skeleton(config: &Config) -> Document {
    let mut doc = Document::new();
    let body = doc.body();
    for entry in &config.carousels {
        let region = match &entry.region {
            Some(region) => doc.append_with_id(body, "section", region),
            None => body,
        };
        doc.append_with_id(region, "div", &entry.track);
        doc.append_with_id(region, "div", &entry.indicators);
        if let Some(prev) = &entry.prev {
            doc.append_with_id(region, "button", prev);
        }
        if let Some(next) = &entry.next {
            doc.append_with_id(region, "button", next);
        }
    }
    doc
}
