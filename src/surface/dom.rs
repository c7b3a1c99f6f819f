use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::*;
use crate::dom::{Document, NodeId};
use crate::slide::Slide;
use crate::surface::{MountError, Surface};

/// Renders slides into a slide track and indicators into a dot strip.
#[derive(Debug)]
pub struct DomSurface {
    doc: Rc<RefCell<Document>>,
    track_id: String,
    strip_id: String,
    track: Option<NodeId>,
    strip: Option<NodeId>,
    slide_nodes: Vec<NodeId>,
    dot_nodes: Vec<NodeId>,
}

impl DomSurface {
    pub fn new(doc: Rc<RefCell<Document>>, track_id: &str, strip_id: &str) -> Self {
        Self {
            doc,
            track_id: track_id.to_string(),
            strip_id: strip_id.to_string(),
            track: None,
            strip: None,
            slide_nodes: Vec::new(),
            dot_nodes: Vec::new(),
        }
    }

    pub fn track(&self) -> Option<NodeId> {
        self.track
    }

    pub fn strip(&self) -> Option<NodeId> {
        self.strip
    }

    pub fn slide_nodes(&self) -> &[NodeId] {
        &self.slide_nodes
    }

    pub fn dot_nodes(&self) -> &[NodeId] {
        &self.dot_nodes
    }

    /// Index of the indicator that is `node` or contains it.
    pub fn indicator_index(&self, node: NodeId) -> Option<usize> {
        let doc = self.doc.borrow();
        self.dot_nodes.iter().position(|dot| doc.contains(*dot, node))
    }

    fn render_slide(doc: &mut Document, slide: &Slide) -> NodeId {
        let div = doc.create_element("div");
        doc.add_class(div, SLIDE_CLASS);

        let img = doc.create_element("img");
        doc.set_attribute(img, "src", &slide.src);
        doc.set_attribute(img, "alt", &slide.alt);
        doc.append_child(div, img);

        if slide.has_caption() {
            let content = doc.create_element("div");
            doc.add_class(content, "slide-content");
            if let Some(title) = &slide.title {
                let h1 = doc.create_element("h1");
                doc.set_text(h1, title);
                doc.append_child(content, h1);
            }
            if let Some(text) = &slide.text {
                let p = doc.create_element("p");
                doc.set_text(p, text);
                doc.append_child(content, p);
            }
            if let Some(button) = &slide.button {
                let a = doc.create_element("a");
                doc.add_class(a, "btn");
                doc.set_attribute(a, "href", slide.link.as_deref().unwrap_or("#"));
                doc.set_text(a, button);
                doc.append_child(content, a);
            }
            doc.append_child(div, content);
        }
        div
    }

    fn render_dot(doc: &mut Document, index: usize) -> NodeId {
        let dot = doc.create_element("span");
        doc.add_class(dot, DOT_CLASS);
        doc.set_attribute(dot, "role", "tab");
        doc.set_attribute(dot, "aria-label", &format!("Go to slide {}", index + 1));
        doc.set_attribute(dot, "data-index", &index.to_string());
        dot
    }

    fn mark(&self, doc: &mut Document, index: usize, active: bool) {
        if let Some(slide) = self.slide_nodes.get(index) {
            doc.toggle_class(*slide, ACTIVE_CLASS, active);
            doc.set_attribute(*slide, "aria-hidden", if active { "false" } else { "true" });
        }
        if let Some(dot) = self.dot_nodes.get(index) {
            doc.toggle_class(*dot, ACTIVE_CLASS, active);
            doc.set_attribute(*dot, "aria-selected", if active { "true" } else { "false" });
            doc.set_attribute(*dot, "tabindex", if active { "0" } else { "-1" });
        }
    }
}

impl Surface for DomSurface {
    fn mount(&mut self, slides: &[Slide]) -> Result<(), MountError> {
        let doc_rc = Rc::clone(&self.doc);
        let mut doc = doc_rc.borrow_mut();

        // Resolve both containers before touching anything
        let track = doc
            .get_element_by_id(&self.track_id)
            .ok_or_else(|| MountError::MissingContainer(self.track_id.clone()))?;
        let strip = doc
            .get_element_by_id(&self.strip_id)
            .ok_or_else(|| MountError::MissingContainer(self.strip_id.clone()))?;
        if slides.is_empty() {
            return Err(MountError::NoSlides);
        }

        doc.clear_children(track);
        doc.clear_children(strip);
        self.slide_nodes.clear();
        self.dot_nodes.clear();

        for (index, slide) in slides.iter().enumerate() {
            let node = Self::render_slide(&mut doc, slide);
            doc.append_child(track, node);
            self.slide_nodes.push(node);

            let dot = Self::render_dot(&mut doc, index);
            doc.append_child(strip, dot);
            self.dot_nodes.push(dot);
        }

        for index in 0..slides.len() {
            self.mark(&mut doc, index, index == 0);
        }

        self.track = Some(track);
        self.strip = Some(strip);
        Ok(())
    }

    fn activate(&mut self, from: usize, to: usize) {
        let doc_rc = Rc::clone(&self.doc);
        let mut doc = doc_rc.borrow_mut();
        self.mark(&mut doc, from, false);
        self.mark(&mut doc, to, true);
    }

    fn unmount(&mut self) {
        let mut doc = self.doc.borrow_mut();
        for node in self.slide_nodes.drain(..).chain(self.dot_nodes.drain(..)) {
            doc.detach(node);
        }
        self.track = None;
        self.strip = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::default_slides;

    fn hero_document() -> Rc<RefCell<Document>> {
        let mut doc = Document::new();
        let body = doc.body();
        let hero = doc.append_with_id(body, "section", "hero");
        doc.append_with_id(hero, "div", SLIDE_TRACK_ID);
        doc.append_with_id(hero, "div", INDICATOR_STRIP_ID);
        Rc::new(RefCell::new(doc))
    }

    fn active_count(doc: &Document, root: NodeId, class: &str) -> usize {
        doc.query_class(root, class)
            .into_iter()
            .filter(|node| doc.has_class(*node, ACTIVE_CLASS))
            .count()
    }

    #[test]
    fn mount_renders_slides_and_dots() {
        let doc = hero_document();
        let mut surface = DomSurface::new(Rc::clone(&doc), SLIDE_TRACK_ID, INDICATOR_STRIP_ID);
        surface.mount(&default_slides()).unwrap();

        let doc = doc.borrow();
        let track = surface.track().unwrap();
        let strip = surface.strip().unwrap();
        assert_eq!(doc.children(track).len(), 4);
        assert_eq!(doc.children(strip).len(), 4);
        assert!(doc.has_class(surface.slide_nodes()[0], ACTIVE_CLASS));
        assert_eq!(active_count(&doc, track, SLIDE_CLASS), 1);
        assert_eq!(active_count(&doc, strip, DOT_CLASS), 1);
        assert_eq!(doc.attribute(surface.dot_nodes()[1], "aria-label"), Some("Go to slide 2"));

        let html = doc.outer_html(surface.slide_nodes()[2]);
        assert!(html.contains("<h1>Drive Without Worries</h1>"));
        assert!(html.contains("href=\"#quote\""));
    }

    #[test]
    fn missing_strip_touches_nothing() {
        let mut doc = Document::new();
        let body = doc.body();
        doc.append_with_id(body, "div", SLIDE_TRACK_ID);
        let doc = Rc::new(RefCell::new(doc));
        let before = doc.borrow().revision();

        let mut surface = DomSurface::new(Rc::clone(&doc), SLIDE_TRACK_ID, INDICATOR_STRIP_ID);
        let err = surface.mount(&default_slides()).unwrap_err();

        assert_eq!(err, MountError::MissingContainer(INDICATOR_STRIP_ID.to_string()));
        assert_eq!(doc.borrow().revision(), before);
    }

    #[test]
    fn activate_moves_marker() {
        let doc = hero_document();
        let mut surface = DomSurface::new(Rc::clone(&doc), SLIDE_TRACK_ID, INDICATOR_STRIP_ID);
        surface.mount(&default_slides()).unwrap();
        surface.activate(0, 3);

        let doc = doc.borrow();
        assert!(doc.has_class(surface.slide_nodes()[3], ACTIVE_CLASS));
        assert!(!doc.has_class(surface.slide_nodes()[0], ACTIVE_CLASS));
        assert_eq!(doc.attribute(surface.dot_nodes()[3], "tabindex"), Some("0"));
        assert_eq!(surface.indicator_index(surface.dot_nodes()[3]), Some(3));
    }
}
