//! Minimal in-memory host document.
//!
//! Elements live in an arena and are addressed by [`NodeId`]. Only what the
//! carousel markup needs is modelled: tag, classes, attributes, text, and the
//! parent/child links. Every mutation bumps a revision counter so callers can
//! check that a failed operation left the document untouched.

use std::collections::BTreeMap;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub text: Option<String>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    body: NodeId,
    revision: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let body = Element { tag: "body".to_string(), ..Element::default() };
        Self { nodes: vec![body], body: NodeId(0), revision: 0 }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn element(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.revision += 1;
        self.nodes.push(Element { tag: tag.to_string(), ..Element::default() });
        NodeId(self.nodes.len() - 1)
    }

    /// Creates `<tag id="...">` and appends it to `parent`.
    pub fn append_with_id(&mut self, parent: NodeId, tag: &str, id: &str) -> NodeId {
        let node = self.create_element(tag);
        self.set_attribute(node, "id", id);
        self.append_child(parent, node);
        node
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.revision += 1;
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.revision += 1;
            self.nodes[parent.0].children.retain(|child| *child != node);
        }
    }

    // innerHTML = ""
    pub fn clear_children(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        if children.is_empty() {
            return;
        }
        self.revision += 1;
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.revision += 1;
        self.nodes[node.0].attributes.insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0].attributes.get(name).map(String::as_str)
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.revision += 1;
        self.nodes[node.0].text = Some(text.to_string());
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.revision += 1;
            self.nodes[node.0].classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) {
            self.revision += 1;
            self.nodes[node.0].classes.retain(|c| c != class);
        }
    }

    pub fn toggle_class(&mut self, node: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    /// Looks up an element attached to the document tree.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .find(|node| self.attribute(*node, "id") == Some(id))
    }

    /// Descendants of `root` in document order, excluding `root`.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    pub fn query_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|node| self.has_class(*node, class))
            .collect()
    }

    /// True when `node` is `ancestor` or lies beneath it.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.nodes[current.0].parent;
        }
        false
    }

    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let element = &self.nodes[node.0];
        let _ = write!(out, "<{}", element.tag);
        if !element.classes.is_empty() {
            out.push_str(" class=\"");
            push_escaped(out, &element.classes.join(" "));
            out.push('"');
        }
        for (name, value) in &element.attributes {
            let _ = write!(out, " {name}=\"");
            push_escaped(out, value);
            out.push('"');
        }
        out.push('>');
        if let Some(text) = &element.text {
            push_escaped(out, text);
        }
        for child in &element.children {
            self.write_html(*child, out);
        }
        let _ = write!(out, "</{}>", element.tag);
    }
}

fn push_escaped(out: &mut String, raw: &str) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
