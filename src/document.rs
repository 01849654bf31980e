//! In-memory document tree.
//!
//! A deliberately small model of a rendered page: elements with attributes,
//! classes, own text and children. Elements live in an arena and are addressed
//! by [`ElementId`]; removing an element detaches its subtree, after which
//! every lookup on it behaves as if it did not exist.

use std::collections::{BTreeMap, BTreeSet};

/// Handle to one element of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    text: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attached: bool,
}

impl Node {
    fn new(tag: &str, parent: Option<ElementId>) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
            classes: BTreeSet::new(),
            text: String::new(),
            parent,
            children: Vec::new(),
            attached: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create an empty document with a single `body` root element.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("body", None)],
        }
    }

    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    fn node(&self, id: ElementId) -> Option<&Node> {
        self.nodes.get(id.0).filter(|node| node.attached)
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).filter(|node| node.attached)
    }

    /// Append a new `tag` element as the last child of `parent`.
    ///
    /// Returns `None` if `parent` is not part of the document.
    pub fn append_child(&mut self, parent: ElementId, tag: &str) -> Option<ElementId> {
        self.node(parent)?;
        let id = ElementId(self.nodes.len());
        self.nodes.push(Node::new(tag, Some(parent)));
        self.node_mut(parent)?.children.push(id);
        Some(id)
    }

    /// Whether `id` refers to an element currently in the document.
    pub fn exists(&self, id: ElementId) -> bool {
        self.node(id).is_some()
    }

    pub fn tag(&self, id: ElementId) -> Option<&str> {
        self.node(id).map(|node| node.tag.as_str())
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.node(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    // ==================== Attributes ====================

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(node) = self.node_mut(id) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.node(id)
            .and_then(|node| node.attributes.get(name))
            .map(String::as_str)
    }

    /// Find the attached element whose `id` attribute equals `element_id`.
    pub fn element_by_id(&self, element_id: &str) -> Option<ElementId> {
        self.descendants(self.root())
            .into_iter()
            .find(|id| self.attribute(*id, "id") == Some(element_id))
    }

    /// All attached elements carrying attribute `name`, in document order.
    pub fn elements_with_attribute(&self, name: &str) -> Vec<(ElementId, &str)> {
        self.descendants(self.root())
            .into_iter()
            .filter_map(|id| self.attribute(id, name).map(|value| (id, value)))
            .collect()
    }

    /// Nearest element, starting at `id` itself, that carries attribute `name`.
    pub fn closest_with_attribute(&self, id: ElementId, name: &str) -> Option<(ElementId, &str)> {
        let mut current = Some(id);
        while let Some(element) = current {
            if let Some(value) = self.attribute(element, name) {
                return Some((element, value));
            }
            current = self.parent(element);
        }
        None
    }

    // ==================== Classes ====================

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(node) = self.node_mut(id) {
            node.classes.insert(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(node) = self.node_mut(id) {
            node.classes.remove(class);
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.node(id)
            .map(|node| node.classes.contains(class))
            .unwrap_or(false)
    }

    /// Add every whitespace-separated class in `classes`.
    pub fn add_class_list(&mut self, id: ElementId, classes: &str) {
        for class in classes.split_whitespace() {
            self.add_class(id, class);
        }
    }

    // ==================== Text ====================

    /// The element's own text, excluding children.
    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.node(id).map(|node| node.text.as_str())
    }

    /// Replace the element's content with `text`, dropping all children.
    pub fn set_text(&mut self, id: ElementId, text: &str) {
        if !self.exists(id) {
            return;
        }
        for child in self.children(id).to_vec() {
            self.remove(child);
        }
        if let Some(node) = self.node_mut(id) {
            node.text = text.to_string();
        }
    }

    /// Own text followed by the text content of every child, recursively.
    pub fn text_content(&self, id: ElementId) -> String {
        let mut out = String::new();
        if let Some(node) = self.node(id) {
            out.push_str(&node.text);
            for child in &node.children {
                out.push_str(&self.text_content(*child));
            }
        }
        out
    }

    // ==================== Structure ====================

    /// Detach `id` and its subtree. The root cannot be removed.
    pub fn remove(&mut self, id: ElementId) {
        if id == self.root() || !self.exists(id) {
            return;
        }
        if let Some(parent) = self.parent(id) {
            if let Some(node) = self.node_mut(parent) {
                node.children.retain(|child| *child != id);
            }
        }
        for element in self.descendants(id) {
            if let Some(node) = self.nodes.get_mut(element.0) {
                node.attached = false;
            }
        }
    }

    /// Whether `node` is `ancestor` or lies inside its subtree.
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        if !self.exists(ancestor) {
            return false;
        }
        let mut current = Some(node).filter(|id| self.exists(*id));
        while let Some(element) = current {
            if element == ancestor {
                return true;
            }
            current = self.parent(element);
        }
        false
    }

    /// `id` and every element below it, in document (pre-)order.
    fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(element) = stack.pop() {
            if !self.exists(element) {
                continue;
            }
            out.push(element);
            stack.extend(self.children(element).iter().rev().copied());
        }
        out
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, ElementId, ElementId, ElementId) {
        let mut doc = Document::new();
        let root = doc.root();
        let nav = doc.append_child(root, "nav").unwrap();
        doc.set_attribute(nav, "id", "nav");
        let link = doc.append_child(nav, "a").unwrap();
        doc.set_attribute(link, "data-i18n", "nav_docs");
        doc.set_text(link, "Docs");
        let footer = doc.append_child(root, "footer").unwrap();
        doc.set_attribute(footer, "data-i18n", "footer_opensource");
        (doc, nav, link, footer)
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_element_by_id() {
        let (doc, nav, _, _) = sample();
        assert_eq!(doc.element_by_id("nav"), Some(nav));
        assert_eq!(doc.element_by_id("missing"), None);
    }

    #[test]
    fn test_elements_with_attribute_in_document_order() {
        let (doc, _, link, footer) = sample();
        let tagged = doc.elements_with_attribute("data-i18n");
        assert_eq!(tagged, vec![(link, "nav_docs"), (footer, "footer_opensource")]);
    }

    #[test]
    fn test_closest_with_attribute_walks_ancestors() {
        let (mut doc, nav, link, _) = sample();
        let icon = doc.append_child(link, "i").unwrap();
        assert_eq!(doc.closest_with_attribute(icon, "data-i18n"), Some((link, "nav_docs")));
        assert_eq!(doc.closest_with_attribute(nav, "data-i18n"), None);
    }

    // ==================== Text Tests ====================

    #[test]
    fn test_set_text_replaces_children() {
        let (mut doc, nav, link, _) = sample();
        doc.set_text(nav, "plain");
        assert_eq!(doc.text(nav), Some("plain"));
        assert!(!doc.exists(link));
        assert!(doc.children(nav).is_empty());
    }

    #[test]
    fn test_text_content_concatenates_children() {
        let mut doc = Document::new();
        let button = doc.append_child(doc.root(), "button").unwrap();
        doc.set_text(button, "🇪🇸 ");
        let span = doc.append_child(button, "span").unwrap();
        doc.set_text(span, "Español");
        assert_eq!(doc.text_content(button), "🇪🇸 Español");
    }

    // ==================== Structure Tests ====================

    #[test]
    fn test_remove_detaches_subtree() {
        let (mut doc, nav, link, _) = sample();
        doc.remove(nav);
        assert!(!doc.exists(nav));
        assert!(!doc.exists(link));
        assert_eq!(doc.text(link), None);
        assert_eq!(doc.tag(link), None);
        assert_eq!(doc.tag(doc.root()), Some("body"));
        assert_eq!(doc.elements_with_attribute("data-i18n").len(), 1);
    }

    #[test]
    fn test_detached_element_ignores_writes() {
        let (mut doc, _, link, _) = sample();
        doc.remove(link);
        doc.set_text(link, "ignored");
        doc.add_class(link, "hidden");
        assert!(!doc.has_class(link, "hidden"));
        assert!(doc.append_child(link, "span").is_none());
    }

    #[test]
    fn test_root_cannot_be_removed() {
        let mut doc = Document::new();
        doc.remove(doc.root());
        assert!(doc.exists(doc.root()));
    }

    #[test]
    fn test_contains() {
        let (doc, nav, link, footer) = sample();
        assert!(doc.contains(nav, link));
        assert!(doc.contains(nav, nav));
        assert!(!doc.contains(nav, footer));
        assert!(doc.contains(doc.root(), footer));
    }

    // ==================== Class Tests ====================

    #[test]
    fn test_class_list() {
        let (mut doc, nav, _, _) = sample();
        doc.add_class_list(nav, "hidden  md:inline");
        assert!(doc.has_class(nav, "hidden"));
        assert!(doc.has_class(nav, "md:inline"));
        doc.remove_class(nav, "hidden");
        assert!(!doc.has_class(nav, "hidden"));
    }
}
