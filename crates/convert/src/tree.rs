//! Owned document tree built from parsed HTML.
//!
//! The emitter works on this tree rather than on `scraper`'s arena so that
//! tests can build inputs by hand and so that the node kinds the converter
//! cares about form a closed set.

use std::collections::BTreeMap;
use std::fmt;

use ego_tree::iter::Children;
use scraper::Html;

use crate::error::{ConvertError, Result};

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
    Comment(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

}

/// Drops nested children with an explicit stack so that deep trees cannot
/// overflow the call stack on drop.
impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with a lowercased tag name, its attributes and owned children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: BTreeMap<String, String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs
            .insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.with_child(Node::text(text))
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Whitespace-separated tokens of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// First descendant element (document order, excluding `self`) matching
    /// `predicate`.
    pub fn find(&self, predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
        find_in(&self.children, predicate)
    }

    /// The text of this element when it is made of a single string: either
    /// exactly one text child, or exactly one element child that itself has a
    /// single string.
    pub fn string_content(&self) -> Option<&str> {
        let mut current = self;
        loop {
            match current.children.as_slice() {
                [Node::Text(text)] => return Some(text),
                [Node::Element(child)] => current = child,
                _ => return None,
            }
        }
    }
}

/// Renders the opening tag, e.g. `<ms-katex class="inline">`.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, value.replace('"', "&quot;"))?;
        }
        write!(f, ">")
    }
}

fn find_in(nodes: &[Node], predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
    let mut stack: Vec<&Node> = nodes.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if let Node::Element(element) = node {
            if predicate(element) {
                return Some(element);
            }
            stack.extend(element.children.iter().rev());
        }
    }
    None
}

/// A parsed page: its top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

struct Frame<'a> {
    element: Element,
    pending: Children<'a, scraper::Node>,
}

impl Document {
    /// Parse an HTML page.
    pub fn parse(html: &str) -> Self {
        Self::from_html(&Html::parse_document(html))
    }

    /// Copy a `scraper` document into an owned tree. The walk uses an explicit
    /// stack, so arbitrarily deep input cannot overflow the call stack here.
    pub fn from_html(html: &Html) -> Self {
        let mut stack = vec![Frame {
            element: Element::default(),
            pending: html.tree.root().children(),
        }];

        while let Some(frame) = stack.last_mut() {
            match frame.pending.next() {
                Some(child) => match child.value() {
                    scraper::Node::Text(text) => {
                        frame.element.children.push(Node::Text(String::from(&**text)))
                    }
                    scraper::Node::Comment(comment) => frame
                        .element
                        .children
                        .push(Node::Comment(String::from(&**comment))),
                    scraper::Node::Element(value) => {
                        let mut element = Element::new(value.name());
                        element.attrs = value
                            .attrs()
                            .map(|(name, value)| (name.to_ascii_lowercase(), value.to_string()))
                            .collect();
                        stack.push(Frame {
                            element,
                            pending: child.children(),
                        });
                    }
                    // Doctypes, processing instructions and fragment roots
                    // carry nothing convertible.
                    _ => {}
                },
                None => {
                    let Some(mut finished) = stack.pop() else { break };
                    match stack.last_mut() {
                        Some(parent) => parent.element.children.push(finished.element.into()),
                        None => {
                            return Self {
                                nodes: std::mem::take(&mut finished.element.children),
                            };
                        }
                    }
                }
            }
        }

        Self::default()
    }

    pub fn find(&self, predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
        find_in(&self.nodes, predicate)
    }

    /// Pick the element holding the convertible content: the first `div`
    /// carrying `container_class`, else the first `div`, else `body`.
    pub fn content_root(&self, container_class: &str) -> Result<&Element> {
        if let Some(panel) = self.find(|e| e.name == "div" && e.has_class(container_class)) {
            return Ok(panel);
        }
        tracing::debug!("no '{}' container, falling back", container_class);
        self.find(|e| e.name == "div")
            .or_else(|| self.find(|e| e.name == "body"))
            .ok_or(ConvertError::NoContentContainer)
    }
}
