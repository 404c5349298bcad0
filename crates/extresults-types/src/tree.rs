//! Owned, read-only view of a loaded results document.
//!
//! Loaders build it once; the parser only queries it. Queries follow DOM
//! semantics: descendant searches are pre-order (document order) and text content
//! is the concatenation of every descendant text node, untrimmed.

/// A node inside an element: either a nested element or a run of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Set an attribute, replacing an existing one of the same name.
    pub fn set_attribute<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Every descendant element (excluding `self`) with the given tag, in document order.
    pub fn descendants_named<'a, 't>(&'a self, tag: &'t str) -> Descendants<'a, 't> {
        Descendants {
            stack: self.children.iter().rev().collect(),
            tag,
        }
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }
}

/// Pre-order iterator over same-named descendants. See [`Element::descendants_named`].
#[derive(Debug)]
pub struct Descendants<'a, 't> {
    stack: Vec<&'a Node>,
    tag: &'t str,
}

impl<'a> Iterator for Descendants<'a, '_> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if let Node::Element(e) = node {
                self.stack.extend(e.children.iter().rev());
                if e.name == self.tag {
                    return Some(e);
                }
            }
        }
        None
    }
}
