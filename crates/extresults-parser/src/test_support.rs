use crate::loader::DocumentLoader;
use camino::Utf8Path;
use extresults_types::Element;
use std::cell::RefCell;

pub fn root() -> Element {
    Element::new("autopsy_results")
}

pub fn derived_file(local_path: &str, parent_file: &str) -> Element {
    Element::new("derived_file")
        .with_child(Element::new("local_path").with_text(local_path))
        .with_child(Element::new("parent_file").with_text(parent_file))
}

pub fn artifact(artifact_type: &str, source_file: &str) -> Element {
    Element::new("artifact")
        .with_attribute("type", artifact_type)
        .with_child(Element::new("source_file").with_text(source_file))
}

pub fn value(text: &str, kind: Option<&str>) -> Element {
    let elem = Element::new("value").with_text(text);
    match kind {
        Some(k) => elem.with_attribute("type", k),
        None => elem,
    }
}

pub fn attribute(attribute_type: &str, value: Element, source_module: Option<&str>) -> Element {
    let elem = Element::new("attribute")
        .with_attribute("type", attribute_type)
        .with_child(value);
    match source_module {
        Some(m) => elem.with_child(Element::new("source_module").with_text(m)),
        None => elem,
    }
}

pub fn report(local_path: &str, source_module: &str, report_name: Option<&str>) -> Element {
    let elem = Element::new("report")
        .with_child(Element::new("local_path").with_text(local_path))
        .with_child(Element::new("source_module").with_text(source_module));
    match report_name {
        Some(n) => elem.with_child(Element::new("report_name").with_text(n)),
        None => elem,
    }
}

#[derive(Debug)]
enum Outcome {
    Tree(Element),
    Declined,
    Failing(String),
}

/// In-memory loader that records every request it receives.
#[derive(Debug)]
pub struct StubLoader {
    outcome: Outcome,
    requested: RefCell<Vec<(String, String)>>,
}

impl StubLoader {
    fn with(outcome: Outcome) -> Self {
        Self {
            outcome,
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn tree(root: Element) -> Self {
        Self::with(Outcome::Tree(root))
    }

    pub fn declined() -> Self {
        Self::with(Outcome::Declined)
    }

    pub fn failing(message: &str) -> Self {
        Self::with(Outcome::Failing(message.to_string()))
    }

    pub fn requested(&self) -> Vec<(String, String)> {
        self.requested.borrow().clone()
    }
}

impl DocumentLoader for StubLoader {
    fn load(&self, path: &Utf8Path, schema: &str) -> anyhow::Result<Option<Element>> {
        self.requested
            .borrow_mut()
            .push((path.to_string(), schema.to_string()));
        match &self.outcome {
            Outcome::Tree(root) => Ok(Some(root.clone())),
            Outcome::Declined => Ok(None),
            Outcome::Failing(message) => Err(anyhow::anyhow!("{message}")),
        }
    }
}
