use camino::Utf8Path;
use extresults_types::Element;

/// Source of validated document trees.
///
/// - `Ok(Some(root))`: the document's root element.
/// - `Ok(None)`: the loader already reported the failure itself; the parser stops
///   without adding a diagnostic.
/// - `Err(_)`: unexpected failure; the parser records it with its cause.
pub trait DocumentLoader {
    fn load(&self, path: &Utf8Path, schema: &str) -> anyhow::Result<Option<Element>>;
}

impl<L: DocumentLoader + ?Sized> DocumentLoader for &L {
    fn load(&self, path: &Utf8Path, schema: &str) -> anyhow::Result<Option<Element>> {
        (**self).load(path, schema)
    }
}

impl<L: DocumentLoader + ?Sized> DocumentLoader for Box<L> {
    fn load(&self, path: &Utf8Path, schema: &str) -> anyhow::Result<Option<Element>> {
        (**self).load(path, schema)
    }
}
