//! Lookup helpers over the read-only document tree.
//!
//! All helpers report problems into a [`Sink`] and return an empty string (or
//! `None`) for "absent"; callers treat empty as absent.

use extresults_types::{DiagnosticEntry, DiagnosticKind, Element};

/// Origin recorded on every diagnostic the parser emits.
pub const ORIGIN: &str = "ResultsParser";

/// Append-only diagnostics buffer for one extraction.
#[derive(Debug)]
pub struct Sink<'a> {
    results_file: &'a str,
    entries: Vec<DiagnosticEntry>,
}

impl<'a> Sink<'a> {
    pub fn new(results_file: &'a str) -> Self {
        Self {
            results_file,
            entries: Vec::new(),
        }
    }

    pub fn results_file(&self) -> &'a str {
        self.results_file
    }

    pub fn record(&mut self, kind: DiagnosticKind, message: String) {
        tracing::error!(kind = %kind, "{message}");
        self.entries.push(DiagnosticEntry::new(ORIGIN, kind, message));
    }

    pub fn record_with_cause(&mut self, kind: DiagnosticKind, message: String, cause: String) {
        tracing::error!(kind = %kind, cause = %cause, "{message}");
        self.entries
            .push(DiagnosticEntry::new(ORIGIN, kind, message).with_cause(cause));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<DiagnosticEntry> {
        self.entries
    }
}

/// First descendant of `parent` tagged `tag`.
///
/// Searches all descendants, not only direct children. More than one match is
/// recorded as ambiguity and the first in document order is returned.
pub fn unique_child<'e>(parent: &'e Element, tag: &str, sink: &mut Sink<'_>) -> Option<&'e Element> {
    let mut matches = parent.descendants_named(tag);
    let first = matches.next()?;
    if matches.next().is_some() {
        let message = format!(
            "Found multiple {} child elements for {} element in {}, ignoring all but first occurrence",
            tag,
            parent.name(),
            sink.results_file()
        );
        sink.record(DiagnosticKind::Ambiguity, message);
    }
    Some(first)
}

/// Text content of the unique `tag` child of `parent`.
///
/// A missing child is diagnosed only when `required`; an existing child with no
/// content is always diagnosed.
pub fn child_content(parent: &Element, tag: &str, required: bool, sink: &mut Sink<'_>) -> String {
    let Some(child) = unique_child(parent, tag, sink) else {
        if required {
            let message = format!(
                "Found {} element missing {} child element in {}",
                parent.name(),
                tag,
                sink.results_file()
            );
            sink.record(DiagnosticKind::StructuralAbsence, message);
        }
        return String::new();
    };

    let content = child.text_content();
    if content.is_empty() {
        let message = format!(
            "Found {} element with {} child element that has no content in {}",
            parent.name(),
            tag,
            sink.results_file()
        );
        sink.record(DiagnosticKind::ContentEmptiness, message);
    }
    content
}

/// Value of a required attribute; missing and empty are the same thing.
pub fn attribute_value(element: &Element, name: &str, sink: &mut Sink<'_>) -> String {
    match element.attribute(name) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => {
            let message = format!(
                "Found {} element missing {} attribute in {}",
                element.name(),
                name,
                sink.results_file()
            );
            sink.record(DiagnosticKind::StructuralAbsence, message);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Element {
        Element::new("report")
            .with_child(Element::new("local_path").with_text("a.html"))
            .with_child(Element::new("local_path").with_text("b.html"))
            .with_child(Element::new("report_name"))
    }

    #[test]
    fn unique_child_takes_first_and_diagnoses_duplicates() {
        let parent = report();
        let mut sink = Sink::new("r.xml");
        let child = unique_child(&parent, "local_path", &mut sink).expect("child");
        assert_eq!(child.text_content(), "a.html");

        let entries = sink.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, DiagnosticKind::Ambiguity);
        assert_eq!(
            entries[0].message,
            "Found multiple local_path child elements for report element in r.xml, ignoring all but first occurrence"
        );
        assert_eq!(entries[0].origin, ORIGIN);
    }

    #[test]
    fn unique_child_searches_nested_descendants() {
        let parent = Element::new("attribute")
            .with_child(Element::new("wrapper").with_child(Element::new("value").with_text("1")));
        let mut sink = Sink::new("r.xml");
        assert!(unique_child(&parent, "value", &mut sink).is_some());
        assert!(unique_child(&parent, "missing", &mut sink).is_none());
        assert!(sink.is_empty());
    }

    #[test]
    fn missing_optional_child_is_silent() {
        let parent = report();
        let mut sink = Sink::new("r.xml");
        assert_eq!(child_content(&parent, "source_module", false, &mut sink), "");
        assert!(sink.is_empty());
    }

    #[test]
    fn missing_required_child_is_diagnosed() {
        let parent = report();
        let mut sink = Sink::new("r.xml");
        assert_eq!(child_content(&parent, "source_module", true, &mut sink), "");
        let entries = sink.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, DiagnosticKind::StructuralAbsence);
        assert_eq!(
            entries[0].message,
            "Found report element missing source_module child element in r.xml"
        );
    }

    #[test]
    fn empty_optional_child_is_still_diagnosed() {
        let parent = report();
        let mut sink = Sink::new("r.xml");
        assert_eq!(child_content(&parent, "report_name", false, &mut sink), "");
        let entries = sink.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, DiagnosticKind::ContentEmptiness);
    }

    #[test]
    fn attribute_value_treats_empty_as_missing() {
        let mut sink = Sink::new("r.xml");
        let present = Element::new("artifact").with_attribute("type", "exif");
        let empty = Element::new("artifact").with_attribute("type", "");
        let absent = Element::new("artifact");

        assert_eq!(attribute_value(&present, "type", &mut sink), "exif");
        assert_eq!(attribute_value(&empty, "type", &mut sink), "");
        assert_eq!(attribute_value(&absent, "type", &mut sink), "");

        let entries = sink.into_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[1].message,
            "Found artifact element missing type attribute in r.xml"
        );
    }
}
