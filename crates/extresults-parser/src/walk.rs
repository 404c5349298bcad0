//! Item-level extraction and the three sub-walks.
//!
//! Every extractor is a pure function of one item element: it returns the finding
//! (if complete) together with the diagnostics it produced. The sub-walks fold
//! those into the model and the parser's list, so a dropped item never stops its
//! siblings.

use crate::lookup::{Sink, attribute_value, child_content, unique_child};
use extresults_types::{
    Artifact, Attribute, AttributeName, DerivedFile, DiagnosticEntry, DiagnosticKind, Element,
    Report, ResultsModel, TagName, ValueKind,
};

/// Outcome of extracting one item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extracted<T> {
    pub finding: Option<T>,
    pub diagnostics: Vec<DiagnosticEntry>,
}

impl<T> Extracted<T> {
    fn finish(finding: Option<T>, sink: Sink<'_>) -> Self {
        Self {
            finding,
            diagnostics: sink.into_entries(),
        }
    }

    fn fold_into(self, diagnostics: &mut Vec<DiagnosticEntry>) -> Option<T> {
        diagnostics.extend(self.diagnostics);
        self.finding
    }
}

/// Items of `item_tag` inside every `list_tag` container under `root`.
fn items<'e>(
    root: &'e Element,
    list_tag: TagName,
    item_tag: TagName,
) -> impl Iterator<Item = &'e Element> {
    root.descendants_named(list_tag.as_str())
        .flat_map(move |list| list.descendants_named(item_tag.as_str()))
}

pub fn extract_derived_file(item: &Element, results_file: &str) -> Extracted<DerivedFile> {
    let mut sink = Sink::new(results_file);

    let local_path = child_content(item, TagName::LocalPath.as_str(), true, &mut sink);
    if local_path.is_empty() {
        return Extracted::finish(None, sink);
    }
    let parent_file = child_content(item, TagName::ParentFile.as_str(), true, &mut sink);
    if parent_file.is_empty() {
        return Extracted::finish(None, sink);
    }

    Extracted::finish(
        Some(DerivedFile {
            local_path,
            parent_file,
        }),
        sink,
    )
}

/// Extract an artifact and its attributes.
///
/// An artifact with a `type` but no usable `source_file` is dropped with only the
/// lookup's own diagnostic.
pub fn extract_artifact(item: &Element, results_file: &str) -> Extracted<Artifact> {
    let mut sink = Sink::new(results_file);

    let artifact_type = attribute_value(item, AttributeName::Type.as_str(), &mut sink);
    if artifact_type.is_empty() {
        return Extracted::finish(None, sink);
    }
    let source_file = child_content(item, TagName::SourceFile.as_str(), true, &mut sink);
    if source_file.is_empty() {
        return Extracted::finish(None, sink);
    }

    let mut artifact = Artifact::new(artifact_type, source_file);
    let mut diagnostics = sink.into_entries();
    for attribute_elem in item.descendants_named(TagName::Attribute.as_str()) {
        if let Some(attribute) =
            extract_attribute(attribute_elem, results_file).fold_into(&mut diagnostics)
        {
            artifact.add_attribute(attribute);
        }
    }

    Extracted {
        finding: Some(artifact),
        diagnostics,
    }
}

pub fn extract_attribute(item: &Element, results_file: &str) -> Extracted<Attribute> {
    let mut sink = Sink::new(results_file);

    let attribute_type = attribute_value(item, AttributeName::Type.as_str(), &mut sink);
    if attribute_type.is_empty() {
        return Extracted::finish(None, sink);
    }

    let Some(value_elem) = unique_child(item, TagName::Value.as_str(), &mut sink) else {
        return Extracted::finish(None, sink);
    };
    let value = value_elem.text_content();
    if value.is_empty() {
        let message = format!(
            "Found {} element that has no content in {}",
            TagName::Value,
            results_file
        );
        sink.record(DiagnosticKind::ContentEmptiness, message);
        return Extracted::finish(None, sink);
    }

    let Some(value_kind) = value_kind(value_elem, &mut sink) else {
        return Extracted::finish(None, sink);
    };

    let source_module = child_content(item, TagName::SourceModule.as_str(), false, &mut sink);

    Extracted::finish(
        Some(Attribute {
            attribute_type,
            value,
            value_kind,
            source_module,
        }),
        sink,
    )
}

/// Declared kind of a value element. Absent means text; unknown labels are rejected.
fn value_kind(value_elem: &Element, sink: &mut Sink<'_>) -> Option<ValueKind> {
    let declared = value_elem
        .attribute(AttributeName::Type.as_str())
        .unwrap_or_default();
    if declared.is_empty() {
        return Some(ValueKind::Text);
    }
    match declared.parse::<ValueKind>() {
        Ok(kind) => Some(kind),
        Err(_) => {
            let message = format!(
                "Found unrecognized value {} for {} attribute of {} element in {}",
                declared,
                AttributeName::Type,
                TagName::Value,
                sink.results_file()
            );
            sink.record(DiagnosticKind::ValueKindViolation, message);
            None
        }
    }
}

pub fn extract_report(item: &Element, results_file: &str) -> Extracted<Report> {
    let mut sink = Sink::new(results_file);

    let local_path = child_content(item, TagName::LocalPath.as_str(), true, &mut sink);
    if local_path.is_empty() {
        return Extracted::finish(None, sink);
    }
    let source_module = child_content(item, TagName::SourceModule.as_str(), true, &mut sink);
    if source_module.is_empty() {
        return Extracted::finish(None, sink);
    }
    let report_name = child_content(item, TagName::ReportName.as_str(), false, &mut sink);

    Extracted::finish(
        Some(Report {
            local_path,
            source_module,
            report_name,
        }),
        sink,
    )
}

pub fn walk_derived_files(
    root: &Element,
    results_file: &str,
    model: &mut ResultsModel,
    diagnostics: &mut Vec<DiagnosticEntry>,
) {
    for item in items(root, TagName::DerivedFilesList, TagName::DerivedFile) {
        if let Some(derived_file) = extract_derived_file(item, results_file).fold_into(diagnostics) {
            model.add_derived_file(derived_file);
        }
    }
    tracing::debug!(count = model.derived_files.len(), "derived files collected");
}

pub fn walk_artifacts(
    root: &Element,
    results_file: &str,
    model: &mut ResultsModel,
    diagnostics: &mut Vec<DiagnosticEntry>,
) {
    for item in items(root, TagName::ArtifactsList, TagName::Artifact) {
        if let Some(artifact) = extract_artifact(item, results_file).fold_into(diagnostics) {
            model.add_artifact(artifact);
        }
    }
    tracing::debug!(
        count = model.artifacts.len(),
        attributes = model.attribute_count(),
        "artifacts collected"
    );
}

pub fn walk_reports(
    root: &Element,
    results_file: &str,
    model: &mut ResultsModel,
    diagnostics: &mut Vec<DiagnosticEntry>,
) {
    for item in items(root, TagName::ReportsList, TagName::Report) {
        if let Some(report) = extract_report(item, results_file).fold_into(diagnostics) {
            model.add_report(report);
        }
    }
    tracing::debug!(count = model.reports.len(), "reports collected");
}
