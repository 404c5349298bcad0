//! Filesystem adapter: read results documents from disk and hand them to the parser.
//!
//! This crate is allowed to do filesystem IO. Everything it produces is an owned
//! [`Element`] tree; the parser never sees `roxmltree` types.

#![forbid(unsafe_code)]

mod error;
mod xml;

use camino::Utf8Path;
use extresults_parser::DocumentLoader;
use extresults_types::Element;

pub use error::LoadError;
pub use xml::{MAX_DEPTH, parse_xml_str};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;
    use extresults_parser::ResultsParser;
    use extresults_types::{DataSourceId, DiagnosticEntry, ResultsModel};

    /// Parse arbitrary text as XML.
    ///
    /// Returns `Err(...)` on malformed input. **Never panics** on any input.
    pub fn parse_document(text: &str) -> Result<(), LoadError> {
        let _ = parse_xml_str(text)?;
        Ok(())
    }

    struct InMemory<'a>(&'a str);

    impl DocumentLoader for InMemory<'_> {
        fn load(&self, _path: &Utf8Path, _schema: &str) -> anyhow::Result<Option<Element>> {
            Ok(Some(parse_xml_str(self.0)?))
        }
    }

    /// Run the full extraction over arbitrary text.
    ///
    /// Malformed input comes back as a diagnostic. **Never panics** on any input.
    pub fn parse_results(text: &str) -> (ResultsModel, Vec<DiagnosticEntry>) {
        let mut parser =
            ResultsParser::new(InMemory(text), DataSourceId::new("fuzz"), "fuzz.xml");
        let model = parser.parse();
        (model, parser.diagnostics())
    }
}

/// [`DocumentLoader`] backed by files on disk.
#[derive(Clone, Copy, Debug, Default)]
pub struct XmlLoader;

impl XmlLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse `path`. `Ok(None)` means the file held nothing but whitespace.
    pub fn load_file(&self, path: &Utf8Path) -> Result<Option<Element>, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_owned(),
            source,
        })?;
        if text.trim().is_empty() {
            tracing::warn!(path = %path, "results file is empty; nothing to parse");
            return Ok(None);
        }
        parse_xml_str(&text).map(Some)
    }
}

impl DocumentLoader for XmlLoader {
    fn load(&self, path: &Utf8Path, schema: &str) -> anyhow::Result<Option<Element>> {
        tracing::debug!(path = %path, schema, "loading results document");
        Ok(self.load_file(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extresults_types::DiagnosticKind;
    use proptest::prelude::*;

    #[test]
    fn fuzz_parse_results_reports_malformed_input() {
        let (model, diagnostics) = fuzz::parse_results("<autopsy_results>");
        assert!(model.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Error parsing fuzz.xml");
        assert!(diagnostics[0].cause.is_some());
    }

    #[test]
    fn fuzz_parse_results_extracts_reports() {
        let (model, diagnostics) = fuzz::parse_results(
            "<autopsy_results><reports><report><local_path>r.html</local_path>\
             <source_module>m</source_module></report></reports></autopsy_results>",
        );
        assert_eq!(model.reports.len(), 1);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn fuzz_parse_results_survives_deep_nesting() {
        let depth = 20_000;
        let text = format!(
            "<autopsy_results><reports><report><local_path>r.html</local_path>\
             <report_name>{}{}</report_name></report></reports></autopsy_results>",
            "<x>".repeat(depth),
            "</x>".repeat(depth)
        );
        let (model, diagnostics) = fuzz::parse_results(&text);
        assert!(model.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::Catastrophic);
        assert_eq!(
            diagnostics[0].cause.as_deref(),
            Some("elements nested deeper than 256 levels")
        );
    }

    proptest! {
        #[test]
        fn fuzz_entry_points_never_panic(input in ".*") {
            let _ = fuzz::parse_document(&input);
            let _ = fuzz::parse_results(&input);
        }

        #[test]
        fn nested_documents_never_panic(depth in 0usize..2_000) {
            let text = format!("{}{}", "<x>".repeat(depth), "</x>".repeat(depth));
            let (_, diagnostics) = fuzz::parse_results(&text);
            prop_assert_eq!(diagnostics.len(), 1);
        }
    }
}
