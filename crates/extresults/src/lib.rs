//! Parse externally generated results documents into a typed model.
//!
//! ```no_run
//! let (model, diagnostics) = extresults::parse_file("results.xml", "disk.img");
//! for d in &diagnostics {
//!     eprintln!("{d}");
//! }
//! println!("{} artifacts", model.artifacts.len());
//! ```

#![forbid(unsafe_code)]

use camino::Utf8PathBuf;

pub use extresults_loader::{LoadError, XmlLoader, parse_xml_str};
pub use extresults_parser::{DocumentLoader, ResultsParser};
pub use extresults_types::{
    Artifact, Attribute, DataSourceId, DerivedFile, DiagnosticEntry, DiagnosticKind, Element,
    Report, ResultsModel, ValueKind,
};

/// Parse one results file from disk. Never fails; problems come back as diagnostics.
pub fn parse_file(
    path: impl Into<Utf8PathBuf>,
    data_source: impl Into<String>,
) -> (ResultsModel, Vec<DiagnosticEntry>) {
    let mut parser = ResultsParser::new(XmlLoader::new(), DataSourceId::new(data_source), path);
    let model = parser.parse();
    (model, parser.diagnostics())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_file_returns_model_and_diagnostics() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(tmp.path().join("results.xml")).expect("utf8 path");
        std::fs::write(
            &path,
            "<autopsy_results><artifacts>\
             <artifact type=\"exif\"><source_file>/a.jpg</source_file></artifact>\
             <artifact><source_file>/b.jpg</source_file></artifact>\
             </artifacts></autopsy_results>",
        )
        .expect("write");

        let (model, diagnostics) = parse_file(path, "img");
        assert_eq!(model.data_source.as_str(), "img");
        assert_eq!(model.artifacts.len(), 1);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::StructuralAbsence);
    }

    #[test]
    fn missing_file_is_catastrophic() {
        let (model, diagnostics) = parse_file("/definitely/not/here.xml", "img");
        assert!(model.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::Catastrophic);
        assert!(diagnostics[0].cause.as_deref().is_some_and(|c| c.starts_with("read ")));
    }
}
