use crate::loader::DocumentLoader;
use crate::lookup::Sink;
use crate::walk;
use camino::{Utf8Path, Utf8PathBuf};
use extresults_types::{
    DataSourceId, DiagnosticEntry, DiagnosticKind, RESULTS_SCHEMA, ResultsModel, TagName,
};

/// Parses one results document into a [`ResultsModel`].
///
/// Each call to [`ResultsParser::parse`] resets the diagnostics of the previous
/// call and returns a fresh model. `parse` takes `&mut self`; share a parser
/// across threads by giving each thread its own instance.
#[derive(Debug)]
pub struct ResultsParser<L> {
    loader: L,
    data_source: DataSourceId,
    results_file: Utf8PathBuf,
    diagnostics: Vec<DiagnosticEntry>,
}

impl<L: DocumentLoader> ResultsParser<L> {
    pub fn new(loader: L, data_source: DataSourceId, results_file: impl Into<Utf8PathBuf>) -> Self {
        Self {
            loader,
            data_source,
            results_file: results_file.into(),
            diagnostics: Vec::new(),
        }
    }

    pub fn results_file(&self) -> &Utf8Path {
        &self.results_file
    }

    /// Parse the results file. Never fails: problems end up in [`Self::diagnostics`]
    /// and the model holds whatever could be extracted.
    pub fn parse(&mut self) -> ResultsModel {
        self.diagnostics.clear();
        let mut model = ResultsModel::new(self.data_source.clone());
        let path = self.results_file.as_str();
        tracing::debug!(results_file = path, "parsing external results");

        let root = match self.loader.load(&self.results_file, RESULTS_SCHEMA) {
            Ok(Some(root)) => root,
            Ok(None) => return model,
            Err(err) => {
                let mut sink = Sink::new(path);
                sink.record_with_cause(
                    DiagnosticKind::Catastrophic,
                    format!("Error parsing {path}"),
                    format!("{err:#}"),
                );
                self.diagnostics.extend(sink.into_entries());
                return model;
            }
        };

        if root.name() != TagName::Root.as_str() {
            let mut sink = Sink::new(path);
            sink.record(
                DiagnosticKind::StructuralAbsence,
                format!("Did not find {} root element of {path}", TagName::Root),
            );
            self.diagnostics.extend(sink.into_entries());
            return model;
        }

        walk::walk_derived_files(&root, path, &mut model, &mut self.diagnostics);
        walk::walk_artifacts(&root, path, &mut model, &mut self.diagnostics);
        walk::walk_reports(&root, path, &mut model, &mut self.diagnostics);

        tracing::debug!(
            derived_files = model.derived_files.len(),
            artifacts = model.artifacts.len(),
            reports = model.reports.len(),
            diagnostics = self.diagnostics.len(),
            "parsed external results"
        );
        model
    }

    /// Snapshot of the diagnostics recorded by the most recent [`Self::parse`].
    pub fn diagnostics(&self) -> Vec<DiagnosticEntry> {
        self.diagnostics.clone()
    }
}
