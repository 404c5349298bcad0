//! Stable tag and attribute names of the external results document.
//!
//! These are closed sets. Nothing depends on the ordinal of a variant; only the
//! string label is meaningful.

use std::fmt;

/// Name of the schema resource results documents are validated against.
pub const RESULTS_SCHEMA: &str = "autopsy_external_results.xsd";

/// Element tags of a results document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagName {
    Root,
    DerivedFilesList,
    DerivedFile,
    LocalPath,
    ParentFile,
    ArtifactsList,
    Artifact,
    SourceFile,
    Attribute,
    Value,
    SourceModule,
    ReportsList,
    Report,
    ReportName,
}

impl TagName {
    pub const fn as_str(self) -> &'static str {
        match self {
            TagName::Root => "autopsy_results",
            TagName::DerivedFilesList => "derived_files",
            TagName::DerivedFile => "derived_file",
            TagName::LocalPath => "local_path",
            TagName::ParentFile => "parent_file",
            TagName::ArtifactsList => "artifacts",
            TagName::Artifact => "artifact",
            TagName::SourceFile => "source_file",
            TagName::Attribute => "attribute",
            TagName::Value => "value",
            TagName::SourceModule => "source_module",
            TagName::ReportsList => "reports",
            TagName::Report => "report",
            TagName::ReportName => "report_name",
        }
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute names of a results document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeName {
    Type,
}

impl AttributeName {
    pub const fn as_str(self) -> &'static str {
        match self {
            AttributeName::Type => "type",
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
