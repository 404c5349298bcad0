use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque handle of the data source the results belong to.
///
/// The parser carries it through unchanged and never interprets it.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct DataSourceId(String);

impl DataSourceId {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataSourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declared primitive type of an attribute value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[default]
    Text,
    Int32,
    Int64,
    Double,
}

impl ValueKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Int32 => "int32",
            ValueKind::Int64 => "int64",
            ValueKind::Double => "double",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a value type label outside the closed set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized value type: {0}")]
pub struct UnknownValueKind(pub String);

impl FromStr for ValueKind {
    type Err = UnknownValueKind;

    /// Labels are matched exactly; `Text` is not a valid spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ValueKind::Text),
            "int32" => Ok(ValueKind::Int32),
            "int64" => Ok(ValueKind::Int64),
            "double" => Ok(ValueKind::Double),
            other => Err(UnknownValueKind(other.to_string())),
        }
    }
}

/// A file the external process derived from a file in the data source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DerivedFile {
    pub local_path: String,
    pub parent_file: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Attribute {
    pub attribute_type: String,
    pub value: String,
    pub value_kind: ValueKind,
    /// May be empty.
    #[serde(default)]
    pub source_module: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Artifact {
    pub artifact_type: String,
    pub source_file: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Artifact {
    pub fn new<T: Into<String>, S: Into<String>>(artifact_type: T, source_file: S) -> Self {
        Self {
            artifact_type: artifact_type.into(),
            source_file: source_file.into(),
            attributes: Vec::new(),
        }
    }

    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    pub local_path: String,
    pub source_module: String,
    /// May be empty.
    #[serde(default)]
    pub report_name: String,
}

/// Findings extracted from one results document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResultsModel {
    pub data_source: DataSourceId,
    #[serde(default)]
    pub derived_files: Vec<DerivedFile>,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    #[serde(default)]
    pub reports: Vec<Report>,
}

impl ResultsModel {
    pub fn new(data_source: DataSourceId) -> Self {
        Self {
            data_source,
            ..Self::default()
        }
    }

    pub fn add_derived_file(&mut self, derived_file: DerivedFile) {
        self.derived_files.push(derived_file);
    }

    /// Append an artifact and return it so attributes can be attached in place.
    pub fn add_artifact(&mut self, artifact: Artifact) -> &mut Artifact {
        self.artifacts.push(artifact);
        let last = self.artifacts.len() - 1;
        &mut self.artifacts[last]
    }

    pub fn add_report(&mut self, report: Report) {
        self.reports.push(report);
    }

    pub fn attribute_count(&self) -> usize {
        self.artifacts.iter().map(|a| a.attributes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.derived_files.is_empty() && self.artifacts.is_empty() && self.reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_kind_parses_exact_labels_only() {
        assert_eq!("int32".parse::<ValueKind>(), Ok(ValueKind::Int32));
        assert_eq!("double".parse::<ValueKind>(), Ok(ValueKind::Double));
        assert_eq!(
            "Text".parse::<ValueKind>(),
            Err(UnknownValueKind("Text".to_string()))
        );
        assert!("bogus".parse::<ValueKind>().is_err());
    }

    #[test]
    fn value_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ValueKind::Int64).expect("serialize");
        assert_eq!(json, "\"int64\"");
    }

    #[test]
    fn add_artifact_returns_stored_artifact() {
        let mut model = ResultsModel::new(DataSourceId::new("img-1"));
        let artifact = model.add_artifact(Artifact::new("exif", "/photos/a.jpg"));
        artifact.add_attribute(Attribute {
            attribute_type: "make".to_string(),
            value: "Canon".to_string(),
            value_kind: ValueKind::Text,
            source_module: String::new(),
        });

        assert_eq!(model.artifacts.len(), 1);
        assert_eq!(model.attribute_count(), 1);
        assert!(!model.is_empty());
        assert_eq!(model.data_source.as_str(), "img-1");
    }
}
