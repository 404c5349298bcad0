use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of problem a diagnostic describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Root element, required child element or required attribute is missing.
    StructuralAbsence,
    /// Element is present but has no text content.
    ContentEmptiness,
    /// Several same-named elements where one is expected; the first one wins.
    Ambiguity,
    /// Value element declares a type outside the known set.
    ValueKindViolation,
    /// Anything else; the walk stopped and the model may be partial.
    Catastrophic,
}

impl DiagnosticKind {
    pub const ALL: [DiagnosticKind; 5] = [
        DiagnosticKind::StructuralAbsence,
        DiagnosticKind::ContentEmptiness,
        DiagnosticKind::Ambiguity,
        DiagnosticKind::ValueKindViolation,
        DiagnosticKind::Catastrophic,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::StructuralAbsence => "structural_absence",
            DiagnosticKind::ContentEmptiness => "content_emptiness",
            DiagnosticKind::Ambiguity => "ambiguity",
            DiagnosticKind::ValueKindViolation => "value_kind_violation",
            DiagnosticKind::Catastrophic => "catastrophic",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == label)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal problem recorded while parsing a results document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DiagnosticEntry {
    /// Component that recorded the entry.
    pub origin: String,
    pub kind: DiagnosticKind,
    pub message: String,
    /// Rendered chain of the underlying error, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl DiagnosticEntry {
    pub fn new<O: Into<String>, M: Into<String>>(origin: O, kind: DiagnosticKind, message: M) -> Self {
        Self {
            origin: origin.into(),
            kind,
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause<C: Into<String>>(mut self, cause: C) -> Self {
        self.cause = Some(cause.into());
        self
    }
}

impl fmt::Display for DiagnosticEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.origin, self.message)?;
        if let Some(cause) = &self.cause {
            write!(f, ": {cause}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_labels_round_trip() {
        for kind in DiagnosticKind::ALL {
            assert_eq!(DiagnosticKind::from_label(kind.as_str()), Some(kind));
        }
        assert_eq!(DiagnosticKind::from_label("nope"), None);
    }

    #[test]
    fn display_includes_cause() {
        let entry = DiagnosticEntry::new("ResultsParser", DiagnosticKind::Catastrophic, "Error parsing a.xml")
            .with_cause("no such file");
        assert_eq!(entry.to_string(), "[ResultsParser] Error parsing a.xml: no such file");
    }

    #[test]
    fn cause_is_omitted_from_json_when_absent() {
        let entry = DiagnosticEntry::new("ResultsParser", DiagnosticKind::Ambiguity, "dup");
        let json = serde_json::to_value(&entry).expect("serialize");
        assert!(json.get("cause").is_none());
        assert_eq!(json["kind"], "ambiguity");
    }
}
