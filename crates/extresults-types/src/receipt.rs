use crate::{DiagnosticEntry, ResultsModel};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for parse receipts.
pub const SCHEMA_RECEIPT_V1: &str = "extresults.receipt.v1";

/// Verdict is intentionally small: it maps cleanly to CI signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

impl ToolMeta {
    pub fn current() -> Self {
        Self {
            name: "extresults".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Summary counts for one parse run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct ReceiptData {
    pub results_file: String,
    pub profile: String,

    pub derived_files: u32,
    pub artifacts: u32,
    pub attributes: u32,
    pub reports: u32,

    pub diagnostics_total: u32,
    pub diagnostics_emitted: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,
}

/// Envelope written after a parse run: the findings plus the diagnostics trail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ParseReceipt {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub results: ResultsModel,
    pub diagnostics: Vec<DiagnosticEntry>,
    pub data: ReceiptData,
}
