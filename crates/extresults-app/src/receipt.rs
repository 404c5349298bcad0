use anyhow::Context;
use extresults_render::{
    RenderableCounts, RenderableData, RenderableDiagnostic, RenderableLevel, RenderableReport,
    RenderableVerdictStatus,
};
use extresults_types::{
    DataSourceId, DiagnosticEntry, DiagnosticKind, ParseReceipt, ReceiptData, ResultsModel,
    SCHEMA_RECEIPT_V1, ToolMeta, Verdict,
};
use time::OffsetDateTime;

/// Origin recorded on diagnostics produced by the tool itself rather than the parser.
pub const TOOL_ORIGIN: &str = "extresults";

pub fn parse_receipt_json(text: &str) -> anyhow::Result<ParseReceipt> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse receipt json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_RECEIPT_V1 {
        anyhow::bail!("unknown receipt schema: {schema} (expected {SCHEMA_RECEIPT_V1})");
    }

    serde_json::from_value(value).context("parse extresults receipt")
}

pub fn serialize_receipt(receipt: &ParseReceipt) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(receipt).context("serialize receipt")
}

/// Receipt written when the tool itself fails before a parse could complete.
pub fn runtime_error_receipt(results_file: &str, message: &str) -> ParseReceipt {
    let now = OffsetDateTime::now_utc();
    ParseReceipt {
        schema: SCHEMA_RECEIPT_V1.to_string(),
        tool: ToolMeta::current(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        results: ResultsModel::new(DataSourceId::new("unknown")),
        diagnostics: vec![DiagnosticEntry::new(
            TOOL_ORIGIN,
            DiagnosticKind::Catastrophic,
            message,
        )],
        data: ReceiptData {
            results_file: results_file.to_string(),
            profile: "unknown".to_string(),
            diagnostics_total: 1,
            diagnostics_emitted: 1,
            ..ReceiptData::default()
        },
    }
}

/// Catastrophic diagnostics render as errors; everything else as warnings.
pub fn to_renderable(receipt: &ParseReceipt) -> RenderableReport {
    RenderableReport {
        verdict: match receipt.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        results_file: receipt.data.results_file.clone(),
        counts: RenderableCounts {
            derived_files: receipt.data.derived_files,
            artifacts: receipt.data.artifacts,
            attributes: receipt.data.attributes,
            reports: receipt.data.reports,
        },
        diagnostics: receipt.diagnostics.iter().map(renderable_diagnostic).collect(),
        data: RenderableData {
            diagnostics_emitted: receipt.data.diagnostics_emitted,
            diagnostics_total: receipt.data.diagnostics_total,
            truncated_reason: receipt.data.truncated_reason.clone(),
        },
    }
}

fn renderable_diagnostic(d: &DiagnosticEntry) -> RenderableDiagnostic {
    RenderableDiagnostic {
        level: match d.kind {
            DiagnosticKind::Catastrophic => RenderableLevel::Error,
            _ => RenderableLevel::Warning,
        },
        kind: d.kind.as_str().to_string(),
        message: d.message.clone(),
        cause: d.cause.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_error_receipt_fails_with_one_diagnostic() {
        let receipt = runtime_error_receipt("results.xml", "read config: permission denied");
        assert_eq!(receipt.verdict, Verdict::Fail);
        assert_eq!(receipt.diagnostics.len(), 1);
        assert_eq!(receipt.diagnostics[0].origin, TOOL_ORIGIN);
        assert_eq!(receipt.data.diagnostics_total, 1);
    }

    #[test]
    fn serialized_receipt_parses_back() {
        let receipt = runtime_error_receipt("results.xml", "boom");
        let bytes = serialize_receipt(&receipt).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        let back = parse_receipt_json(&text).expect("parse");
        assert_eq!(back, receipt);
    }

    #[test]
    fn foreign_schema_is_rejected() {
        let err = parse_receipt_json(r#"{"schema":"other.report.v1"}"#).expect_err("should fail");
        assert!(err.to_string().contains("unknown receipt schema"));
        assert!(parse_receipt_json("not json").is_err());
    }

    #[test]
    fn renderable_maps_levels_and_counts() {
        let mut receipt = runtime_error_receipt("results.xml", "boom");
        receipt.diagnostics.push(DiagnosticEntry::new(
            "ResultsParser",
            DiagnosticKind::Ambiguity,
            "dup",
        ));
        receipt.data.reports = 4;

        let r = to_renderable(&receipt);
        assert_eq!(r.verdict, RenderableVerdictStatus::Fail);
        assert_eq!(r.counts.reports, 4);
        assert_eq!(r.diagnostics[0].level, RenderableLevel::Error);
        assert_eq!(r.diagnostics[1].level, RenderableLevel::Warning);
        assert_eq!(r.diagnostics[1].kind, "ambiguity");
    }
}
