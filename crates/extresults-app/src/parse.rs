//! The `parse` use case: resolve config, load and parse the results file, produce a receipt.

use anyhow::Context;
use camino::Utf8Path;
use extresults_loader::XmlLoader;
use extresults_parser::{DocumentLoader, ResultsParser};
use extresults_settings::{FailOn, Overrides, ResolvedConfig};
use extresults_types::{
    DataSourceId, DiagnosticEntry, DiagnosticKind, ParseReceipt, ReceiptData, SCHEMA_RECEIPT_V1,
    ToolMeta, Verdict,
};
use time::OffsetDateTime;

/// Input for the parse use case.
#[derive(Clone, Debug)]
pub struct ParseInput<'a> {
    /// Results document to parse.
    pub results_file: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub receipt: ParseReceipt,
    pub resolved_config: ResolvedConfig,
}

/// Run the parse use case against files on disk.
pub fn run_parse(input: ParseInput<'_>) -> anyhow::Result<ParseOutput> {
    run_parse_with(input, XmlLoader::new())
}

/// Run the parse use case with a caller-supplied loader.
pub fn run_parse_with<L: DocumentLoader>(
    input: ParseInput<'_>,
    loader: L,
) -> anyhow::Result<ParseOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = if input.config_text.trim().is_empty() {
        extresults_settings::ExtResultsConfigV1::default()
    } else {
        extresults_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved =
        extresults_settings::resolve_config(cfg, input.overrides).context("resolve config")?;
    let effective = &resolved.effective;

    let data_source = effective
        .data_source
        .clone()
        .or_else(|| input.results_file.file_stem().map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string());

    let mut parser = ResultsParser::new(
        loader,
        DataSourceId::new(data_source),
        input.results_file.to_owned(),
    );
    let results = parser.parse();
    let mut diagnostics = parser.diagnostics();

    let verdict = compute_verdict(&diagnostics, effective.fail_on);
    let total = diagnostics.len();
    let truncated_reason = if total > effective.max_diagnostics {
        diagnostics.truncate(effective.max_diagnostics);
        Some(format!(
            "diagnostics truncated to {} of {}",
            effective.max_diagnostics, total
        ))
    } else {
        None
    };

    tracing::info!(
        results_file = %input.results_file,
        profile = %effective.profile,
        diagnostics = total,
        "parse finished"
    );

    let data = ReceiptData {
        results_file: input.results_file.to_string(),
        profile: effective.profile.clone(),
        derived_files: count(results.derived_files.len()),
        artifacts: count(results.artifacts.len()),
        attributes: count(results.attribute_count()),
        reports: count(results.reports.len()),
        diagnostics_total: count(total),
        diagnostics_emitted: count(diagnostics.len()),
        truncated_reason,
    };

    let receipt = ParseReceipt {
        schema: SCHEMA_RECEIPT_V1.to_string(),
        tool: ToolMeta::current(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        results,
        diagnostics,
        data,
    };

    Ok(ParseOutput {
        receipt,
        resolved_config: resolved,
    })
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Verdict for a diagnostics list under a fail policy. No diagnostics always passes.
pub fn compute_verdict(diagnostics: &[DiagnosticEntry], fail_on: FailOn) -> Verdict {
    if diagnostics.is_empty() {
        return Verdict::Pass;
    }
    let fails = match fail_on {
        FailOn::Any => true,
        FailOn::Catastrophic => diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::Catastrophic),
        FailOn::Never => false,
    };
    if fails { Verdict::Fail } else { Verdict::Warn }
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
