use crate::{RenderableLevel, RenderableReport, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# External results report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Results file: `{}`\n- Verdict: **{}**\n- Diagnostics: {} (emitted) / {} (total)\n\n",
        report.results_file, verdict, report.data.diagnostics_emitted, report.data.diagnostics_total
    ));

    let c = &report.counts;
    out.push_str("| Derived files | Artifacts | Attributes | Reports |\n");
    out.push_str("|---:|---:|---:|---:|\n");
    out.push_str(&format!(
        "| {} | {} | {} | {} |\n\n",
        c.derived_files, c.artifacts, c.attributes, c.reports
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.diagnostics.is_empty() {
        out.push_str("No diagnostics.\n");
        return out;
    }

    out.push_str("## Diagnostics\n\n");

    for d in &report.diagnostics {
        let level = match d.level {
            RenderableLevel::Warning => "WARN",
            RenderableLevel::Error => "ERROR",
        };
        out.push_str(&format!("- [{}] `{}`: {}\n", level, d.kind, d.message));
        if let Some(cause) = &d.cause {
            out.push_str(&format!("  - cause: {}\n", cause));
        }
    }

    out
}
