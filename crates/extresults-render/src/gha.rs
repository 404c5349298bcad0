use crate::{RenderableLevel, RenderableReport};

/// Render diagnostics as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},title={kind}::{message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for d in &report.diagnostics {
        let level = match d.level {
            RenderableLevel::Error => "error",
            RenderableLevel::Warning => "warning",
        };

        let text = match &d.cause {
            Some(cause) => format!("{}: {}", d.message, cause),
            None => d.message.clone(),
        };

        out.push(format!(
            "::{} file={},title={}::{}",
            level,
            escape_property(&report.results_file),
            escape_property(&d.kind),
            escape_data(&text)
        ));
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
