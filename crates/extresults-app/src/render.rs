//! Render use cases: markdown and GitHub annotations from in-memory receipts.

use anyhow::Context;
use camino::Utf8Path;
use extresults_render::RenderableReport;
use extresults_types::ParseReceipt;

pub fn render_markdown(report: &RenderableReport) -> String {
    extresults_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    extresults_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

/// Write text to `path`, creating parent directories.
pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
        }
    }
    std::fs::write(path, text).with_context(|| format!("write {path}"))
}

pub fn write_receipt(path: &Utf8Path, receipt: &ParseReceipt) -> anyhow::Result<()> {
    let bytes = crate::serialize_receipt(receipt)?;
    let text = String::from_utf8(bytes).context("receipt is not utf-8")?;
    write_text(path, &text)
}

pub fn read_receipt(path: &Utf8Path) -> anyhow::Result<ParseReceipt> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    crate::parse_receipt_json(&text).with_context(|| format!("parse {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{runtime_error_receipt, to_renderable};

    #[test]
    fn render_annotations_respects_max() {
        let mut receipt = runtime_error_receipt("results.xml", "one");
        receipt.diagnostics.push(receipt.diagnostics[0].clone());
        let annotations = render_annotations(&to_renderable(&receipt), 1);
        assert_eq!(annotations.len(), 1);
    }

    #[test]
    fn render_markdown_smoke() {
        let receipt = runtime_error_receipt("results.xml", "boom");
        let markdown = render_markdown(&to_renderable(&receipt));
        assert!(markdown.contains("Verdict: **FAIL**"));
    }

    #[test]
    fn receipt_survives_disk_round_trip() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        let path = root.join("nested/dir/receipt.json");

        let receipt = runtime_error_receipt("results.xml", "boom");
        write_receipt(&path, &receipt).expect("write");
        assert_eq!(read_receipt(&path).expect("read"), receipt);
    }
}
