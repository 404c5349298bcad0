//! The `explain` use case: look up diagnostic kind documentation.

use extresults_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the kind.
    Found(Explanation),
    /// Unknown kind; includes the available labels.
    NotFound {
        identifier: String,
        available_kinds: &'static [&'static str],
    },
}

/// Look up an explanation for a diagnostic kind label.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_kinds: explain::all_kinds(),
        },
    }
}

/// Render an explanation as plain text: underlined headings, prose, then the
/// diagnosed and clean document fragments as fenced XML.
pub fn format_explanation(exp: &Explanation) -> String {
    [
        underline(exp.title, '='),
        format!("{}\n", exp.description),
        underline("Remediation", '-'),
        format!("{}\n", exp.remediation),
        underline("Examples", '-'),
        xml_fragment("Diagnosed", exp.examples.before),
        xml_fragment("Clean", exp.examples.after),
    ]
    .join("\n")
}

fn underline(heading: &str, mark: char) -> String {
    let rule: String = std::iter::repeat_n(mark, heading.chars().count()).collect();
    format!("{heading}\n{rule}")
}

fn xml_fragment(label: &str, fragment: &str) -> String {
    format!("{label}:\n```xml\n{}\n```\n", fragment.trim_end())
}

/// Message for an unrecognized kind label, listing the known ones.
pub fn format_not_found(identifier: &str, kinds: &[&'static str]) -> String {
    let listed: String = kinds.iter().map(|kind| format!("  - {kind}\n")).collect();
    format!("Unknown diagnostic kind: {identifier}\n\nAvailable kinds:\n{listed}")
}
