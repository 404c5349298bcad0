//! Explain registry for diagnostic kinds.
//!
//! Maps each kind to a human-readable explanation with remediation guidance for
//! whoever produces the results document.

use crate::DiagnosticKind;

/// Explanation entry for a diagnostic kind.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the kind.
    pub title: &'static str,
    /// What triggers it and what happens to the affected finding.
    pub description: &'static str,
    /// How to fix the document.
    pub remediation: &'static str,
    /// Before/after document fragments.
    pub examples: ExamplePair,
}

/// Before and after document fragments.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Fragment that triggers the diagnostic.
    pub before: &'static str,
    /// Fragment that parses cleanly.
    pub after: &'static str,
}

/// Look up an explanation by diagnostic kind label (e.g. `ambiguity`).
///
/// Returns `None` if the label is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    DiagnosticKind::from_label(identifier).map(explain_kind)
}

/// List all known kind labels.
pub fn all_kinds() -> &'static [&'static str] {
    &[
        "structural_absence",
        "content_emptiness",
        "ambiguity",
        "value_kind_violation",
        "catastrophic",
    ]
}

pub fn explain_kind(kind: DiagnosticKind) -> Explanation {
    match kind {
        DiagnosticKind::StructuralAbsence => Explanation {
            title: "Structural Absence",
            description: "\
A required element or attribute is missing: the `autopsy_results` root, a required
child such as `local_path`, `parent_file`, `source_file` or a report's
`source_module`, or the `type` attribute of an `artifact` or `attribute` element.

The affected unit (the whole document, one item, or one attribute) is dropped and
parsing continues with the next sibling.",
            remediation: "\
Emit every required child element and attribute. Optional elements
(`source_module` under `attribute`, `report_name`) may be omitted entirely.",
            examples: ExamplePair {
                before: r#"<derived_file>
  <local_path>out/carved.bin</local_path>
</derived_file>"#,
                after: r#"<derived_file>
  <local_path>out/carved.bin</local_path>
  <parent_file>/img/disk.raw</parent_file>
</derived_file>"#,
            },
        },
        DiagnosticKind::ContentEmptiness => Explanation {
            title: "Empty Element Content",
            description: "\
An element is present but has no text. This is reported even for optional
elements; the value is treated as absent.",
            remediation: "\
Either write the content or leave the element out. An empty `value` drops the
attribute; an empty required child drops the item.",
            examples: ExamplePair {
                before: r#"<report>
  <local_path>reports/summary.html</local_path>
  <source_module>scanner</source_module>
  <report_name></report_name>
</report>"#,
                after: r#"<report>
  <local_path>reports/summary.html</local_path>
  <source_module>scanner</source_module>
</report>"#,
            },
        },
        DiagnosticKind::Ambiguity => Explanation {
            title: "Ambiguous Repeated Element",
            description: "\
Several elements with the same tag were found where exactly one is expected. The
first one in document order is used and the rest are ignored.",
            remediation: "Emit the element once per parent.",
            examples: ExamplePair {
                before: r#"<report>
  <local_path>a.html</local_path>
  <local_path>b.html</local_path>
  <source_module>scanner</source_module>
</report>"#,
                after: r#"<report>
  <local_path>a.html</local_path>
  <source_module>scanner</source_module>
</report>"#,
            },
        },
        DiagnosticKind::ValueKindViolation => Explanation {
            title: "Unrecognized Value Type",
            description: "\
A `value` element declares a `type` outside `text`, `int32`, `int64`, `double`.
The attribute is dropped; there is no silent fallback to `text`.",
            remediation: "\
Use one of the four value types, or omit the `type` attribute to mean `text`.",
            examples: ExamplePair {
                before: r#"<attribute type="size">
  <value type="integer">42</value>
</attribute>"#,
                after: r#"<attribute type="size">
  <value type="int32">42</value>
</attribute>"#,
            },
        },
        DiagnosticKind::Catastrophic => Explanation {
            title: "Unreadable Document",
            description: "\
The document could not be read or is not well-formed XML. Nothing after the
failure point was parsed; the result may be empty or partial.",
            remediation: "\
Check that the file exists, is readable and is well-formed XML. The diagnostic's
cause carries the underlying error.",
            examples: ExamplePair {
                before: r#"<autopsy_results>
  <reports>
</autopsy_results>"#,
                after: r#"<autopsy_results>
  <reports/>
</autopsy_results>"#,
            },
        },
    }
}
