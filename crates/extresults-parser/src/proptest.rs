//! Property-based tests for the parser.
//!
//! These tests use proptest to verify invariants around:
//! - Well-formed documents yielding exact counts and no diagnostics
//! - Dropped items never affecting their siblings
//! - Repeated parses producing identical results

use crate::parser::ResultsParser;
use crate::test_support::{StubLoader, artifact, attribute, derived_file, report, root, value};
use extresults_types::{DataSourceId, DiagnosticKind, Element};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9_./-]{1,24}").expect("valid regex")
}

fn arb_kind_label() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("text")),
        Just(Some("int32")),
        Just(Some("int64")),
        Just(Some("double")),
    ]
}

fn arb_derived_file() -> impl Strategy<Value = Element> {
    (arb_text(), arb_text()).prop_map(|(local, parent)| derived_file(&local, &parent))
}

fn arb_attribute() -> impl Strategy<Value = Element> {
    (arb_text(), arb_text(), arb_kind_label(), prop::option::of(arb_text())).prop_map(
        |(ty, val, kind, module)| attribute(&ty, value(&val, kind), module.as_deref()),
    )
}

fn arb_artifact() -> impl Strategy<Value = (Element, usize)> {
    (arb_text(), arb_text(), prop::collection::vec(arb_attribute(), 0..4)).prop_map(
        |(ty, source, attrs)| {
            let count = attrs.len();
            let elem = attrs
                .into_iter()
                .fold(artifact(&ty, &source), |a, attr| a.with_child(attr));
            (elem, count)
        },
    )
}

fn arb_report() -> impl Strategy<Value = Element> {
    (arb_text(), arb_text(), prop::option::of(arb_text()))
        .prop_map(|(path, module, name)| report(&path, &module, name.as_deref()))
}

fn list(tag: &str, items: Vec<Element>) -> Element {
    items
        .into_iter()
        .fold(Element::new(tag), |l, item| l.with_child(item))
}

fn parser_for(doc: Element) -> ResultsParser<StubLoader> {
    ResultsParser::new(StubLoader::tree(doc), DataSourceId::new("ds"), "results.xml")
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn well_formed_documents_parse_cleanly(
        derived in prop::collection::vec(arb_derived_file(), 0..6),
        artifacts in prop::collection::vec(arb_artifact(), 0..5),
        reports in prop::collection::vec(arb_report(), 0..4),
    ) {
        let derived_count = derived.len();
        let report_count = reports.len();
        let artifact_count = artifacts.len();
        let attribute_count: usize = artifacts.iter().map(|(_, n)| n).sum();

        let doc = root()
            .with_child(list("derived_files", derived))
            .with_child(list("artifacts", artifacts.into_iter().map(|(a, _)| a).collect()))
            .with_child(list("reports", reports));

        let mut parser = parser_for(doc);
        let model = parser.parse();

        prop_assert!(parser.diagnostics().is_empty());
        prop_assert_eq!(model.derived_files.len(), derived_count);
        prop_assert_eq!(model.artifacts.len(), artifact_count);
        prop_assert_eq!(model.attribute_count(), attribute_count);
        prop_assert_eq!(model.reports.len(), report_count);
    }

    #[test]
    fn each_broken_derived_file_costs_one_entry(
        good in prop::collection::vec(arb_derived_file(), 0..5),
        broken in 0usize..5,
    ) {
        let good_count = good.len();
        let mut items = good;
        items.extend((0..broken).map(|_| Element::new("derived_file")));

        let mut parser = parser_for(root().with_child(list("derived_files", items)));
        let model = parser.parse();
        let diagnostics = parser.diagnostics();

        prop_assert_eq!(model.derived_files.len(), good_count);
        prop_assert_eq!(diagnostics.len(), broken);
        prop_assert!(diagnostics.iter().all(|d| d.kind == DiagnosticKind::StructuralAbsence));
    }

    #[test]
    fn repeated_parse_is_identical(
        derived in prop::collection::vec(arb_derived_file(), 0..4),
        reports in prop::collection::vec(arb_report(), 0..4),
        broken_reports in 0usize..3,
    ) {
        let mut report_items = reports;
        report_items.extend((0..broken_reports).map(|_| Element::new("report")));
        let doc = root()
            .with_child(list("derived_files", derived))
            .with_child(list("reports", report_items));

        let mut parser = parser_for(doc);
        let first = (parser.parse(), parser.diagnostics());
        let second = (parser.parse(), parser.diagnostics());
        prop_assert_eq!(first, second);
    }
}
