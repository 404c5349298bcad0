//! Stable DTOs used across the extresults workspace.
//!
//! This crate is intentionally boring:
//! - the results model (derived files, artifacts, attributes, reports)
//! - diagnostic entries and their kinds
//! - the owned document tree loaders hand to the parser
//! - tag/attribute names and the receipt envelope
//! - explain registry for diagnostic kinds

#![forbid(unsafe_code)]

pub mod diagnostic;
pub mod explain;
pub mod model;
pub mod names;
pub mod receipt;
pub mod tree;

pub use diagnostic::{DiagnosticEntry, DiagnosticKind};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use model::{
    Artifact, Attribute, DataSourceId, DerivedFile, Report, ResultsModel, UnknownValueKind,
    ValueKind,
};
pub use names::{AttributeName, RESULTS_SCHEMA, TagName};
pub use receipt::{ParseReceipt, ReceiptData, SCHEMA_RECEIPT_V1, ToolMeta, Verdict};
pub use tree::{Element, Node};
