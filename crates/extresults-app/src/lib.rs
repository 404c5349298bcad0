//! Use case orchestration for extresults.
//!
//! This crate is the application layer: use cases that coordinate the parser,
//! loader, settings and render layers. The CLI crate depends on this; it only
//! handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod parse;
mod receipt;
mod render;

pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use parse::{
    ParseInput, ParseOutput, compute_verdict, run_parse, run_parse_with, verdict_exit_code,
};
pub use receipt::{
    TOOL_ORIGIN, parse_receipt_json, runtime_error_receipt, serialize_receipt, to_renderable,
};
pub use render::{read_receipt, render_annotations, render_markdown, write_receipt, write_text};
