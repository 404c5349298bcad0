//! Pure extraction of external results (no IO).
//!
//! Input: a [`DocumentLoader`] that yields the document tree.
//! Output: a [`ResultsModel`](extresults_types::ResultsModel) plus the diagnostics
//! recorded while building it.

#![forbid(unsafe_code)]

pub mod loader;
pub mod lookup;
pub mod walk;

mod parser;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use loader::DocumentLoader;
pub use lookup::ORIGIN;
pub use parser::ResultsParser;
