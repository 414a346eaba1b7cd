//! Core module - batch loading, coverage and naming

mod coverage;
mod loader;
mod naming;
mod types;

pub(crate) use coverage::DateRange;
pub(crate) use loader::HeaderLoader;
pub(crate) use types::HeaderSummary;
