//! Report execution engine.

pub mod report_runner;

pub use report_runner::{run_report, FailurePolicy};
