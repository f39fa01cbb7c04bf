//! Diagnostic formatting utilities

pub mod format;

pub use format::SolveReport;
