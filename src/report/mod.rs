//! Console reporting.
//!
//! Everything the operator reads goes through here; structured logs go to
//! stderr via `tracing` instead.

pub mod console;
pub mod error_report;

pub use console::Console;
pub use error_report::ErrorReport;
