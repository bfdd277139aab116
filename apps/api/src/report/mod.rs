// Report Assembler: scores, flags and source records → one candidate report.

pub mod assembler;
pub mod models;

pub use assembler::{assemble_report, ReportSources};
pub use models::{Report, ReportMeta};
