mod report;
mod seed;

pub use report::{NewReport, Report, ReportCategory, ReportSeverity};
pub use seed::demo_reports;
