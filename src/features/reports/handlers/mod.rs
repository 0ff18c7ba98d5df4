pub mod report_handler;

pub use report_handler::{create_report, list_reports};
