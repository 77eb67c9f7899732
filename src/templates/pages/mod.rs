pub mod report;

pub use report::{error_page, report_page, ReportVm};
