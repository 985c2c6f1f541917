//! Rendering of a strategy document: the platform-gated view model, the
//! plain-text report, and the CSV export.

pub mod csv_report;
pub mod error;
pub mod section;
pub mod text;
pub mod view;

pub use csv_report::{generate_report_csv, report_filename};
pub use error::ReportError;
pub use section::Section;
pub use text::{format_full_report, format_section};
pub use view::ReportView;

#[cfg(test)]
mod test_fixtures;
