//! Client side of the brand analysis service: uploads a curator list and
//! renders the returned report.

pub mod client;
pub mod error;
pub mod report;

pub use client::AnalysisClient;
pub use error::AnalysisError;
pub use report::{escape_html, render_report_html, report_title};
