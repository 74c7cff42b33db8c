//! Output module
//! Chart rendering, console/JSON formatting, and file exports

pub mod chart;
pub mod formatter;
pub mod report;
pub mod spreadsheet;
