//! CV analyzer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod scoring;
pub mod session;

pub use config::Config;
pub use error::{CvAnalyzerError, Result};
