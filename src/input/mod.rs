//! Input processing module
//! Handles text extraction from CV files

pub mod text_extractor;
