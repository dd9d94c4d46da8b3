//! Vision request handling for the timetable relay.
//!
//! This module turns an inbound analyze-image request into the Gemini
//! `generateContent` payload: the fixed timetable prompt followed by the
//! caller's image as inline data. The image itself is never decoded or
//! inspected.
//!
//! # Submodules
//!
//! - `models`: Inbound request shape and its defaults.
//! - `prompt`: The fixed extraction instruction sent with every image.
//! - `translation`: Request parsing and payload construction.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod models;
pub mod prompt;
pub mod translation;

pub use models::{AnalyzeImageRequest, DEFAULT_MIME_TYPE};
pub use prompt::TIMETABLE_PROMPT;
pub use translation::{build_generate_request, parse_analyze_request};
