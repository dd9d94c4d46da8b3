// timetable-relay - Gemini relay for timetable screenshot analysis
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod gemini;
pub mod metrics;
pub mod models;
pub mod server;
pub mod utils;
pub mod vision;
