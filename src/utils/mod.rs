//! Utility functions and helpers for the timetable relay.
//!
//! This module provides cross-cutting concerns like structured logging and
//! credential sanitization.
//!
//! # Submodules
//!
//! - `logging`: Tracing and logging initialization with security filters.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
