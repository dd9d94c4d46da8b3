//! Data models for the upstream Google Gemini API.
//!
//! The relay only ever builds one kind of request (`GenerateContentRequest`)
//! and never looks inside the response, which is carried as an
//! [`OpaquePayload`].

// Author: kelexine (https://github.com/kelexine)

pub mod gemini;

pub use gemini::{Content, GenerateContentRequest, InlineData, OpaquePayload, Part};
