//! Axum-based HTTP server implementation for the timetable relay.
//!
//! This module sets up the HTTP server, configures routes and middleware, and
//! relays analyze-image requests to the Google Gemini API.
//!
//! # Components
//!
//! - `handlers`: Implementation of individual endpoints (analyze-image, health, metrics).
//! - `middleware`: Request ID tracking and CORS.
//! - `routes`: The main router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState};
