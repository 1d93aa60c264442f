//! Core application primitives (HTTP server, scheduler)

pub mod http;
pub mod scheduler;

pub use http::*;
pub use scheduler::*;
