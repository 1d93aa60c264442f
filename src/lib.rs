//! envguard: heat index and air quality hazard engine, with the HTTP and
//! monitoring services built around it.

pub mod config;
pub mod core;
pub mod hazards;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
