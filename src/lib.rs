/// Basic application code
pub mod app;
/// REST clients for outside services
pub mod client;
/// Controllers for HTTP endpoints
pub mod controller;
/// Contact notification dispatch
pub mod dispatch;
/// Domain objects
pub mod domain;
/// Repositories
pub mod repo;
/// Application settings
pub mod settings;
/// Application telemetry for tracing and logging
pub mod telemetry;
