//! Local development server for the STEP to DXF web viewer.
//!
//! Serves the viewer's static files over plain HTTP with an explicit
//! start/stop lifecycle, so callers (and tests) control shutdown instead of
//! relying on process signals.

pub mod server;

pub use server::{DevServer, RunningServer, ServerConfig, ServerError};
