//! System startup, configuration, and shutdown.

pub mod config;
pub mod form_system;
pub mod telemetry;

pub use config::*;
pub use form_system::*;
pub use telemetry::*;
