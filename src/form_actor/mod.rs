//! The form state controller: record ownership, validation and submission.

pub mod messages;
pub mod service;
mod validation;

pub use messages::*;
pub use service::*;
pub use validation::*;
