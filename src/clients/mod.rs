mod macros;
mod form_client;

pub use form_client::*;
