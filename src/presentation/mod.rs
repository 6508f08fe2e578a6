//! Plain-text rendering of the dashboard. No state lives here.

mod form_view;
mod header;
mod page;

pub use form_view::*;
pub use header::*;
pub use page::*;
