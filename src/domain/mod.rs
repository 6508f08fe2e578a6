pub mod notice;
pub mod request;

pub use notice::*;
pub use request::*;
