//! REST endpoint handlers organized by resource.

pub mod greeting;
pub mod time;
