//! HTTP handlers for the mobiles resource.

pub mod mobile;
pub use mobile::*;
