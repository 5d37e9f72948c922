//! Request extractors that reject with the `{message}` envelope.

pub mod id;
pub mod json;

pub use id::MobileId;
pub use json::JsonBody;
