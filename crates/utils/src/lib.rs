mod bytes;
pub mod datetime;
pub mod media_types;
pub mod theme;

pub use bytes::format_bytes;
