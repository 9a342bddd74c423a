pub mod error;
pub mod launcher;
pub mod platform;
pub mod runtime;
