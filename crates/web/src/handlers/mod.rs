//! HTTP handlers.

pub mod records;
