//! Command implementations, one per binary

pub mod download;
pub mod example;
pub mod font;
