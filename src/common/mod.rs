//! Common utility modules for shared functionality across the tools.

pub mod fs;
