//! Shared utility modules.

pub mod encoding;
