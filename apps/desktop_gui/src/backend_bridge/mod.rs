//! Bridge between the UI command queue and the POS HTTP client worker.

pub mod commands;
pub mod runtime;
