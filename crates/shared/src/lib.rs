//! Shared domain types for the restaurant POS front-end.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod money;
pub mod timefmt;
