//! Controller layer: UI events, form/view state transitions, and command orchestration.

pub mod events;
pub mod flash;
pub mod form;
pub mod menu;
pub mod orchestration;
pub mod tabs;
