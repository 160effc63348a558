//! UI layer for the POS desktop app: app shell, tab panels, and widgets.

pub mod app;

pub use app::{PersistedPosSettings, PosGuiApp, StartupConfig, SETTINGS_STORAGE_KEY};
