//! Flash messages: transient notifications that fade out and remove
//! themselves after a fixed delay.

use std::time::{Duration, Instant};

pub const FLASH_VISIBLE_FOR: Duration = Duration::from_secs(5);
pub const FLASH_FADE_FOR: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Warning,
    Error,
}

pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
    shown_at: Instant,
}

impl FlashMessage {
    /// Fully opaque while visible, then a linear fade to zero. The message is
    /// removed from the tray once the fade completes.
    pub fn opacity_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed <= FLASH_VISIBLE_FOR {
            return 1.0;
        }
        let fading = elapsed - FLASH_VISIBLE_FOR;
        (1.0 - fading.as_secs_f32() / FLASH_FADE_FOR.as_secs_f32()).max(0.0)
    }
}

#[derive(Default)]
pub struct FlashTray {
    messages: Vec<FlashMessage>,
}

impl FlashTray {
    pub fn push(&mut self, kind: FlashKind, text: impl Into<String>) {
        self.push_at(kind, text, Instant::now());
    }

    pub fn push_at(&mut self, kind: FlashKind, text: impl Into<String>, shown_at: Instant) {
        let text = text.into();
        tracing::debug!(?kind, %text, "flash message shown");
        self.messages.push(FlashMessage {
            kind,
            text,
            shown_at,
        });
    }

    /// Drop messages whose fade has completed. Tolerates an empty tray.
    pub fn tick(&mut self, now: Instant) {
        self.messages.retain(|message| {
            now.saturating_duration_since(message.shown_at) < FLASH_VISIBLE_FOR + FLASH_FADE_FOR
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlashMessage> {
        self.messages.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_opaque_until_the_delay_elapses() {
        let shown = Instant::now();
        let mut tray = FlashTray::default();
        tray.push_at(FlashKind::Success, "Order placed successfully", shown);

        let message = tray.iter().next().expect("message present");
        assert_eq!(message.opacity_at(shown + Duration::from_secs(4)), 1.0);
        assert_eq!(message.opacity_at(shown + FLASH_VISIBLE_FOR), 1.0);
    }

    #[test]
    fn fades_then_gets_removed() {
        let shown = Instant::now();
        let mut tray = FlashTray::default();
        tray.push_at(FlashKind::Error, "Failed to update status", shown);

        let midway = shown + FLASH_VISIBLE_FOR + FLASH_FADE_FOR / 2;
        let message = tray.iter().next().expect("message present");
        let opacity = message.opacity_at(midway);
        assert!((opacity - 0.5).abs() < 0.01, "got {opacity}");

        tray.tick(midway);
        assert!(!tray.is_empty());
        tray.tick(shown + FLASH_VISIBLE_FOR + FLASH_FADE_FOR);
        assert!(tray.is_empty());
    }

    #[test]
    fn tick_on_empty_tray_is_a_no_op() {
        let mut tray = FlashTray::default();
        tray.tick(Instant::now());
        assert!(tray.is_empty());
    }
}
