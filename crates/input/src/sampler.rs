//! Held-key sampler for terminal environments.
//!
//! Collects key press/release events between ticks and produces one
//! [`TickInput`] per tick. Direction keys are levels (held or not); rotate is an
//! edge that is reported once and then consumed.
//!
//! Terminals that never emit release events are handled with a timeout: a key
//! that has not been pressed or auto-repeated for `key_release_timeout_ms` of
//! sampled time counts as released. Time is taken from the `elapsed_ms` passed
//! to [`KeySampler::sample`], never from a clock, so sampling stays
//! deterministic.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{map_key, Intent};
use crate::types::TickInput;

// A short timeout keeps a single tap from turning into a sustained hold.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Level state of one direction key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct HeldKey {
    held: bool,
    since_refresh_ms: u32,
}

impl HeldKey {
    fn press(&mut self) {
        self.held = true;
        self.since_refresh_ms = 0;
    }

    fn release(&mut self) {
        self.held = false;
        self.since_refresh_ms = 0;
    }

    fn age(&mut self, elapsed_ms: u32, timeout_ms: u32) {
        if !self.held {
            return;
        }
        self.since_refresh_ms = self.since_refresh_ms.saturating_add(elapsed_ms);
        if self.since_refresh_ms > timeout_ms {
            self.release();
        }
    }
}

/// Turns key events into per-tick intents.
#[derive(Debug, Clone)]
pub struct KeySampler {
    left: HeldKey,
    right: HeldKey,
    down: HeldKey,
    rotate_pending: bool,
    /// None when the terminal reports releases
    key_release_timeout_ms: Option<u32>,
}

impl KeySampler {
    /// Sampler for terminals without release events
    pub fn new() -> Self {
        Self {
            left: HeldKey::default(),
            right: HeldKey::default(),
            down: HeldKey::default(),
            rotate_pending: false,
            key_release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    /// Sampler that trusts explicit release events and never times keys out
    pub fn with_release_events() -> Self {
        Self {
            key_release_timeout_ms: None,
            ..Self::new()
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = Some(timeout_ms);
        self
    }

    pub fn key_release_timeout_ms(&self) -> Option<u32> {
        self.key_release_timeout_ms
    }

    fn key(&mut self, intent: Intent) -> Option<&mut HeldKey> {
        match intent {
            Intent::Left => Some(&mut self.left),
            Intent::Right => Some(&mut self.right),
            Intent::Down => Some(&mut self.down),
            Intent::Rotate => None,
        }
    }

    /// Record a key event. Returns the intent it mapped to, if any.
    pub fn handle_key_event(&mut self, event: KeyEvent) -> Option<Intent> {
        let intent = map_key(event.code)?;
        match event.kind {
            KeyEventKind::Press => {
                if intent == Intent::Rotate {
                    self.rotate_pending = true;
                } else if let Some(key) = self.key(intent) {
                    key.press();
                }
            }
            // Auto-repeat refreshes the hold but is not a new rotate edge.
            KeyEventKind::Repeat => {
                if let Some(key) = self.key(intent) {
                    key.press();
                }
            }
            KeyEventKind::Release => {
                if let Some(key) = self.key(intent) {
                    key.release();
                }
            }
        }
        Some(intent)
    }

    /// Forget everything held or pending
    pub fn clear(&mut self) {
        self.left.release();
        self.right.release();
        self.down.release();
        self.rotate_pending = false;
    }

    /// Produce the intents for a tick of `elapsed_ms` and consume the rotate edge.
    pub fn sample(&mut self, elapsed_ms: u32) -> TickInput {
        if let Some(timeout) = self.key_release_timeout_ms {
            self.left.age(elapsed_ms, timeout);
            self.right.age(elapsed_ms, timeout);
            self.down.age(elapsed_ms, timeout);
        }

        TickInput {
            left: self.left.held,
            right: self.right.held,
            down: self.down.held,
            rotate: std::mem::take(&mut self.rotate_pending),
        }
    }
}

impl Default for KeySampler {
    fn default() -> Self {
        Self::new()
    }
}
