//! Held-key auto-repeat for terminal environments.
//!
//! OS-level key repeat varies wildly across terminals, and many never emit
//! key release events at all. This tracks held movement/soft-drop keys,
//! repeats them after a short delay, and auto-releases when no press has
//! been seen for a timeout.

use std::time::Instant;

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::types::GameAction;

/// Delay before a held key starts repeating (milliseconds).
const REPEAT_DELAY_MS: u32 = 170;
/// Interval between repeats once started (milliseconds).
const REPEAT_RATE_MS: u32 = 50;
// Without release events, a short timeout prevents a single tap from
// turning into a sustained "held" state.
const RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone, Copy, Default)]
struct HeldKey {
    held: bool,
    delay_timer: u32,
    repeat_acc: u32,
}

impl HeldKey {
    fn press(&mut self) -> bool {
        if self.held {
            return false;
        }
        *self = Self {
            held: true,
            ..Self::default()
        };
        true
    }

    fn release(&mut self) {
        *self = Self::default();
    }

    /// Advance timers and return how many repeats fired this tick.
    fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.held {
            return 0;
        }

        let before = self.delay_timer;
        self.delay_timer += elapsed_ms;
        if self.delay_timer < REPEAT_DELAY_MS {
            return 0;
        }

        // Only the time past the delay counts toward repeats.
        self.repeat_acc += if before < REPEAT_DELAY_MS {
            self.delay_timer - REPEAT_DELAY_MS
        } else {
            elapsed_ms
        };

        let fired = self.repeat_acc / REPEAT_RATE_MS;
        self.repeat_acc %= REPEAT_RATE_MS;
        fired
    }
}

/// Tracks held movement keys and emits repeated actions on each tick.
#[derive(Debug, Clone)]
pub struct KeyRepeat {
    left: HeldKey,
    right: HeldKey,
    down: HeldKey,
    last_press: Instant,
    release_timeout_ms: u32,
}

impl KeyRepeat {
    pub fn new() -> Self {
        Self {
            left: HeldKey::default(),
            right: HeldKey::default(),
            down: HeldKey::default(),
            last_press: Instant::now(),
            release_timeout_ms: RELEASE_TIMEOUT_MS,
        }
    }

    #[cfg(test)]
    fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    /// Whether this key is one the repeater owns.
    pub fn handles(&self, code: KeyCode) -> bool {
        Self::slot_action(code).is_some()
    }

    fn slot_action(code: KeyCode) -> Option<GameAction> {
        match code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
            | KeyCode::Char('A') => Some(GameAction::MoveLeft),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
            | KeyCode::Char('D') => Some(GameAction::MoveRight),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
            | KeyCode::Char('S') => Some(GameAction::SoftDrop),
            _ => None,
        }
    }

    /// Register a key press. Returns the action to apply immediately on a
    /// fresh press, or None if the key is already held or not tracked.
    pub fn handle_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let action = Self::slot_action(code)?;
        self.last_press = Instant::now();

        let fresh = match action {
            GameAction::MoveLeft => {
                self.right.release();
                self.left.press()
            }
            GameAction::MoveRight => {
                self.left.release();
                self.right.press()
            }
            GameAction::SoftDrop => self.down.press(),
            _ => false,
        };

        fresh.then_some(action)
    }

    /// Register a key release (terminals that support it).
    pub fn handle_release(&mut self, code: KeyCode) {
        match Self::slot_action(code) {
            Some(GameAction::MoveLeft) => self.left.release(),
            Some(GameAction::MoveRight) => self.right.release(),
            Some(GameAction::SoftDrop) => self.down.release(),
            _ => {}
        }
    }

    /// Advance by one UI tick, producing any repeat actions due.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 16> {
        let mut actions = ArrayVec::new();

        // Auto-release for terminals without release events.
        if self.last_press.elapsed().as_millis() as u32 > self.release_timeout_ms {
            self.left.release();
            self.right.release();
            self.down.release();
            return actions;
        }

        for _ in 0..self.left.advance(elapsed_ms) {
            let _ = actions.try_push(GameAction::MoveLeft);
        }
        for _ in 0..self.right.advance(elapsed_ms) {
            let _ = actions.try_push(GameAction::MoveRight);
        }
        for _ in 0..self.down.advance(elapsed_ms) {
            let _ = actions.try_push(GameAction::SoftDrop);
        }

        actions
    }
}

impl Default for KeyRepeat {
    fn default() -> Self {
        Self::new()
    }
}
