//! Input intent sampling
//!
//! Device-neutral: keyboards, pointer-hold buttons, and touch controls all
//! funnel into the same four buttons. Direction buttons are level-triggered
//! (set on press, cleared on release or cancel); fire and restart are
//! one-shot events, delivered exactly once by [`InputState::sample`].

use crate::sim::TickInput;

/// The abstract controls the sim cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Fire,
    Restart,
}

/// What the host reads once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    /// Fire was pressed since the last sample
    pub fire: bool,
    /// Restart was pressed since the last sample
    pub restart: bool,
}

impl InputSnapshot {
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
        }
    }
}

/// Accumulates raw press/release events between frames.
/// Most recent state wins; there is no event queue.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left_held: bool,
    right_held: bool,
    fire_queued: bool,
    restart_queued: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) {
        match button {
            Button::Left => self.left_held = true,
            Button::Right => self.right_held = true,
            Button::Fire => self.fire_queued = true,
            Button::Restart => self.restart_queued = true,
        }
    }

    pub fn release(&mut self, button: Button) {
        match button {
            Button::Left => self.left_held = false,
            Button::Right => self.right_held = false,
            // One-shots are consumed by sampling, not by release
            Button::Fire | Button::Restart => {}
        }
    }

    /// Drop all held directions. Hosts call this on pointer cancel/leave
    /// and on window blur so a missed release cannot wedge a button down.
    pub fn cancel_all(&mut self) {
        self.left_held = false;
        self.right_held = false;
    }

    /// Read the current intent. Held flags persist; fire/restart events
    /// are taken and will not be reported again.
    pub fn sample(&mut self) -> InputSnapshot {
        InputSnapshot {
            left: self.left_held,
            right: self.right_held,
            fire: std::mem::take(&mut self.fire_queued),
            restart: std::mem::take(&mut self.restart_queued),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_semantics() {
        let mut input = InputState::new();
        input.press(Button::Left);
        assert!(input.sample().left);
        // Held across frames until released
        assert!(input.sample().left);
        input.release(Button::Left);
        assert!(!input.sample().left);
    }

    #[test]
    fn test_one_shot_consumed_once() {
        let mut input = InputState::new();
        input.press(Button::Fire);
        assert!(input.sample().fire);
        assert!(!input.sample().fire);

        // Two presses within one frame still deliver a single event
        input.press(Button::Restart);
        input.press(Button::Restart);
        assert!(input.sample().restart);
        assert!(!input.sample().restart);
    }

    #[test]
    fn test_release_does_not_eat_queued_fire() {
        let mut input = InputState::new();
        input.press(Button::Fire);
        input.release(Button::Fire);
        assert!(input.sample().fire);
    }

    #[test]
    fn test_cancel_all_clears_held_only() {
        let mut input = InputState::new();
        input.press(Button::Right);
        input.press(Button::Fire);
        input.cancel_all();
        let snapshot = input.sample();
        assert!(!snapshot.right);
        assert!(snapshot.fire);
    }

    #[test]
    fn test_most_recent_state_wins() {
        let mut input = InputState::new();
        input.press(Button::Left);
        input.press(Button::Right);
        input.release(Button::Left);
        let snapshot = input.sample();
        assert!(!snapshot.left);
        assert!(snapshot.right);
    }
}
