//! Edge-triggered button state
//!
//! Each logical button has a counter driven by raw key events:
//! - `0`: released
//! - `1`: pressed, not yet consumed by [`InputState::key_press`]
//! - `2+`: held (consumed, or advanced by key-repeat events)
//!
//! Key-down increments, key-up resets to zero. Poll `key_press` once per frame
//! per button to see each physical press exactly once.

use serde::{Deserialize, Serialize};

/// Logical buttons of the virtual console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    Button1 = 4,
    Button2 = 5,
    Select = 6,
    Start = 7,
}

impl Button {
    pub const COUNT: usize = 8;

    pub const ALL: [Button; Self::COUNT] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Button1,
        Button::Button2,
        Button::Select,
        Button::Start,
    ];

    /// Map a raw key name (`KeyboardEvent.key`) to a button
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "Up" => Some(Button::Up),
            "ArrowDown" | "Down" => Some(Button::Down),
            "ArrowLeft" | "Left" => Some(Button::Left),
            "ArrowRight" | "Right" => Some(Button::Right),
            "a" | "A" => Some(Button::Button1),
            "s" | "S" => Some(Button::Button2),
            "Control" => Some(Button::Start),
            "Alt" => Some(Button::Select),
            _ => None,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    counters: [u32; Button::COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key-down event (including key-repeat) for `button`
    pub fn key_down(&mut self, button: Button) {
        let counter = &mut self.counters[button.index()];
        *counter = counter.saturating_add(1);
    }

    /// Register a key-up event for `button`
    pub fn key_up(&mut self, button: Button) {
        self.counters[button.index()] = 0;
    }

    /// Feed a raw key-down event; returns whether the key is mapped
    pub fn handle_key_down(&mut self, key: &str) -> bool {
        match Button::from_key(key) {
            Some(button) => {
                self.key_down(button);
                true
            }
            None => false,
        }
    }

    /// Feed a raw key-up event; returns whether the key is mapped
    pub fn handle_key_up(&mut self, key: &str) -> bool {
        match Button::from_key(key) {
            Some(button) => {
                self.key_up(button);
                true
            }
            None => false,
        }
    }

    /// Whether the button is currently down (just pressed or held)
    pub fn key_pressed(&self, button: Button) -> bool {
        self.counters[button.index()] > 0
    }

    /// One-shot read: true only the first time it is polled after a press
    pub fn key_press(&mut self, button: Button) -> bool {
        let counter = &mut self.counters[button.index()];
        if *counter == 1 {
            *counter = 2;
            return true;
        }
        false
    }

    pub fn counter(&self, button: Button) -> u32 {
        self.counters[button.index()]
    }

    /// Release every button
    pub fn reset(&mut self) {
        self.counters = [0; Button::COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_consume_release_cycle() {
        let mut input = InputState::new();

        input.key_down(Button::Up);
        assert_eq!(input.counter(Button::Up), 1);

        assert!(input.key_press(Button::Up));
        assert_eq!(input.counter(Button::Up), 2);

        // Same frame, no new event
        assert!(!input.key_press(Button::Up));
        assert!(input.key_pressed(Button::Up));

        input.key_up(Button::Up);
        assert_eq!(input.counter(Button::Up), 0);
        assert!(!input.key_pressed(Button::Up));
    }

    #[test]
    fn test_key_repeat_skips_unpolled_press() {
        let mut input = InputState::new();
        input.key_down(Button::Button1);
        input.key_down(Button::Button1);
        assert_eq!(input.counter(Button::Button1), 2);
        assert!(!input.key_press(Button::Button1));
        assert!(input.key_pressed(Button::Button1));

        input.key_up(Button::Button1);
        input.key_down(Button::Button1);
        assert!(input.key_press(Button::Button1));
    }

    #[test]
    fn test_repeat_after_consume_does_not_refire() {
        let mut input = InputState::new();
        input.key_down(Button::Start);
        assert!(input.key_press(Button::Start));
        input.key_down(Button::Start);
        input.key_down(Button::Start);
        assert!(!input.key_press(Button::Start));
        assert_eq!(input.counter(Button::Start), 4);
    }

    #[test]
    fn test_buttons_are_independent() {
        let mut input = InputState::new();
        input.key_down(Button::Left);
        assert!(input.key_pressed(Button::Left));
        for button in Button::ALL.into_iter().filter(|&b| b != Button::Left) {
            assert!(!input.key_pressed(button));
            assert!(!input.key_press(button));
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Button::from_key("ArrowUp"), Some(Button::Up));
        assert_eq!(Button::from_key("Down"), Some(Button::Down));
        assert_eq!(Button::from_key("ArrowLeft"), Some(Button::Left));
        assert_eq!(Button::from_key("Right"), Some(Button::Right));
        assert_eq!(Button::from_key("a"), Some(Button::Button1));
        assert_eq!(Button::from_key("A"), Some(Button::Button1));
        assert_eq!(Button::from_key("s"), Some(Button::Button2));
        assert_eq!(Button::from_key("S"), Some(Button::Button2));
        assert_eq!(Button::from_key("Control"), Some(Button::Start));
        assert_eq!(Button::from_key("Alt"), Some(Button::Select));
        assert_eq!(Button::from_key("Enter"), None);
        assert_eq!(Button::from_key("Unidentified"), None);
    }

    #[test]
    fn test_raw_events() {
        let mut input = InputState::new();
        assert!(input.handle_key_down("ArrowRight"));
        assert!(!input.handle_key_down("q"));
        assert!(input.key_pressed(Button::Right));

        assert!(input.handle_key_up("ArrowRight"));
        assert!(!input.handle_key_up("q"));
        assert!(!input.key_pressed(Button::Right));
    }

    #[test]
    fn test_reset() {
        let mut input = InputState::new();
        for button in Button::ALL {
            input.key_down(button);
        }
        input.reset();
        assert_eq!(input, InputState::new());
    }

    #[test]
    fn test_counter_saturates() {
        let mut input = InputState::new();
        input.counters[Button::Select.index()] = u32::MAX;
        input.key_down(Button::Select);
        assert_eq!(input.counter(Button::Select), u32::MAX);
    }
}
