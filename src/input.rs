//! Input mapping
//!
//! Turns raw keyboard state and touch gestures into per-tick [`InputFlags`].
//! Touch: holding anywhere fires the engines, dragging sideways past a small
//! dead zone steers.

use crate::consts::TOUCH_DEAD_ZONE;
use crate::settings::InputMode;
use crate::sim::InputFlags;

/// Held keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    pub space: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyboardState {
    pub fn flags(&self) -> InputFlags {
        InputFlags {
            thrust: self.space,
            steer_left: self.left,
            steer_right: self.right,
        }
    }
}

/// Single-finger drag tracker
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchSteering {
    dragging: bool,
    start_x: f32,
    current_x: f32,
}

impl TouchSteering {
    pub fn pointer_down(&mut self, x: f32) {
        self.dragging = true;
        self.start_x = x;
        self.current_x = x;
    }

    pub fn pointer_move(&mut self, x: f32) {
        if self.dragging {
            self.current_x = x;
        }
    }

    /// Finger lifted or left the play area
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn drag_distance(&self) -> f32 {
        if self.dragging {
            self.current_x - self.start_x
        } else {
            0.0
        }
    }

    pub fn flags(&self) -> InputFlags {
        if !self.dragging {
            return InputFlags::default();
        }
        let d = self.drag_distance();
        InputFlags {
            thrust: true,
            steer_left: d < -TOUCH_DEAD_ZONE,
            steer_right: d > TOUCH_DEAD_ZONE,
        }
    }
}

/// Combined input sources for the active input mode
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub mode: InputMode,
    pub keyboard: KeyboardState,
    pub touch: TouchSteering,
}

impl InputState {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Keyboard always counts; touch only in touch mode
    pub fn flags(&self) -> InputFlags {
        let keys = self.keyboard.flags();
        match self.mode {
            InputMode::Keyboard => keys,
            InputMode::Touch => {
                let touch = self.touch.flags();
                InputFlags {
                    thrust: keys.thrust || touch.thrust,
                    steer_left: keys.steer_left || touch.steer_left,
                    steer_right: keys.steer_right || touch.steer_right,
                }
            }
        }
    }

    /// Drop all held input (e.g. on session start)
    pub fn reset(&mut self) {
        self.keyboard = KeyboardState::default();
        self.touch = TouchSteering::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_hold_thrusts() {
        let mut touch = TouchSteering::default();
        touch.pointer_down(100.0);
        assert_eq!(
            touch.flags(),
            InputFlags {
                thrust: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_touch_dead_zone() {
        let mut touch = TouchSteering::default();
        touch.pointer_down(100.0);
        touch.pointer_move(120.0);
        assert!(!touch.flags().is_steering());
        touch.pointer_move(121.0);
        assert!(touch.flags().steer_right);
        touch.pointer_move(79.0);
        let flags = touch.flags();
        assert!(flags.steer_left && !flags.steer_right);
        touch.pointer_move(95.0);
        assert!(!touch.flags().is_steering());
    }

    #[test]
    fn test_touch_release_clears_everything() {
        let mut touch = TouchSteering::default();
        touch.pointer_down(100.0);
        touch.pointer_move(200.0);
        touch.pointer_up();
        assert_eq!(touch.flags(), InputFlags::default());
        // Moves without a press are ignored
        touch.pointer_move(300.0);
        assert_eq!(touch.drag_distance(), 0.0);
    }

    #[test]
    fn test_touch_ignored_in_keyboard_mode() {
        let mut input = InputState::new(InputMode::Keyboard);
        input.touch.pointer_down(10.0);
        assert_eq!(input.flags(), InputFlags::default());

        input.keyboard.left = true;
        assert!(input.flags().steer_left);
    }

    #[test]
    fn test_touch_and_keys_combine() {
        let mut input = InputState::new(InputMode::Touch);
        input.keyboard.right = true;
        input.touch.pointer_down(10.0);
        let flags = input.flags();
        assert!(flags.thrust && flags.steer_right);

        input.reset();
        assert_eq!(input.flags(), InputFlags::default());
    }
}
