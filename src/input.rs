//! Keyboard Input
//!
//! Pressed-state tracking for the handful of keys the game cares about,
//! decoupled from any windowing system. The host translates its own key
//! events into [`Key`] values as they arrive; the game loop reads the
//! resulting flags synchronously once per tick.

/// Keys the core responds to, independent of the host's key-code type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A - steer left (negative x)
    A,
    /// D - steer right (positive x)
    D,
    /// W - steer away from the camera (negative z)
    W,
    /// S - steer toward the camera (positive z)
    S,
    /// Space - vertical impulse
    Space,
    /// Catch-all for keys the core ignores
    Unknown,
}

/// Boolean pressed flags for the directional keys and the jump key.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    /// A key held
    pub left: bool,
    /// D key held
    pub right: bool,
    /// W key held
    pub forward: bool,
    /// S key held
    pub backward: bool,
    /// Space held
    pub jump: bool,
}

impl InputState {
    /// All keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release.
    ///
    /// Returns `true` if the key was one the core tracks.
    pub fn handle_key(&mut self, key: Key, pressed: bool) -> bool {
        match key {
            Key::A => {
                self.left = pressed;
                true
            }
            Key::D => {
                self.right = pressed;
                true
            }
            Key::W => {
                self.forward = pressed;
                true
            }
            Key::S => {
                self.backward = pressed;
                true
            }
            Key::Space => {
                self.jump = pressed;
                true
            }
            Key::Unknown => false,
        }
    }

    /// Check whether any tracked key is held.
    pub fn any_pressed(&self) -> bool {
        self.left || self.right || self.forward || self.backward || self.jump
    }

    /// Release everything (e.g. when the host window loses focus).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
