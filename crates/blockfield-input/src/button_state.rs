//! Per-frame state of a single key or mouse button.

/// Where a button is in its press/release cycle.
///
/// The `Just*` states last for exactly one frame so edge-triggered actions
/// (clicks, toggles) fire once per physical press:
///
/// ```text
/// Released --press--> JustPressed --end_frame--> Pressed
///    ^                                              |
///    +---end_frame--- JustReleased <----release-----+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    JustPressed,
    Pressed,
    JustReleased,
    #[default]
    Released,
}

impl ButtonState {
    /// Held down, whether or not the press started this frame.
    #[inline]
    #[must_use]
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::JustPressed | Self::Pressed)
    }

    /// Went down this frame.
    #[inline]
    #[must_use]
    pub const fn is_just_pressed(self) -> bool {
        matches!(self, Self::JustPressed)
    }

    /// Came up this frame.
    #[inline]
    #[must_use]
    pub const fn is_just_released(self) -> bool {
        matches!(self, Self::JustReleased)
    }

    /// Record a press. Key repeat while held does not restart the edge.
    #[inline]
    pub fn press(&mut self) {
        if !self.is_pressed() {
            *self = Self::JustPressed;
        }
    }

    /// Record a release.
    #[inline]
    pub fn release(&mut self) {
        if self.is_pressed() {
            *self = Self::JustReleased;
        }
    }

    /// Settle one-frame edges into their steady state.
    #[inline]
    pub fn end_frame(&mut self) {
        *self = match *self {
            Self::JustPressed | Self::Pressed => Self::Pressed,
            Self::JustReleased | Self::Released => Self::Released,
        };
    }
}
