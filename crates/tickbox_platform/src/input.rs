//! Input event types for touch and mouse

/// Input events delivered to controls, in window coordinates
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse event
    Mouse(MouseEvent),
    /// Touch event (mobile/touchscreen)
    Touch(TouchEvent),
}

// ============================================================================
// Mouse Events
// ============================================================================

/// Mouse events
#[derive(Clone, Debug, PartialEq)]
pub enum MouseEvent {
    /// Mouse moved to position
    Moved { x: f32, y: f32 },
    /// Mouse button pressed
    ButtonPressed { button: MouseButton, x: f32, y: f32 },
    /// Mouse button released
    ButtonReleased { button: MouseButton, x: f32, y: f32 },
}

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Touch id assigned to the left mouse button when it is treated as a finger
pub const MOUSE_TOUCH_ID: u64 = u64::MAX;

impl MouseEvent {
    /// Map a left-button press/release to the equivalent touch
    ///
    /// Desktop hosts use this so controls only need to understand touches.
    pub fn as_touch(&self) -> Option<TouchEvent> {
        match *self {
            MouseEvent::ButtonPressed {
                button: MouseButton::Left,
                x,
                y,
            } => Some(TouchEvent::Started {
                id: MOUSE_TOUCH_ID,
                x,
                y,
                pressure: 1.0,
            }),
            MouseEvent::ButtonReleased {
                button: MouseButton::Left,
                x,
                y,
            } => Some(TouchEvent::Ended {
                id: MOUSE_TOUCH_ID,
                x,
                y,
            }),
            MouseEvent::Moved { x, y } => Some(TouchEvent::Moved {
                id: MOUSE_TOUCH_ID,
                x,
                y,
                pressure: 1.0,
            }),
            _ => None,
        }
    }
}

// ============================================================================
// Touch Events
// ============================================================================

/// Touch events
#[derive(Clone, Debug, PartialEq)]
pub enum TouchEvent {
    /// A touch started
    Started {
        /// Unique identifier for this touch
        id: u64,
        x: f32,
        y: f32,
        /// Touch pressure (0.0 - 1.0)
        pressure: f32,
    },
    /// A touch moved
    Moved {
        id: u64,
        x: f32,
        y: f32,
        pressure: f32,
    },
    /// A touch ended
    Ended { id: u64, x: f32, y: f32 },
    /// A touch was cancelled by the system
    Cancelled { id: u64 },
}

impl TouchEvent {
    /// Get the touch ID
    pub fn id(&self) -> u64 {
        match self {
            TouchEvent::Started { id, .. } => *id,
            TouchEvent::Moved { id, .. } => *id,
            TouchEvent::Ended { id, .. } => *id,
            TouchEvent::Cancelled { id } => *id,
        }
    }

    /// Get the position (returns None for Cancelled)
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            TouchEvent::Started { x, y, .. } => Some((*x, *y)),
            TouchEvent::Moved { x, y, .. } => Some((*x, *y)),
            TouchEvent::Ended { x, y, .. } => Some((*x, *y)),
            TouchEvent::Cancelled { .. } => None,
        }
    }
}

impl InputEvent {
    /// The touch this event represents, if any
    pub fn as_touch(&self) -> Option<TouchEvent> {
        match self {
            InputEvent::Touch(touch) => Some(touch.clone()),
            InputEvent::Mouse(mouse) => mouse.as_touch(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_click_maps_to_touch() {
        let press = MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            x: 4.0,
            y: 5.0,
        };
        let touch = press.as_touch().unwrap();
        assert_eq!(touch.id(), MOUSE_TOUCH_ID);
        assert_eq!(touch.position(), Some((4.0, 5.0)));
    }

    #[test]
    fn test_right_click_is_ignored() {
        let press = MouseEvent::ButtonPressed {
            button: MouseButton::Right,
            x: 4.0,
            y: 5.0,
        };
        assert!(InputEvent::Mouse(press).as_touch().is_none());
    }

    #[test]
    fn test_cancelled_has_no_position() {
        assert_eq!(TouchEvent::Cancelled { id: 3 }.position(), None);
    }
}
