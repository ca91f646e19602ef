//! Mouse Events
//!
//! MouseEvent payload with button state and coordinates.

/// Mouse event payload
#[derive(Debug, Clone, Default)]
pub struct MouseEvent {
    pub button: MouseButton,
    /// Bitmask of pressed buttons
    pub buttons: u16,

    // Coordinates
    pub client_x: f64,
    pub client_y: f64,
    pub page_x: f64,
    pub page_y: f64,
    pub screen_x: f64,
    pub screen_y: f64,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    /// Primary button (usually left)
    #[default]
    Primary,
    /// Auxiliary button (usually middle/wheel)
    Auxiliary,
    /// Secondary button (usually right)
    Secondary,
    /// Fourth button (usually back)
    Fourth,
    /// Fifth button (usually forward)
    Fifth,
    /// No button
    None,
}

impl MouseButton {
    /// Get bit for buttons bitmask
    pub fn bit(&self) -> u16 {
        match self {
            Self::Primary => 1,
            Self::Auxiliary => 4,
            Self::Secondary => 2,
            Self::Fourth => 8,
            Self::Fifth => 16,
            Self::None => 0,
        }
    }

    pub fn is_primary(&self) -> bool {
        *self == Self::Primary
    }
}

impl MouseEvent {
    /// Pointer at client position `(x, y)`; page and screen mirror it
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            client_x: x,
            client_y: y,
            page_x: x,
            page_y: y,
            screen_x: x,
            screen_y: y,
            ..Default::default()
        }
    }

    /// Pointer at `(x, y)` with `button` held
    pub fn pressed(button: MouseButton, x: f64, y: f64) -> Self {
        Self {
            buttons: button.bit(),
            ..Self::at(x, y).with_button(button)
        }
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_event() {
        let event = MouseEvent::pressed(MouseButton::Secondary, 100.0, 200.0);
        assert_eq!(event.button, MouseButton::Secondary);
        assert_eq!(event.buttons, 2);
        assert_eq!(event.client_x, 100.0);
        assert_eq!(event.client_y, 200.0);
    }

    #[test]
    fn test_button_bits() {
        assert_eq!(MouseButton::Primary.bit(), 1);
        assert_eq!(MouseButton::Auxiliary.bit(), 4);
        assert_eq!(MouseButton::None.bit(), 0);
        assert!(MouseButton::Primary.is_primary());
        assert!(!MouseButton::Auxiliary.is_primary());
    }
}
