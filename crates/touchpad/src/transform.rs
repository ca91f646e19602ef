//! Coordinate transform
//!
//! Client position → fraction of a reference rect. No clamping: positions
//! outside the rect give values below 0 or above 1. A zero-sized rect gives
//! infinite or NaN components.

use touchpad_dom::{DOMRect, MouseEvent, Touch};

/// Anything with a viewport position
pub trait ClientPosition {
    fn client_x(&self) -> f64;
    fn client_y(&self) -> f64;
}

impl ClientPosition for MouseEvent {
    fn client_x(&self) -> f64 {
        self.client_x
    }

    fn client_y(&self) -> f64 {
        self.client_y
    }
}

impl ClientPosition for Touch {
    fn client_x(&self) -> f64 {
        self.client_x
    }

    fn client_y(&self) -> f64 {
        self.client_y
    }
}

/// Position relative to the width and height of an element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RelativePosition {
    /// Horizontal position as a fraction of the element width
    pub x: f64,
    /// Vertical position as a fraction of the element height
    pub y: f64,
}

impl RelativePosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Locate `position` within `rect`
pub fn relative(position: &impl ClientPosition, rect: &DOMRect) -> RelativePosition {
    RelativePosition {
        x: (position.client_x() - rect.left()) / rect.width,
        y: (position.client_y() - rect.top()) / rect.height,
    }
}
