//! Geometry APIs
//!
//! DOMRect for getBoundingClientRect.

/// DOMRect - rectangle geometry
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DOMRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DOMRect {
    /// Create with dimensions
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top edge (same as y)
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Left edge (same as x)
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Same rect moved by `(dx, dy)`
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::from_xywh(self.x + dx, self.y + dy, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = DOMRect::from_xywh(20.0, 30.0, 100.0, 50.0);
        assert_eq!(rect.left(), 20.0);
        assert_eq!(rect.top(), 30.0);
    }

    #[test]
    fn test_translate() {
        let rect = DOMRect::from_xywh(20.0, 20.0, 100.0, 100.0).translate(-5.0, -15.0);
        assert_eq!(rect, DOMRect::from_xywh(15.0, 5.0, 100.0, 100.0));
    }
}
