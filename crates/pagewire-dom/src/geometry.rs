//! Geometry
//!
//! DOMRect in CSS pixels, used for viewport and element layout boxes.

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

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Intersection rect; `None` when the rects are disjoint.
    ///
    /// Touching edges produce a zero-area rect.
    pub fn intersection(&self, other: &DOMRect) -> Option<DOMRect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right < x || bottom < y {
            return None;
        }
        Some(DOMRect::from_xywh(x, y, right - x, bottom - y))
    }

    /// Grow (positive) or shrink (negative) each edge independently
    pub fn expand(&self, top: f64, right: f64, bottom: f64, left: f64) -> DOMRect {
        DOMRect::from_xywh(
            self.x - left,
            self.y - top,
            self.width + left + right,
            self.height + top + bottom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection() {
        let viewport = DOMRect::from_xywh(0.0, 0.0, 800.0, 600.0);
        let section = DOMRect::from_xywh(0.0, 500.0, 800.0, 400.0);

        let hit = viewport.intersection(&section).unwrap();
        assert_eq!(hit.height, 100.0);
        assert_eq!(hit.area(), 80_000.0);
    }

    #[test]
    fn test_disjoint() {
        let a = DOMRect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = DOMRect::from_xywh(0.0, 20.0, 10.0, 10.0);
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_touching_edges() {
        let a = DOMRect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = DOMRect::from_xywh(0.0, 10.0, 10.0, 10.0);
        let hit = a.intersection(&b).unwrap();
        assert_eq!(hit.area(), 0.0);
    }

    #[test]
    fn test_expand_negative() {
        let viewport = DOMRect::from_xywh(0.0, 0.0, 800.0, 600.0);
        let shrunk = viewport.expand(-90.0, -90.0, -90.0, -90.0);
        assert_eq!(shrunk, DOMRect::from_xywh(90.0, 90.0, 620.0, 420.0));
    }
}
