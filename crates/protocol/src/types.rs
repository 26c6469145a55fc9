use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in page coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Area, or 0 for degenerate (negative or zero sized) rects.
    pub fn area(&self) -> f64 {
        self.w.max(0.0) * self.h.max(0.0)
    }

    /// Overlapping region, `None` when the rects do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// The visible window of the page.
///
/// `x`/`y` are the scroll offsets; `width`/`height` the size of the
/// scrollable viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Fraction of `target`'s area currently inside the viewport, in `[0, 1]`.
    pub fn visible_ratio(&self, target: &Rect) -> f64 {
        let area = target.area();
        if area <= 0.0 {
            return 0.0;
        }
        self.rect()
            .intersect(target)
            .map_or(0.0, |overlap| (overlap.area() / area).clamp(0.0, 1.0))
    }

    /// Distance from the viewport's top edge to `target`'s top edge.
    /// Negative once the target has scrolled past the top.
    pub fn relative_top(&self, target: &Rect) -> f64 {
        target.top() - self.y
    }
}
