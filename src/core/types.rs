use serde::{Deserialize, Serialize};

/// Rectangle in data space.
///
/// `top` is the larger Y value; data Y grows upward while pixel Y grows
/// downward. `left <= right` and `bottom <= top` are not enforced, so
/// `width()`/`height()` can be zero or negative while an animation passes
/// through a degenerate state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Viewport {
    /// Navigable range used when no data-derived viewport is available.
    pub const UNIT: Self = Self {
        left: 0.0,
        top: 1.0,
        right: 1.0,
        bottom: 0.0,
    };

    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f32 {
        self.top - self.bottom
    }

    #[must_use]
    pub fn center_x(self) -> f32 {
        (self.left + self.right) * 0.5
    }

    #[must_use]
    pub fn center_y(self) -> f32 {
        (self.top + self.bottom) * 0.5
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.left >= self.right || self.bottom >= self.top
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }

    /// Inclusive containment test for a data point.
    #[must_use]
    pub fn contains(self, x: f32, y: f32) -> bool {
        self.left < self.right
            && self.bottom < self.top
            && x >= self.left
            && x <= self.right
            && y >= self.bottom
            && y <= self.top
    }

    /// Returns `true` when `other` lies entirely inside `self`.
    #[must_use]
    pub fn contains_viewport(self, other: Viewport) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.bottom >= self.bottom
            && other.top <= self.top
    }

    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Shrinks (positive) or grows (negative) every edge toward the center.
    #[must_use]
    pub fn inset(self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.left + dx,
            self.top - dy,
            self.right - dx,
            self.bottom + dy,
        )
    }

    /// Smallest viewport enclosing both operands. Empty operands are ignored.
    #[must_use]
    pub fn union(self, other: Viewport) -> Self {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other;
        }
        Self::new(
            self.left.min(other.left),
            self.top.max(other.top),
            self.right.max(other.right),
            self.bottom.min(other.bottom),
        )
    }

    /// Edge-wise linear interpolation toward `target`.
    #[must_use]
    pub fn lerp(self, target: Viewport, fraction: f32) -> Self {
        Self::new(
            self.left + (target.left - self.left) * fraction,
            self.top + (target.top - self.top) * fraction,
            self.right + (target.right - self.right) * fraction,
            self.bottom + (target.bottom - self.bottom) * fraction,
        )
    }
}
