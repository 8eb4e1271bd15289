//! Axis-aligned rectangles and the overlap tests used for level collision.

use glam::Vec2;

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(position: Vec2, width: f32, height: f32) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Returns true when the two rectangles touch or overlap on both axes.
///
/// `object1` is the moving body and `object2` the static one; touching
/// edges count as overlapping.
pub fn collision(object1: &Aabb, object2: &Aabb) -> bool {
    object1.bottom() >= object2.top()
        && object1.top() <= object2.bottom()
        && overlaps_horizontally(object1, object2)
}

/// One-way platform test: only the bottom edge of `object1` is considered vertically.
///
/// A body rising through the platform from below never has its bottom edge inside the
/// platform's span until it is already above it, so only landings are caught.
pub fn platform_collision(object1: &Aabb, object2: &Aabb) -> bool {
    object1.bottom() >= object2.top()
        && object1.bottom() <= object2.bottom()
        && overlaps_horizontally(object1, object2)
}

fn overlaps_horizontally(object1: &Aabb, object2: &Aabb) -> bool {
    object1.left() <= object2.right() && object1.right() >= object2.left()
}
