use crate::layout::Rect;

/// Margins applied to the viewport before intersecting, in pixels.
/// Positive values shrink the root box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RootMargin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl RootMargin {
    pub const fn bottom(px: u32) -> Self {
        Self {
            top: 0,
            right: 0,
            bottom: px,
            left: 0,
        }
    }
}

/// Whether `target` touches `viewport` after applying `margin`.
/// Edges count: a target sitting exactly on the root box's border
/// intersects, as does an empty target inside it.
pub fn is_intersecting(target: Rect, viewport: Rect, margin: RootMargin) -> bool {
    let root = viewport.shrink(margin.top, margin.right, margin.bottom, margin.left);

    target.x <= root.right()
        && target.right() >= root.x
        && target.top() <= root.bottom()
        && target.bottom() >= root.top()
}
