/// Page-space rectangle in CSS pixels. `y` grows downwards from the top of
/// the document, independent of the current scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    pub const fn top(&self) -> u32 {
        self.y
    }

    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn shrink(self, top: u32, right: u32, bottom: u32, left: u32) -> Self {
        let x = self.x.saturating_add(left);
        let y = self.y.saturating_add(top);
        let width = self.width.saturating_sub(left + right);
        let height = self.height.saturating_sub(top + bottom);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Vertical center of this rectangle.
    pub const fn center_y(&self) -> u32 {
        self.y + self.height / 2
    }
}
