/// A rectangle in virtual-screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rect from Win32-style left/top/right/bottom edges.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Top-left position that puts a `width`×`height` window flush
    /// against this rect's bottom-right corner.
    pub fn anchor_bottom_right(&self, width: i32, height: i32) -> (i32, i32) {
        (self.right() - width, self.bottom() - height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_to_work_area_corner() {
        // Arrange: 1080p monitor with a 40px taskbar at the bottom.
        let work = Rect::new(0, 0, 1920, 1040);

        // Act
        let pos = work.anchor_bottom_right(150, 150);

        // Assert
        assert_eq!(pos, (1770, 890));
    }

    #[test]
    fn anchors_on_monitor_left_of_primary() {
        let work = Rect::from_edges(-2560, 0, 0, 1400);
        assert_eq!(work.anchor_bottom_right(150, 150), (-150, 1250));
    }

    #[test]
    fn from_edges_computes_size() {
        let r = Rect::from_edges(10, 20, 110, 220);
        assert_eq!(r, Rect::new(10, 20, 100, 200));
        assert_eq!(r.right(), 110);
        assert_eq!(r.bottom(), 220);
    }
}
