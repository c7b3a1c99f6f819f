use raylib::prelude::*;

const ARROW_WIDTH: f32 = 56.0;
const ARROW_HEIGHT: f32 = 96.0;
const DOT_SIZE: f32 = 14.0;
const DOT_GAP: f32 = 14.0;
const DOT_MARGIN: f32 = 36.0;

/// Screen-space hit areas of the carousel for the current window size.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub region: Rectangle,
    pub prev: Rectangle,
    pub next: Rectangle,
    pub cta: Rectangle,
    pub dots: Vec<Rectangle>,
}

impl Chrome {
    pub fn new(width: i32, height: i32, count: usize) -> Self {
        let w = width as f32;
        let h = height as f32;
        let arrow_y = (h - ARROW_HEIGHT) * 0.5;

        let strip_width = count as f32 * DOT_SIZE + count.saturating_sub(1) as f32 * DOT_GAP;
        let strip_x = (w - strip_width) * 0.5;
        let dots = (0..count)
            .map(|i| {
                Rectangle::new(
                    strip_x + i as f32 * (DOT_SIZE + DOT_GAP),
                    h - DOT_MARGIN - DOT_SIZE,
                    DOT_SIZE,
                    DOT_SIZE,
                )
            })
            .collect();

        Self {
            region: Rectangle::new(0.0, 0.0, w, h),
            prev: Rectangle::new(0.0, arrow_y, ARROW_WIDTH, ARROW_HEIGHT),
            next: Rectangle::new(w - ARROW_WIDTH, arrow_y, ARROW_WIDTH, ARROW_HEIGHT),
            cta: Rectangle::new(60.0, h * 0.55 + 96.0, 180.0, 44.0),
            dots,
        }
    }

    pub fn dot_at(&self, point: Vector2) -> Option<usize> {
        self.dots.iter().position(|dot| dot.check_collision_point_rec(point))
    }

    /// Whether the pointer hovers the carousel. The last reported position
    /// is stale once the cursor has left the window (or before it entered).
    pub fn hovered(&self, point: Vector2, cursor_on_screen: bool) -> bool {
        cursor_on_screen && self.region.check_collision_point_rec(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_are_centered_and_hit_tested() {
        let chrome = Chrome::new(1000, 600, 3);
        assert_eq!(chrome.dots.len(), 3);

        let middle = &chrome.dots[1];
        assert_eq!(middle.x + middle.width * 0.5, 500.0);
        assert_eq!(chrome.dot_at(Vector2::new(500.0, middle.y + 1.0)), Some(1));
        assert_eq!(chrome.dot_at(Vector2::new(500.0, 10.0)), None);
    }

    #[test]
    fn off_window_cursor_never_hovers() {
        let chrome = Chrome::new(800, 400, 4);
        let origin = Vector2::new(0.0, 0.0);
        assert!(!chrome.hovered(origin, false));
        assert!(!chrome.hovered(Vector2::new(400.0, 200.0), false));
        assert!(chrome.hovered(Vector2::new(400.0, 200.0), true));
        assert!(!chrome.hovered(Vector2::new(900.0, 200.0), true));
    }

    #[test]
    fn arrows_sit_on_the_edges() {
        let chrome = Chrome::new(800, 400, 4);
        assert!(chrome.prev.check_collision_point_rec(Vector2::new(5.0, 200.0)));
        assert!(chrome.next.check_collision_point_rec(Vector2::new(795.0, 200.0)));
    }
}
