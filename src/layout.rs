use raylib::core::collision::check_collision_point_circle;
use raylib::prelude::*;
use crate::constants::*;

/// A clickable part of the widget.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Control {
    Previous,
    Next,
    Indicator(usize),
}

/// Screen geometry of the widget for a given window size and slide count.
#[derive(Debug, Clone)]
pub struct Layout {
    pub viewport: Rectangle,
    pub previous: Rectangle,
    pub next: Rectangle,
    pub indicators: Vec<Vector2>,
}

impl Layout {
    pub fn compute(screen_width: f32, screen_height: f32, slide_count: usize) -> Layout {
        let viewport = Rectangle::new(
            VIEWPORT_MARGIN,
            VIEWPORT_MARGIN,
            (screen_width - 2.0 * VIEWPORT_MARGIN).max(0.0),
            (screen_height - 2.0 * VIEWPORT_MARGIN).max(0.0),
        );

        // Arrows hug the left and right edges, vertically centered
        let arrow_y = viewport.y + (viewport.height - ARROW_HEIGHT) * 0.5;
        let previous = Rectangle::new(viewport.x, arrow_y, ARROW_WIDTH, ARROW_HEIGHT);
        let next = Rectangle::new(
            viewport.x + viewport.width - ARROW_WIDTH,
            arrow_y,
            ARROW_WIDTH,
            ARROW_HEIGHT,
        );

        // Indicator row is centered around the viewport's horizontal middle
        let row_width = INDICATOR_SPACING * slide_count.saturating_sub(1) as f32;
        let first_x = viewport.x + viewport.width * 0.5 - row_width * 0.5;
        let row_y = viewport.y + viewport.height - INDICATOR_BOTTOM_OFFSET;
        let indicators = (0..slide_count)
            .map(|i| Vector2::new(first_x + INDICATOR_SPACING * i as f32, row_y))
            .collect();

        Layout { viewport, previous, next, indicators }
    }

    /// Whether the pointer is over the widget region.
    pub fn contains(&self, point: Vector2) -> bool {
        self.viewport.check_collision_point_rec(point)
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Control> {
        if !self.contains(point) {
            return None;
        }
        if self.previous.check_collision_point_rec(point) {
            return Some(Control::Previous);
        }
        if self.next.check_collision_point_rec(point) {
            return Some(Control::Next);
        }
        // Slightly generous hit radius so small dots stay easy to click
        let hit_radius = INDICATOR_RADIUS * 1.5;
        self.indicators
            .iter()
            .position(|center| check_collision_point_circle(point, *center, hit_radius))
            .map(Control::Indicator)
    }

    /// Destination rectangle for an image, centered and scaled down to fit.
    pub fn fit(&self, image_width: f32, image_height: f32) -> Rectangle {
        if image_width <= 0.0 || image_height <= 0.0 {
            return Rectangle::new(self.viewport.x, self.viewport.y, 0.0, 0.0);
        }
        let max_width = self.viewport.width * SLIDE_FILL_RATIO;
        let max_height = self.viewport.height * SLIDE_FILL_RATIO;
        let scale = (max_width / image_width).min(max_height / image_height).min(1.0);

        let width = image_width * scale;
        let height = image_height * scale;
        Rectangle::new(
            self.viewport.x + (self.viewport.width - width) * 0.5,
            self.viewport.y + (self.viewport.height - height) * 0.5,
            width,
            height,
        )
    }
}
