//! Geometric primitives for highlight regions.
//!
//! Rectangles here use a top-left origin (y grows downward), matching the
//! reading order the pipeline sorts by. PDF user space is bottom-left origin,
//! so conversions take the page height.

/// Minimum width/height of a highlight region, in PDF units.
///
/// Some producers emit degenerate (zero-area) quads for short highlights;
/// flooring both dimensions keeps the region usable for text lookup.
const MIN_REGION_EXTENT: f32 = 4.0;

/// A rectangle with top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X coordinate of top-left corner
    pub x: f32,
    /// Y coordinate of top-left corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if this rectangle contains a point (edges inclusive).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }
}

/// Compute the region rectangle covered by one highlight quad.
///
/// A quad is 8 values: four `(x, y)` corner points in PDF user space
/// (bottom-left origin). The result is the axis-aligned bounding box of the
/// four corners, converted to top-left origin via `y' = page_height - max_y`,
/// with width and height each floored at [`MIN_REGION_EXTENT`].
///
/// # Examples
///
/// ```
/// use quizmark::geometry::quad_bounds;
///
/// // A 100x20 quad with its top edge 750 units up a 792-unit page.
/// let quad = [72.0, 730.0, 172.0, 730.0, 72.0, 750.0, 172.0, 750.0];
/// let rect = quad_bounds(&quad, 792.0);
/// assert_eq!(rect.x, 72.0);
/// assert_eq!(rect.y, 42.0);
/// assert_eq!(rect.width, 100.0);
/// assert_eq!(rect.height, 20.0);
/// ```
pub fn quad_bounds(quad: &[f32; 8], page_height: f32) -> Rect {
    let xs = [quad[0], quad[2], quad[4], quad[6]];
    let ys = [quad[1], quad[3], quad[5], quad[7]];

    let min_x = xs.iter().copied().fold(f32::INFINITY, f32::min);
    let max_x = xs.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let min_y = ys.iter().copied().fold(f32::INFINITY, f32::min);
    let max_y = ys.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    Rect::new(
        min_x,
        page_height - max_y,
        (max_x - min_x).max(MIN_REGION_EXTENT),
        (max_y - min_y).max(MIN_REGION_EXTENT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 70.0);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains(50.0, 50.0));
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(100.0, 100.0));
        assert!(!r.contains(150.0, 50.0));
        assert!(!r.contains(50.0, -1.0));
    }

    #[test]
    fn test_quad_bounds_flips_to_top_origin() {
        let quad = [72.0, 730.0, 172.0, 730.0, 72.0, 750.0, 172.0, 750.0];
        let r = quad_bounds(&quad, 792.0);
        assert_eq!(r.x, 72.0);
        assert_eq!(r.y, 42.0);
        assert_eq!(r.width, 100.0);
        assert_eq!(r.height, 20.0);
    }

    #[test]
    fn test_quad_bounds_corner_order_irrelevant() {
        // Same quad with corners shuffled.
        let quad = [172.0, 750.0, 72.0, 730.0, 172.0, 730.0, 72.0, 750.0];
        let r = quad_bounds(&quad, 792.0);
        assert_eq!(r, Rect::new(72.0, 42.0, 100.0, 20.0));
    }

    #[test]
    fn test_quad_bounds_floors_degenerate_extent() {
        // Zero-area quad: all four corners identical.
        let quad = [100.0, 700.0, 100.0, 700.0, 100.0, 700.0, 100.0, 700.0];
        let r = quad_bounds(&quad, 792.0);
        assert_eq!(r.width, 4.0);
        assert_eq!(r.height, 4.0);
        assert_eq!(r.x, 100.0);
        assert_eq!(r.y, 92.0);
    }

    #[test]
    fn test_quad_bounds_floors_thin_line() {
        // 1-unit-tall quad keeps its width but gets the height floor.
        let quad = [10.0, 500.0, 60.0, 500.0, 10.0, 501.0, 60.0, 501.0];
        let r = quad_bounds(&quad, 792.0);
        assert_eq!(r.width, 50.0);
        assert_eq!(r.height, 4.0);
    }
}
