//! Geometric primitives for flowchart layout.
//!
//! Flowcast only assigns coarse layout hints: nodes are placed left to right
//! along the x-axis, and renderers are free to relayout them.
//!
//! ```text
//!   (0,0) ──► (2,0) ──► (4,0) ──► +X
//! ```

use serde::{Deserialize, Serialize};

/// A 2D point representing a node position in layout space.
///
/// Serialized as a two element array `[x, y]`, which is the shape renderers
/// consume.
///
/// # Examples
///
/// ```
/// # use flowcast_core::geometry::Point;
/// let p = Point::new(4.0, 0.0);
/// assert_eq!(p.x(), 4.0);
/// assert_eq!(p.y(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f32, f32)", into = "(f32, f32)")]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Position of the `index`-th node in a left-to-right chain.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flowcast_core::geometry::Point;
    /// let third = Point::on_chain(2, 2.0);
    /// assert_eq!(third, Point::new(4.0, 0.0));
    /// ```
    pub fn on_chain(index: usize, spacing: f32) -> Self {
        Self::new(index as f32 * spacing, 0.0)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f32, f32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}
