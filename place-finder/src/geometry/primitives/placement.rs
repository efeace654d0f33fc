use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Rect, Size};
use std::fmt::Display;

/// Rectangle on the pixel grid where (and how large) the image should be drawn.
/// `(x, y)` is the top left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Placement {
    /// Saturates at `u32::MAX`, which lies outside every canvas.
    pub fn x_max(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Saturates at `u32::MAX`, which lies outside every canvas.
    pub fn y_max(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the placement lies entirely inside `canvas`
    pub fn fits_in(&self, canvas: Size) -> bool {
        let x_fits = self.x.checked_add(self.width).is_some_and(|x_max| x_max <= canvas.width);
        let y_fits = self.y.checked_add(self.height).is_some_and(|y_max| y_max <= canvas.height);
        x_fits && y_fits
    }

    /// Coordinates are exact in `f32` up to 2^24, see [`crate::search::MAX_CANVAS_SIDE`].
    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: self.x as f32,
            y_min: self.y as f32,
            x_max: self.x_max() as f32,
            y_max: self.y_max() as f32,
        }
    }
}

impl CollidesWith<Rect> for Placement {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        self.bbox().collides_with(other)
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[x: {}, y: {}, w: {}, h: {}]",
            self.x, self.y, self.width, self.height
        )
    }
}
