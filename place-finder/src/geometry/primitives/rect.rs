use crate::geometry::geo_traits::CollidesWith;
use anyhow::Result;
use anyhow::ensure;

///Axis-aligned rectangle, in canvas coordinates (origin at the top left, y pointing down).
///Zero width or height is allowed: a line still blocks everything that crosses it.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Rect {
    pub fn try_new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Result<Self> {
        ensure!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Creates a rectangle from its top left corner, a width and a height.
    /// This is the `(x, y, width, height)` form in which text boxes are reported.
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Result<Self> {
        Rect::try_new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = f32::max(a.x_min, b.x_min);
        let y_min = f32::max(a.y_min, b.y_min);
        let x_max = f32::min(a.x_max, b.x_max);
        let y_max = f32::min(a.y_max, b.y_max);
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })
        } else {
            None
        }
    }
}

impl CollidesWith<Rect> for Rect {
    /// Only overlapping interiors count, sharing an edge is allowed.
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        let left = self.x_max <= other.x_min;
        let right = self.x_min >= other.x_max;
        let above = self.y_max <= other.y_min;
        let below = self.y_min >= other.y_max;

        !(left || right || above || below)
    }
}
