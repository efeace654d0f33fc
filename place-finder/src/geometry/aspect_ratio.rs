use crate::geometry::primitives::Size;
use std::fmt::Display;

/// Aspect ratio of an image, normalized so that the longer side maps to `1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AspectRatio {
    pub x: f64,
    pub y: f64,
}

impl AspectRatio {
    /// Square images are treated as portrait, with `x` the side which is (possibly) scaled down.
    pub fn from_size(image: Size) -> Self {
        let (w, h) = (image.width as f64, image.height as f64);
        match image.is_landscape() {
            true => AspectRatio { x: 1.0, y: h / w },
            false => AspectRatio { x: w / h, y: 1.0 },
        }
    }

    /// Whether a `width` x `height` rectangle has (approximately) this aspect ratio.
    pub fn matches(&self, width: f64, height: f64) -> bool {
        let tolerance = 1e-9 * f64::max(width.abs(), height.abs()).max(1.0);
        float_cmp::approx_eq!(f64, width * self.y, height * self.x, epsilon = tolerance)
    }
}

impl Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}:{:.3}", self.x, self.y)
    }
}
