use crate::geometry::AspectRatio;

/// Iterator over the decreasing sequence of candidate sizes tried by the search.
///
/// Every step subtracts `reduce_ratio` times the aspect ratio from both dimensions,
/// so the aspect ratio is kept while the scale shrinks.
/// The sequence ends as soon as either dimension drops to zero or below.
#[derive(Clone, Debug)]
pub struct CandidateSizes {
    width: f64,
    height: f64,
    d_width: f64,
    d_height: f64,
}

impl CandidateSizes {
    pub fn new(initial: (f64, f64), ratio: AspectRatio, reduce_ratio: u32) -> Self {
        let (width, height) = initial;
        Self {
            width,
            height,
            d_width: ratio.x * reduce_ratio as f64,
            d_height: ratio.y * reduce_ratio as f64,
        }
    }
}

impl Iterator for CandidateSizes {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.width > 0.0 && self.height > 0.0 {
            let current = (self.width, self.height);
            self.width -= self.d_width;
            self.height -= self.d_height;
            Some(current)
        } else {
            None
        }
    }
}

/// Rounds a candidate size up to whole pixels
pub fn to_pixels((width, height): (f64, f64)) -> (u32, u32) {
    (width.ceil() as u32, height.ceil() as u32)
}
