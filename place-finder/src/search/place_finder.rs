use crate::config::{Centering, PFConfig};
use crate::geometry::AspectRatio;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Placement, Rect, Size};
use crate::search::candidate_sizes::{CandidateSizes, to_pixels};
use crate::util::assertions;
use anyhow::{Result, ensure};
use itertools::Itertools;
use log::{debug, trace, warn};

/// Largest canvas side accepted, coordinates up to it are exact in `f32`
pub const MAX_CANVAS_SIDE: u32 = 1 << 24;

/// Searches for the largest rectangle with a fixed aspect ratio that fits inside a canvas
/// without overlapping any of the occupied zones (the bounding boxes of the text).
///
/// The search tries a decreasing sequence of sizes (see [`CandidateSizes`]) and, for every size,
/// scans a grid of positions left-to-right, top-to-bottom.
/// The first free position at the first size that has one is accepted (first-fit).
/// This is not necessarily the placement with the largest possible area: positions and sizes
/// in between the grid points are never tried, see [`PFConfig::reduce_ratio`].
///
/// A finder only reads its inputs, so it can be searched any number of times and
/// shared between threads.
#[derive(Clone, Debug)]
pub struct PlaceFinder {
    occupied: Vec<Rect>,
    canvas: Size,
    image: Size,
    ratio: AspectRatio,
    config: PFConfig,
}

impl PlaceFinder {
    /// Creates a new finder.
    ///
    /// * `occupied` - Zones the placement must avoid. They are checked in the given order.
    /// * `canvas` - Size of the canvas the image is placed on.
    /// * `image` - Intrinsic size of the image, only its aspect ratio is used.
    /// * `config` - Granularity of the search and how to center the result.
    pub fn try_new(
        occupied: Vec<Rect>,
        canvas: Size,
        image: Size,
        config: PFConfig,
    ) -> Result<Self> {
        ensure!(
            canvas.width > 0 && canvas.height > 0,
            "canvas must have a positive width and height, got {canvas:?}"
        );
        ensure!(
            canvas.width <= MAX_CANVAS_SIDE && canvas.height <= MAX_CANVAS_SIDE,
            "canvas sides are limited to {MAX_CANVAS_SIDE}, got {canvas:?}"
        );
        ensure!(
            image.width > 0 && image.height > 0,
            "image must have a positive width and height, got {image:?}"
        );
        ensure!(
            config.reduce_ratio > 0,
            "reduce_ratio must be positive, got {}",
            config.reduce_ratio
        );

        Ok(Self {
            occupied,
            canvas,
            image,
            ratio: AspectRatio::from_size(image),
            config,
        })
    }

    /// Creates a finder with the default granularity (`reduce_ratio` of 100).
    pub fn new_default(
        occupied: Vec<Rect>,
        canvas: Size,
        image: Size,
        center_horizontally: bool,
    ) -> Result<Self> {
        let config = PFConfig::default().with_centering(center_horizontally);
        Self::try_new(occupied, canvas, image, config)
    }

    /// Returns the largest placement found, or `None` if no size in the sequence fits anywhere.
    pub fn find_best_place(&self) -> Option<Placement> {
        for (i, size) in self.candidate_sizes().enumerate() {
            debug_assert!(self.ratio.matches(size.0, size.1));
            let (w, h) = to_pixels(size);

            if let Some(placement) = self.scan(w, h) {
                debug!("[PF] candidate {i} ({w}x{h}) fits at {placement}");
                return Some(self.center(placement));
            }
            trace!("[PF] candidate {i} ({w}x{h}) does not fit");
        }

        debug!(
            "[PF] no placement found for ratio {} on {}x{} canvas with {} occupied zones",
            self.ratio,
            self.canvas.width,
            self.canvas.height,
            self.occupied.len()
        );
        None
    }

    /// The sequence of sizes [`PlaceFinder::find_best_place`] tries, largest first.
    ///
    /// Landscape images start at the full width of the canvas, other images at its full height.
    /// Depending on the canvas, the first sizes can exceed the other dimension and never fit.
    pub fn candidate_sizes(&self) -> CandidateSizes {
        CandidateSizes::new(self.initial_size(), self.ratio, self.config.reduce_ratio)
    }

    pub fn initial_size(&self) -> (f64, f64) {
        let AspectRatio { x: rx, y: ry } = self.ratio;
        match self.image.is_landscape() {
            true => {
                let w = self.canvas.width as f64;
                (w * rx, w * ry)
            }
            false => {
                let h = self.canvas.height as f64;
                (h * rx, h * ry)
            }
        }
    }

    /// Scans all grid positions for a `width` x `height` rectangle, `x` in the outer loop, `y` in the inner.
    /// Returns the first position which does not overlap any occupied zone.
    pub fn scan(&self, width: u32, height: u32) -> Option<Placement> {
        if width == 0 || height == 0 || width > self.canvas.width || height > self.canvas.height {
            return None;
        }
        let step = self.config.step() as usize;
        let xs = (0..=self.canvas.width - width).step_by(step);
        let ys = (0..=self.canvas.height - height).step_by(step);

        let placement = xs
            .cartesian_product(ys)
            .map(|(x, y)| Placement {
                x,
                y,
                width,
                height,
            })
            .find(|p| self.is_free(p))?;

        debug_assert!(assertions::placement_within_canvas(&placement, self.canvas));
        debug_assert!(assertions::placement_avoids_all(&placement, &self.occupied));
        Some(placement)
    }

    /// Applies the configured [`Centering`] to a placement.
    /// Only `x` is ever modified.
    pub fn center(&self, placement: Placement) -> Placement {
        let centered = Placement {
            x: self.canvas.width.saturating_sub(placement.width) / 2,
            ..placement
        };
        match self.config.centering {
            Centering::None => placement,
            Centering::Horizontal => {
                if !self.is_free(&centered) {
                    debug!("[PF] centered placement {centered} overlaps an occupied zone");
                }
                centered
            }
            Centering::HorizontalStrict => match self.is_free(&centered) {
                true => centered,
                false => {
                    warn!(
                        "[PF] centered placement {centered} overlaps an occupied zone, keeping {placement}"
                    );
                    placement
                }
            },
        }
    }

    /// Whether `placement` lies inside the canvas and does not overlap any occupied zone.
    pub fn is_admissible(&self, placement: &Placement) -> bool {
        placement.width > 0
            && placement.height > 0
            && placement.fits_in(self.canvas)
            && self.is_free(placement)
    }

    fn is_free(&self, placement: &Placement) -> bool {
        self.occupied.iter().all(|o| !placement.collides_with(o))
    }

    pub fn occupied(&self) -> &[Rect] {
        &self.occupied
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn ratio(&self) -> AspectRatio {
        self.ratio
    }

    pub fn config(&self) -> &PFConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(w: u32, h: u32) -> Size {
        Size::try_new(w, h).unwrap()
    }

    #[test]
    fn rejects_zero_reduce_ratio() {
        let config = PFConfig {
            reduce_ratio: 0,
            ..PFConfig::default()
        };
        assert!(PlaceFinder::try_new(vec![], size(100, 100), size(10, 10), config).is_err());
    }

    #[test]
    fn rejects_zero_canvas() {
        let canvas = Size {
            width: 0,
            height: 100,
        };
        assert!(PlaceFinder::new_default(vec![], canvas, size(10, 10), false).is_err());
    }

    #[test]
    fn rejects_huge_canvas() {
        let canvas = size(MAX_CANVAS_SIDE + 1, 100);
        assert!(PlaceFinder::new_default(vec![], canvas, size(10, 10), false).is_err());
        assert!(PlaceFinder::new_default(vec![], size(MAX_CANVAS_SIDE, 100), size(10, 10), false).is_ok());
    }

    #[test]
    fn overflowing_placement_is_not_admissible() {
        let pf = PlaceFinder::new_default(vec![], size(1000, 1000), size(10, 10), false).unwrap();
        let p = Placement {
            x: u32::MAX,
            y: u32::MAX,
            width: 100,
            height: 100,
        };
        assert!(!pf.is_admissible(&p));
    }

    #[test]
    fn zero_width_zone_blocks_crossing_candidates() {
        let occupied = vec![Rect::from_xywh(500.0, 0.0, 0.0, 1000.0).unwrap()];
        let pf = PlaceFinder::new_default(occupied, size(1000, 1000), size(200, 100), false).unwrap();
        assert_eq!(pf.scan(1000, 500), None);
        assert_eq!(
            pf.scan(500, 250),
            Some(Placement {
                x: 0,
                y: 0,
                width: 500,
                height: 250
            })
        );
    }

    #[test]
    fn rejects_zero_image() {
        let image = Size {
            width: 10,
            height: 0,
        };
        assert!(PlaceFinder::new_default(vec![], size(100, 100), image, false).is_err());
    }

    #[test]
    fn initial_size_follows_the_longer_image_side() {
        let landscape = PlaceFinder::new_default(vec![], size(800, 600), size(200, 100), false).unwrap();
        assert_eq!(landscape.initial_size(), (800.0, 400.0));

        let portrait = PlaceFinder::new_default(vec![], size(800, 600), size(100, 200), false).unwrap();
        assert_eq!(portrait.initial_size(), (300.0, 600.0));
    }

    #[test]
    fn scan_rejects_sizes_larger_than_the_canvas() {
        let pf = PlaceFinder::new_default(vec![], size(100, 50), size(10, 10), false).unwrap();
        assert_eq!(pf.scan(101, 10), None);
        assert_eq!(pf.scan(10, 51), None);
        assert!(pf.scan(100, 50).is_some());
    }

    #[test]
    fn scan_moves_down_before_moving_right() {
        //a block in the top left corner, the first free spot lies below it
        let occupied = vec![Rect::from_xywh(0.0, 0.0, 20.0, 20.0).unwrap()];
        let pf = PlaceFinder::new_default(occupied, size(100, 100), size(10, 10), false).unwrap();
        let p = pf.scan(10, 10).unwrap();
        assert_eq!((p.x, p.y), (0, 20));
    }

    #[test]
    fn scan_respects_the_step() {
        //free spot starts at x = 15, the first grid position past it is 20
        let occupied = vec![Rect::from_xywh(0.0, 0.0, 15.0, 100.0).unwrap()];
        let pf = PlaceFinder::new_default(occupied, size(100, 100), size(10, 10), false).unwrap();
        let p = pf.scan(30, 30).unwrap();
        assert_eq!((p.x, p.y), (20, 0));
    }

    #[test]
    fn strict_centering_falls_back_on_overlap() {
        let occupied = vec![Rect::from_xywh(400.0, 0.0, 200.0, 1000.0).unwrap()];
        let found = Placement {
            x: 0,
            y: 0,
            width: 400,
            height: 400,
        };
        let config = PFConfig {
            centering: Centering::HorizontalStrict,
            ..PFConfig::default()
        };
        let strict = PlaceFinder::try_new(occupied.clone(), size(1000, 1000), size(1, 1), config).unwrap();
        assert_eq!(strict.center(found), found);

        let lenient = PlaceFinder::new_default(occupied, size(1000, 1000), size(1, 1), true).unwrap();
        assert_eq!(lenient.center(found).x, 300);
        assert!(!lenient.is_admissible(&lenient.center(found)));
    }
}
