use crate::geometry::primitives::{Placement, Rect, Size};
use anyhow::{Context, Result};
use itertools::Itertools;
use ndarray::{Array2, s};
use std::fmt::Display;
use std::fs;
use std::path::Path;

/// Pixel-per-cell text representation of a canvas, for debugging placements.
///
/// Every cell holds [`OccupancyMatrix::FREE`], [`OccupancyMatrix::OCCUPIED`] or [`OccupancyMatrix::PLACED`].
/// The placement is drawn last, so it is visible even where it overlaps an occupied zone.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyMatrix {
    /// indexed as `[y, x]`, one row per canvas line
    cells: Array2<u8>,
}

impl OccupancyMatrix {
    pub const FREE: u8 = 0;
    pub const OCCUPIED: u8 = 1;
    pub const PLACED: u8 = 2;

    pub fn build(canvas: Size, occupied: &[Rect], placement: Option<&Placement>) -> Self {
        let mut cells = Array2::from_elem(
            (canvas.height as usize, canvas.width as usize),
            Self::FREE,
        );
        let canvas_rect = Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: canvas.width as f32,
            y_max: canvas.height as f32,
        };

        for o in occupied {
            if let Some(clipped) = Rect::intersection(*o, canvas_rect) {
                //cell (x, y) is covered when x_min <= x < x_max
                let x_range = clipped.x_min.ceil() as usize..clipped.x_max.ceil() as usize;
                let y_range = clipped.y_min.ceil() as usize..clipped.y_max.ceil() as usize;
                cells.slice_mut(s![y_range, x_range]).fill(Self::OCCUPIED);
            }
        }

        if let Some(p) = placement {
            let x_range = p.x.min(canvas.width) as usize..p.x_max().min(canvas.width) as usize;
            let y_range = p.y.min(canvas.height) as usize..p.y_max().min(canvas.height) as usize;
            cells.slice_mut(s![y_range, x_range]).fill(Self::PLACED);
        }

        Self { cells }
    }

    pub fn cell(&self, x: usize, y: usize) -> u8 {
        self.cells[[y, x]]
    }

    /// Number of cells holding `value`
    pub fn count(&self, value: u8) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string())
            .with_context(|| format!("could not write matrix to {}", path.display()))
    }
}

impl Display for OccupancyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}
