use crate::config::PFConfig;
use crate::geometry::primitives::{Rect, Size};
use crate::io::ext_repr::{ExtPlacementJob, ExtRect, ExtSize};
use crate::search::PlaceFinder;
use anyhow::{Context, Result, bail};
use log::{debug, trace};

/// Converts external placement jobs into [`PlaceFinder`]s.
#[derive(Clone, Debug, Copy, Default)]
pub struct Importer {
    /// Used for every job which does not carry its own configuration
    pub config: PFConfig,
}

impl Importer {
    pub fn new(config: PFConfig) -> Importer {
        Importer { config }
    }

    pub fn import_job(&self, ext_job: &ExtPlacementJob) -> Result<PlaceFinder> {
        let canvas = import_size(&ext_job.canvas).context("invalid canvas")?;
        let image = import_size(&ext_job.image).context("invalid image")?;
        let config = ext_job.config.unwrap_or(self.config);

        let occupied = ext_job
            .occupied
            .iter()
            .enumerate()
            .map(|(i, ext_rect)| {
                if ext_rect.width == 0.0 || ext_rect.height == 0.0 {
                    //empty text runs, still blocking anything that crosses them
                    trace!("[IMPORT] job {}: occupied zone {i} has no area", ext_job.index);
                }
                import_rect(ext_rect)
                    .with_context(|| format!("job {}: invalid occupied zone {i}", ext_job.index))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "[IMPORT] job {}: {} occupied zones, config: {config:?}",
            ext_job.index,
            occupied.len()
        );

        PlaceFinder::try_new(occupied, canvas, image, config)
            .with_context(|| format!("invalid configuration for job {}", ext_job.index))
    }
}

/// Looks up the job with the given index
pub fn find_job(jobs: &[ExtPlacementJob], index: u64) -> Result<&ExtPlacementJob> {
    match jobs.iter().find(|j| j.index == index) {
        Some(job) => Ok(job),
        None => bail!("no job with index {index}"),
    }
}

pub fn import_size(ext_size: &ExtSize) -> Result<Size> {
    Size::try_new(ext_size.width, ext_size.height)
}

pub fn import_rect(ext_rect: &ExtRect) -> Result<Rect> {
    let ExtRect {
        x,
        y,
        width,
        height,
    } = *ext_rect;
    Rect::from_xywh(x, y, width, height)
}
