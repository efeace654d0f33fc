use crate::config::PFConfig;
use serde::{Deserialize, Serialize};

/// External representation of a [`Rect`](crate::geometry::primitives::Rect),
/// by its top left corner, a width and a height.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// External representation of a [`Size`](crate::geometry::primitives::Size).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtSize {
    pub width: u32,
    pub height: u32,
}

/// A single placement problem: the text boxes already on a canvas and the image to fit in between.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacementJob {
    /// Identifies the job (and the design it belongs to) in a list of jobs
    pub index: u64,
    pub canvas: ExtSize,
    /// Intrinsic size of the image, only its aspect ratio matters
    pub image: ExtSize,
    /// Bounding boxes of the placed text, in layout order
    #[serde(default)]
    pub occupied: Vec<ExtRect>,
    /// Overrides the importer's configuration for this job
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub config: Option<PFConfig>,
}

/// External representation of a [`Placement`](crate::geometry::primitives::Placement).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtPlacement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Result of a job. `placement` is absent when no admissible placement was found.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtPlacementOutcome {
    pub index: u64,
    pub placement: Option<ExtPlacement>,
}
