use crate::geometry::primitives::Placement;
use crate::io::ext_repr::{ExtPlacement, ExtPlacementOutcome};

pub fn export_placement(placement: &Placement) -> ExtPlacement {
    ExtPlacement {
        x: placement.x,
        y: placement.y,
        width: placement.width,
        height: placement.height,
    }
}

pub fn export_outcome(index: u64, placement: Option<&Placement>) -> ExtPlacementOutcome {
    ExtPlacementOutcome {
        index,
        placement: placement.map(export_placement),
    }
}
