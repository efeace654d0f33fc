use crate::geometry::AspectRatio;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Placement, Rect, Size};
use log::error;

//Various checks to verify the correctness of search results
//Used in debug_assertion!() blocks and tests

pub fn placement_within_canvas(placement: &Placement, canvas: Size) -> bool {
    let within = placement.fits_in(canvas);
    if !within {
        error!(
            "placement {placement} exceeds canvas of {}x{}",
            canvas.width, canvas.height
        );
    }
    within
}

pub fn placement_avoids_all(placement: &Placement, occupied: &[Rect]) -> bool {
    match occupied.iter().find(|o| placement.collides_with(*o)) {
        Some(o) => {
            error!("placement {placement} overlaps occupied zone {o:?}");
            false
        }
        None => true,
    }
}

/// Checks that every size keeps `ratio` and that no dimension ever grows
pub fn sizes_shrink_with_ratio(sizes: &[(f64, f64)], ratio: AspectRatio) -> bool {
    let ratio_kept = sizes.iter().all(|&(w, h)| ratio.matches(w, h));
    let shrinking = sizes
        .windows(2)
        .all(|pair| pair[1].0 <= pair[0].0 && pair[1].1 <= pair[0].1);
    ratio_kept && shrinking
}
