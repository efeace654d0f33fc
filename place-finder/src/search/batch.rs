use crate::geometry::primitives::Placement;
use crate::search::PlaceFinder;
use log::info;
use rayon::prelude::*;

/// Runs [`PlaceFinder::find_best_place`] for every finder in parallel.
/// The results are in the same order as `finders`.
pub fn find_best_places(finders: &[PlaceFinder]) -> Vec<Option<Placement>> {
    let placements = finders
        .par_iter()
        .map(|pf| pf.find_best_place())
        .collect::<Vec<_>>();

    info!(
        "[PF] batch finished, {}/{} placed",
        placements.iter().flatten().count(),
        finders.len()
    );
    placements
}
