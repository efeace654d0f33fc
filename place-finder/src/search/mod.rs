mod batch;
mod candidate_sizes;
mod place_finder;

#[doc(inline)]
pub use batch::find_best_places;
#[doc(inline)]
pub use candidate_sizes::CandidateSizes;
#[doc(inline)]
pub use candidate_sizes::to_pixels;
#[doc(inline)]
pub use place_finder::{MAX_CANVAS_SIDE, PlaceFinder};
