/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod occupancy_matrix;

#[doc(inline)]
pub use occupancy_matrix::OccupancyMatrix;
