//! Finds where to put a decorative image on a canvas that already carries text.
//!
//! Given the bounding boxes of the placed text, [`PlaceFinder`](search::PlaceFinder) searches for the
//! largest rectangle with the image's aspect ratio that fits inside the canvas without overlapping
//! any of them.

/// Geometric primitives and traits
pub mod geometry;

/// The placement search itself
pub mod search;

/// Configuration of the placement search
pub mod config;

/// Importing, exporting and visualizing placement jobs
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
