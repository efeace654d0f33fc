/// All geometric primitives
pub mod primitives;

/// All traits which define geometric relations
pub mod geo_traits;

mod aspect_ratio;

#[doc(inline)]
pub use aspect_ratio::AspectRatio;
