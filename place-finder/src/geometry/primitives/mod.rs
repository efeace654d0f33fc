mod placement;
mod rect;
mod size;

#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use size::Size;
