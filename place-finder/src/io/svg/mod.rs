mod placement_to_svg;
mod svg_util;

#[doc(inline)]
pub use placement_to_svg::placement_to_svg;

#[doc(inline)]
pub use svg_util::SvgDrawOptions;
#[doc(inline)]
pub use svg_util::SvgTheme;
#[doc(inline)]
pub use svg_util::SvgPalette;
