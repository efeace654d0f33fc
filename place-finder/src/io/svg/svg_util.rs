use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgTheme,
    ///Draws the position grid the search samples (every `step` pixels)
    #[serde(default)]
    pub draw_grid: bool,
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgTheme {
    #[default]
    EarthTones,
    Gray,
}

impl SvgTheme {
    pub fn palette(&self) -> SvgPalette {
        match self {
            SvgTheme::EarthTones => EARTH_TONES_PALETTE,
            SvgTheme::Gray => GRAY_PALETTE,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgPalette {
    pub stroke_width_multiplier: f32,
    pub canvas_fill: &'static str,
    pub occupied_fill: &'static str,
    pub placement_fill: &'static str,
    pub grid_stroke: &'static str,
}

pub static EARTH_TONES_PALETTE: SvgPalette = SvgPalette {
    stroke_width_multiplier: 2.0,
    canvas_fill: "#FFF4E0",
    occupied_fill: "#CC824A",
    placement_fill: "#FFC879",
    grid_stroke: "#2D2D2D",
};

pub static GRAY_PALETTE: SvgPalette = SvgPalette {
    stroke_width_multiplier: 2.5,
    canvas_fill: "#FFFFFF",
    occupied_fill: "#8F8F8F",
    placement_fill: "#C3C3C3",
    grid_stroke: "#636363",
};
