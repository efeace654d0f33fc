use serde::{Deserialize, Serialize};

/// Configuration of the placement search
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PFConfig {
    /// Controls the granularity of the search.
    /// Every unsuccessful candidate size is shrunk by `reduce_ratio` times the aspect ratio,
    /// and positions are sampled every [`PFConfig::step`] pixels.
    /// Higher values search faster but can miss placements that exist only at intermediate sizes or offsets.
    pub reduce_ratio: u32,
    /// How the found placement is shifted horizontally afterwards
    #[serde(default)]
    pub centering: Centering,
}

impl PFConfig {
    /// Stride of the position grid, also the unit in which sizes are reduced
    pub fn step(&self) -> u32 {
        u32::max(1, self.reduce_ratio / 10)
    }

    pub fn with_centering(self, center_horizontally: bool) -> Self {
        let centering = match center_horizontally {
            true => Centering::Horizontal,
            false => Centering::None,
        };
        Self { centering, ..self }
    }
}

impl Default for PFConfig {
    fn default() -> Self {
        Self {
            reduce_ratio: 100,
            centering: Centering::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Centering {
    /// The placement is returned where it was found
    #[default]
    None,
    /// The placement is moved to the horizontal center of the canvas.
    /// This is not checked against the occupied zones and can cause overlap.
    Horizontal,
    /// Like [`Centering::Horizontal`], but keeps the original position if the centered one overlaps an occupied zone
    HorizontalStrict,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(100, 10)]
    #[test_case(25, 2)]
    #[test_case(9, 1)]
    #[test_case(1, 1)]
    fn step_is_a_tenth_of_reduce_ratio(reduce_ratio: u32, step: u32) {
        let config = PFConfig {
            reduce_ratio,
            ..PFConfig::default()
        };
        assert_eq!(config.step(), step);
    }

    #[test]
    fn centering_defaults_to_none_when_omitted() {
        let config: PFConfig = serde_json::from_str(r#"{"reduce_ratio": 50}"#).unwrap();
        assert_eq!(config.centering, Centering::None);
        assert_eq!(config.reduce_ratio, 50);

        let config: PFConfig =
            serde_json::from_str(r#"{"reduce_ratio": 50, "centering": "horizontal_strict"}"#)
                .unwrap();
        assert_eq!(config.centering, Centering::HorizontalStrict);
    }
}
