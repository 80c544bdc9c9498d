use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::colour_map::{FractalColourMap, escape_fraction};
use crate::core::colour_maps::errors::ColourMapError;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_outcome::IterationOutcome;
use crate::core::util::hsv_to_rgb::hsv_to_rgb;

/// Full hue sweep over the escape count at full saturation and value.
#[derive(Debug)]
pub struct RainbowColourMap {
    max_iterations: u32,
}

impl ColourMap<IterationOutcome> for RainbowColourMap {
    fn map(&self, outcome: IterationOutcome) -> Result<Colour, ColourMapError> {
        let Some(t) = escape_fraction(outcome, self.max_iterations, self.kind())? else {
            return Ok(Colour::BLACK);
        };

        Ok(hsv_to_rgb(360.0 * t, 1.0, 1.0))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl FractalColourMap for RainbowColourMap {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Rainbow
    }
}

impl RainbowColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
