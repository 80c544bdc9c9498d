use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::colour_map::{FractalColourMap, escape_fraction};
use crate::core::colour_maps::errors::ColourMapError;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_outcome::IterationOutcome;
use crate::core::util::hsv_to_rgb::hsv_to_rgb;

/// Deep blue through magenta and red to a white-hot yellow.
#[derive(Debug)]
pub struct FlameColourMap {
    max_iterations: u32,
}

impl ColourMap<IterationOutcome> for FlameColourMap {
    fn map(&self, outcome: IterationOutcome) -> Result<Colour, ColourMapError> {
        let Some(t) = escape_fraction(outcome, self.max_iterations, self.kind())? else {
            return Ok(Colour::BLACK);
        };

        let (hue, saturation, value) = if t < 0.16 {
            (240.0 + 60.0 * t / 0.16, 1.0, 0.5 + 0.5 * t / 0.16)
        } else if t < 0.42 {
            (300.0 + 60.0 * (t - 0.16) / 0.26, 1.0, 1.0)
        } else if t < 0.6425 {
            (30.0 * (t - 0.42) / 0.2225, 1.0, 1.0)
        } else if t < 0.8575 {
            (30.0 + 30.0 * (t - 0.6425) / 0.215, 1.0, 1.0)
        } else {
            (60.0, 1.0 - (t - 0.8575) / 0.1425, 1.0)
        };

        Ok(hsv_to_rgb(hue, saturation, value))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl FractalColourMap for FlameColourMap {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Flame
    }
}

impl FlameColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
