use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::colour_map::{FractalColourMap, escape_fraction};
use crate::core::colour_maps::errors::ColourMapError;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_outcome::IterationOutcome;

/// Piecewise linear RGB rainbow: red, yellow, green, cyan, blue, magenta.
#[derive(Debug)]
pub struct SpectrumColourMap {
    max_iterations: u32,
}

fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

impl ColourMap<IterationOutcome> for SpectrumColourMap {
    fn map(&self, outcome: IterationOutcome) -> Result<Colour, ColourMapError> {
        let Some(t) = escape_fraction(outcome, self.max_iterations, self.kind())? else {
            return Ok(Colour::BLACK);
        };

        let (r, g, b) = if t < 0.16 {
            (255.0, 255.0 * t / 0.16, 0.0)
        } else if t < 0.33 {
            (255.0 * (0.33 - t) / 0.17, 255.0, 0.0)
        } else if t < 0.5 {
            (0.0, 255.0, 255.0 * (t - 0.33) / 0.17)
        } else if t < 0.66 {
            (0.0, 255.0 * (0.66 - t) / 0.16, 255.0)
        } else if t < 0.83 {
            (255.0 * (t - 0.66) / 0.17, 0.0, 255.0)
        } else {
            (255.0, 0.0, 255.0 * (1.0 - t) / 0.17)
        };

        Ok(Colour::new(channel(r), channel(g), channel(b)))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl FractalColourMap for SpectrumColourMap {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Spectrum
    }
}

impl SpectrumColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
