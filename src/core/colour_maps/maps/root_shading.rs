use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::colour_map::FractalColourMap;
use crate::core::colour_maps::errors::ColourMapError;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_outcome::IterationOutcome;

/// Base colour for each root, indexed by `root_id - 1`.
pub const ROOT_COLOURS: [Colour; 3] = [
    Colour::new(255, 50, 50),
    Colour::new(50, 255, 50),
    Colour::new(50, 50, 255),
];

/// Slowest-converging pixels keep this share of their root colour.
pub const MIN_BRIGHTNESS: f64 = 0.3;

/// Categorical basin colouring, dimmed by how long convergence took.
#[derive(Debug)]
pub struct RootShadingColourMap {
    max_iterations: u32,
}

impl ColourMap<IterationOutcome> for RootShadingColourMap {
    fn map(&self, outcome: IterationOutcome) -> Result<Colour, ColourMapError> {
        let (root_id, steps) = match outcome {
            IterationOutcome::Unresolved { .. } => return Ok(Colour::BLACK),
            IterationOutcome::Converged { root_id, steps } => (root_id, steps),
            IterationOutcome::Escaped { .. } => {
                return Err(ColourMapError::UnsupportedOutcome {
                    outcome,
                    colour_map: self.kind(),
                });
            }
        };

        if steps > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations: steps,
                max_iterations: self.max_iterations,
            });
        }

        let base = usize::from(root_id)
            .checked_sub(1)
            .and_then(|index| ROOT_COLOURS.get(index))
            .ok_or(ColourMapError::UnsupportedOutcome {
                outcome,
                colour_map: self.kind(),
            })?;

        let remaining = f64::from(self.max_iterations - steps) / f64::from(self.max_iterations);

        Ok(base.scale(remaining.max(MIN_BRIGHTNESS)))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl FractalColourMap for RootShadingColourMap {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::RootShading
    }
}

impl RootShadingColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converged(root_id: u8, steps: u32) -> IterationOutcome {
        IterationOutcome::Converged { root_id, steps }
    }

    #[test]
    fn test_unresolved_is_black() {
        let mapper = RootShadingColourMap::new(100);

        assert_eq!(
            mapper.map(IterationOutcome::Unresolved { steps: 100 }).unwrap(),
            Colour::BLACK
        );
    }

    #[test]
    fn test_immediate_convergence_uses_full_base_colour() {
        let mapper = RootShadingColourMap::new(100);

        assert_eq!(mapper.map(converged(1, 0)).unwrap(), Colour::new(255, 50, 50));
        assert_eq!(mapper.map(converged(2, 0)).unwrap(), Colour::new(50, 255, 50));
        assert_eq!(mapper.map(converged(3, 0)).unwrap(), Colour::new(50, 50, 255));
    }

    #[test]
    fn test_brightness_falls_with_steps() {
        let mapper = RootShadingColourMap::new(100);

        assert_eq!(mapper.map(converged(1, 50)).unwrap(), Colour::new(127, 25, 25));
    }

    #[test]
    fn test_brightness_is_floored() {
        let mapper = RootShadingColourMap::new(100);

        assert_eq!(mapper.map(converged(1, 80)).unwrap(), Colour::new(76, 15, 15));
        assert_eq!(mapper.map(converged(1, 100)).unwrap(), Colour::new(76, 15, 15));
    }

    #[test]
    fn test_converged_is_never_black() {
        let mapper = RootShadingColourMap::new(20);

        for root_id in 1..=3 {
            for steps in 0..=20 {
                assert!(!mapper.map(converged(root_id, steps)).unwrap().is_black());
            }
        }
    }

    #[test]
    fn test_rejects_unknown_root_and_escape_outcomes() {
        let mapper = RootShadingColourMap::new(100);

        assert!(mapper.map(converged(0, 1)).is_err());
        assert!(mapper.map(converged(4, 1)).is_err());
        assert!(mapper.map(IterationOutcome::Escaped { steps: 2 }).is_err());
    }
}
