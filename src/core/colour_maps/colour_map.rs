use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::errors::ColourMapError;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::iteration_outcome::IterationOutcome;

pub trait FractalColourMap: ColourMap<IterationOutcome> + Send + Sync {
    fn kind(&self) -> ColourMapKind;
}

/// Normalised escape count `steps / max_iterations` for a continuous map.
///
/// `Ok(None)` means the orbit never escaped and the pixel is black.
pub fn escape_fraction(
    outcome: IterationOutcome,
    max_iterations: u32,
    colour_map: ColourMapKind,
) -> Result<Option<f64>, ColourMapError> {
    let IterationOutcome::Escaped { steps } = outcome else {
        return Err(ColourMapError::UnsupportedOutcome {
            outcome,
            colour_map,
        });
    };

    if steps > max_iterations {
        return Err(ColourMapError::IterationsExceedMax {
            iterations: steps,
            max_iterations,
        });
    }

    if steps == max_iterations {
        return Ok(None);
    }

    Ok(Some(f64::from(steps) / f64::from(max_iterations)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_fraction_is_steps_over_max() {
        assert_eq!(
            escape_fraction(IterationOutcome::Escaped { steps: 25 }, 100, ColourMapKind::Rainbow),
            Ok(Some(0.25))
        );
    }

    #[test]
    fn test_escape_fraction_at_max_is_none() {
        assert_eq!(
            escape_fraction(IterationOutcome::Escaped { steps: 100 }, 100, ColourMapKind::Flame),
            Ok(None)
        );
    }

    #[test]
    fn test_escape_fraction_rejects_overflow() {
        assert_eq!(
            escape_fraction(IterationOutcome::Escaped { steps: 101 }, 100, ColourMapKind::Flame),
            Err(ColourMapError::IterationsExceedMax {
                iterations: 101,
                max_iterations: 100
            })
        );
    }

    #[test]
    fn test_escape_fraction_rejects_newton_outcomes() {
        let outcome = IterationOutcome::Converged {
            root_id: 1,
            steps: 4,
        };

        assert_eq!(
            escape_fraction(outcome, 100, ColourMapKind::Spectrum),
            Err(ColourMapError::UnsupportedOutcome {
                outcome,
                colour_map: ColourMapKind::Spectrum
            })
        );
    }
}
