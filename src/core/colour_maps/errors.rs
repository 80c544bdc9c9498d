use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::iteration_outcome::IterationOutcome;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourMapError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
    UnsupportedOutcome {
        outcome: IterationOutcome,
        colour_map: ColourMapKind,
    },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
            Self::UnsupportedOutcome {
                outcome,
                colour_map,
            } => {
                write!(f, "colour map {} cannot shade {:?}", colour_map, outcome)
            }
        }
    }
}

impl Error for ColourMapError {}
