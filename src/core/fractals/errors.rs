use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::complex_rect::ComplexRectError;
use crate::core::fractals::fractal_kinds::FractalKind;
use std::error::Error;
use std::{fmt, io};

/// Failures surfaced while building or delivering a render.
///
/// Everything except `Io` is raised before any pixel is evaluated.
#[derive(Debug)]
pub enum FractalError {
    InvalidDimensions {
        width: u32,
        height: u32,
    },
    InvalidViewport(ComplexRectError),
    InvalidIterationBudget,
    NonFiniteParameter {
        name: &'static str,
        value: f64,
    },
    IncompatibleColourMap {
        fractal: FractalKind,
        colour_map: ColourMapKind,
    },
    Io(io::Error),
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "image dimensions must be greater than zero: {}x{}",
                    width, height
                )
            }
            Self::InvalidViewport(err) => write!(f, "invalid viewport: {}", err),
            Self::InvalidIterationBudget => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::NonFiniteParameter { name, value } => {
                write!(f, "parameter {} must be finite, got {}", name, value)
            }
            Self::IncompatibleColourMap {
                fractal,
                colour_map,
            } => {
                write!(
                    f,
                    "colour map {} cannot shade {} fractals",
                    colour_map, fractal
                )
            }
            Self::Io(err) => write!(f, "i/o failure: {}", err),
        }
    }
}

impl Error for FractalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidViewport(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ComplexRectError> for FractalError {
    fn from(err: ComplexRectError) -> Self {
        Self::InvalidViewport(err)
    }
}

impl From<io::Error> for FractalError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
