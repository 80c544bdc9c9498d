use crate::core::actions::generate_fractal::ports::iteration_kernel::IterationKernel;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_outcome::IterationOutcome;
use crate::core::fractals::errors::FractalError;
use crate::core::fractals::fractal::{Fractal, FractalParams};
use log::debug;
use rayon::prelude::*;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum BatchError {
    LengthMismatch {
        reals: usize,
        imags: usize,
        outcomes: usize,
    },
    Fractal(FractalError),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                reals,
                imags,
                outcomes,
            } => {
                write!(
                    f,
                    "batch slices differ in length: {} reals, {} imags, {} outcomes",
                    reals, imags, outcomes
                )
            }
            Self::Fractal(err) => write!(f, "{}", err),
        }
    }
}

impl Error for BatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::LengthMismatch { .. } => None,
            Self::Fractal(err) => Some(err),
        }
    }
}

impl From<FractalError> for BatchError {
    fn from(err: FractalError) -> Self {
        Self::Fractal(err)
    }
}

/// Iterates arbitrary plane points, writing one outcome per `(reals[i], imags[i])`.
///
/// Points are processed on the current rayon pool. Nothing is written unless
/// all three slices have the same length and the kernel is valid.
pub fn compute_batch(
    params: FractalParams,
    max_iterations: u32,
    reals: &[f64],
    imags: &[f64],
    outcomes: &mut [IterationOutcome],
) -> Result<(), BatchError> {
    if reals.len() != imags.len() || reals.len() != outcomes.len() {
        return Err(BatchError::LengthMismatch {
            reals: reals.len(),
            imags: imags.len(),
            outcomes: outcomes.len(),
        });
    }

    let fractal = Fractal::new(params, max_iterations)?;
    debug!(
        "computing {} {} samples with {} iterations",
        outcomes.len(),
        fractal.kind(),
        max_iterations
    );

    outcomes
        .par_iter_mut()
        .zip(reals.par_iter().zip(imags.par_iter()))
        .for_each(|(outcome, (&real, &imag))| {
            *outcome = fractal.iterate(Complex::new(real, imag));
        });

    Ok(())
}
