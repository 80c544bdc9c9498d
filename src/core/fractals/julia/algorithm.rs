use crate::core::actions::generate_fractal::ports::iteration_kernel::{
    ESCAPE_RADIUS_SQUARED, IterationKernel,
};
use crate::core::data::complex::Complex;
use crate::core::data::iteration_outcome::IterationOutcome;
use crate::core::fractals::errors::FractalError;
use std::ops::ControlFlow;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    c: Complex,
    max_iterations: u32,
}

impl IterationKernel for JuliaAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn iterate(&self, z: Complex) -> IterationOutcome {
        let c = self.c;

        let iterations = (0..self.max_iterations).try_fold(z, |z0, step| {
            if z0.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                ControlFlow::Break(step)
            } else {
                ControlFlow::Continue(z0 * z0 + c)
            }
        });

        IterationOutcome::Escaped {
            steps: match iterations {
                ControlFlow::Break(step) => step,
                ControlFlow::Continue(_) => self.max_iterations,
            },
        }
    }
}

impl JuliaAlgorithm {
    pub fn new(c: Complex, max_iterations: u32) -> Result<Self, FractalError> {
        if max_iterations == 0 {
            return Err(FractalError::InvalidIterationBudget);
        }

        if !c.real.is_finite() {
            return Err(FractalError::NonFiniteParameter {
                name: "c_real",
                value: c.real,
            });
        }

        if !c.imag.is_finite() {
            return Err(FractalError::NonFiniteParameter {
                name: "c_imag",
                value: c.imag,
            });
        }

        Ok(Self { c, max_iterations })
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }
}
