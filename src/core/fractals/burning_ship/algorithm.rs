use crate::core::actions::generate_fractal::ports::iteration_kernel::{
    ESCAPE_RADIUS_SQUARED, IterationKernel,
};
use crate::core::data::complex::Complex;
use crate::core::data::iteration_outcome::IterationOutcome;
use crate::core::fractals::errors::FractalError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurningShipAlgorithm {
    max_iterations: u32,
}

impl IterationKernel for BurningShipAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn iterate(&self, c: Complex) -> IterationOutcome {
        let mut z = Complex::ZERO;

        for step in 0..self.max_iterations {
            let folded = z.abs_components();
            z = folded * folded + c;

            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                return IterationOutcome::Escaped { steps: step };
            }
        }

        IterationOutcome::Escaped {
            steps: self.max_iterations,
        }
    }
}

impl BurningShipAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, FractalError> {
        if max_iterations == 0 {
            return Err(FractalError::InvalidIterationBudget);
        }

        Ok(Self { max_iterations })
    }
}
