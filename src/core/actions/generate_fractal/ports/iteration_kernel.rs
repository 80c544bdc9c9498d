use crate::core::data::complex::Complex;
use crate::core::data::iteration_outcome::IterationOutcome;

/// Squared escape radius shared by the escape-time kernels.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// A pure per-sample dynamical system.
///
/// Implementations must be deterministic and must never report more than
/// `max_iterations()` steps.
pub trait IterationKernel {
    fn max_iterations(&self) -> u32;

    fn iterate(&self, sample: Complex) -> IterationOutcome;
}
