use crate::core::actions::generate_fractal::ports::iteration_kernel::IterationKernel;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_outcome::IterationOutcome;
use crate::core::fractals::errors::FractalError;

/// Distance under which an orbit counts as converged, and a point as a root.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-6;

/// Below this modulus of z² the Newton step is undefined.
pub const DERIVATIVE_EPSILON: f64 = 1e-10;

const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// Cube roots of unity, indexed by `root_id - 1`.
pub const ROOTS: [Complex; 3] = [
    Complex::new(1.0, 0.0),
    Complex::new(-0.5, HALF_SQRT_3),
    Complex::new(-0.5, -HALF_SQRT_3),
];

/// Newton's method for z³ − 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonAlgorithm {
    max_iterations: u32,
}

impl IterationKernel for NewtonAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn iterate(&self, sample: Complex) -> IterationOutcome {
        let mut z = sample;
        let mut steps = 0;

        while steps < self.max_iterations {
            let Some(next) = newton_step(z) else {
                return IterationOutcome::Unresolved { steps };
            };

            let delta = next.distance_to(z);
            z = next;

            if delta < CONVERGENCE_TOLERANCE {
                break;
            }

            steps += 1;
        }

        match classify_root(z) {
            Some(root_id) => IterationOutcome::Converged { root_id, steps },
            None => IterationOutcome::Unresolved { steps },
        }
    }
}

impl NewtonAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, FractalError> {
        if max_iterations == 0 {
            return Err(FractalError::InvalidIterationBudget);
        }

        Ok(Self { max_iterations })
    }
}

/// z ← (2z³ + 1) / (3z²), or `None` where the derivative vanishes.
fn newton_step(z: Complex) -> Option<Complex> {
    let z2 = z * z;

    if z2.magnitude() < DERIVATIVE_EPSILON {
        return None;
    }

    let z3 = z2 * z;

    Some((z3.scale(2.0) + Complex::new(1.0, 0.0)) / z2.scale(3.0))
}

/// 1-based index of the nearest root within tolerance.
fn classify_root(z: Complex) -> Option<u8> {
    ROOTS
        .iter()
        .enumerate()
        .map(|(index, root)| (index, z.distance_to(*root)))
        .filter(|(_, distance)| *distance < CONVERGENCE_TOLERANCE)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index as u8 + 1)
}
