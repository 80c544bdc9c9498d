use crate::core::actions::generate_fractal::ports::iteration_kernel::IterationKernel;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_outcome::IterationOutcome;
use crate::core::fractals::burning_ship::algorithm::BurningShipAlgorithm;
use crate::core::fractals::errors::FractalError;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::julia::constants::DEFAULT_JULIA_CONSTANT;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::newton::algorithm::NewtonAlgorithm;

/// Per-kind parameters. Only Julia carries any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalParams {
    Mandelbrot,
    Julia { c: Complex },
    BurningShip,
    Newton,
}

impl FractalParams {
    #[must_use]
    pub fn kind(&self) -> FractalKind {
        match self {
            Self::Mandelbrot => FractalKind::Mandelbrot,
            Self::Julia { .. } => FractalKind::Julia,
            Self::BurningShip => FractalKind::BurningShip,
            Self::Newton => FractalKind::Newton,
        }
    }

    #[must_use]
    pub fn default_for(kind: FractalKind) -> Self {
        match kind {
            FractalKind::Mandelbrot => Self::Mandelbrot,
            FractalKind::Julia => Self::Julia {
                c: DEFAULT_JULIA_CONSTANT.c,
            },
            FractalKind::BurningShip => Self::BurningShip,
            FractalKind::Newton => Self::Newton,
        }
    }
}

/// The iteration kernel selected for a render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fractal {
    Mandelbrot(MandelbrotAlgorithm),
    Julia(JuliaAlgorithm),
    BurningShip(BurningShipAlgorithm),
    Newton(NewtonAlgorithm),
}

impl Fractal {
    pub fn new(params: FractalParams, max_iterations: u32) -> Result<Self, FractalError> {
        Ok(match params {
            FractalParams::Mandelbrot => Self::Mandelbrot(MandelbrotAlgorithm::new(max_iterations)?),
            FractalParams::Julia { c } => Self::Julia(JuliaAlgorithm::new(c, max_iterations)?),
            FractalParams::BurningShip => {
                Self::BurningShip(BurningShipAlgorithm::new(max_iterations)?)
            }
            FractalParams::Newton => Self::Newton(NewtonAlgorithm::new(max_iterations)?),
        })
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.params().kind()
    }

    #[must_use]
    pub fn params(&self) -> FractalParams {
        match self {
            Self::Mandelbrot(_) => FractalParams::Mandelbrot,
            Self::Julia(algorithm) => FractalParams::Julia { c: algorithm.c() },
            Self::BurningShip(_) => FractalParams::BurningShip,
            Self::Newton(_) => FractalParams::Newton,
        }
    }
}

impl IterationKernel for Fractal {
    fn max_iterations(&self) -> u32 {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.max_iterations(),
            Self::Julia(algorithm) => algorithm.max_iterations(),
            Self::BurningShip(algorithm) => algorithm.max_iterations(),
            Self::Newton(algorithm) => algorithm.max_iterations(),
        }
    }

    fn iterate(&self, sample: Complex) -> IterationOutcome {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.iterate(sample),
            Self::Julia(algorithm) => algorithm.iterate(sample),
            Self::BurningShip(algorithm) => algorithm.iterate(sample),
            Self::Newton(algorithm) => algorithm.iterate(sample),
        }
    }
}
