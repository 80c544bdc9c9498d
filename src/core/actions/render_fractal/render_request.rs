use crate::core::actions::generate_fractal::ports::iteration_kernel::IterationKernel;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::errors::FractalError;
use crate::core::fractals::fractal::{Fractal, FractalParams};
use crate::core::fractals::fractal_kinds::FractalKind;
use std::fmt;

/// Region of the plane to sample, as explicit bounds or a center and zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viewport {
    Bounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
    Centered {
        center: Complex,
        zoom: f64,
    },
}

impl Viewport {
    pub fn to_complex_rect(&self) -> Result<ComplexRect, ComplexRectError> {
        match *self {
            Self::Bounds {
                x_min,
                x_max,
                y_min,
                y_max,
            } => ComplexRect::from_bounds(x_min, x_max, y_min, y_max),
            Self::Centered { center, zoom } => ComplexRect::from_center(center, zoom),
        }
    }

    /// Overview region used when a request names no viewport.
    #[must_use]
    pub fn default_for(kind: FractalKind) -> Self {
        match kind {
            FractalKind::Mandelbrot => Self::Bounds {
                x_min: -2.0,
                x_max: 1.0,
                y_min: -1.2,
                y_max: 1.2,
            },
            FractalKind::Julia => Self::Bounds {
                x_min: -2.0,
                x_max: 2.0,
                y_min: -1.5,
                y_max: 1.5,
            },
            FractalKind::BurningShip => Self::Centered {
                center: Complex::new(-0.5, -0.5),
                zoom: 1.0,
            },
            FractalKind::Newton => Self::Centered {
                center: Complex::ZERO,
                zoom: 1.0,
            },
        }
    }
}

/// A validated, immutable description of one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    fractal: Fractal,
    colour_map: ColourMapKind,
}

impl RenderRequest {
    pub const DEFAULT_WIDTH: u32 = 800;
    pub const DEFAULT_HEIGHT: u32 = 600;

    pub fn new(
        width: u32,
        height: u32,
        viewport: Viewport,
        params: FractalParams,
        max_iterations: u32,
        colour_map: Option<ColourMapKind>,
    ) -> Result<Self, FractalError> {
        let pixel_rect = PixelRect::from_size(width, height)
            .map_err(|_| FractalError::InvalidDimensions { width, height })?;
        let complex_rect = viewport.to_complex_rect()?;
        let fractal = Fractal::new(params, max_iterations)?;

        let kind = params.kind();
        let colour_map = colour_map.unwrap_or(ColourMapKind::default_for(kind));

        if !colour_map.supports(kind) {
            return Err(FractalError::IncompatibleColourMap {
                fractal: kind,
                colour_map,
            });
        }

        Ok(Self {
            pixel_rect,
            complex_rect,
            fractal,
            colour_map,
        })
    }

    /// Request with every setting at its default for `kind`.
    pub fn default_for(kind: FractalKind) -> Result<Self, FractalError> {
        Self::new(
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
            Viewport::default_for(kind),
            FractalParams::default_for(kind),
            kind.default_max_iterations(),
            None,
        )
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn complex_rect(&self) -> ComplexRect {
        self.complex_rect
    }

    #[must_use]
    pub fn fractal(&self) -> Fractal {
        self.fractal
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.fractal.kind()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.fractal.max_iterations()
    }

    #[must_use]
    pub fn colour_map(&self) -> ColourMapKind {
        self.colour_map
    }
}

impl fmt::Display for RenderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}x{}, {} iterations, viewport {}, {} colours",
            self.kind(),
            self.width(),
            self.height(),
            self.max_iterations(),
            self.complex_rect,
            self.colour_map
        )
    }
}
