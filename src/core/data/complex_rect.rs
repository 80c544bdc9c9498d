use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

/// Side length of the square region covered at zoom 1 by a centered view.
pub const ZOOM_BASE_SCALE: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
    NonFiniteBounds,
    NonPositiveZoom { zoom: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFiniteBounds => write!(f, "complex rect bounds must be finite"),
            Self::NonPositiveZoom { zoom } => {
                write!(f, "zoom must be greater than zero, got {}", zoom)
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned region of the complex plane.
///
/// `top_left` holds the minimum real and imaginary parts and is sampled by
/// pixel (0, 0); `bottom_right` holds the maxima.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let all_finite = [
            top_left.real,
            top_left.imag,
            bottom_right.real,
            bottom_right.imag,
        ]
        .iter()
        .all(|v| v.is_finite());

        if !all_finite {
            return Err(ComplexRectError::NonFiniteBounds);
        }

        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn from_bounds(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Result<Self, ComplexRectError> {
        Self::new(Complex::new(x_min, y_min), Complex::new(x_max, y_max))
    }

    /// Square region of side `4.0 / zoom` centred on `center`.
    pub fn from_center(center: Complex, zoom: f64) -> Result<Self, ComplexRectError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ComplexRectError::NonPositiveZoom { zoom });
        }

        let half = ZOOM_BASE_SCALE / zoom / 2.0;

        Self::from_bounds(
            center.real - half,
            center.real + half,
            center.imag - half,
            center.imag + half,
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(
            self.top_left.real + self.width() / 2.0,
            self.top_left.imag + self.height() / 2.0,
        )
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.top_left.real <= point.real
            && self.top_left.imag <= point.imag
            && self.bottom_right.real >= point.real
            && self.bottom_right.imag >= point.imag
    }
}

impl fmt::Display for ComplexRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.top_left.real, self.bottom_right.real, self.top_left.imag, self.bottom_right.imag
        )
    }
}
