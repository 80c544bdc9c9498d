use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::ports::iteration_kernel::IterationKernel;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::iteration_outcome::IterationOutcome;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Runs a kernel on the plane sample of each pixel of an image.
///
/// `pixel_rect` is always the full image so that any sub-region renders with
/// the same mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalSampler<K> {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    kernel: K,
}

impl<K: IterationKernel> FractalSampler<K> {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, complex_rect: ComplexRect, kernel: K) -> Self {
        Self {
            pixel_rect,
            complex_rect,
            kernel,
        }
    }

    #[must_use]
    pub fn kernel(&self) -> &K {
        &self.kernel
    }
}

impl<K: IterationKernel> FractalAlgorithm for FractalSampler<K> {
    type Success = IterationOutcome;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let sample = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;

        Ok(self.kernel.iterate(sample))
    }
}
