use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Position of `offset` along an axis of `extent` pixels, in `[0, 1]`.
///
/// The first and last pixels land exactly on the bounds; a single-pixel axis
/// samples its midpoint.
fn axis_fraction(offset: u32, extent: u32) -> f64 {
    if extent <= 1 {
        0.5
    } else {
        f64::from(offset) / f64::from(extent - 1)
    }
}

/// Maps a pixel of the full image to its complex sample.
///
/// Row 0 samples the minimum imaginary part of `complex_rect`.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_pixel_x = pixel_position.x - pixel_rect.top_left().x;
    let relative_pixel_y = pixel_position.y - pixel_rect.top_left().y;
    let real = complex_rect.top_left().real
        + axis_fraction(relative_pixel_x, pixel_rect.width()) * complex_rect.width();
    let imag = complex_rect.top_left().imag
        + axis_fraction(relative_pixel_y, pixel_rect.height()) * complex_rect.height();

    Ok(Complex { real, imag })
}
