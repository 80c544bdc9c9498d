use crate::core::actions::render_fractal::render_request::Viewport;
use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomSequenceError {
    NoFrames,
    InvalidZoom { zoom: f64 },
}

impl fmt::Display for ZoomSequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFrames => write!(f, "a zoom sequence needs at least one frame"),
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must be finite and greater than zero, got {}", zoom)
            }
        }
    }
}

impl Error for ZoomSequenceError {}

/// Exponential zoom toward a fixed center.
///
/// Frame `i` of `n` has zoom `start * (end / start)^(i / (n - 1))`, so the
/// apparent zoom speed is constant across the sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSequence {
    center: Complex,
    start_zoom: f64,
    end_zoom: f64,
    frames: u32,
}

impl ZoomSequence {
    pub fn new(
        center: Complex,
        start_zoom: f64,
        end_zoom: f64,
        frames: u32,
    ) -> Result<Self, ZoomSequenceError> {
        if frames == 0 {
            return Err(ZoomSequenceError::NoFrames);
        }

        for zoom in [start_zoom, end_zoom] {
            if !zoom.is_finite() || zoom <= 0.0 {
                return Err(ZoomSequenceError::InvalidZoom { zoom });
            }
        }

        Ok(Self {
            center,
            start_zoom,
            end_zoom,
            frames,
        })
    }

    #[must_use]
    pub fn frames(&self) -> u32 {
        self.frames
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom_at(&self, frame: u32) -> f64 {
        if self.frames == 1 {
            return self.start_zoom;
        }

        let progress = f64::from(frame.min(self.frames - 1)) / f64::from(self.frames - 1);

        self.start_zoom * (self.end_zoom / self.start_zoom).powf(progress)
    }

    pub fn viewports(&self) -> impl Iterator<Item = Viewport> + '_ {
        (0..self.frames).map(|frame| Viewport::Centered {
            center: self.center,
            zoom: self.zoom_at(frame),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= expected * 1e-12,
            "{} != {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_first_and_last_frames_hit_requested_zooms() {
        let sequence = ZoomSequence::new(Complex::ZERO, 1.0, 1000.0, 4).unwrap();

        assert_close(sequence.zoom_at(0), 1.0);
        assert_close(sequence.zoom_at(3), 1000.0);
    }

    #[test]
    fn test_zoom_grows_geometrically() {
        let sequence = ZoomSequence::new(Complex::ZERO, 1.0, 1000.0, 4).unwrap();

        assert_close(sequence.zoom_at(1), 10.0);
        assert_close(sequence.zoom_at(2), 100.0);
    }

    #[test]
    fn test_zoom_out_is_supported() {
        let sequence = ZoomSequence::new(Complex::ZERO, 100.0, 1.0, 3).unwrap();

        assert_close(sequence.zoom_at(1), 10.0);
    }

    #[test]
    fn test_single_frame_uses_start_zoom() {
        let sequence = ZoomSequence::new(Complex::ZERO, 5.0, 50.0, 1).unwrap();

        assert_eq!(sequence.zoom_at(0), 5.0);
        assert_eq!(sequence.viewports().count(), 1);
    }

    #[test]
    fn test_viewports_are_centered_frames() {
        let center = Complex::new(-0.16, 1.0405);
        let sequence = ZoomSequence::new(center, 1.0, 150.0, 5).unwrap();
        let viewports: Vec<Viewport> = sequence.viewports().collect();

        assert_eq!(viewports.len(), 5);
        for viewport in viewports {
            assert!(matches!(viewport, Viewport::Centered { center: c, .. } if c == center));
        }
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(
            ZoomSequence::new(Complex::ZERO, 1.0, 2.0, 0),
            Err(ZoomSequenceError::NoFrames)
        );
        assert_eq!(
            ZoomSequence::new(Complex::ZERO, 0.0, 2.0, 3),
            Err(ZoomSequenceError::InvalidZoom { zoom: 0.0 })
        );
        assert_eq!(
            ZoomSequence::new(Complex::ZERO, 1.0, -2.0, 3),
            Err(ZoomSequenceError::InvalidZoom { zoom: -2.0 })
        );
    }
}
