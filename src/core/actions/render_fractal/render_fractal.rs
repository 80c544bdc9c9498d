use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::progress::RowProgress;
use crate::core::actions::render_fractal::render_config::{Backend, RenderConfig};
use crate::core::actions::render_fractal::render_request::RenderRequest;
use crate::core::colour_maps::errors::ColourMapError;
use crate::core::colour_maps::factory::colour_map_factory;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::fractals::sampler::FractalSampler;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use log::{debug, info};
use std::error::Error;
use std::fmt;
use std::ops::Range;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub enum RenderError {
    Sampling(PixelToComplexCoordsError),
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
    InvalidRows(PixelRectError),
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sampling(err) => write!(f, "sampling error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::InvalidRows(err) => write!(f, "invalid row range: {}", err),
            Self::ThreadPool(err) => write!(f, "failed to build thread pool: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sampling(err) => Some(err),
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::InvalidRows(err) => Some(err),
            Self::ThreadPool(err) => Some(err),
        }
    }
}

impl From<PixelToComplexCoordsError> for RenderError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Sampling(err)
    }
}

impl From<GeneratePixelBufferError> for RenderError {
    fn from(err: GeneratePixelBufferError) -> Self {
        match err {
            GeneratePixelBufferError::ColourMap(err) => Self::ColourMap(err),
            GeneratePixelBufferError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for RenderError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}

/// Timing for one completed render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderReport {
    pub pixels: u64,
    pub elapsed: Duration,
    pub backend: Backend,
    pub threads: usize,
}

impl RenderReport {
    #[must_use]
    pub fn pixels_per_second(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();

        if seconds > 0.0 {
            self.pixels as f64 / seconds
        } else {
            self.pixels as f64
        }
    }
}

impl fmt::Display for RenderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pixels in {:.2?} on {} backend with {} thread(s), {:.0} pixels/s",
            self.pixels,
            self.elapsed,
            self.backend,
            self.threads,
            self.pixels_per_second()
        )
    }
}

/// Where a render runs: inline, or on a rayon pool built once and reused.
pub enum RenderExecutor {
    Serial,
    Parallel(rayon::ThreadPool),
}

impl RenderExecutor {
    pub fn new(config: &RenderConfig) -> Result<Self, RenderError> {
        match config.backend {
            Backend::Serial => Ok(Self::Serial),
            Backend::Parallel => {
                let mut builder = rayon::ThreadPoolBuilder::new();
                if let Some(threads) = config.threads {
                    builder = builder.num_threads(threads.get());
                }
                let pool = builder.build()?;
                debug!("built pool with {} thread(s)", pool.current_num_threads());

                Ok(Self::Parallel(pool))
            }
        }
    }

    #[must_use]
    pub fn backend(&self) -> Backend {
        match self {
            Self::Serial => Backend::Serial,
            Self::Parallel(_) => Backend::Parallel,
        }
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        match self {
            Self::Serial => 1,
            Self::Parallel(pool) => pool.current_num_threads(),
        }
    }
}

impl fmt::Debug for RenderExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderExecutor")
            .field("backend", &self.backend())
            .field("threads", &self.threads())
            .finish()
    }
}

/// Renders the full image described by `request`.
pub fn render(request: &RenderRequest, config: &RenderConfig) -> Result<PixelBuffer, RenderError> {
    render_with_report(request, config).map(|(buffer, _)| buffer)
}

pub fn render_with_report(
    request: &RenderRequest,
    config: &RenderConfig,
) -> Result<(PixelBuffer, RenderReport), RenderError> {
    render_with_executor(request, &RenderExecutor::new(config)?)
}

/// Renders the full image on an existing executor, for callers rendering many frames.
pub fn render_with_executor(
    request: &RenderRequest,
    executor: &RenderExecutor,
) -> Result<(PixelBuffer, RenderReport), RenderError> {
    render_pixel_rect(request, executor, request.pixel_rect())
}

/// Renders rows `rows` of the full image, sampled with the full image's mapping.
///
/// Concatenating the buffers of consecutive regions yields the full render.
pub fn render_region(
    request: &RenderRequest,
    config: &RenderConfig,
    rows: Range<u32>,
) -> Result<PixelBuffer, RenderError> {
    let band = request
        .pixel_rect()
        .rows(rows.start, rows.end)
        .map_err(RenderError::InvalidRows)?;

    render_pixel_rect(request, &RenderExecutor::new(config)?, band).map(|(buffer, _)| buffer)
}

fn render_pixel_rect(
    request: &RenderRequest,
    executor: &RenderExecutor,
    pixel_rect: PixelRect,
) -> Result<(PixelBuffer, RenderReport), RenderError> {
    info!("rendering {}", request);
    debug!(
        "rows {}..={} on {} backend",
        pixel_rect.top_left().y,
        pixel_rect.bottom_right().y,
        executor.backend()
    );

    let start = Instant::now();
    let sampler = FractalSampler::new(
        request.pixel_rect(),
        request.complex_rect(),
        request.fractal(),
    );
    let progress = RowProgress::new(pixel_rect.height());

    let outcomes = match executor {
        RenderExecutor::Serial => generate_fractal(pixel_rect, &sampler, &progress)?,
        RenderExecutor::Parallel(pool) => pool.install(|| {
            generate_fractal_parallel_rayon(pixel_rect, &sampler, &progress)
        })?,
    };

    let colour_map = colour_map_factory(request.colour_map(), request.max_iterations());
    let buffer = generate_pixel_buffer(outcomes, colour_map.as_ref(), pixel_rect)?;

    let report = RenderReport {
        pixels: pixel_rect.size(),
        elapsed: start.elapsed(),
        backend: executor.backend(),
        threads: executor.threads(),
    };
    info!("finished: {}", report);

    Ok((buffer, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_fractal::render_request::Viewport;
    use crate::core::colour_maps::kinds::ColourMapKind;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::fractals::fractal::FractalParams;
    use crate::core::fractals::fractal_kinds::FractalKind;
    use std::num::NonZeroUsize;

    fn small_request(kind: FractalKind) -> RenderRequest {
        RenderRequest::new(
            48,
            36,
            Viewport::default_for(kind),
            FractalParams::default_for(kind),
            64,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_buffer_has_three_bytes_per_pixel() {
        let request = small_request(FractalKind::Mandelbrot);

        let buffer = render(&request, &RenderConfig::serial()).unwrap();

        assert_eq!(buffer.width(), 48);
        assert_eq!(buffer.height(), 36);
        assert_eq!(buffer.buffer_size(), 48 * 36 * 3);
    }

    #[test]
    fn test_render_is_deterministic() {
        let request = small_request(FractalKind::Julia);
        let config = RenderConfig::default();

        let first = render(&request, &config).unwrap();
        let second = render(&request, &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_serial_for_every_kind() {
        for &kind in FractalKind::ALL {
            let request = small_request(kind);

            let serial = render(&request, &RenderConfig::serial()).unwrap();
            let parallel =
                render(&request, &RenderConfig::parallel(NonZeroUsize::new(3))).unwrap();

            assert_eq!(serial, parallel, "{} differs between backends", kind);
        }
    }

    #[test]
    fn test_thread_count_does_not_change_output() {
        let request = small_request(FractalKind::BurningShip);

        let one = render(&request, &RenderConfig::parallel(NonZeroUsize::new(1))).unwrap();
        let many = render(&request, &RenderConfig::parallel(NonZeroUsize::new(8))).unwrap();

        assert_eq!(one.buffer(), many.buffer());
    }

    #[test]
    fn test_regions_concatenate_to_full_render() {
        for &kind in FractalKind::ALL {
            let request = small_request(kind);
            let config = RenderConfig::default();
            let half = request.height() / 2;

            let full = render(&request, &config).unwrap();
            let top = render_region(&request, &config, 0..half).unwrap();
            let bottom = render_region(&request, &config, half..request.height()).unwrap();

            let mut joined = top.into_bytes();
            joined.extend_from_slice(bottom.buffer());

            assert_eq!(&joined, full.buffer(), "{} partition differs", kind);
        }
    }

    #[test]
    fn test_region_rejects_empty_or_out_of_range_rows() {
        let request = small_request(FractalKind::Mandelbrot);
        let config = RenderConfig::serial();

        assert!(matches!(
            render_region(&request, &config, 5..5),
            Err(RenderError::InvalidRows(_))
        ));
        assert!(matches!(
            render_region(&request, &config, 30..40),
            Err(RenderError::InvalidRows(_))
        ));
    }

    #[test]
    fn test_single_pixel_render_samples_viewport_midpoint() {
        // the midpoint of these bounds is the origin, which never escapes
        let request = RenderRequest::new(
            1,
            1,
            Viewport::Bounds {
                x_min: -1.0,
                x_max: 1.0,
                y_min: -1.0,
                y_max: 1.0,
            },
            FractalParams::Mandelbrot,
            32,
            None,
        )
        .unwrap();

        let buffer = render(&request, &RenderConfig::serial()).unwrap();

        assert_eq!(buffer.buffer(), &vec![0, 0, 0]);
    }

    #[test]
    fn test_newton_root_pixel_gets_full_root_colour() {
        // 3x3 grid over [0,2]x[-1,1] puts the center pixel exactly on root 1
        let request = RenderRequest::new(
            3,
            3,
            Viewport::Bounds {
                x_min: 0.0,
                x_max: 2.0,
                y_min: -1.0,
                y_max: 1.0,
            },
            FractalParams::Newton,
            100,
            Some(ColourMapKind::RootShading),
        )
        .unwrap();

        let buffer = render(&request, &RenderConfig::serial()).unwrap();

        assert_eq!(
            buffer.pixel(Point { x: 1, y: 1 }).unwrap(),
            Colour::new(255, 50, 50)
        );
    }

    #[test]
    fn test_first_row_samples_minimum_imaginary_part() {
        // single column at re = 0: row 0 is im = -3 (escapes at once), row 1 is the origin
        let request = RenderRequest::new(
            1,
            2,
            Viewport::Bounds {
                x_min: -1.0,
                x_max: 1.0,
                y_min: -3.0,
                y_max: 0.0,
            },
            FractalParams::Mandelbrot,
            64,
            Some(ColourMapKind::Rainbow),
        )
        .unwrap();

        let buffer = render(&request, &RenderConfig::serial()).unwrap();

        assert_eq!(buffer.buffer(), &vec![255, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_report_counts_pixels() {
        let request = small_request(FractalKind::Newton);

        let (_, report) = render_with_report(&request, &RenderConfig::serial()).unwrap();

        assert_eq!(report.pixels, 48 * 36);
        assert_eq!(report.threads, 1);
        assert_eq!(report.backend, Backend::Serial);
        assert!(report.pixels_per_second() > 0.0);
    }

    #[test]
    fn test_parallel_report_uses_configured_threads() {
        let request = small_request(FractalKind::Mandelbrot);

        let (_, report) =
            render_with_report(&request, &RenderConfig::parallel(NonZeroUsize::new(2))).unwrap();

        assert_eq!(report.threads, 2);
    }

    #[test]
    fn test_executor_is_reused_across_renders() {
        let executor = RenderExecutor::new(&RenderConfig::parallel(NonZeroUsize::new(2))).unwrap();
        let mandelbrot = small_request(FractalKind::Mandelbrot);
        let julia = small_request(FractalKind::Julia);

        let (first, first_report) = render_with_executor(&mandelbrot, &executor).unwrap();
        let (second, second_report) = render_with_executor(&julia, &executor).unwrap();

        assert_eq!(first, render(&mandelbrot, &RenderConfig::serial()).unwrap());
        assert_eq!(second, render(&julia, &RenderConfig::serial()).unwrap());
        assert_eq!(first_report.threads, 2);
        assert_eq!(second_report.threads, 2);
        assert_eq!(executor.backend(), Backend::Parallel);
    }

    #[test]
    fn test_serial_executor_reports_one_thread() {
        let executor = RenderExecutor::new(&RenderConfig::serial()).unwrap();

        assert_eq!(executor.backend(), Backend::Serial);
        assert_eq!(executor.threads(), 1);
    }
}
