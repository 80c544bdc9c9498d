use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::progress::RowProgress;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Generates fractal data in parallel, one rayon task per row.
///
/// Runs on whichever rayon pool is current, so callers choose the thread
/// count with `ThreadPool::install`. Rows are collected in order, which keeps
/// the output row-major and identical to [`generate_fractal`] regardless of
/// which worker finishes first.
///
/// [`generate_fractal`]: crate::core::actions::generate_fractal::generate_fractal::generate_fractal
pub fn generate_fractal_parallel_rayon<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    progress: &RowProgress,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let x_start = pixel_rect.top_left().x;
    let x_end = pixel_rect.bottom_right().x;

    let rows: Vec<Vec<Alg::Success>> = (pixel_rect.top_left().y..=pixel_rect.bottom_right().y)
        .into_par_iter()
        .map(|y| -> Result<Vec<Alg::Success>, Alg::Failure> {
            let row = (x_start..=x_end)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect::<Result<Vec<_>, _>>()?;

            progress.row_done();
            Ok(row)
        })
        .collect::<Result<_, _>>()?;

    Ok(rows.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(u64::from(pixel.x) * 1000 + u64::from(pixel.y))
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel.y == 3 {
                Err(StubError {})
            } else {
                Ok(0)
            }
        }
    }

    fn serial(pixel_rect: PixelRect) -> Vec<u64> {
        let progress = RowProgress::new(pixel_rect.height());
        generate_fractal(pixel_rect, &StubSuccessAlgorithm {}, &progress).unwrap()
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let pixel_rect = PixelRect::from_size(11, 9).unwrap();
        let progress = RowProgress::new(9);

        let rayon_results =
            generate_fractal_parallel_rayon(pixel_rect, &StubSuccessAlgorithm {}, &progress)
                .unwrap();

        assert_eq!(rayon_results, serial(pixel_rect));
        assert_eq!(progress.completed(), 9);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let pixel_rect = PixelRect::from_size(4, 5).unwrap();
        let progress = RowProgress::new(5);

        let result =
            generate_fractal_parallel_rayon(pixel_rect, &StubFailureAlgorithm {}, &progress);

        assert_eq!(result, Err(StubError {}));
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let pixel_rect = PixelRect::from_size(1, 1).unwrap();
        let progress = RowProgress::new(1);

        let rayon_results =
            generate_fractal_parallel_rayon(pixel_rect, &StubSuccessAlgorithm {}, &progress)
                .unwrap();

        assert_eq!(rayon_results, vec![0]);
    }

    #[test]
    fn test_rayon_with_offset_band() {
        let pixel_rect = PixelRect::new(Point { x: 0, y: 40 }, Point { x: 99, y: 59 }).unwrap();
        let progress = RowProgress::new(20);

        let rayon_results =
            generate_fractal_parallel_rayon(pixel_rect, &StubSuccessAlgorithm {}, &progress)
                .unwrap();

        assert_eq!(rayon_results, serial(pixel_rect));
    }

    #[test]
    fn test_rayon_in_dedicated_pool() {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(3)
            .build()
            .unwrap();
        let pixel_rect = PixelRect::from_size(64, 48).unwrap();
        let progress = RowProgress::new(48);

        let rayon_results = pool
            .install(|| {
                generate_fractal_parallel_rayon(pixel_rect, &StubSuccessAlgorithm {}, &progress)
            })
            .unwrap();

        assert_eq!(rayon_results, serial(pixel_rect));
    }
}
