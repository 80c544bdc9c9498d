//! The four iteration kernels and the enum that dispatches between them.

pub mod burning_ship;
pub mod errors;
pub mod fractal;
pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;
pub mod newton;
pub mod presets;
pub mod sampler;
