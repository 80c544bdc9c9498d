pub mod fractal_algorithm;
pub mod iteration_kernel;
