pub mod generate_fractal;
pub mod generate_fractal_parallel_rayon;
pub mod ports;
