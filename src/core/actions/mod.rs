pub mod compute_batch;
pub mod generate_fractal;
pub mod generate_pixel_buffer;
pub mod progress;
pub mod render_fractal;
pub mod zoom_sequence;
