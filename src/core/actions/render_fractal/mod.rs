//! Request validation, execution settings and the render entry points.

pub mod render_config;
pub mod render_fractal;
pub mod render_request;
