//! Fractal domain: plane geometry, iteration kernels, colour maps and the
//! actions that turn a request into a pixel buffer.

pub mod actions;
pub mod colour_maps;
pub mod data;
pub mod fractals;
pub mod util;
