use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::errors::FractalError;

pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), FractalError>;
}
