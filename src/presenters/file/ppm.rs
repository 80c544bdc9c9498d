use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::errors::FractalError;
use crate::storage::write_ppm::{PpmFormat, write_ppm};
use log::info;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct PpmFilePresenter {
    format: PpmFormat,
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new(format: PpmFormat) -> Self {
        Self { format }
    }

    #[must_use]
    pub fn format(&self) -> PpmFormat {
        self.format
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), FractalError> {
        if let Some(parent) = filepath.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(filepath)?);
        write_ppm(&mut writer, buffer, self.format)?;
        writer.flush()?;

        info!(
            "saved {}x{} {} ppm to {}",
            buffer.width(),
            buffer.height(),
            self.format,
            filepath.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;

    fn buffer() -> PixelBuffer {
        let pixel_rect = PixelRect::from_size(3, 2).unwrap();

        PixelBuffer::from_data(pixel_rect, (0..18).collect()).unwrap()
    }

    #[test]
    fn test_writes_binary_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ppm");

        PpmFilePresenter::default().present(&buffer(), &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(bytes.len(), "P6\n3 2\n255\n".len() + 18);
    }

    #[test]
    fn test_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frames").join("nested").join("frame.ppm");

        PpmFilePresenter::new(PpmFormat::Plain)
            .present(&buffer(), &path)
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("P3\n3 2\n255\n0 1 2\n"));
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"x").unwrap();

        let result = PpmFilePresenter::default().present(&buffer(), &blocker.join("out.ppm"));

        assert!(matches!(result, Err(FractalError::Io(_))));
    }
}
