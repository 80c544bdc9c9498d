use crate::core::data::pixel_buffer::{PixelBuffer, RGB_BYTES_PER_PIXEL};
use serde::Deserialize;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

pub const PPM_MAX_COLOUR: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PpmFormat {
    /// `P6`, raw bytes after the header.
    #[default]
    Binary,
    /// `P3`, decimal samples, one pixel per line.
    Plain,
}

impl PpmFormat {
    pub const ALL: &'static [Self] = &[Self::Binary, Self::Plain];

    #[must_use]
    pub const fn magic(self) -> &'static str {
        match self {
            Self::Binary => "P6",
            Self::Plain => "P3",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for PpmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPpmFormat(pub String);

impl fmt::Display for UnknownPpmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown ppm format '{}', expected binary (P6) or plain (P3)",
            self.0
        )
    }
}

impl std::error::Error for UnknownPpmFormat {}

impl FromStr for PpmFormat {
    type Err = UnknownPpmFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|format| {
                format.display_name() == wanted || format.magic().eq_ignore_ascii_case(&wanted)
            })
            .ok_or_else(|| UnknownPpmFormat(s.to_string()))
    }
}

/// Writes `buffer` as a PPM image, top row first.
pub fn write_ppm<W: Write>(
    writer: &mut W,
    buffer: &PixelBuffer,
    format: PpmFormat,
) -> io::Result<()> {
    writeln!(writer, "{}", format.magic())?;
    writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
    writeln!(writer, "{}", PPM_MAX_COLOUR)?;

    match format {
        PpmFormat::Binary => writer.write_all(buffer.buffer())?,
        PpmFormat::Plain => {
            for pixel in buffer.buffer().chunks_exact(RGB_BYTES_PER_PIXEL) {
                writeln!(writer, "{} {} {}", pixel[0], pixel[1], pixel[2])?;
            }
        }
    }

    Ok(())
}
