use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::errors::ColourMapError;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{
    PixelBuffer, PixelBufferData, PixelBufferError, RGB_BYTES_PER_PIXEL,
};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GeneratePixelBufferError {
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<ColourMapError> for GeneratePixelBufferError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Maps row-major values to colours and packs them into a buffer for `pixel_rect`.
pub fn generate_pixel_buffer<T, CMap>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap<T> + ?Sized,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * RGB_BYTES_PER_PIXEL);

    for value in input {
        let Colour { r, g, b } = mapper.map(value)?;

        buffer.extend_from_slice(&[r, g, b]);
    }

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_maps::kinds::ColourMapKind;
    use crate::core::data::iteration_outcome::IterationOutcome;

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap<u8> for StubColourMapSuccess {
        fn map(&self, value: u8) -> Result<Colour, ColourMapError> {
            Ok(Colour {
                r: value,
                g: value,
                b: value,
            })
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap<u8> for StubColourMapFailure {
        fn map(&self, value: u8) -> Result<Colour, ColourMapError> {
            Err(ColourMapError::UnsupportedOutcome {
                outcome: IterationOutcome::Escaped {
                    steps: u32::from(value),
                },
                colour_map: ColourMapKind::Rainbow,
            })
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};
        let pixel_rect = PixelRect::from_size(3, 2).unwrap();
        let expected_buffer: PixelBufferData =
            vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6];

        let results = generate_pixel_buffer(input, &mapper, pixel_rect).unwrap();

        assert_eq!(results.buffer(), &expected_buffer);
        assert_eq!(results.pixel_rect(), pixel_rect);
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4];
        let mapper = StubColourMapFailure {};
        let pixel_rect = PixelRect::from_size(2, 2).unwrap();

        let results = generate_pixel_buffer(input, &mapper, pixel_rect);

        assert!(matches!(results, Err(GeneratePixelBufferError::ColourMap(_))));
    }

    #[test]
    fn test_pixel_rect_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};
        let pixel_rect = PixelRect::from_size(2, 2).unwrap();

        let results = generate_pixel_buffer(input, &mapper, pixel_rect);

        assert_eq!(
            results,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    pixel_rect_size: 12,
                    buffer_size: 18
                }
            ))
        );
    }

    #[test]
    fn test_accepts_trait_object_mapper() {
        let mapper: Box<dyn ColourMap<u8>> = Box::new(StubColourMapSuccess {});
        let pixel_rect = PixelRect::from_size(1, 1).unwrap();

        let results = generate_pixel_buffer(vec![9], mapper.as_ref(), pixel_rect).unwrap();

        assert_eq!(results.buffer(), &vec![9, 9, 9]);
    }
}
