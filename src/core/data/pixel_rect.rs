use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: u32, height: u32 },
    Inverted { top_left: Point, bottom_right: Point },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive: {}x{}", width, height)
            }
            Self::Inverted {
                top_left,
                bottom_right,
            } => {
                write!(
                    f,
                    "pixel rect corners are inverted: top left ({}, {}), bottom right ({}, {})",
                    top_left.x, top_left.y, bottom_right.x, bottom_right.y
                )
            }
        }
    }
}

impl Error for PixelRectError {}

/// Inclusive rectangle of pixel coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        if bottom_right.x < top_left.x || bottom_right.y < top_left.y {
            return Err(PixelRectError::Inverted {
                top_left,
                bottom_right,
            });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Rect anchored at the origin covering a `width` x `height` image.
    pub fn from_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: width - 1,
                y: height - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.bottom_right.x - self.top_left.x + 1
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.bottom_right.y - self.top_left.y + 1
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Full-width band covering rows `start..end` of this rect, relative to its top edge.
    pub fn rows(&self, start: u32, end: u32) -> Result<Self, PixelRectError> {
        if start >= end || end > self.height() {
            return Err(PixelRectError::InvalidSize {
                width: self.width(),
                height: end.saturating_sub(start),
            });
        }

        Self::new(
            Point {
                x: self.top_left.x,
                y: self.top_left.y + start,
            },
            Point {
                x: self.bottom_right.x,
                y: self.top_left.y + end - 1,
            },
        )
    }
}
