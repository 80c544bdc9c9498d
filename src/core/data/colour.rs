#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiplies every channel by `factor`, truncating toward zero.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        let channel = |c: u8| (f64::from(c) * factor).clamp(0.0, 255.0) as u8;

        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }

    #[must_use]
    pub fn is_black(&self) -> bool {
        *self == Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_truncates() {
        let colour = Colour::new(255, 51, 50).scale(0.5);

        assert_eq!(colour, Colour::new(127, 25, 25));
    }

    #[test]
    fn test_scale_by_one_is_identity() {
        let colour = Colour::new(12, 200, 99);

        assert_eq!(colour.scale(1.0), colour);
    }

    #[test]
    fn test_is_black() {
        assert!(Colour::BLACK.is_black());
        assert!(!Colour::new(0, 0, 1).is_black());
    }
}
