use crate::core::fractals::fractal_kinds::FractalKind;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColourMapKind {
    #[default]
    Rainbow,
    Flame,
    Spectrum,
    RootShading,
}

impl ColourMapKind {
    pub const ALL: &'static [Self] = &[
        Self::Rainbow,
        Self::Flame,
        Self::Spectrum,
        Self::RootShading,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rainbow => "Rainbow",
            Self::Flame => "Flame",
            Self::Spectrum => "Spectrum",
            Self::RootShading => "Root shading",
        }
    }

    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Rainbow => "rainbow",
            Self::Flame => "flame",
            Self::Spectrum => "spectrum",
            Self::RootShading => "root-shading",
        }
    }

    /// Map used when a request does not name one.
    #[must_use]
    pub const fn default_for(fractal: FractalKind) -> Self {
        match fractal {
            FractalKind::Mandelbrot | FractalKind::Julia => Self::Rainbow,
            FractalKind::BurningShip => Self::Flame,
            FractalKind::Newton => Self::RootShading,
        }
    }

    /// Continuous maps shade escape counts; root shading needs root ids.
    #[must_use]
    pub const fn supports(self, fractal: FractalKind) -> bool {
        match self {
            Self::RootShading => !fractal.is_escape_time(),
            Self::Rainbow | Self::Flame | Self::Spectrum => fractal.is_escape_time(),
        }
    }
}

impl fmt::Display for ColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColourMapKind(pub String);

impl fmt::Display for UnknownColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = ColourMapKind::ALL.iter().map(|k| k.cli_name()).collect();
        write!(
            f,
            "unknown colour map '{}', expected one of: {}",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownColourMapKind {}

impl FromStr for ColourMapKind {
    type Err = UnknownColourMapKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.cli_name() == wanted)
            .ok_or_else(|| UnknownColourMapKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(ColourMapKind::ALL.first(), Some(&ColourMapKind::default()));
    }

    #[test]
    fn test_default_map_is_supported_by_every_fractal() {
        for &fractal in FractalKind::ALL {
            assert!(ColourMapKind::default_for(fractal).supports(fractal));
        }
    }

    #[test]
    fn test_root_shading_only_supports_newton() {
        assert!(ColourMapKind::RootShading.supports(FractalKind::Newton));
        assert!(!ColourMapKind::RootShading.supports(FractalKind::Mandelbrot));
        assert!(!ColourMapKind::Flame.supports(FractalKind::Newton));
        assert!(ColourMapKind::Spectrum.supports(FractalKind::BurningShip));
    }

    #[test]
    fn test_from_str_round_trips_cli_names() {
        for &kind in ColourMapKind::ALL {
            assert_eq!(kind.cli_name().parse::<ColourMapKind>(), Ok(kind));
        }
        assert!("sepia".parse::<ColourMapKind>().is_err());
    }
}
