use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    Newton,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::BurningShip,
        Self::Newton,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "Burning Ship",
            Self::Newton => "Newton",
        }
    }

    /// Identifier accepted on the command line and in settings files.
    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::BurningShip => "burning-ship",
            Self::Newton => "newton",
        }
    }

    #[must_use]
    pub const fn is_escape_time(self) -> bool {
        !matches!(self, Self::Newton)
    }

    #[must_use]
    pub const fn default_max_iterations(self) -> u32 {
        match self {
            Self::Newton => 100,
            _ => 1000,
        }
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFractalKind(pub String);

impl fmt::Display for UnknownFractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = FractalKind::ALL.iter().map(|k| k.cli_name()).collect();
        write!(
            f,
            "unknown fractal kind '{}', expected one of: {}",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownFractalKind {}

impl FromStr for FractalKind {
    type Err = UnknownFractalKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.cli_name() == wanted)
            .ok_or_else(|| UnknownFractalKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(FractalKind::ALL.first(), Some(&FractalKind::default()));
    }

    #[test]
    fn test_from_str_accepts_cli_names() {
        for &kind in FractalKind::ALL {
            assert_eq!(kind.cli_name().parse::<FractalKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_from_str_is_lenient_about_case_and_underscores() {
        assert_eq!("Burning_Ship".parse(), Ok(FractalKind::BurningShip));
        assert_eq!(" NEWTON ".parse(), Ok(FractalKind::Newton));
    }

    #[test]
    fn test_from_str_rejects_unknown_kind() {
        let err = "sierpinski".parse::<FractalKind>().unwrap_err();

        assert_eq!(err, UnknownFractalKind("sierpinski".to_string()));
        assert!(err.to_string().contains("burning-ship"));
    }

    #[test]
    fn test_only_newton_is_not_escape_time() {
        assert!(FractalKind::Mandelbrot.is_escape_time());
        assert!(FractalKind::Julia.is_escape_time());
        assert!(FractalKind::BurningShip.is_escape_time());
        assert!(!FractalKind::Newton.is_escape_time());
    }

    #[test]
    fn test_deserializes_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            fractal: FractalKind,
        }

        let parsed: Wrapper = toml::from_str("fractal = \"burning-ship\"").unwrap();

        assert_eq!(parsed.fractal, FractalKind::BurningShip);
    }
}
