use serde::Deserialize;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// How the pixel grid is driven. Every backend produces identical buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    #[default]
    Parallel,
    Serial,
}

impl Backend {
    pub const ALL: &'static [Self] = &[Self::Parallel, Self::Serial];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Parallel => "parallel",
            Self::Serial => "serial",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBackend(pub String);

impl fmt::Display for UnknownBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown backend '{}', expected parallel or serial",
            self.0
        )
    }
}

impl std::error::Error for UnknownBackend {}

impl FromStr for Backend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|backend| backend.display_name() == wanted)
            .ok_or_else(|| UnknownBackend(s.to_string()))
    }
}

/// Execution settings passed explicitly to every render call.
///
/// `threads: None` lets rayon pick its default worker count; it is ignored by
/// the serial backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub backend: Backend,
    pub threads: Option<NonZeroUsize>,
}

impl RenderConfig {
    #[must_use]
    pub fn serial() -> Self {
        Self {
            backend: Backend::Serial,
            threads: None,
        }
    }

    #[must_use]
    pub fn parallel(threads: Option<NonZeroUsize>) -> Self {
        Self {
            backend: Backend::Parallel,
            threads,
        }
    }
}
