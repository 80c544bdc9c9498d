use crate::core::actions::render_fractal::render_config::Backend;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::storage::write_ppm::PpmFormat;
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum SettingsError {
    Io { path: PathBuf, source: io::Error },
    Parse(toml::de::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "could not read settings file {}: {}", path.display(), source)
            }
            Self::Parse(err) => write!(f, "invalid settings file: {}", err),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<toml::de::Error> for SettingsError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err)
    }
}

/// Every option the `render` and `zoom` commands accept.
///
/// Loaded from a TOML file and overlaid with command-line flags. Unset fields
/// fall back to the per-kind defaults when the request is built.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub fractal: Option<FractalKind>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub max_iterations: Option<u32>,
    pub colour_map: Option<ColourMapKind>,
    pub julia_constant: Option<String>,
    pub c_real: Option<f64>,
    pub c_imag: Option<f64>,

    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub center_real: Option<f64>,
    pub center_imag: Option<f64>,
    pub zoom: Option<f64>,
    pub preset: Option<String>,

    pub backend: Option<Backend>,
    pub threads: Option<NonZeroUsize>,

    pub format: Option<PpmFormat>,
    pub output: Option<PathBuf>,

    pub start_zoom: Option<f64>,
    pub end_zoom: Option<f64>,
    pub frames: Option<u32>,
    pub output_dir: Option<PathBuf>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    /// True when any of bounds, center, zoom or preset is set.
    #[must_use]
    pub fn names_viewport(&self) -> bool {
        self.x_min.is_some()
            || self.x_max.is_some()
            || self.y_min.is_some()
            || self.y_max.is_some()
            || self.center_real.is_some()
            || self.center_imag.is_some()
            || self.zoom.is_some()
            || self.preset.is_some()
    }

    /// Fields set in `overrides` replace the ones in `self`.
    ///
    /// The viewport is taken from one layer only: if `overrides` names any
    /// viewport field, every viewport field of `self` is dropped.
    #[must_use]
    pub fn overlay(self, overrides: Settings) -> Settings {
        let base = if overrides.names_viewport() {
            Settings {
                x_min: None,
                x_max: None,
                y_min: None,
                y_max: None,
                center_real: None,
                center_imag: None,
                zoom: None,
                preset: None,
                ..self
            }
        } else {
            self
        };

        base.merge(overrides)
    }

    fn merge(self, overrides: Settings) -> Settings {
        Settings {
            fractal: overrides.fractal.or(self.fractal),
            width: overrides.width.or(self.width),
            height: overrides.height.or(self.height),
            max_iterations: overrides.max_iterations.or(self.max_iterations),
            colour_map: overrides.colour_map.or(self.colour_map),
            julia_constant: overrides.julia_constant.or(self.julia_constant),
            c_real: overrides.c_real.or(self.c_real),
            c_imag: overrides.c_imag.or(self.c_imag),
            x_min: overrides.x_min.or(self.x_min),
            x_max: overrides.x_max.or(self.x_max),
            y_min: overrides.y_min.or(self.y_min),
            y_max: overrides.y_max.or(self.y_max),
            center_real: overrides.center_real.or(self.center_real),
            center_imag: overrides.center_imag.or(self.center_imag),
            zoom: overrides.zoom.or(self.zoom),
            preset: overrides.preset.or(self.preset),
            backend: overrides.backend.or(self.backend),
            threads: overrides.threads.or(self.threads),
            format: overrides.format.or(self.format),
            output: overrides.output.or(self.output),
            start_zoom: overrides.start_zoom.or(self.start_zoom),
            end_zoom: overrides.end_zoom.or(self.end_zoom),
            frames: overrides.frames.or(self.frames),
            output_dir: overrides.output_dir.or(self.output_dir),
        }
    }
}
