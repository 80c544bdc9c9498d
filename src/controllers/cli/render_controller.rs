use crate::controllers::cli::settings::{Settings, SettingsError};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_fractal::render_config::RenderConfig;
use crate::core::actions::render_fractal::render_fractal::{
    RenderError, RenderExecutor, RenderReport, render_with_executor, render_with_report,
};
use crate::core::actions::render_fractal::render_request::{RenderRequest, Viewport};
use crate::core::actions::zoom_sequence::{ZoomSequence, ZoomSequenceError};
use crate::core::data::complex::Complex;
use crate::core::fractals::errors::FractalError;
use crate::core::fractals::fractal::FractalParams;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::julia::constants::{JULIA_CONSTANTS, find_julia_constant};
use crate::core::fractals::presets::{Preset, find_preset, presets_for};
use log::info;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_ZOOM_FRAMES: u32 = 120;
pub const DEFAULT_START_ZOOM: f64 = 1.0;
pub const DEFAULT_END_ZOOM: f64 = 1000.0;

#[derive(Debug)]
pub enum CliError {
    Settings(SettingsError),
    Fractal(FractalError),
    Render(RenderError),
    ZoomSequence(ZoomSequenceError),
    UnknownPreset { kind: FractalKind, label: String },
    UnknownJuliaConstant(String),
    IncompleteBounds,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Settings(err) => write!(f, "{}", err),
            Self::Fractal(err) => write!(f, "{}", err),
            Self::Render(err) => write!(f, "{}", err),
            Self::ZoomSequence(err) => write!(f, "{}", err),
            Self::UnknownPreset { kind, label } => {
                write!(f, "{} has no preset named '{}'", kind, label)
            }
            Self::UnknownJuliaConstant(name) => {
                let names: Vec<&str> = JULIA_CONSTANTS.iter().map(|c| c.name).collect();
                write!(
                    f,
                    "unknown julia constant '{}', expected one of: {}",
                    name,
                    names.join(", ")
                )
            }
            Self::IncompleteBounds => write!(
                f,
                "explicit bounds need all of x_min, x_max, y_min and y_max"
            ),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Settings(err) => Some(err),
            Self::Fractal(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::ZoomSequence(err) => Some(err),
            Self::UnknownPreset { .. } | Self::UnknownJuliaConstant(_) | Self::IncompleteBounds => {
                None
            }
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Settings(err)
    }
}

impl From<FractalError> for CliError {
    fn from(err: FractalError) -> Self {
        Self::Fractal(err)
    }
}

impl From<RenderError> for CliError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<ZoomSequenceError> for CliError {
    fn from(err: ZoomSequenceError) -> Self {
        Self::ZoomSequence(err)
    }
}

pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    /// Renders one image and hands it to the presenter.
    pub fn render(&self, settings: &Settings) -> Result<RenderReport, CliError> {
        let request = build_request(settings, None)?;
        let config = build_render_config(settings);
        let (buffer, report) = render_with_report(&request, &config)?;

        let path = settings
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(request.kind()));
        self.presenter.present(&buffer, &path)?;

        Ok(report)
    }

    /// Renders every frame of a zoom sequence, returning the written paths.
    pub fn zoom(&self, settings: &Settings) -> Result<Vec<PathBuf>, CliError> {
        let kind = settings.fractal.unwrap_or_default();
        let sequence = build_zoom_sequence(kind, settings)?;
        let executor = RenderExecutor::new(&build_render_config(settings))?;
        let output_dir = settings
            .output_dir
            .clone()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_DIR).join("zoom"));

        info!(
            "zooming {} from {}x to {}x over {} frames into {}",
            kind,
            sequence.zoom_at(0),
            sequence.zoom_at(sequence.frames() - 1),
            sequence.frames(),
            output_dir.display()
        );

        let mut written = Vec::with_capacity(sequence.frames() as usize);
        for (frame, viewport) in sequence.viewports().enumerate() {
            let request = build_request(settings, Some(viewport))?;
            let (buffer, _) = render_with_executor(&request, &executor)?;

            let path = output_dir.join(frame_file_name(frame));
            self.presenter.present(&buffer, &path)?;
            written.push(path);
        }

        Ok(written)
    }
}

#[must_use]
pub fn frame_file_name(frame: usize) -> String {
    format!("frame_{:06}.ppm", frame)
}

#[must_use]
pub fn default_output_path(kind: FractalKind) -> PathBuf {
    Path::new(DEFAULT_OUTPUT_DIR).join(format!("{}.ppm", kind.cli_name()))
}

#[must_use]
pub fn build_render_config(settings: &Settings) -> RenderConfig {
    RenderConfig {
        backend: settings.backend.unwrap_or_default(),
        threads: settings.threads,
    }
}

/// Builds a validated request. `viewport` replaces whatever view the settings describe.
pub fn build_request(
    settings: &Settings,
    viewport: Option<Viewport>,
) -> Result<RenderRequest, CliError> {
    let kind = settings.fractal.unwrap_or_default();
    let params = build_params(kind, settings)?;
    let viewport = match viewport {
        Some(viewport) => viewport,
        None => build_viewport(kind, settings)?,
    };

    Ok(RenderRequest::new(
        settings.width.unwrap_or(RenderRequest::DEFAULT_WIDTH),
        settings.height.unwrap_or(RenderRequest::DEFAULT_HEIGHT),
        viewport,
        params,
        settings
            .max_iterations
            .unwrap_or_else(|| kind.default_max_iterations()),
        settings.colour_map,
    )?)
}

fn build_params(kind: FractalKind, settings: &Settings) -> Result<FractalParams, CliError> {
    let FractalParams::Julia { c: default_c } = FractalParams::default_for(kind) else {
        return Ok(FractalParams::default_for(kind));
    };

    let named = match &settings.julia_constant {
        Some(name) => {
            find_julia_constant(name)
                .ok_or_else(|| CliError::UnknownJuliaConstant(name.clone()))?
                .c
        }
        None => default_c,
    };

    Ok(FractalParams::Julia {
        c: Complex::new(
            settings.c_real.unwrap_or(named.real),
            settings.c_imag.unwrap_or(named.imag),
        ),
    })
}

fn lookup_preset(kind: FractalKind, settings: &Settings) -> Result<Option<Preset>, CliError> {
    match &settings.preset {
        Some(label) => find_preset(kind, label)
            .map(Some)
            .ok_or_else(|| CliError::UnknownPreset {
                kind,
                label: label.clone(),
            }),
        None => Ok(None),
    }
}

/// Center from explicit coordinates, then the preset, then the default view.
fn resolve_center(
    kind: FractalKind,
    settings: &Settings,
    preset: Option<Preset>,
) -> Result<Complex, CliError> {
    let fallback = match preset {
        Some(preset) => preset.center,
        None => Viewport::default_for(kind)
            .to_complex_rect()
            .map_err(FractalError::from)?
            .center(),
    };

    Ok(Complex::new(
        settings.center_real.unwrap_or(fallback.real),
        settings.center_imag.unwrap_or(fallback.imag),
    ))
}

fn build_viewport(kind: FractalKind, settings: &Settings) -> Result<Viewport, CliError> {
    match (settings.x_min, settings.x_max, settings.y_min, settings.y_max) {
        (Some(x_min), Some(x_max), Some(y_min), Some(y_max)) => {
            return Ok(Viewport::Bounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }
        (None, None, None, None) => {}
        _ => return Err(CliError::IncompleteBounds),
    }

    let preset = lookup_preset(kind, settings)?;
    let centered = preset.is_some()
        || settings.center_real.is_some()
        || settings.center_imag.is_some()
        || settings.zoom.is_some();

    if !centered {
        return Ok(Viewport::default_for(kind));
    }

    let zoom = settings
        .zoom
        .or(preset.map(|preset| preset.zoom))
        .unwrap_or(DEFAULT_START_ZOOM);

    Ok(Viewport::Centered {
        center: resolve_center(kind, settings, preset)?,
        zoom,
    })
}

/// A preset supplies the zoom target and, unless overridden, the final zoom.
pub fn build_zoom_sequence(
    kind: FractalKind,
    settings: &Settings,
) -> Result<ZoomSequence, CliError> {
    let preset = lookup_preset(kind, settings)?;
    let center = resolve_center(kind, settings, preset)?;
    let end_zoom = settings
        .end_zoom
        .or(preset.map(|preset| preset.zoom))
        .unwrap_or(DEFAULT_END_ZOOM);

    Ok(ZoomSequence::new(
        center,
        settings.start_zoom.unwrap_or(DEFAULT_START_ZOOM),
        end_zoom,
        settings.frames.unwrap_or(DEFAULT_ZOOM_FRAMES),
    )?)
}

/// Human-readable table of presets, optionally limited to one kind.
#[must_use]
pub fn list_presets(kind: Option<FractalKind>) -> String {
    let kinds: Vec<FractalKind> = match kind {
        Some(kind) => vec![kind],
        None => FractalKind::ALL.to_vec(),
    };

    kinds
        .into_iter()
        .flat_map(|kind| {
            let header = format!("{} ({})\n", kind, kind.cli_name());
            let rows = presets_for(kind).iter().map(|preset| {
                format!(
                    "  {:<16} center ({}, {}) zoom {}\n",
                    preset.label, preset.center.real, preset.center.imag, preset.zoom
                )
            });

            std::iter::once(header).chain(rows)
        })
        .collect()
}
