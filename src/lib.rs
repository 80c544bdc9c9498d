pub mod controllers;
pub mod core;
pub mod presenters;
pub mod storage;

pub use controllers::cli::args::{Cli, Command};
pub use controllers::cli::render_controller::{CliError, RenderController, list_presets};
pub use controllers::cli::settings::{Settings, SettingsError};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::compute_batch::{BatchError, compute_batch};
pub use crate::core::actions::generate_fractal::ports::iteration_kernel::IterationKernel;
pub use crate::core::actions::render_fractal::render_config::{Backend, RenderConfig};
pub use crate::core::actions::render_fractal::render_fractal::{
    RenderError, RenderExecutor, RenderReport, render, render_region, render_with_executor,
    render_with_report,
};
pub use crate::core::actions::render_fractal::render_request::{RenderRequest, Viewport};
pub use crate::core::actions::zoom_sequence::{ZoomSequence, ZoomSequenceError};
pub use crate::core::colour_maps::kinds::ColourMapKind;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration_outcome::IterationOutcome;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::fractals::errors::FractalError;
pub use crate::core::fractals::fractal::{Fractal, FractalParams};
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::fractals::presets::{Preset, find_preset, presets_for};
pub use presenters::file::ppm::PpmFilePresenter;
pub use storage::write_ppm::{PpmFormat, write_ppm};
