use crate::controllers::cli::settings::Settings;
use crate::core::actions::render_fractal::render_config::Backend;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::storage::write_ppm::PpmFormat;
use clap::{Args, Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fractal_renderer",
    version,
    about = "Renders Mandelbrot, Julia, Burning Ship and Newton fractals to PPM images"
)]
pub struct Cli {
    /// TOML settings file. Flags given on the command line take precedence
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a single image
    Render(RenderArgs),
    /// Render a sequence of frames zooming toward a point
    Zoom(ZoomArgs),
    /// List the named views for each fractal kind
    Presets(PresetsArgs),
}

/// Options shared by every rendering command.
#[derive(Args, Debug, Clone, Default)]
pub struct ImageArgs {
    /// mandelbrot, julia, burning-ship or newton
    #[arg(short, long)]
    pub fractal: Option<FractalKind>,
    /// Output image width in pixels
    #[arg(long)]
    pub width: Option<u32>,
    /// Output image height in pixels
    #[arg(long)]
    pub height: Option<u32>,
    /// Iteration cap per pixel
    #[arg(short = 'i', long)]
    pub max_iterations: Option<u32>,
    /// rainbow, flame, spectrum or root-shading
    #[arg(long)]
    pub colour_map: Option<ColourMapKind>,
    /// Named Julia constant: Classic, Dragon, Spiral or Dendrite
    #[arg(long)]
    pub julia_constant: Option<String>,
    /// Real part of the Julia constant
    #[arg(long, allow_negative_numbers = true)]
    pub c_real: Option<f64>,
    /// Imaginary part of the Julia constant
    #[arg(long, allow_negative_numbers = true)]
    pub c_imag: Option<f64>,
    /// parallel or serial
    #[arg(long)]
    pub backend: Option<Backend>,
    /// Worker threads for the parallel backend
    #[arg(short, long)]
    pub threads: Option<NonZeroUsize>,
    /// binary (P6) or plain (P3)
    #[arg(long)]
    pub format: Option<PpmFormat>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    #[command(flatten)]
    pub image: ImageArgs,

    /// Left edge of the viewport
    #[arg(long, allow_negative_numbers = true)]
    pub x_min: Option<f64>,
    /// Right edge of the viewport
    #[arg(long, allow_negative_numbers = true)]
    pub x_max: Option<f64>,
    /// Lower imaginary bound, drawn on the first row
    #[arg(long, allow_negative_numbers = true)]
    pub y_min: Option<f64>,
    /// Upper imaginary bound, drawn on the last row
    #[arg(long, allow_negative_numbers = true)]
    pub y_max: Option<f64>,
    /// Real part of the view center
    #[arg(long, allow_negative_numbers = true)]
    pub center_real: Option<f64>,
    /// Imaginary part of the view center
    #[arg(long, allow_negative_numbers = true)]
    pub center_imag: Option<f64>,
    /// Magnification; zoom 1 spans 4 units
    #[arg(short, long)]
    pub zoom: Option<f64>,
    /// Start from a named view (see `presets`)
    #[arg(short, long)]
    pub preset: Option<String>,
    /// Output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ZoomArgs {
    #[command(flatten)]
    pub image: ImageArgs,

    /// Real part of the zoom target
    #[arg(long, allow_negative_numbers = true)]
    pub center_real: Option<f64>,
    /// Imaginary part of the zoom target
    #[arg(long, allow_negative_numbers = true)]
    pub center_imag: Option<f64>,
    /// Zoom toward a named view (see `presets`)
    #[arg(short, long)]
    pub preset: Option<String>,
    #[arg(long)]
    pub start_zoom: Option<f64>,
    #[arg(long)]
    pub end_zoom: Option<f64>,
    /// Number of frames, including the first and the last
    #[arg(short = 'n', long)]
    pub frames: Option<u32>,
    /// Directory receiving frame_000000.ppm, frame_000001.ppm, ...
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PresetsArgs {
    /// Only list presets for this kind
    #[arg(short, long)]
    pub fractal: Option<FractalKind>,
}

impl ImageArgs {
    fn into_settings(self) -> Settings {
        Settings {
            fractal: self.fractal,
            width: self.width,
            height: self.height,
            max_iterations: self.max_iterations,
            colour_map: self.colour_map,
            julia_constant: self.julia_constant,
            c_real: self.c_real,
            c_imag: self.c_imag,
            backend: self.backend,
            threads: self.threads,
            format: self.format,
            ..Settings::default()
        }
    }
}

impl RenderArgs {
    #[must_use]
    pub fn into_settings(self) -> Settings {
        Settings {
            x_min: self.x_min,
            x_max: self.x_max,
            y_min: self.y_min,
            y_max: self.y_max,
            center_real: self.center_real,
            center_imag: self.center_imag,
            zoom: self.zoom,
            preset: self.preset,
            output: self.output,
            ..self.image.into_settings()
        }
    }
}

impl ZoomArgs {
    #[must_use]
    pub fn into_settings(self) -> Settings {
        Settings {
            center_real: self.center_real,
            center_imag: self.center_imag,
            preset: self.preset,
            start_zoom: self.start_zoom,
            end_zoom: self.end_zoom,
            frames: self.frames,
            output_dir: self.output_dir,
            ..self.image.into_settings()
        }
    }
}
