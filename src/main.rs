use clap::Parser;
use fractal_renderer::{Cli, Command, PpmFilePresenter, RenderController, Settings, list_presets};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let file_settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    match cli.command {
        Command::Render(args) => {
            let settings = file_settings.overlay(args.into_settings());
            let controller =
                RenderController::new(PpmFilePresenter::new(settings.format.unwrap_or_default()));

            let report = controller.render(&settings)?;
            info!("done: {}", report);
        }
        Command::Zoom(args) => {
            let settings = file_settings.overlay(args.into_settings());
            let controller =
                RenderController::new(PpmFilePresenter::new(settings.format.unwrap_or_default()));

            let frames = controller.zoom(&settings)?;
            info!("wrote {} frames", frames.len());
        }
        Command::Presets(args) => {
            print!("{}", list_presets(args.fractal.or(file_settings.fractal)));
        }
    }

    Ok(())
}
