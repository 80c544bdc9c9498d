//! Command-line front end: argument parsing, the settings file and the
//! controller that drives renders and hands buffers to a presenter.

pub mod args;
pub mod render_controller;
pub mod settings;
