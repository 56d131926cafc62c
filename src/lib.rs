#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod ticker;
pub mod ui;
pub mod utils;

pub use app::PromoApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start with the hidden section already revealed
    #[arg(long, default_value_t = false)]
    pub unlocked: bool,

    /// Override the ticker scroll speed (pixels per second)
    #[arg(long)]
    pub speed: Option<f32>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> PromoApp {
    PromoApp::new(cc, args)
}
