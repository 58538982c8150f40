#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Prompt All About It - Green AI awareness site
#[derive(Parser, Debug)]
#[command(name = "promptall-desktop")]
#[command(about = "Prompt All About It - why greener AI habits matter")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1180.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    tracing::info!(
        "Starting Prompt All About It ({}x{})",
        args.width,
        args.height
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Prompt All About It")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
