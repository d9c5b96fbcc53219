#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    tracing_subscriber::fmt::init();

    // Window size: editor column + card preview side by side
    let window_width = 1100.0;
    let window_height = 860.0;

    tracing::info!("Starting Cardsmith");

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Cardsmith")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
