use leptos::prelude::*;

mod animation;
mod config;
mod error;
mod frame;
mod geometry;
mod gpu;
mod logging;
mod transform;

use config::RenderConfig;
use logging::LoggingConfig;

fn main() {
    let loaded = RenderConfig::from_document();
    let config = loaded.clone().unwrap_or_default();
    logging::init_logging(LoggingConfig {
        level: config.log_level(),
    });
    if let Err(e) = &loaded {
        log::warn!("{e}; using defaults");
    }

    let canvas_id = config.canvas_id.clone();
    let width = config.canvas_width.to_string();
    let height = config.canvas_height.to_string();
    leptos::mount::mount_to_body(move || {
        view! {
            <canvas id=canvas_id.clone() width=width.clone() height=height.clone() style="display: block; background: black;"></canvas>
        }
    });

    if animation::start(&config).is_err() {
        log::warn!("render loop not started");
    }
}
