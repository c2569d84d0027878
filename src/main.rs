mod app;
mod content;
mod paths;
mod registry;
mod ui;

use crate::app::Docpane;
use crate::paths::PATH_DOCPANE;

fn main() -> eframe::Result {
    if std::env::args().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    let fullscreen = std::env::args().any(|arg| arg == "--fullscreen");

    if let Err(e) = std::fs::create_dir_all(&*PATH_DOCPANE) {
        eprintln!("[docpane] Failed to create data directory: {}", e);
    }

    let config = app::load_cfg();
    let zoom = config.zoom_factor;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 640.0])
            .with_min_inner_size([640.0, 400.0])
            .with_fullscreen(fullscreen)
            .with_title("ASP.NET Core Web API Documentation"),
        ..Default::default()
    };

    println!("[docpane] Starting eframe app...");

    eframe::run_native(
        "Docpane",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_zoom_factor(zoom);

            // Apply custom theme (also installs the icon font)
            crate::ui::theme::apply_theme(&cc.egui_ctx);

            Ok(Box::new(Docpane::new(config)))
        }),
    )
}

static USAGE_TEXT: &str = r#"
Usage: docpane [OPTIONS]

Options:
    --fullscreen          Start the viewer in fullscreen mode
    --help                Show this message and exit
"#;
