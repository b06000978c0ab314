mod app;
mod atlas;
mod paths;
mod util;

use crate::app::Tilesmith;
use crate::paths::PATH_DATA;

fn main() -> eframe::Result {
    if std::env::args().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    let fullscreen = std::env::args().any(|arg| arg == "--fullscreen");

    std::fs::create_dir_all(&*PATH_DATA).expect("Failed to create data directory");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 640.0])
            .with_min_inner_size([720.0, 420.0])
            .with_fullscreen(fullscreen)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    println!("[tilesmith] Starting eframe app...");

    eframe::run_native(
        "Tilesmith",
        options,
        Box::new(|cc| {
            crate::app::theme::apply_theme(&cc.egui_ctx);
            Ok(Box::new(Tilesmith::new()))
        }),
    )
}

static USAGE_TEXT: &str = r#"
Usage: tilesmith [OPTIONS]

Drag images into the window, arrange them on a grid, and export the
composite as a packed texture plus a Tiled tileset descriptor.

Options:
    --fullscreen          Start the GUI in fullscreen mode
    --help                Show this help text
"#;
