mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::helpers`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use planar_gui_lib::helpers;
pub use planar_gui_lib::state;

use app::EditorApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "planar_gui=info".into()),
        )
        .init();

    // Parse --project <id> argument
    let project_id = parse_project_arg().unwrap_or_else(|| "default".to_string());
    tracing::info!("opening project {project_id}");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Planar — 2D Scene Editor")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "planar-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(EditorApp::new(cc, &project_id)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_project_arg() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--project" && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
        i += 1;
    }
    None
}
