mod app;

// Re-export library modules so that `crate::state`, `crate::viewport`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use lumina_editor_lib::events;
pub use lumina_editor_lib::helpers;
pub use lumina_editor_lib::i18n;
pub use lumina_editor_lib::state;
pub use lumina_editor_lib::viewport;

use app::EditorApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumina_editor=info".into()),
        )
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Lumina — 3D Scene Editor")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "lumina-editor",
        native_options,
        Box::new(|cc| Ok(Box::new(EditorApp::new(cc)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}
