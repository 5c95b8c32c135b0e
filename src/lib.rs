#[cfg(feature = "tauri")]
mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use models::{build_default_picture, Picture, PictureId, UploadError, UploadFile, UploadResponse};
pub use services::{
    pic_cache_refresh, pic_cache_wrapper, ConfigService, Notifier, PicCache, PictureUploader,
    TracingNotifier, UploadHooks,
};
pub use state::PictureState;
pub use utils::{article_names_to_array, init_logger, AppError, Result};

#[cfg(feature = "tauri")]
use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

/// Picture plugin for the editor shell.
///
/// Manages a [`PictureState`] backed by the user's config directory and
/// registers the picture commands under the `picture` plugin namespace.
/// Logging goes through `tracing`; the host app owns the subscriber.
#[cfg(feature = "tauri")]
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("picture")
        .invoke_handler(tauri::generate_handler![
            // Picture Commands
            commands::build_default_picture,
            commands::article_names_to_array,
            // Upload Commands
            commands::before_upload,
            commands::handle_upload_success,
            commands::handle_upload_error,
            // Cache Commands
            commands::pic_cache_refresh,
            commands::pic_cache_wrapper,
            // Configuration Commands
            commands::get_pic_style,
            commands::update_pic_style,
        ])
        .setup(|app, _api| {
            let state = match ConfigService::new() {
                Ok(service) => PictureState::load(service),
                Err(e) => {
                    tracing::warn!("Picture config unavailable, using defaults: {}", e);
                    PictureState::default()
                }
            };
            app.manage(state);
            Ok(())
        })
        .build()
}
