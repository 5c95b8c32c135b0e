use tauri::{AppHandle, Runtime, State};
use tracing::debug;

use crate::models::{PicStyle, Picture, UploadError, UploadFile, UploadResponse};
use crate::services::{EventNotifier, PictureUploader, UploadHooks};
use crate::state::PictureState;
use crate::utils::AppError;


fn uploader<R: Runtime>(
    app: AppHandle<R>,
    state: &PictureState,
) -> Result<PictureUploader<EventNotifier<R>>, AppError> {
    state.uploader(EventNotifier::new(app))
}

// ============================================================================
// Picture Commands
// ============================================================================

#[tauri::command]
pub fn build_default_picture() -> Picture {
    crate::models::build_default_picture()
}

#[tauri::command]
pub fn article_names_to_array(names: String) -> Vec<String> {
    crate::utils::article_names_to_array(&names)
}

// ============================================================================
// Upload Commands
// ============================================================================

#[tauri::command]
pub fn before_upload<R: Runtime>(
    app: AppHandle<R>,
    state: State<'_, PictureState>,
    file: UploadFile,
) -> Result<bool, String> {
    let uploader = uploader(app, &state).map_err(|e| e.to_string())?;
    Ok(uploader.before_upload(&file))
}

#[tauri::command]
pub fn handle_upload_success<R: Runtime>(
    app: AppHandle<R>,
    state: State<'_, PictureState>,
    response: UploadResponse,
    file: Option<UploadFile>,
) -> Result<bool, String> {
    let uploader = uploader(app, &state).map_err(|e| e.to_string())?;
    Ok(uploader.on_success(&response, file.as_ref()))
}

#[tauri::command]
pub fn handle_upload_error<R: Runtime>(
    app: AppHandle<R>,
    state: State<'_, PictureState>,
    error: UploadError,
    file: UploadFile,
    files: Option<Vec<UploadFile>>,
) -> Result<(), String> {
    let uploader = uploader(app, &state).map_err(|e| e.to_string())?;
    uploader.on_error(&error, &file, files.as_deref().unwrap_or_default());
    Ok(())
}

// ============================================================================
// Cache Commands
// ============================================================================

#[tauri::command]
pub fn pic_cache_refresh(state: State<'_, PictureState>) {
    state.cache.refresh();
}

#[tauri::command]
pub fn pic_cache_wrapper(state: State<'_, PictureState>, url: String) -> String {
    state.cache.wrap(&url)
}

// ============================================================================
// Configuration Commands
// ============================================================================

#[tauri::command]
pub fn get_pic_style(state: State<'_, PictureState>) -> Result<PicStyle, String> {
    state.pic_style().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn update_pic_style(state: State<'_, PictureState>, pic_style: PicStyle) -> Result<(), String> {
    debug!(max_size = pic_style.max_size, "Updating picture style");
    state.update_pic_style(pic_style).map_err(|e| e.to_string())
}
