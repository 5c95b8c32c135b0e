#[cfg(feature = "tauri")]
const COMMANDS: &[&str] = &[
    "build_default_picture",
    "article_names_to_array",
    "before_upload",
    "handle_upload_success",
    "handle_upload_error",
    "pic_cache_refresh",
    "pic_cache_wrapper",
    "get_pic_style",
    "update_pic_style",
];

fn main() {
    // Generates allow-/deny- permissions for every command under permissions/autogenerated
    #[cfg(feature = "tauri")]
    tauri_plugin::Builder::new(COMMANDS).build();
}
