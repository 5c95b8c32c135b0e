pub mod cache_service;
pub mod config_service;
pub mod notify_service;
pub mod upload_service;

pub use cache_service::{pic_cache_refresh, pic_cache_wrapper, PicCache};
pub use config_service::ConfigService;
pub use notify_service::{Notifier, TracingNotifier};
pub use upload_service::{PictureUploader, UploadHooks};

#[cfg(feature = "tauri")]
pub use notify_service::{EventNotifier, NOTIFY_EVENT};
