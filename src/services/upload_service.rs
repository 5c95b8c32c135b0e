use tracing::{debug, info, warn};

use crate::models::{PicStyle, UploadError, UploadFile, UploadResponse};
use crate::services::notify_service::Notifier;

pub const UPLOAD_FAILED_TITLE: &str = "Upload failed";
pub const UPLOAD_SUCCESS_MESSAGE: &str = "Upload succeeded";
pub const SERVER_LIMIT_MESSAGE: &str =
    "The file may be too large, please check the server's upload size limit.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown upload error";

// Signature of a request the server dropped before answering (status 0)
const FAILED_POST_MARKER: &str = "fail to post";
const UPLOAD_ENDPOINT_MARKER: &str = "/picture/file/upload 0";

/// Callbacks the upload widget drives over the life of one upload.
pub trait UploadHooks {
    /// Returns false to stop the file from being uploaded.
    fn before_upload(&self, file: &UploadFile) -> bool;

    /// Returns whether the backend accepted the file.
    fn on_success(&self, response: &UploadResponse, file: Option<&UploadFile>) -> bool;

    fn on_error(&self, error: &UploadError, file: &UploadFile, files: &[UploadFile]);
}

/// Picture upload adapter: size gate plus result notifications.
pub struct PictureUploader<N: Notifier> {
    notifier: N,
    pic_style: PicStyle,
}

impl<N: Notifier> PictureUploader<N> {
    pub fn new(notifier: N, pic_style: PicStyle) -> Self {
        Self {
            notifier,
            pic_style,
        }
    }

    pub fn pic_style(&self) -> &PicStyle {
        &self.pic_style
    }

    pub fn set_pic_style(&mut self, pic_style: PicStyle) {
        self.pic_style = pic_style;
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn check_size(&self, file: &UploadFile) -> bool {
        let max_size = self.pic_style.max_size;
        if file.size_in_mib() > max_size {
            warn!(
                file = %file.name,
                size = file.size,
                max_size,
                "Rejected upload over size limit"
            );
            self.notifier.error(
                &format!("File size cannot exceed {}MB!", max_size),
                UPLOAD_FAILED_TITLE,
            );
            return false;
        }
        true
    }

    pub fn handle_upload_success(&self, response: &UploadResponse) -> bool {
        if response.is_success() {
            info!("Picture uploaded");
            self.notifier.success(UPLOAD_SUCCESS_MESSAGE);
            true
        } else {
            warn!(code = %response.code, msg = %response.msg, "Picture upload rejected by server");
            self.notifier.error(&response.msg, UPLOAD_FAILED_TITLE);
            false
        }
    }

    pub fn handle_upload_error(&self, error: &UploadError) {
        let message = match error.message.as_deref() {
            Some(message) => upload_error_message(message),
            None => {
                warn!("Upload failed without an error message");
                UNKNOWN_ERROR_MESSAGE.to_string()
            }
        };
        self.notifier.error(&message, UPLOAD_FAILED_TITLE);
    }
}

impl<N: Notifier> UploadHooks for PictureUploader<N> {
    fn before_upload(&self, file: &UploadFile) -> bool {
        self.check_size(file)
    }

    fn on_success(&self, response: &UploadResponse, file: Option<&UploadFile>) -> bool {
        if let Some(file) = file {
            debug!(file = %file.name, "Upload finished");
        }
        self.handle_upload_success(response)
    }

    fn on_error(&self, error: &UploadError, file: &UploadFile, _files: &[UploadFile]) {
        debug!(file = %file.name, "Upload errored");
        self.handle_upload_error(error);
    }
}

/// Picks the text shown for a transport error message.
pub fn upload_error_message(message: &str) -> String {
    if message.contains(FAILED_POST_MARKER) && message.contains(UPLOAD_ENDPOINT_MARKER) {
        return SERVER_LIMIT_MESSAGE.to_string();
    }

    match serde_json::from_str::<serde_json::Value>(message) {
        Ok(serde_json::Value::Object(body)) => match body.get("msg") {
            Some(serde_json::Value::String(msg)) => msg.clone(),
            _ => message.to_string(),
        },
        Ok(_) => message.to_string(),
        Err(e) => {
            debug!("Upload error message is not JSON: {}", e);
            message.to_string()
        }
    }
}
