use std::sync::Mutex;
use tracing::warn;

use crate::models::{PicStyle, PictureConfig};
use crate::services::{ConfigService, Notifier, PicCache, PictureUploader};
use crate::utils::{AppError, Result};

/// Shared picture state held by the host application.
pub struct PictureState {
    pub config: Mutex<PictureConfig>,
    pub cache: PicCache,
    config_service: Option<ConfigService>,
}

impl PictureState {
    /// State without a backing config file.
    pub fn new(config: PictureConfig) -> Self {
        Self {
            config: Mutex::new(config),
            cache: PicCache::new(),
            config_service: None,
        }
    }

    /// Loads the config through `service`; falls back to defaults when the
    /// stored file cannot be read.
    pub fn load(service: ConfigService) -> Self {
        let config = service.load_config().unwrap_or_else(|e| {
            warn!("Failed to load picture config, using defaults: {}", e);
            PictureConfig::default()
        });

        Self {
            config: Mutex::new(config),
            cache: PicCache::new(),
            config_service: Some(service),
        }
    }

    pub fn pic_style(&self) -> Result<PicStyle> {
        let config = self
            .config
            .lock()
            .map_err(|e| AppError::Configuration(e.to_string()))?;
        Ok(config.pic_style.clone())
    }

    /// Replaces the picture style, persisting it when a config file backs
    /// this state.
    pub fn update_pic_style(&self, pic_style: PicStyle) -> Result<()> {
        let mut config = self
            .config
            .lock()
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        let mut updated = config.clone();
        updated.pic_style = pic_style;

        match &self.config_service {
            Some(service) => service.save_config(&updated)?,
            None => {
                let validation = ConfigService::validate_config(&updated);
                if !validation.valid {
                    return Err(AppError::Validation(validation.errors.join(", ")));
                }
            }
        }

        *config = updated;
        Ok(())
    }

    /// Builds an uploader over the current picture style.
    pub fn uploader<N: Notifier>(&self, notifier: N) -> Result<PictureUploader<N>> {
        Ok(PictureUploader::new(notifier, self.pic_style()?))
    }
}

impl Default for PictureState {
    fn default() -> Self {
        Self::new(PictureConfig::default())
    }
}
