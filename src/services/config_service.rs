use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::models::{PictureConfig, ValidationResult};
use crate::utils::{AppError, Result};

const CONFIG_DIR_NAME: &str = "blossom-picture";
const CONFIG_FILE_NAME: &str = "config.json";

pub struct ConfigService {
    config_dir: PathBuf,
}

impl ConfigService {
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                AppError::Configuration("Failed to get config directory".to_string())
            })?
            .join(CONFIG_DIR_NAME);

        Self::new_with_dir(config_dir)
    }

    pub fn new_with_dir(config_dir: PathBuf) -> Result<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| {
                AppError::Configuration(format!("Failed to create config directory: {}", e))
            })?;
        }

        Ok(Self { config_dir })
    }

    pub fn config_file_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Loads the stored config, or the defaults when nothing was saved yet
    /// or the stored values fail validation.
    pub fn load_config(&self) -> Result<PictureConfig> {
        let config_path = self.config_file_path();

        if !config_path.exists() {
            debug!("No config at {:?}, using defaults", config_path);
            return Ok(PictureConfig::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| AppError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: PictureConfig = serde_json::from_str(&content)
            .map_err(|e| AppError::Configuration(format!("Failed to deserialize config: {}", e)))?;

        let validation = Self::validate_config(&config);
        if !validation.valid {
            warn!(
                "Ignoring invalid picture config at {:?}: {}",
                config_path,
                validation.errors.join(", ")
            );
            return Ok(PictureConfig::default());
        }

        Ok(config)
    }

    pub fn save_config(&self, config: &PictureConfig) -> Result<()> {
        let validation = Self::validate_config(config);
        if !validation.valid {
            return Err(AppError::Validation(format!(
                "Invalid configuration: {}",
                validation.errors.join(", ")
            )));
        }

        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(self.config_file_path(), content)
            .map_err(|e| AppError::Configuration(format!("Failed to save config: {}", e)))?;

        info!(max_size = config.pic_style.max_size, "Picture config saved");
        Ok(())
    }

    pub fn validate_config(config: &PictureConfig) -> ValidationResult {
        let mut errors = Vec::new();
        let max_size = config.pic_style.max_size;

        if !max_size.is_finite() || max_size <= 0.0 {
            errors.push(format!("Max picture size must be a positive number of MB, got {}", max_size));
        }

        ValidationResult {
            valid: errors.is_empty(),
            errors,
        }
    }
}
