use crate::error::{AppError, AppResult};
use config::{Config, Environment, File};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::Path;

// Re-export all submodules
pub mod app;
pub mod keys;

// Re-export main types
pub use app::AppConfig;

/// Global configuration, initialized once at startup.
static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Load and install the global configuration.
///
/// The config file is optional; a landing site must come up with zero
/// setup. `explicit_path` (from `--config`) is mandatory
/// when given; otherwise `hlal.toml` in the working directory and
/// `<config-dir>/hlal/hlal.toml` are layered in when present. Environment
/// variables (`HLAL__` prefixed, `__` separated) override file values.
pub fn init(explicit_path: Option<&Path>) -> AppResult<&'static AppConfig> {
    let config = load_config(explicit_path)?;
    Ok(CONFIG.get_or_init(|| config))
}

pub fn get_config_or_panic() -> &'static AppConfig {
    CONFIG
        .get()
        .expect("Configuration not initialized. Call config::init() first.")
}

fn load_config(explicit_path: Option<&Path>) -> AppResult<AppConfig> {
    dotenv::dotenv().ok();

    let mut builder = Config::builder();

    match explicit_path {
        Some(path) => {
            builder = builder.add_source(File::from(path.to_path_buf()));
        }
        None => {
            if let Some(dir) = dirs::config_dir() {
                builder = builder
                    .add_source(File::from(dir.join("hlal").join("hlal.toml")).required(false));
            }
            builder = builder.add_source(File::with_name("hlal.toml").required(false));
        }
    }

    let config = builder
        .add_source(Environment::with_prefix("HLAL").separator("__"))
        .build()
        .map_err(|e| {
            AppError::Config(format!(
                "Configuration loading failed: {e}. Please check your hlal.toml file and environment variables."
            ))
        })?;

    config
        .try_deserialize::<AppConfig>()
        .map_err(|e| AppError::Config(format!("Failed to deserialize config: {e}")))
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
