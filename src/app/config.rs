use crate::paths::PATH_DATA;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings persisted between sessions. Layout fields mirror the tools
/// panel; everything else is remembered convenience state.
#[derive(Serialize, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_basename")]
    pub basename: String,
    #[serde(default = "default_columns")]
    pub columns: u32,
    #[serde(default)]
    pub spacing: u32,
    #[serde(default)]
    pub last_export_dir: Option<PathBuf>,
}

fn default_basename() -> String {
    "tileset".to_string()
}

fn default_columns() -> u32 {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            basename: default_basename(),
            columns: default_columns(),
            spacing: 0,
            last_export_dir: None,
        }
    }
}

pub fn load_cfg() -> AppConfig {
    let path = PATH_DATA.join("settings.json");

    if let Ok(file) = File::open(path) {
        if let Ok(config) = serde_json::from_reader::<_, AppConfig>(BufReader::new(file)) {
            return config;
        }
    }

    // Return default settings if file doesn't exist or has error
    AppConfig::default()
}

pub fn save_cfg(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let path = PATH_DATA.join("settings.json");
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}
