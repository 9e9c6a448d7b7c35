//! Where the catalog lives and how its pages link together.

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Catalog configuration, read from a JSON file. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location the site is served from. Relative paths resolve against it.
    pub base_url: Url,
    /// Path of the catalog document, relative to `base_url`.
    pub data_path: String,
    /// Image shown for devices without one.
    pub placeholder_image: String,
    /// Page rendering a single device, linked from every card.
    pub detail_page: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            data_path: "data/devices.json".into(),
            placeholder_image: "assets/images/placeholder.jpg".into(),
            detail_page: "device.html".into(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:8000/").expect("default base URL is an absolute URL")
}

impl Config {
    /// Absolute URL of the catalog document.
    pub fn data_url(&self) -> Result<Url> {
        self.base_url
            .join(&self.data_path)
            .wrap_err_with(|| format!("Invalid catalog path `{}`", self.data_path))
    }
}

/// Reads a configuration file.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Could not read config file {}", path.display()))?;
    let config = serde_json::from_str(&content)
        .wrap_err_with(|| format!("Could not parse config file {}", path.display()))?;
    Ok(config)
}
