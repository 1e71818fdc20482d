use serde::Deserialize;
use std::path::PathBuf;

fn default_font_size() -> u32 {
    36
}
fn default_safety_box() -> bool {
    false
}
fn default_verbose() -> bool {
    false
}

/// Optional TOML configuration, merged under CLI flags
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    #[serde(default = "default_safety_box")]
    pub safety_box: bool,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub viewport: Option<ViewportConfig>,
}

fn default_viewport_width() -> f64 {
    800.0
}
fn default_viewport_height() -> f64 {
    600.0
}
fn default_margin() -> f64 {
    40.0
}

/// Fixed output viewport, screen units
#[derive(Debug, Deserialize, Clone)]
pub struct ViewportConfig {
    #[serde(default = "default_viewport_width")]
    pub width: f64,
    #[serde(default = "default_viewport_height")]
    pub height: f64,
    #[serde(default = "default_margin")]
    pub margin: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_viewport_width(),
            height: default_viewport_height(),
            margin: default_margin(),
        }
    }
}

impl FileConfig {
    /// Load the first parseable config file from the search path
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("riverlabel.toml"));
    paths.push(PathBuf::from(".riverlabel.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("riverlabel").join("config.toml"));
        paths.push(config_dir.join("riverlabel.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".riverlabel.toml"));
    }

    paths
}
