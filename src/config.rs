use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::consts::DEFAULT_COMMAND;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Downstream program followed by its leading arguments
    #[serde(default)]
    pub(crate) command: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(mut config) => {
                        config.source = Some(path);
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Downstream command line, falling back to the bundled processor
    pub(crate) fn command(&self) -> Vec<String> {
        match &self.command {
            Some(cmd) => cmd.clone(),
            None => DEFAULT_COMMAND.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/weekgate/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("weekgate").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("weekgate").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.weekgate.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".weekgate.toml"));
        }

        paths
    }
}
