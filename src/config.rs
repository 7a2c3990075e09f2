use crate::session::{MAX_LENGTH_SECS, MIN_LENGTH_SECS};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Initial session length; the in-app reset always returns to 25.
    pub length_minutes: u32,
    /// Optional text file painted dimly behind the timer.
    pub backdrop: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length_minutes: 25,
            backdrop: None,
        }
    }
}

impl Config {
    /// Length in seconds, clamped to the adjustable range.
    pub fn length_secs(&self) -> u32 {
        self.length_minutes
            .saturating_mul(60)
            .clamp(MIN_LENGTH_SECS, MAX_LENGTH_SECS)
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "pomo") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("pomo_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(cfg) = serde_json::from_slice::<Config>(&bytes) {
                return cfg;
            }
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
