use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::InquiryError;
use crate::utils::ensure_dir;

const APP_DIR: &str = "inquiry_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Persisted studio preferences, stored as JSON under the platform config
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub studio_name: String,
    pub tagline: String,
    /// Disable colored output without passing `--plain` every run.
    pub plain_output: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_event_type: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            studio_name: "Aperture Stories".into(),
            tagline: "Photography for the moments that matter".into(),
            plain_output: false,
            last_event_type: None,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, InquiryError> {
        let base = dirs::config_dir().ok_or_else(|| {
            InquiryError::Config("could not determine the platform config directory".into())
        })?;
        Self::from_base(base)
    }

    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> Result<Self, InquiryError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, InquiryError> {
        let root = base.join(APP_DIR);
        ensure_dir(&root)?;
        Ok(Self {
            path: root.join(CONFIG_FILE),
        })
    }

    /// Loads the stored config, or defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, InquiryError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Saves via a temp file and rename so a crash mid-write cannot leave a
    /// truncated config behind.
    pub fn save(&self, config: &Config) -> Result<(), InquiryError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_returns_defaults_when_no_file_exists() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.studio_name, "Aperture Stories");
        assert!(!config.plain_output);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = Config {
            studio_name: "Golden Hour Studio".into(),
            tagline: "Light, chased daily".into(),
            plain_output: true,
            last_event_type: Some("Wedding".into()),
        };
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.studio_name, "Golden Hour Studio");
        assert!(loaded.plain_output);
        assert_eq!(loaded.last_event_type.as_deref(), Some("Wedding"));
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        manager.save(&Config::default()).unwrap();
        assert!(manager.path().exists());
        assert!(!tmp_path(manager.path()).exists());
    }

    #[test]
    fn corrupt_config_surfaces_a_serde_error() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.path(), "{not json").unwrap();
        assert!(matches!(manager.load(), Err(InquiryError::Serde(_))));
    }
}
