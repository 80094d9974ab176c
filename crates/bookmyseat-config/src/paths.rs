use anyhow::Result;
use std::path::{Path, PathBuf};

/// Config directory override from the `BOOKMYSEAT_CONFIG_DIR` environment variable
pub fn config_dir_override() -> Option<PathBuf> {
    std::env::var("BOOKMYSEAT_CONFIG_DIR")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("bookmyseat");

        Ok(Self::with_base(base_dir))
    }

    pub fn with_base(base_dir: PathBuf) -> Self {
        Self {
            log_dir: base_dir.join("logs"),
            config_dir: base_dir,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn default_log_file(&self) -> PathBuf {
        self.log_dir.join("bookmyseat.log")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = config_dir_override() {
            return Self::with_base(base);
        }

        // Platform-specific paths (e.g., ~/.config/bookmyseat on Linux)
        Self::new().unwrap_or_else(|_| Self::with_base(PathBuf::from(".bookmyseat")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_under_base() {
        let paths = PathManager::with_base(PathBuf::from("/tmp/bms"));
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/bms/config.toml"));
        assert_eq!(paths.default_log_file(), PathBuf::from("/tmp/bms/logs/bookmyseat.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PathManager::with_base(dir.path().join("nested"));
        paths.ensure_directories().unwrap();
        assert!(paths.log_dir().is_dir());
    }
}
