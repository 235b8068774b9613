use crate::utils::error::{AppError, Result};
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = "config";
pub const CONFIG_FILE: &str = "config.yaml";

/// Where the relative configuration path is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigLocation {
    /// Directory holding the running executable.
    #[default]
    ProgramDir,
    /// Current working directory of the process.
    WorkingDir,
}

impl ConfigLocation {
    pub fn base_dir(&self) -> Result<PathBuf> {
        match self {
            ConfigLocation::ProgramDir => {
                let exe = std::env::current_exe().map_err(AppError::BaseDirectory)?;
                exe.parent().map(Path::to_path_buf).ok_or_else(|| {
                    AppError::BaseDirectory(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("executable path {} has no parent", exe.display()),
                    ))
                })
            }
            ConfigLocation::WorkingDir => std::env::current_dir().map_err(AppError::BaseDirectory),
        }
    }

    pub fn config_path(&self) -> Result<PathBuf> {
        let base = self.base_dir()?;
        let path = config_path_from(&base);
        tracing::debug!("Resolved {:?} configuration path to {}", self, path.display());
        Ok(path)
    }
}

/// Appends the fixed `../config/config.yaml` suffix to `base`.
pub fn config_path_from(base: &Path) -> PathBuf {
    base.join("..").join(CONFIG_DIR).join(CONFIG_FILE)
}
