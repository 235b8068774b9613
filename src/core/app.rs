use crate::config::{ConfigLoader, ConfigLocation};
use crate::core::{Message, Result};
use crate::utils::error::AppError;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Loading,
    Done,
}

/// One run of the program: load the configuration, print the message line.
pub struct App {
    config_path: PathBuf,
    state: RunState,
}

impl App {
    pub fn new(location: ConfigLocation) -> Result<Self> {
        Ok(Self::with_config_path(location.config_path()?))
    }

    pub fn with_config_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            state: RunState::Loading,
        }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Writes the message line to `out`. Nothing is written if loading fails.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Message> {
        tracing::debug!("State {:?}: reading {}", self.state, self.config_path.display());

        let config = ConfigLoader::load_from_file(&self.config_path)?;
        let message = Message::from_config(&config);

        writeln!(out, "{}", message).map_err(AppError::Output)?;

        self.state = RunState::Done;
        tracing::debug!("State {:?}", self.state);
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_prints_message_and_finishes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "message: hi there\n").unwrap();

        let mut app = App::with_config_path(&path);
        assert_eq!(app.state(), RunState::Loading);

        let mut out = Vec::new();
        let message = app.run(&mut out).unwrap();

        assert_eq!(message.text, "hi there");
        assert_eq!(String::from_utf8(out).unwrap(), "message from config : hi there\n");
        assert_eq!(app.state(), RunState::Done);
    }

    #[test]
    fn test_failed_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = App::with_config_path(temp_dir.path().join("missing.yaml"));

        let mut out = Vec::new();
        let err = app.run(&mut out).unwrap_err();

        assert!(matches!(err, AppError::FileNotFound { .. }));
        assert!(out.is_empty());
        assert_eq!(app.state(), RunState::Loading);
    }

    #[test]
    fn test_new_resolves_location() {
        let app = App::new(ConfigLocation::WorkingDir).unwrap();
        assert!(app.config_path().ends_with("config/config.yaml"));
    }
}
