pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{ConfigLoader, ConfigLocation, ConfigMapping};
pub use core::app::{App, RunState};
pub use domain::model::{Message, DEFAULT_MESSAGE};
pub use utils::error::{AppError, Result};
