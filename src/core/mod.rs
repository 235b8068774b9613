pub mod app;

pub use crate::domain::model::Message;
pub use crate::utils::error::Result;
