use crate::config::ConfigMapping;
use std::fmt;

pub const MESSAGE_KEY: &str = "message";
pub const DEFAULT_MESSAGE: &str = "hello docker";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
}

impl Message {
    pub fn from_config(config: &ConfigMapping) -> Self {
        Self {
            text: config.get_str_or(MESSAGE_KEY, DEFAULT_MESSAGE),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "message from config : {}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_line_format() {
        let config = ConfigMapping::from_yaml_str("message: hi there").unwrap();
        let message = Message::from_config(&config);
        assert_eq!(message.to_string(), "message from config : hi there");
    }

    #[test]
    fn test_default_message() {
        let message = Message::from_config(&ConfigMapping::default());
        assert_eq!(message.text, DEFAULT_MESSAGE);
        assert_eq!(message.to_string(), "message from config : hello docker");
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let config = ConfigMapping::from_yaml_str("greeting: hi\nMESSAGE: loud\n").unwrap();
        assert_eq!(Message::from_config(&config).text, DEFAULT_MESSAGE);
    }
}
