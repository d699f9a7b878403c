//! Parsing of typed input lines.

use crate::domain::ContactField;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<field>=<value>`; the value is kept exactly as typed
    Set(ContactField, String),
    Save,
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        if let Some((name, value)) = line.split_once('=') {
            return match name.parse::<ContactField>() {
                Ok(field) => Command::Set(field, value.to_string()),
                Err(_) => Command::Unknown(line.to_string()),
            };
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "" => Command::Empty,
            "save" | "submit" => Command::Save,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}
