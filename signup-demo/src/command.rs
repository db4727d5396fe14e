//! Line commands understood by the demo.

use signup_form::prelude::*;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  set <field> <value>   replace a field's value and fire an input event
  focus <field>         focus a field
  pick <n>              click the n-th country suggestion (0-based)
  key up|down|enter|esc press a key in the country field
  outside               click outside the suggestion panel
  submit                validate the whole form
  show                  print the form
  help                  print this text
  quit                  tear down and exit
fields: email, country, postal_code, password, confirm_password";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a suggestion index")]
    BadIndex(String),
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(FieldId, String),
    Event(FormEvent),
    Submit,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parse a line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim_start();

        let command = match name {
            "set" => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                Command::Set(field_id(field)?, value.to_string())
            }
            "focus" => Command::Event(FormEvent::Focus(field_id(rest)?)),
            "pick" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("pick"));
                }
                let index = rest
                    .parse()
                    .map_err(|_| CommandError::BadIndex(rest.to_string()))?;
                Command::Event(FormEvent::SuggestionClicked(index))
            }
            "key" => Command::Event(FormEvent::SuggestionKey(key(rest)?)),
            "outside" => Command::Event(FormEvent::ClickOutside),
            "submit" => Command::Submit,
            "show" => Command::Show,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn field_id(name: &str) -> Result<FieldId, CommandError> {
    if name.is_empty() {
        return Err(CommandError::MissingArgument("field"));
    }
    FieldId::from_name(name).ok_or_else(|| CommandError::UnknownField(name.to_string()))
}

fn key(name: &str) -> Result<SuggestionKey, CommandError> {
    match name {
        "up" => Ok(SuggestionKey::Up),
        "down" => Ok(SuggestionKey::Down),
        "enter" => Ok(SuggestionKey::Enter),
        "esc" | "escape" => Ok(SuggestionKey::Escape),
        "" => Err(CommandError::MissingArgument("key")),
        other => Err(CommandError::UnknownKey(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_spaces_in_value() {
        assert_eq!(
            Command::parse("set country United States").unwrap(),
            Some(Command::Set(FieldId::Country, "United States".to_string()))
        );
    }

    #[test]
    fn test_set_without_value_clears() {
        assert_eq!(
            Command::parse("set email").unwrap(),
            Some(Command::Set(FieldId::Email, String::new()))
        );
    }

    #[test]
    fn test_events() {
        assert_eq!(
            Command::parse("pick 2").unwrap(),
            Some(Command::Event(FormEvent::SuggestionClicked(2)))
        );
        assert_eq!(
            Command::parse("key esc").unwrap(),
            Some(Command::Event(FormEvent::SuggestionKey(SuggestionKey::Escape)))
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Command::parse("set phone 123"),
            Err(CommandError::UnknownField("phone".into()))
        );
        assert_eq!(
            Command::parse("pick two"),
            Err(CommandError::BadIndex("two".into()))
        );
        assert_eq!(Command::parse("   ").unwrap(), None);
    }
}
