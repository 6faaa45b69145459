//! Interactive command names

use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// A command entered at the `Fltcli>` prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the usage summary
    Help,
    /// End the session (`quit` or `exit`)
    Quit,
    /// Append a transaction
    Add,
    /// Delete a transaction by id
    Delete,
    /// Search transactions by keyword
    Find,
    /// Change one field of a transaction
    Modify,
}

impl Command {
    /// Whether the command rewrites the sheet
    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::Add | Self::Delete | Self::Modify)
    }

    /// Name shown in the sub-prompt
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Quit => "quit",
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Find => "find",
            Self::Modify => "modify",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "add" => Ok(Self::Add),
            "delete" => Ok(Self::Delete),
            "find" => Ok(Self::Find),
            "modify" => Ok(Self::Modify),
            other => Err(LedgerError::Syntax(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!("help".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("modify".parse::<Command>().unwrap(), Command::Modify);
    }

    #[test]
    fn test_parse_is_exact() {
        assert!(matches!("ADD".parse::<Command>(), Err(LedgerError::Syntax(_))));
        assert!(matches!("list".parse::<Command>(), Err(LedgerError::Syntax(_))));
    }

    #[test]
    fn test_mutating() {
        assert!(Command::Add.is_mutating());
        assert!(Command::Delete.is_mutating());
        assert!(Command::Modify.is_mutating());
        assert!(!Command::Find.is_mutating());
        assert!(!Command::Help.is_mutating());
    }
}
