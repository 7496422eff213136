//! Menu command vocabulary.
//!
//! Every command is accepted either by its menu number or by its name.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    New,
    Init,
    Pop,
    Push,
    PrintAll,
    Clear,
    IsFull,
    IsEmpty,
    Exit,
    Help,
}

/// A menu line: the number shown to the user, the command name and an
/// optional argument hint.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub number: u8,
    pub command: Command,
    pub hint: Option<&'static str>,
}

/// Menu in display order. `help` is accepted but not listed.
pub static MENU: &[MenuEntry] = &[
    MenuEntry {
        number: 1,
        command: Command::New,
        hint: None,
    },
    MenuEntry {
        number: 2,
        command: Command::Init,
        hint: None,
    },
    MenuEntry {
        number: 3,
        command: Command::Pop,
        hint: None,
    },
    MenuEntry {
        number: 4,
        command: Command::Push,
        hint: Some("[value]"),
    },
    MenuEntry {
        number: 5,
        command: Command::PrintAll,
        hint: None,
    },
    MenuEntry {
        number: 6,
        command: Command::Clear,
        hint: None,
    },
    MenuEntry {
        number: 7,
        command: Command::IsFull,
        hint: None,
    },
    MenuEntry {
        number: 8,
        command: Command::IsEmpty,
        hint: None,
    },
    MenuEntry {
        number: 9,
        command: Command::Exit,
        hint: None,
    },
];

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Command::New => "new",
            Command::Init => "init",
            Command::Pop => "pop",
            Command::Push => "push",
            Command::PrintAll => "print-all",
            Command::Clear => "clear",
            Command::IsFull => "is-full",
            Command::IsEmpty => "is-empty",
            Command::Exit => "exit",
            Command::Help => "help",
        }
    }

    /// Whether the command may run before the queue has been created.
    pub fn allowed_before_create(self) -> bool {
        matches!(self, Command::New | Command::Exit | Command::Help)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The token did not name any command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if let Ok(number) = token.parse::<u8>() {
            return MENU
                .iter()
                .find(|entry| entry.number == number)
                .map(|entry| entry.command)
                .ok_or_else(|| UnknownCommand(token.to_string()));
        }

        match token.to_ascii_lowercase().as_str() {
            "new" => Ok(Command::New),
            "init" => Ok(Command::Init),
            "pop" => Ok(Command::Pop),
            "push" => Ok(Command::Push),
            "print-all" | "print" => Ok(Command::PrintAll),
            "clear" => Ok(Command::Clear),
            "is-full" => Ok(Command::IsFull),
            "is-empty" => Ok(Command::IsEmpty),
            "exit" | "quit" => Ok(Command::Exit),
            "help" | "h" | "?" => Ok(Command::Help),
            _ => Err(UnknownCommand(token.to_string())),
        }
    }
}
