//! Output Control Module
//!
//! Centralized rendering for the session: the command menu, prompts,
//! status lines, and recoverable error messages. Everything writes to a
//! caller-supplied `Write` so the session can be driven by stdout or a
//! buffer in tests. Colors follow `colored`'s global override, which the
//! CLI switches off for `--no-color`.

use colored::*;
use std::fmt::Display;
use std::io::{self, Write};

use crate::session::command::MENU;

/// Print the numbered command menu
pub fn menu<W: Write>(out: &mut W) -> io::Result<()> {
    for entry in MENU {
        match entry.hint {
            Some(hint) => writeln!(out, "{}. {} {}", entry.number, entry.command, hint)?,
            None => writeln!(out, "{}. {}", entry.number, entry.command)?,
        }
    }
    Ok(())
}

/// Print a prompt without a trailing newline and flush it
pub fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

/// Print a plain status line
pub fn line<W: Write>(out: &mut W, text: impl Display) -> io::Result<()> {
    writeln!(out, "{}", text)
}

/// A refused operation the user can correct ("Cannot pop, ...")
pub fn notice<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text.yellow())
}

/// `error: ...` line for misuse and bad input
pub fn error<W: Write>(out: &mut W, message: impl Display) -> io::Result<()> {
    writeln!(out, "{} {}", "error:".red().bold(), message)
}

/// "The queue is [not ]<state>."
pub fn predicate<W: Write>(out: &mut W, holds: bool, state: &str) -> io::Result<()> {
    let negation = if holds { "" } else { "not " };
    writeln!(out, "The queue is {}{}.", negation, state)
}

/// Space-separated elements, oldest first, on one line
pub fn elements<W, I, T>(out: &mut W, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = T>,
    T: Display,
{
    let rendered: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    writeln!(out, "{}", rendered.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_menu_lists_all_commands() {
        let text = render(|w| menu(w));
        assert!(text.starts_with("1. new\n"));
        assert!(text.contains("4. push [value]\n"));
        assert!(text.contains("5. print-all\n"));
        assert!(text.ends_with("9. exit\n"));
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn test_elements_space_separated() {
        let text = render(|w| elements(w, [2, 3, 4, 5]));
        assert_eq!(text, "2 3 4 5\n");

        let text = render(|w| elements(w, Vec::<i64>::new()));
        assert_eq!(text, "\n");
    }

    #[test]
    fn test_predicate_wording() {
        assert_eq!(render(|w| predicate(w, true, "full")), "The queue is full.\n");
        assert_eq!(
            render(|w| predicate(w, false, "empty")),
            "The queue is not empty.\n"
        );
    }

    #[test]
    fn test_error_prefix() {
        let text = render(|w| error(w, "queue not created"));
        assert!(text.contains("error:"));
        assert!(text.contains("queue not created"));
    }
}
