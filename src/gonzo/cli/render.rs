use colored::Colorize;
use gonzo::api::{CmdMessage, MessageLevel};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const HEADER_RULE: usize = 10;

/// A note framed with its id as a boxed header, followed by a blank line.
///
/// ```text
/// ╭────────────────────────────────────────────────╮
/// ├──────────  2024-03-05_08:15_Tuesday  ──────────┤
///
/// note text
///
/// ```
pub fn render_note(id: &str, content: &str) -> String {
    let rule = "─".repeat(HEADER_RULE);
    let span = "─".repeat(2 * HEADER_RULE + 2 + id.width() + 2);
    format!("╭{span}╮\n├{rule}  {id}  {rule}┤\n\n{content}\n\n")
}

pub fn render_id_list<I: AsRef<str>>(ids: &[I]) -> String {
    ids.iter().map(|id| format!("{}\n", id.as_ref())).collect()
}

/// Status lines are best effort: a closed stdout or stderr drops them.
pub fn print_messages(messages: &[CmdMessage]) {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    for message in messages {
        let _ = match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed()),
            MessageLevel::Success => writeln!(out, "{}", message.content.green()),
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow()),
            MessageLevel::Error => writeln!(err, "{}", message.content.red()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lines_have_equal_width() {
        let out = render_note("2024-03-05_08:15_Tuesday", "hello");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].width(), lines[1].width());
        assert!(lines[0].starts_with('╭') && lines[0].ends_with('╮'));
        assert_eq!(lines[1], "├──────────  2024-03-05_08:15_Tuesday  ──────────┤");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "hello");
    }

    #[test]
    fn note_ends_with_blank_line() {
        assert!(render_note("a", "body").ends_with("body\n\n"));
    }

    #[test]
    fn id_list_one_per_line() {
        assert_eq!(render_id_list(&["a", "b"]), "a\nb\n");
        let empty: [&str; 0] = [];
        assert_eq!(render_id_list(&empty), "");
    }
}
