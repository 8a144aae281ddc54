//! Line commands understood by the interactive viewer.

use anyhow::{anyhow, bail, Result};
use inputview_core::{Candidate, CandidateRenderer, ExpandedCandidateView, FunctionalKey, KeyResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Press one of the functional keys
    Press(FunctionalKey),
    /// Replace the candidate list
    Show(Vec<String>),
    Close,
    Resize(u32, u32),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  n, j          page down
  p, k          page up
  b             backspace key
  e             enter key
  s WORD...     show a new candidate list
  c             close the view
  r W H         resize to W x H pixels
  h, ?          this help
  q             quit";

/// Parse one input line. Blank lines are an error the caller may ignore.
pub fn parse_command(line: &str) -> Result<Command> {
    let mut parts = line.split_whitespace();
    let head = parts.next().ok_or_else(|| anyhow!("empty command"))?;
    let command = match head {
        "n" | "j" => Command::Press(FunctionalKey::PageDown),
        "p" | "k" => Command::Press(FunctionalKey::PageUp),
        "b" => Command::Press(FunctionalKey::Backspace),
        "e" => Command::Press(FunctionalKey::Enter),
        "s" => Command::Show(parts.by_ref().map(str::to_string).collect()),
        "c" => Command::Close,
        "r" => {
            let width = parts.next().ok_or_else(|| anyhow!("resize needs a width"))?.parse()?;
            let height = parts.next().ok_or_else(|| anyhow!("resize needs a height"))?.parse()?;
            Command::Resize(width, height)
        }
        "h" | "?" => Command::Help,
        "q" => Command::Quit,
        other => bail!("unknown command '{}'", other),
    };
    if parts.next().is_some() {
        bail!("too many arguments for '{}'", head);
    }
    Ok(command)
}

/// What the viewer should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the view
    Redraw,
    /// Print a message and leave the view as is
    Message(String),
    Quit,
}

/// Apply a command to the view.
pub fn apply<R: CandidateRenderer>(view: &mut ExpandedCandidateView<R>, command: Command) -> Outcome {
    match command {
        Command::Press(key) => match view.press(key) {
            KeyResult::Handled => Outcome::Redraw,
            KeyResult::Ignored => Outcome::Message(match key {
                FunctionalKey::PageUp => "already on the first page".to_string(),
                _ => "no more candidates".to_string(),
            }),
            KeyResult::Forward(key) => Outcome::Message(format!("{:?} forwarded to host", key)),
        },
        Command::Show(words) => {
            view.show_candidates(words.into_iter().map(Candidate::new).collect(), 0);
            Outcome::Redraw
        }
        Command::Close => {
            view.close();
            Outcome::Message("closed".to_string())
        }
        Command::Resize(width, height) => {
            view.resize(width, height);
            Outcome::Message(format!(
                "cells are now {}x{}px, shown on the next page",
                view.metrics().cell_width,
                view.metrics().cell_height
            ))
        }
        Command::Help => Outcome::Message(HELP.to_string()),
        Command::Quit => Outcome::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("n").unwrap(), Command::Press(FunctionalKey::PageDown));
        assert_eq!(parse_command(" k ").unwrap(), Command::Press(FunctionalKey::PageUp));
        assert_eq!(parse_command("r 640 200").unwrap(), Command::Resize(640, 200));
        assert_eq!(
            parse_command("s the then").unwrap(),
            Command::Show(vec!["the".to_string(), "then".to_string()])
        );
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("").is_err());
        assert!(parse_command("x").is_err());
        assert!(parse_command("r 640").is_err());
        assert!(parse_command("r wide 200").is_err());
        assert!(parse_command("n 3").is_err());
    }
}
