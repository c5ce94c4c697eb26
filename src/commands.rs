//! Command-line parsing
//!
//! Parses `ratatouille <command> [args]` into a [`Command`].

use std::path::PathBuf;

/// Parsed command from the process arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Launch the desktop window: (no args) or `open`
    Open,
    /// Detect ingredients in a photo: `detect <image>`
    Detect { image: PathBuf },
    /// Match recipes: `recipes <ingredient>...`
    Recipes { ingredients: Vec<String> },
    /// Pick a random recipe: `chaos [ingredient]...`
    Chaos { ingredients: Vec<String> },
    /// Probe the backend: `status`
    Status,
    /// Show help: `help`
    Help,
    /// Anything we could not make sense of, with the reason
    Invalid { message: String },
}

impl Command {
    /// Parse arguments after the program name
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let Some(cmd) = args.first() else {
            return Command::Open;
        };
        let rest: Vec<String> = args[1..]
            .iter()
            .map(|a| a.as_ref().trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();

        match cmd.as_ref().to_lowercase().as_str() {
            "open" | "gui" => Command::Open,
            "detect" | "scan" => match rest.first() {
                Some(path) => Command::Detect {
                    image: PathBuf::from(path),
                },
                None => Command::Invalid {
                    message: "Usage: ratatouille detect <image>".to_string(),
                },
            },
            "recipes" | "match" => {
                if rest.is_empty() {
                    Command::Invalid {
                        message: "Usage: ratatouille recipes <ingredient>...".to_string(),
                    }
                } else {
                    Command::Recipes { ingredients: rest }
                }
            }
            "chaos" => Command::Chaos { ingredients: rest },
            "status" => Command::Status,
            "help" | "--help" | "-h" => Command::Help,
            other => Command::Invalid {
                message: format!("Unknown command: {other}. Run 'ratatouille help' for usage"),
            },
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r#"Ratatouille AI - The Fridge-Scavenger Chef

Usage: ratatouille [command]

Commands:
  (none), open              Open the kitchen window
  detect <image>            Detect ingredients in a photo
  recipes <ingredient>...   Match recipes for the given ingredients
  chaos [ingredient]...     Let the chef pick a random recipe
  status                    Check that the backend is reachable
  help                      Show this help message

Environment:
  RATATOUILLE_API_BASE      Backend URL (default http://127.0.0.1:8000)
  RATATOUILLE_TIMEOUT_SECS  Request timeout in seconds (default 30)
  RATATOUILLE_TOAST_MS      Notification duration in ms (default 3000)
  RUST_LOG                  Log filter, e.g. ratatouille=debug"#
    }
}
