//! Slash-command metadata and parsing.

/// Static slash command metadata used by parsing and `/help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlashCommand {
    pub name: &'static str,
    pub description: &'static str,
}

/// Built-in slash commands for interactive mode.
pub const SLASH_COMMANDS: [SlashCommand; 5] = [
    SlashCommand {
        name: "/reset",
        description: "Start a new conversation (keeps the system instruction).",
    },
    SlashCommand {
        name: "/help",
        description: "List available slash commands.",
    },
    SlashCommand {
        name: "/quit",
        description: "Exit interactive mode.",
    },
    SlashCommand {
        name: "/exit",
        description: "Exit interactive mode.",
    },
    SlashCommand {
        name: "/q",
        description: "Short alias for exit.",
    },
];

/// Parsed slash command actions consumed by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommandAction {
    Reset,
    Help,
    Quit,
    Unknown(String),
}

/// Parse a slash command from user input.
///
/// Returns `None` if the input is not a slash command. Only a leading `/`
/// followed by letters counts, so text such as `/etc/hosts is empty` or
/// `//escaped` is left for the caller to submit.
pub fn parse_slash_command(input: &str) -> Option<SlashCommandAction> {
    let token = input.trim().split_whitespace().next()?;
    let name = token.strip_prefix('/')?;
    if !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let token = token.to_ascii_lowercase();
    let action = match token.as_str() {
        "/" | "/help" => SlashCommandAction::Help,
        "/reset" => SlashCommandAction::Reset,
        "/quit" | "/exit" | "/q" => SlashCommandAction::Quit,
        _ => SlashCommandAction::Unknown(token),
    };
    Some(action)
}

/// Strip the `//` escape that sends a message starting with `/` verbatim.
pub fn unescape_leading_slash(input: &str) -> &str {
    match input.strip_prefix("//") {
        Some(_) => &input[1..],
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(parse_slash_command("what is overfitting?"), None);
        assert_eq!(parse_slash_command("  a/b  "), None);
    }

    #[test]
    fn parses_known_commands_case_insensitively() {
        assert_eq!(parse_slash_command("/reset"), Some(SlashCommandAction::Reset));
        assert_eq!(parse_slash_command("  /RESET  "), Some(SlashCommandAction::Reset));
        assert_eq!(parse_slash_command("/help"), Some(SlashCommandAction::Help));
        assert_eq!(parse_slash_command("/"), Some(SlashCommandAction::Help));
        assert_eq!(parse_slash_command("/q"), Some(SlashCommandAction::Quit));
        assert_eq!(parse_slash_command("/exit now"), Some(SlashCommandAction::Quit));
    }

    #[test]
    fn paths_and_escapes_are_not_commands() {
        assert_eq!(parse_slash_command("/etc/hosts is empty, why?"), None);
        assert_eq!(parse_slash_command("//reset"), None);
        assert_eq!(parse_slash_command("/v2 api?"), None);
    }

    #[test]
    fn double_slash_escape_keeps_one_slash() {
        assert_eq!(unescape_leading_slash("//reset means what?"), "/reset means what?");
        assert_eq!(unescape_leading_slash("/etc/hosts"), "/etc/hosts");
        assert_eq!(unescape_leading_slash("plain"), "plain");
    }

    #[test]
    fn unknown_command_keeps_token() {
        assert_eq!(
            parse_slash_command("/model gpt-4"),
            Some(SlashCommandAction::Unknown("/model".to_string()))
        );
    }

    #[test]
    fn every_listed_command_parses_to_a_known_action() {
        for command in SLASH_COMMANDS {
            let parsed = parse_slash_command(command.name).expect("slash command");
            assert!(
                !matches!(parsed, SlashCommandAction::Unknown(_)),
                "{} parsed as unknown",
                command.name
            );
        }
    }
}
