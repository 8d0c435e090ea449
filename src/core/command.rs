//! Command parser for the : command system

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation
    Home,
    Tree,

    // Shell
    Sidebar,
    Help,
    Quit,

    // Tree page
    ExpandAll,
    CollapseAll,
    Toggle(String),

    // Export
    Export(Option<String>),

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        "home" | "h" => Command::Home,
        "tree" | "projects" | "t" => Command::Tree,

        "sidebar" | "sb" => Command::Sidebar,
        "help" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,

        "expand-all" | "expand" | "ea" => Command::ExpandAll,
        "collapse-all" | "collapse" | "reset" | "ca" => Command::CollapseAll,
        "toggle" => {
            if let Some(id) = args {
                Command::Toggle(id)
            } else {
                Command::Unknown(input.to_string())
            }
        }

        "export" | "exp" => Command::Export(args.map(|s| s.to_lowercase())),

        _ => Command::Unknown(input.to_string()),
    }
}
