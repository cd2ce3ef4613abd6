use clap::{ArgGroup, Parser};

use crate::render::ColorMode;

/// atmalog — AI journal for yogic self-reflection
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("view").args(["weekly", "list", "path"])),
)]
pub struct Cli {
    /// Prints the file where entries are stored
    #[arg(long, short)]
    pub path: bool,
    /// Shows the weekly review of your recent entries.
    #[arg(long, short, conflicts_with = "text")]
    pub weekly: bool,
    /// Lists saved entries, newest first.
    #[arg(long, short, conflicts_with = "text")]
    pub list: bool,
    /// Only prints the number of saved entries.
    #[arg(long, requires = "list")]
    pub count: bool,
    /// One line per entry: date, time, emotion and the first line of text.
    #[arg(long, short, requires = "list")]
    pub short: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Gemini API key. Overrides `api_key` from config.toml.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// Gemini model to use (e.g. `gemini-2.5-flash`).
    #[arg(long, env = "ATMALOG_MODEL")]
    pub model: Option<String>,

    /// Entry text (e.g., `atmalog I feel anxious today`). Opens your $EDITOR when empty.
    #[arg()]
    pub text: Vec<String>,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}
