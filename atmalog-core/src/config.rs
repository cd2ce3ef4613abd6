use crate::dates::{DEFAULT_DATE_FORMAT, is_valid_date_format};
use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::warn;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `atmalog_entries.json`.
    pub data_dir: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    pub date_format: String,
    /// Gemini API key. The CLI also reads it from `GEMINI_API_KEY`.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    /// How many days back the weekly review looks.
    pub weekly_window_days: u32,
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    editor: Option<String>,
    date_format: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    api_base_url: Option<String>,
    weekly_window_days: Option<u32>,
    log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file_config(FileConfig::default())
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    /// An unreadable or invalid file is ignored.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_default();
        Ok(Self::from_file_config(file_config))
    }

    /// Path of the persisted entry list.
    pub fn entries_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("{}.json", crate::store::ENTRIES_KEY))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        Self {
            data_dir: file_config
                .data_dir
                .unwrap_or_else(Self::default_data_dir),
            editor: file_config.editor,
            date_format: Self::checked_date_format(file_config.date_format),
            api_key: file_config.api_key.filter(|k| !k.trim().is_empty()),
            model: file_config
                .model
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base_url: file_config
                .api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            weekly_window_days: file_config.weekly_window_days.unwrap_or(7),
            log_level: file_config.log_level.unwrap_or_else(|| "warn".to_string()),
        }
    }

    /// Unrenderable strftime patterns are replaced by the default.
    fn checked_date_format(date_format: Option<String>) -> String {
        match date_format {
            Some(fmt) if is_valid_date_format(&fmt) => fmt,
            Some(fmt) => {
                warn!("ignoring invalid date_format {fmt:?}, using {DEFAULT_DATE_FORMAT:?}");
                DEFAULT_DATE_FORMAT.to_string()
            }
            None => DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Default data root: `{data_dir}/atmalog`
    /// - macOS:   `~/Library/Application Support/atmalog`
    /// - Linux:   `$XDG_DATA_HOME/atmalog` or `~/.local/share/atmalog`
    /// - Windows: `%APPDATA%\atmalog`
    fn default_data_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("atmalog")
        } else {
            PathBuf::from("./atmalog")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(b.home_dir().join(".config").join("atmalog").join("config.toml"));
            v.push(b.config_dir().join("atmalog").join("config.toml"));
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("atmalog").join("config.toml");
            let expected_native = b.config_dir().join("atmalog").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_all_keys() {
        let toml = r#"
            data_dir = "/tmp/my-journal"
            editor = "hx"
            api_key = "secret"
            model = "gemini-2.5-pro"
            weekly_window_days = 14
            log_level = "debug"
        "#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.data_dir, Path::new("/tmp/my-journal"));
        assert_eq!(config.editor.as_deref(), Some("hx"));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.weekly_window_days, 14);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_file_config(Config::parse_file("").unwrap());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.weekly_window_days, 7);
        assert_eq!(config.date_format, "%A, %d %b %Y");
        assert!(config.api_key.is_none());
        assert!(config.data_dir.ends_with("atmalog"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = Config::from_file_config(Config::parse_file(r#"api_key = " ""#).unwrap());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn entries_path_uses_fixed_key() {
        let config = crate::tests::mk_config(PathBuf::from("/tmp/atmalog"));
        assert_eq!(
            config.entries_path(),
            Path::new("/tmp/atmalog/atmalog_entries.json")
        );
    }

    #[test]
    fn invalid_date_format_uses_default() {
        let config = Config::from_file_config(Config::parse_file(r#"date_format = "%Q""#).unwrap());
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);

        let config =
            Config::from_file_config(Config::parse_file(r#"date_format = "%d/%m/%Y""#).unwrap());
        assert_eq!(config.date_format, "%d/%m/%Y");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::parse_file("weekly_window_days = \"seven\"").is_err());
    }
}
