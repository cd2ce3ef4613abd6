//! Writing a journal entry in the user's own editor.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path, process::Command};
use tracing::debug;

const FALLBACK_EDITOR: &str = "vi";

/// The editor to launch: `editor` from config.toml, then `$VISUAL`, then
/// `$EDITOR`. Blank values are skipped.
pub fn editor_command(configured: Option<&str>) -> String {
    let from_env = |var: &str| std::env::var(var).ok();
    configured
        .map(str::to_string)
        .into_iter()
        .chain(from_env("VISUAL"))
        .chain(from_env("EDITOR"))
        .find(|cmd| !cmd.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Lets the user write an entry in their editor.
///
/// Returns `None` when the buffer was left blank.
pub fn read_entry_from_editor(configured: Option<&str>) -> Result<Option<String>> {
    let editor = editor_command(configured);
    let draft = tempfile::Builder::new()
        .prefix("atmalog-entry-")
        .suffix(".txt")
        .tempfile()
        .context("creating a draft file for the editor")?;

    launch(&editor, draft.path())?;
    let text = fs::read_to_string(draft.path()).context("reading the editor draft")?;
    debug!(editor = %editor, bytes = text.len(), "editor closed");
    Ok(Some(text).filter(|t| !t.trim().is_empty()))
}

/// Runs `editor` on `path`. The command may carry its own arguments, as in `code --wait`.
fn launch(editor: &str, path: &Path) -> Result<()> {
    let mut parts = editor.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("no editor configured");
    };
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("launching editor `{editor}`"))?;
    if !status.success() {
        bail!("editor `{editor}` exited with {status}; the entry was not submitted");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_editor_wins() {
        assert_eq!(editor_command(Some("hx")), "hx");
    }

    #[test]
    fn blank_configured_editor_is_skipped() {
        assert_ne!(editor_command(Some("  ")), "  ");
    }

    #[cfg(unix)]
    #[test]
    fn untouched_buffer_is_no_entry() {
        assert_eq!(read_entry_from_editor(Some("true")).unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn failing_editor_is_an_error() {
        let err = read_entry_from_editor(Some("false")).unwrap_err();
        assert!(err.to_string().contains("exited with"));
    }
}
