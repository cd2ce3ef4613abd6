use super::CliModeResult;
use crate::{
    cli::Cli,
    editor_utils::read_entry_from_editor,
    render::{RenderOptions, Renderer},
};
use anyhow::Result;
use atmalog_core::{AtmaLog, View};

pub struct AtmaLogCli {
    cli: Cli,
    renderer: Renderer,
    app: AtmaLog,
}

impl AtmaLogCli {
    pub fn new(cli: Cli, app: AtmaLog) -> Self {
        let renderer = Renderer::new(Some(RenderOptions {
            date_format: app.config.date_format.to_string(),
            use_color: cli.color.use_color(),
            short_mode: cli.short,
        }));
        AtmaLogCli { cli, renderer, app }
    }

    pub async fn run(&mut self) -> Result<CliModeResult> {
        if self.cli.path {
            self.renderer
                .print_info(&format!("{}", self.app.config.entries_path().display()));
            return Ok(CliModeResult::Finish);
        }

        // Entries that failed to load are reported once; the session goes on empty.
        if let Some(message) = self.app.error() {
            self.renderer.print_error(message);
        }

        if self.cli.weekly {
            self.app.switch_view(View::Weekly);
        }

        let result = match self.app.view() {
            View::Weekly => self.weekly_mode().await?,
            View::Journal => match self.list_mode()? {
                CliModeResult::NothingToDo => self.journal_mode().await?,
                done => done,
            },
        };
        Ok(result)
    }

    /// Analyzes inline text, or whatever was written in the editor.
    pub async fn journal_mode(&mut self) -> Result<CliModeResult> {
        let input = if self.cli.text.is_empty() {
            // A blank buffer becomes an empty draft, which the session rejects.
            read_entry_from_editor(self.app.config.editor.as_deref())?.unwrap_or_default()
        } else {
            self.cli.text.join(" ")
        };
        self.app.set_draft(input.trim());

        if !self.app.draft().is_empty() {
            self.renderer.print_loading("Connecting with your entry...");
        }

        match self.app.submit().await {
            Ok(entry) => {
                self.renderer.print_info(&format!("Saved entry {}", entry.id));
                self.renderer.print_analysis(&entry.analysis);
                Ok(CliModeResult::Finish)
            }
            Err(err) => {
                self.renderer.print_error(&err.to_string());
                // A failed save still produced a reflection worth showing.
                if let Some(analysis) = self.app.latest_analysis() {
                    self.renderer.print_analysis(analysis);
                }
                Ok(CliModeResult::Failed)
            }
        }
    }

    pub async fn weekly_mode(&mut self) -> Result<CliModeResult> {
        if !self.app.entries().is_empty() {
            self.renderer.print_loading("Reflecting on your week...");
        }
        match self.app.weekly_review().await {
            Ok(weekly) => {
                let count = self.count_in_window();
                self.renderer.print_weekly(&weekly, count);
                Ok(CliModeResult::Finish)
            }
            Err(err) => {
                self.renderer.print_error(&err.to_string());
                Ok(CliModeResult::Failed)
            }
        }
    }

    pub fn list_mode(&self) -> Result<CliModeResult> {
        if !self.cli.list {
            return Ok(CliModeResult::NothingToDo);
        }
        let entries = self.app.entries();
        if self.cli.count {
            self.renderer
                .print_info(&format!("{} entries found.", entries.len()));
        } else if entries.is_empty() {
            self.renderer
                .print_info("Write a new entry to receive your AI-powered yogic insight.");
        } else {
            self.renderer.print_entries(entries);
        }
        Ok(CliModeResult::Finish)
    }

    fn count_in_window(&self) -> usize {
        atmalog_core::dates::entries_in_window(
            self.app.entries(),
            chrono::Utc::now(),
            self.app.config.weekly_window_days,
        )
        .len()
    }
}
