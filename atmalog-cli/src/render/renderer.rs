use super::theme::Lotus;
use atmalog_core::dates::format_date;
use atmalog_core::{JournalAnalysis, PersistedJournalEntry, WeeklyAnalysis};
use chrono::Local;
use std::io::{self, Write};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub short_mode: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Lotus::skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%a, %d %b %Y".to_string(),
                    use_color: true,
                    short_mode: false,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{}", md.trim_end());
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            self.skin.print_text(&format!("|-|\n| {message} |\n|-|\n"));
        } else {
            println!("{message}");
        }
    }

    /// The error banner, on stderr.
    pub fn print_error(&self, message: &str) {
        let _ = self.write_error(&mut io::stderr().lock(), message);
    }

    /// The loading indicator shown while waiting for the reflection service, on stderr.
    pub fn print_loading(&self, message: &str) {
        let _ = self.write_loading(&mut io::stderr().lock(), message);
    }

    fn write_error(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        if self.opts.use_color {
            let banner = format!("|-|\n| **Error** |\n|-|\n| {message} |\n|-|\n");
            write!(out, "{}", self.skin.term_text(&banner))
        } else {
            writeln!(out, "Error: {message}")
        }
    }

    fn write_loading(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        if self.opts.use_color {
            writeln!(out, "{}", format!("… {message}").with(Color::DarkGrey))
        } else {
            writeln!(out, "{message}")
        }
    }

    pub fn print_analysis(&self, analysis: &JournalAnalysis) {
        self.print_md(&analysis_markdown(analysis));
    }

    pub fn print_weekly(&self, weekly: &WeeklyAnalysis, entry_count: usize) {
        self.print_md(&weekly_markdown(weekly, entry_count));
    }

    pub fn print_entry_line(&self, entry: &PersistedJournalEntry) {
        let local = entry.date.with_timezone(&Local);
        let mut date = local.format("%Y-%m-%d").to_string();
        let mut time = local.format("%H:%M").to_string();
        let mut emotion = entry.analysis.dominant_emotion.trim().to_string();
        let summary = first_line(&entry.content);
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            time = time.with(Color::Blue).to_string();
            emotion = emotion.with(Color::Yellow).to_string();
        }
        println!("{date} {time} - {emotion} - {summary}");
    }

    /// Prints entries in the given order (newest first for the stored list).
    pub fn print_entries(&self, entries: &[PersistedJournalEntry]) {
        for (i, entry) in entries.iter().enumerate() {
            if self.opts.short_mode {
                self.print_entry_line(entry);
                continue;
            }
            self.print_md(&entry_markdown(entry, &self.opts.date_format));
            if i + 1 < entries.len() {
                self.print_md("---");
            }
        }
    }
}

/// Everything the service said about one entry, as Markdown.
pub fn analysis_markdown(analysis: &JournalAnalysis) -> String {
    let practice = &analysis.suggested_practice;
    let chakra = &analysis.chakra_connection;
    format!(
        "# Your Reflection\n\n\
         ## Dominant emotion\n{}\n\n\
         ## Suggested practice\n**{}** ({})\n\n{}\n\n\
         ## Chakra connection\n**{}**\n\n{}\n\n\
         ## Yogic reflection\n> {}\n\n\
         ## Mantra\n*{}*\n",
        analysis.dominant_emotion.trim(),
        practice.name.trim(),
        practice.kind,
        practice.description.trim(),
        chakra.name.trim(),
        chakra.description.trim(),
        analysis.yogic_reflection.trim().replace('\n', "\n> "),
        analysis.mantra.trim(),
    )
}

pub fn weekly_markdown(weekly: &WeeklyAnalysis, entry_count: usize) -> String {
    let themes = if weekly.recurring_yogic_themes.is_empty() {
        "* none this week".to_string()
    } else {
        weekly
            .recurring_yogic_themes
            .iter()
            .map(|t| format!("* {}", t.trim()))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let focus = &weekly.practice_focus;
    format!(
        "# Weekly Review\n*Based on {entry_count} {}.*\n\n\
         ## Emotional pattern\n{}\n\n\
         ## Recurring yogic themes\n{themes}\n\n\
         ## Weekly reflection\n> {}\n\n\
         ## Practice focus\n**{}** ({})\n\n{}\n",
        if entry_count == 1 { "entry" } else { "entries" },
        weekly.emotional_pattern.trim(),
        weekly.weekly_reflection.trim().replace('\n', "\n> "),
        focus.name.trim(),
        focus.kind,
        focus.reason.trim(),
    )
}

pub fn entry_markdown(entry: &PersistedJournalEntry, date_format: &str) -> String {
    let local = entry.date.with_timezone(&Local);
    format!(
        "## {} {}: {}\n{}\n\n*{}: {}*\n",
        format_date(&local, date_format),
        local.format("%H:%M"),
        entry.analysis.dominant_emotion.trim(),
        entry.content.trim_end(),
        entry.analysis.suggested_practice.kind,
        entry.analysis.suggested_practice.name.trim(),
    )
}

fn first_line(content: &str) -> &str {
    content.trim().lines().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use atmalog_core::{
        ChakraConnection, FocusType, PracticeFocus, PracticeType, SuggestedPractice,
    };
    use chrono::{TimeZone, Utc};

    fn analysis() -> JournalAnalysis {
        JournalAnalysis {
            dominant_emotion: "Anxiety".to_string(),
            suggested_practice: SuggestedPractice {
                kind: PracticeType::Pranayama,
                name: "Nadi Shodhana".to_string(),
                description: "Alternate nostril breathing.".to_string(),
            },
            chakra_connection: ChakraConnection {
                name: "Manipura".to_string(),
                description: "Solar plexus.".to_string(),
            },
            yogic_reflection: "Line one\nLine two".to_string(),
            mantra: "I am steady.".to_string(),
        }
    }

    #[test]
    fn analysis_lists_every_section() {
        let md = analysis_markdown(&analysis());
        assert!(md.starts_with("# Your Reflection"));
        assert!(md.contains("## Dominant emotion\nAnxiety"));
        assert!(md.contains("**Nadi Shodhana** (Pranayama)"));
        assert!(md.contains("**Manipura**"));
        assert!(md.contains("> Line one\n> Line two"));
        assert!(md.contains("*I am steady.*"));
    }

    #[test]
    fn weekly_lists_themes_in_order() {
        let weekly = WeeklyAnalysis {
            emotional_pattern: "Calmer".to_string(),
            recurring_yogic_themes: vec!["Santosha".to_string(), "Ahimsa".to_string()],
            weekly_reflection: "Well done.".to_string(),
            practice_focus: PracticeFocus {
                kind: FocusType::Philosophy,
                name: "Yamas".to_string(),
                reason: "Kindness first.".to_string(),
            },
        };
        let md = weekly_markdown(&weekly, 1);
        assert!(md.contains("*Based on 1 entry.*"));
        assert!(md.contains("* Santosha\n* Ahimsa"));
        assert!(md.contains("**Yamas** (Philosophy)"));
    }

    #[test]
    fn entry_heading_shows_emotion_and_practice() {
        let date = Utc.with_ymd_and_hms(2025, 8, 15, 9, 0, 0).unwrap();
        let entry = PersistedJournalEntry::new(
            "id".to_string(),
            date,
            "I feel anxious today\n".to_string(),
            analysis(),
        );
        let md = entry_markdown(&entry, "%Y");
        assert!(md.starts_with("## 2025 "));
        assert!(md.contains(": Anxiety\nI feel anxious today\n"));
        assert!(md.ends_with("*Pranayama: Nadi Shodhana*\n"));
    }

    #[test]
    fn invalid_date_format_renders_default_heading() {
        let date = Utc.with_ymd_and_hms(2025, 8, 15, 9, 0, 0).unwrap();
        let entry =
            PersistedJournalEntry::new("id".to_string(), date, "hi".to_string(), analysis());
        let md = entry_markdown(&entry, "%Q");
        let local = date.with_timezone(&Local);
        let expected = format!("## {} ", local.format("%A, %d %b %Y"));
        assert!(md.starts_with(&expected));
    }

    fn renderer(use_color: bool) -> Renderer {
        Renderer::new(Some(RenderOptions {
            date_format: "%Y".to_string(),
            use_color,
            short_mode: false,
        }))
    }

    #[test]
    fn error_banner_carries_message_in_both_modes() {
        for use_color in [true, false] {
            let mut out = Vec::new();
            renderer(use_color)
                .write_error(&mut out, "Could not save your new journal entry.")
                .unwrap();
            let text = String::from_utf8(out).unwrap();
            assert!(text.contains("Could not save your new journal entry."));
        }
    }

    #[test]
    fn loading_line_carries_message_in_both_modes() {
        for use_color in [true, false] {
            let mut out = Vec::new();
            renderer(use_color)
                .write_loading(&mut out, "Reflecting on your week...")
                .unwrap();
            let text = String::from_utf8(out).unwrap();
            assert!(text.contains("Reflecting on your week..."));
            assert!(text.ends_with('\n'));
        }
    }

    #[test]
    fn first_line_ignores_leading_blank_lines() {
        assert_eq!(first_line("\n\n  hello\nworld"), "hello");
        assert_eq!(first_line(""), "");
    }
}
