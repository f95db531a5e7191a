//! Turns coding statistics into the text that ends up in the gist.

pub mod bar;
pub mod progress;

use std::fmt::Display;

use bar::render_bar;
use progress::YearProgress;

use crate::wakatime::entities::LanguageStat;

pub const YEAR_BAR_WIDTH: usize = 22;
pub const LANGUAGE_BAR_WIDTH: usize = 21;
pub const MAX_LANGUAGES: usize = 3;

const NAME_WIDTH: usize = 11;
const TIME_WIDTH: usize = 9;

/// Lines of the rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Builds the report: a year progress line, an empty line and up to [MAX_LANGUAGES] language
/// lines in the order they were given.
pub fn compose_report(progress: &YearProgress, languages: &[LanguageStat]) -> Report {
    let mut lines = Vec::with_capacity(2 + MAX_LANGUAGES);

    lines.push(format!(
        "🕓 {} {}",
        render_bar(*progress.percent().rounded(2), YEAR_BAR_WIDTH),
        progress.current_year + 1
    ));
    lines.push(String::new());

    for language in languages.iter().take(MAX_LANGUAGES) {
        lines.push(language_line(language));
    }

    Report { lines }
}

fn language_line(language: &LanguageStat) -> String {
    format!(
        "{:<NAME_WIDTH$} {:<TIME_WIDTH$} {} {:>5.1}%",
        language.name,
        shorten_time(&language.text),
        render_bar(*language.percent, LANGUAGE_BAR_WIDTH),
        *language.percent.rounded(1),
    )
}

/// `3 hrs 20 mins` -> `3 h 20 m`
fn shorten_time(text: &str) -> String {
    text.replace("hrs", "h")
        .replace("hr", "h")
        .replace("mins", "m")
        .replace("min", "m")
}
