use colored::Colorize;
use filmdex::commands::{CmdMessage, MessageLevel, ResultSet};
use filmdex::display::Renderer;
use filmdex::filter::FilterControl;
use filmdex::model::{CatalogEntry, ViewMode};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const INDEX_WIDTH: usize = 5;
const TITLE_WIDTH: usize = 36;
const YEAR_WIDTH: usize = 6;
const DIRECTOR_WIDTH: usize = 24;
const CARD_WIDTH: usize = 24;
const CARD_GAP: usize = 1;

/// Draws results on stdout. Each result replaces the previous one as a
/// single block of text.
pub struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn display_result(&mut self, result: &ResultSet, view: ViewMode) {
        let block = match view {
            ViewMode::Grid => format_grid(result),
            ViewMode::List => format_list(result),
        };
        print!("{}", block);
    }

    fn display_filter(&mut self, control: &FilterControl) {
        print!("{}", format_filter(control));
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

const EMPTY: &str = "No movies found.\n";

pub fn format_list(result: &ResultSet) -> String {
    if result.is_empty() {
        return EMPTY.to_string();
    }

    let mut out = String::new();
    for (i, entry) in result.entries.iter().enumerate() {
        let idx = format!("{:>width$}. ", i + 1, width = INDEX_WIDTH - 2);
        let movie = &entry.movie;

        let title = pad_to_width(movie.title.as_deref().unwrap_or("?"), TITLE_WIDTH);
        let year = pad_to_width(&year_text(entry), YEAR_WIDTH);
        let director = pad_to_width(movie.director.as_deref().unwrap_or("-"), DIRECTOR_WIDTH);
        let fixed = INDEX_WIDTH + TITLE_WIDTH + YEAR_WIDTH + DIRECTOR_WIDTH;
        let producer = truncate_to_width(
            movie.producer.as_deref().unwrap_or("-"),
            LINE_WIDTH.saturating_sub(fixed),
        );

        out.push_str(&format!(
            "{}{}{}{}{}\n",
            idx.dimmed(),
            title.bold(),
            year.yellow(),
            director,
            producer.dimmed()
        ));
        if let Some(image) = &movie.image {
            let image = truncate_to_width(image, LINE_WIDTH - INDEX_WIDTH);
            out.push_str(&format!("{}{}\n", " ".repeat(INDEX_WIDTH), image.dimmed()));
        }
    }
    out
}

pub fn format_grid(result: &ResultSet) -> String {
    if result.is_empty() {
        return EMPTY.to_string();
    }

    let per_row = (LINE_WIDTH / (CARD_WIDTH + CARD_GAP)).max(1);
    let gap = " ".repeat(CARD_GAP);
    let mut out = String::new();

    for row in result.entries.chunks(per_row) {
        let titles: Vec<String> = row
            .iter()
            .map(|e| {
                let t = pad_to_width(e.movie.title.as_deref().unwrap_or("?"), CARD_WIDTH);
                t.bold().to_string()
            })
            .collect();
        let years: Vec<String> = row
            .iter()
            .map(|e| pad_to_width(&year_text(e), CARD_WIDTH).yellow().to_string())
            .collect();
        let directors: Vec<String> = row
            .iter()
            .map(|e| {
                let d = pad_to_width(e.movie.director.as_deref().unwrap_or("-"), CARD_WIDTH);
                d.dimmed().to_string()
            })
            .collect();
        let producers: Vec<String> = row
            .iter()
            .map(|e| {
                let p = pad_to_width(e.movie.producer.as_deref().unwrap_or("-"), CARD_WIDTH);
                p.dimmed().to_string()
            })
            .collect();

        let mut lines = vec![titles, years, directors, producers];
        if row.iter().any(|e| e.movie.image.is_some()) {
            lines.push(
                row.iter()
                    .map(|e| {
                        let i = pad_to_width(e.movie.image.as_deref().unwrap_or(""), CARD_WIDTH);
                        i.dimmed().to_string()
                    })
                    .collect(),
            );
        }

        for line in lines {
            out.push_str(line.join(&gap).trim_end());
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

pub fn format_filter(control: &FilterControl) -> String {
    let mut out = if control.active {
        format!("{} {}\n", control.legend.bold(), "(active)".dimmed())
    } else {
        format!("{}\n", control.legend.bold())
    };
    if control.options.is_empty() {
        out.push_str(&format!("  {}\n", "(no options)".dimmed()));
    }
    for option in &control.options {
        let mark = if option.checked { "[x]" } else { "[ ]" };
        out.push_str(&format!("  {} {}\n", mark, option.value));
    }
    out
}

fn year_text(entry: &CatalogEntry) -> String {
    entry
        .movie
        .release_year
        .as_ref()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "----".to_string())
}

/// Truncate to `max_width` columns (with an ellipsis) and pad with spaces
/// to exactly `max_width`.
fn pad_to_width(s: &str, max_width: usize) -> String {
    let truncated = truncate_to_width(s, max_width.saturating_sub(1));
    let padding = max_width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
