use artable::api::{CmdMessage, MessageLevel};
use artable::model::{Artwork, PageView, Selection, SelectionOutcome};
use colored::Colorize;
use console::Term;
use once_cell::sync::Lazy;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MIN_LINE_WIDTH: usize = 80;
const DATE_WIDTH: usize = 6;

/// Detected once; table rendering is sized to the terminal.
static LINE_WIDTH: Lazy<usize> = Lazy::new(|| {
    let (_, cols) = Term::stdout().size();
    (cols as usize).max(MIN_LINE_WIDTH)
});

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_page(view: &PageView) {
    print_table(&view.artworks);
    println!(
        "{}",
        format!(
            "page {} of {} · {} artworks",
            view.index + 1,
            view.pagination.total_pages,
            view.pagination.total
        )
        .dimmed()
    );
}

pub(super) fn print_selection(selection: &Selection) {
    print_table(&selection.artworks);

    let summary = match selection.outcome {
        SelectionOutcome::Complete => {
            format!("selected {} rows", selection.len())
        }
        SelectionOutcome::Partial => {
            format!(
                "selected {} rows ({} requested)",
                selection.len(),
                selection.requested
            )
        }
    };
    println!("{}", summary.dimmed());
}

fn print_table(artworks: &[Artwork]) {
    if artworks.is_empty() {
        println!("No artworks.");
        return;
    }

    let widths = column_widths(*LINE_WIDTH);

    println!(
        "{}",
        format_row(
            &["Title", "Origin", "Artist", "Inscriptions", "Start", "End"],
            &widths,
        )
        .bold()
    );

    for artwork in artworks {
        let start = artwork.date_start.map(|y| y.to_string());
        let end = artwork.date_end.map(|y| y.to_string());

        let cells = [
            cell(&artwork.title),
            cell(&artwork.place_of_origin),
            cell(&artwork.artist_display),
            cell(&artwork.inscriptions),
            cell(&start),
            cell(&end),
        ];
        println!("{}", format_row(&cells, &widths));
    }
}

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("—")
}

/// Title, origin, artist, and inscriptions share the flexible space in
/// fixed proportions; the two date columns are fixed.
fn column_widths(line_width: usize) -> [usize; 6] {
    let fixed = 2 * DATE_WIDTH + 5 * 2; // dates + column gaps
    let flexible = line_width.saturating_sub(fixed).max(40);

    let title = flexible * 35 / 100;
    let origin = flexible * 15 / 100;
    let artist = flexible * 25 / 100;
    let inscriptions = flexible - title - origin - artist;

    [title, origin, artist, inscriptions, DATE_WIDTH, DATE_WIDTH]
}

fn format_row<S: AsRef<str>>(cells: &[S; 6], widths: &[usize; 6]) -> String {
    let mut row = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            row.push_str("  ");
        }
        let truncated = truncate_to_width(cell.as_ref(), *width);
        row.push_str(&truncated);
        row.push_str(&" ".repeat(width.saturating_sub(truncated.width())));
    }
    row.trim_end().to_string()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a longer title", 8), "a longe…");
        // Wide CJK characters count as two columns.
        assert_eq!(truncate_to_width("浮世絵の世界", 7), "浮世絵…");
    }

    #[test]
    fn column_widths_fill_the_line() {
        let widths = column_widths(100);
        let gaps = 5 * 2;
        assert_eq!(widths.iter().sum::<usize>() + gaps, 100);
    }
}
