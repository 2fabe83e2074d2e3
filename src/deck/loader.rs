//! Deck file parsing.
//!
//! Slides are separated by lines consisting of exactly `---`. The first line
//! of a slide that starts with `# ` becomes its title; everything else is body.

use super::{Deck, Slide};
use crate::error::AppError;
use std::path::Path;

pub const SLIDE_SEPARATOR: &str = "---";

const TITLE_PREFIX: &str = "# ";
const HEADING_MARKER: &str = "#";
const TAB_WIDTH: usize = 4;

/// Reads and parses a deck file.
///
/// # Errors
/// * `AppError::DeckLoad` - The file could not be read
/// * `AppError::EmptyDeck` - The file contains no non-empty slides
pub async fn load_deck(path: &Path) -> Result<Deck, AppError> {
    let display_path = path.display().to_string();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::deck_load(&display_path, e.to_string()))?;

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("deck")
        .to_string();

    let deck = parse_deck(&name, &content);
    if deck.is_empty() {
        return Err(AppError::empty_deck(display_path));
    }

    tracing::info!("Loaded deck '{}' with {} slides", deck.name(), deck.len());
    Ok(deck)
}

/// Parses deck text. Blank slides between separators are skipped.
///
/// A separator is a line that is exactly `---`. Line text is sanitized with
/// [`sanitize_line`] before parsing.
pub fn parse_deck(name: &str, content: &str) -> Deck {
    let mut slides = Vec::new();
    let mut current: Vec<String> = Vec::new();

    // `lines` already strips a trailing `\r`
    for line in content.lines() {
        if line == SLIDE_SEPARATOR {
            push_slide(&mut slides, &current);
            current.clear();
        } else {
            current.push(sanitize_line(line).trim_end().to_string());
        }
    }
    push_slide(&mut slides, &current);

    Deck::new(sanitize_line(name), slides)
}

/// Expands tabs to the next tab stop and drops every other control
/// character, so deck text can neither move the cursor nor smuggle escape
/// sequences into the terminal.
pub fn sanitize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else if !ch.is_control() {
            out.push(ch);
            column += 1;
        }
    }
    out
}

fn push_slide(slides: &mut Vec<Slide>, lines: &[String]) {
    let slide = parse_slide(lines);
    if slide.is_empty() {
        tracing::debug!("Skipping blank slide after slide {}", slides.len());
        return;
    }
    slides.push(slide);
}

/// Heading text of a `# ` line. A bare `#` is an empty heading.
fn heading(line: &str) -> Option<&str> {
    if line == HEADING_MARKER {
        return Some("");
    }
    line.strip_prefix(TITLE_PREFIX).map(str::trim)
}

fn parse_slide(lines: &[String]) -> Slide {
    let mut title = None;
    let mut body = Vec::with_capacity(lines.len());

    for line in lines {
        match heading(line) {
            // Empty headings carry nothing to show
            Some("") => {}
            Some(text) if title.is_none() => title = Some(text.to_string()),
            _ => body.push(line.clone()),
        }
    }

    // Trim leading/trailing blank lines only; inner spacing is content
    let start = body.iter().position(|l| !l.trim().is_empty());
    let end = body.iter().rposition(|l| !l.trim().is_empty());
    let body = match (start, end) {
        (Some(start), Some(end)) => body[start..=end].to_vec(),
        _ => Vec::new(),
    };

    Slide::new(title, body)
}
