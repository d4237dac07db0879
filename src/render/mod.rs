//! Markdown rendering and export helpers.

use pulldown_cmark::{html, CowStr, Event, Options, Parser};

use crate::document::prompt::PAGE_BREAK;

const PAGE_BREAK_DIV: &str = r#"<div class="page-break" aria-label="page break"></div>"#;

/// Render generated markdown to preview HTML.
///
/// The page-break sentinel is first substituted with a markdown thematic
/// break, then every rule event is rewritten into a dedicated divider
/// element so the preview (and the print stylesheet) can treat it as a page
/// boundary rather than a horizontal line.
pub fn render_html(markdown: &str) -> String {
    let normalized = markdown.replace(PAGE_BREAK, "\n\n***\n\n");

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events = Parser::new_ext(&normalized, options).map(|event| match event {
        Event::Rule => Event::Html(CowStr::Borrowed(PAGE_BREAK_DIV)),
        other => other,
    });

    let mut output = String::with_capacity(normalized.len() * 2);
    html::push_html(&mut output, events);
    output
}

/// File name for the plain-text export: the sanitized document title, or a
/// fixed fallback when the title is blank.
pub fn export_filename(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return "spec.txt".to_string();
    }

    let sanitized = sanitize_filename::sanitize(trimmed);
    if sanitized.is_empty() {
        "spec.txt".to_string()
    } else {
        format!("{sanitized}.txt")
    }
}
