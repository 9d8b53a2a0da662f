//! Markdown rendering for project details.

use pulldown_cmark::{Event, Options, Parser, html};

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

/// Render `markdown` to HTML. Raw HTML in the source is dropped.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)));

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
