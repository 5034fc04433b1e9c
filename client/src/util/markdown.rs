//! Markdown rendering for server-provided text.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Render markdown to HTML, dropping raw HTML blocks and inline HTML.
///
/// The output is assigned via `inner_html`, so nothing the API sends may
/// inject markup of its own. Links and images whose destination uses any
/// scheme other than http, https or mailto are unwrapped to their text.
pub fn render_markdown_html(input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    // One entry per open link or image: whether its tags are emitted.
    let mut kept: Vec<bool> = Vec::new();
    let parser = Parser::new_ext(input, options).filter(move |event| match event {
        Event::Html(_) | Event::InlineHtml(_) => false,
        Event::Start(Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. }) => {
            let keep = is_safe_url(dest_url);
            kept.push(keep);
            keep
        }
        Event::End(TagEnd::Link | TagEnd::Image) => kept.pop().unwrap_or(true),
        _ => true,
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Relative destinations pass; absolute ones need an allowed scheme.
pub fn is_safe_url(url: &str) -> bool {
    // Browsers ignore whitespace and control characters inside a scheme.
    let compact: String = url.chars().filter(|c| !c.is_whitespace() && !c.is_control()).collect();
    let scheme_end = compact.find([':', '/', '?', '#']);
    match scheme_end {
        Some(i) if compact[i..].starts_with(':') => {
            let scheme = &compact[..i];
            SAFE_SCHEMES.iter().any(|safe| scheme.eq_ignore_ascii_case(safe))
        }
        _ => true,
    }
}
