use pulldown_cmark::{html, Options, Parser};

/// Render generated Markdown to sanitized HTML.
///
/// Supports the GFM subset the writer produces: tables, strikethrough and
/// task lists. Raw HTML in the input is stripped by `ammonia`.
pub fn render_markdown(raw: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION;

    let parser = Parser::new_ext(raw, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    ammonia::Builder::default()
        .add_tag_attributes("input", &["type", "checked", "disabled"])
        .add_tags(&["input"])
        .clean(&html_output)
        .to_string()
}

/// Render answer text: paragraphs on blank lines, line breaks kept.
pub fn render_plain_paragraphs(raw: &str) -> Vec<String> {
    raw.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
