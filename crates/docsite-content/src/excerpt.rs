//! Plain-text excerpts from markdown.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Markdown extensions recognized when stripping formatting.
fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Remove markdown formatting, keeping only the readable text.
///
/// Emphasis, links, inline code and headings are reduced to their text;
/// raw HTML is dropped. Runs of whitespace (including line breaks) collapse
/// to a single space.
///
/// # Examples
///
/// ```
/// use docsite_content::strip_markdown;
///
/// assert_eq!(
///     strip_markdown("Use [`useQuery`](./guides/queries) to **fetch** data."),
///     "Use useQuery to fetch data."
/// );
/// ```
pub fn strip_markdown(markdown: &str) -> String {
    let mut text = String::with_capacity(markdown.len());

    for event in Parser::new_ext(markdown, parser_options()) {
        match event {
            Event::Text(s) | Event::Code(s) | Event::InlineMath(s) | Event::DisplayMath(s) => {
                text.push_str(&s);
            }
            Event::SoftBreak | Event::HardBreak | Event::Rule => text.push(' '),
            Event::End(tag) if ends_block(tag) => text.push(' '),
            _ => {}
        }
    }

    collapse_whitespace(&text)
}

/// Plain text of the first paragraph in `markdown`.
///
/// Headings, code blocks and HTML blocks before the first paragraph are
/// skipped. Returns an empty string when the document has no paragraph.
pub fn first_paragraph(markdown: &str) -> String {
    Parser::new_ext(markdown, parser_options())
        .into_offset_iter()
        .find_map(|(event, range)| {
            matches!(event, Event::Start(Tag::Paragraph)).then(|| strip_markdown(&markdown[range]))
        })
        .unwrap_or_default()
}

fn ends_block(tag: TagEnd) -> bool {
    matches!(
        tag,
        TagEnd::Paragraph
            | TagEnd::Heading(_)
            | TagEnd::BlockQuote(_)
            | TagEnd::CodeBlock
            | TagEnd::HtmlBlock
            | TagEnd::List(_)
            | TagEnd::Item
            | TagEnd::TableHead
            | TagEnd::TableRow
            | TagEnd::TableCell
    )
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
