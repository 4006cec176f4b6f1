use crate::render::lines::{split_urls, Segment};

/// Renders generated plain text as an HTML fragment for on-screen display.
///
/// Line breaks and indentation are kept through `white-space: pre-wrap`; text is
/// escaped and URLs become links that open in a new tab.
pub fn render_html(content: &str) -> String {
    let body = content
        .lines()
        .map(linkify_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<div class=\"generated-document\" style=\"white-space: pre-wrap; word-break: break-word;\">{body}</div>"
    )
}

fn linkify_line(line: &str) -> String {
    split_urls(line)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => escape_html(text),
            Segment::Link { text, href } => format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape_html(&href),
                escape_html(text)
            ),
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        let html = render_html("R&D <lead>");
        assert!(html.contains("R&amp;D &lt;lead&gt;"));
        assert!(!html.contains("<lead>"));
    }

    #[test]
    fn test_urls_are_linked() {
        let html = render_html("Website: www.ada.dev");
        assert!(html.contains(
            "<a href=\"http://www.ada.dev\" target=\"_blank\" rel=\"noopener noreferrer\">www.ada.dev</a>"
        ));
    }

    #[test]
    fn test_link_query_is_escaped() {
        let html = render_html("https://ada.dev/?a=1&b=2");
        assert!(html.contains("href=\"https://ada.dev/?a=1&amp;b=2\""));
    }

    #[test]
    fn test_lines_preserved() {
        let html = render_html("ADA LOVELACE\n  * Built X");
        assert!(html.contains("ADA LOVELACE\n  * Built X"));
        assert!(html.starts_with("<div class=\"generated-document\""));
        assert!(html.ends_with("</div>"));
    }
}
