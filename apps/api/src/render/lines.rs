//! Line-level layout heuristics shared by the HTML and PDF renderers.
//!
//! Generated documents are plain text. Layout is recovered line by line:
//! short ALL-CAPS lines are section headers, lines indented by two or more
//! whitespace characters are bullets, and URLs inside a line become links.

use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:https?|ftp)://[-A-Z0-9+&@#/%?=~_|!:,.;]*[-A-Z0-9+&@#/%=~_|]|\bwww\.[-A-Z0-9+&@#/%?=~_|!:,.;]*[-A-Z0-9+&@#/%=~_|]",
    )
    .expect("URL pattern is valid")
});

const HEADER_MIN_CHARS: usize = 4;
const HEADER_MAX_CHARS: usize = 39;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Header,
    Bullet,
    Text,
}

/// A run of text within one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Link { text: &'a str, href: String },
}

pub fn classify_line(line: &str) -> LineKind {
    if line.trim().is_empty() {
        LineKind::Blank
    } else if is_indented(line) {
        LineKind::Bullet
    } else if is_section_header(line) {
        LineKind::Header
    } else {
        LineKind::Text
    }
}

fn is_indented(line: &str) -> bool {
    line.chars().take(2).filter(|c| c.is_whitespace()).count() == 2
}

fn is_section_header(line: &str) -> bool {
    let line = line.trim_end();
    let len = line.chars().count();
    let lower = line.to_lowercase();

    (HEADER_MIN_CHARS..=HEADER_MAX_CHARS).contains(&len)
        && line.to_uppercase() == line
        && line.chars().any(char::is_alphabetic)
        && !line.contains(':')
        && !lower.contains("http")
        && !lower.contains("www")
}

/// Splits a line into plain text and link segments.
/// Bare `www.` hosts link to `http://<host>`.
pub fn split_urls(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in URL_RE.find_iter(line) {
        if m.start() > last {
            segments.push(Segment::Text(&line[last..m.start()]));
        }
        let text = m.as_str();
        let href = if has_scheme(text) {
            text.to_string()
        } else {
            format!("http://{text}")
        };
        segments.push(Segment::Link { text, href });
        last = m.end();
    }

    if last < line.len() {
        segments.push(Segment::Text(&line[last..]));
    }
    segments
}

fn has_scheme(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    ["http://", "https://", "ftp://"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_headers() {
        for line in ["EXPERIENCE", "PROFESSIONAL SUMMARY", "SKILLS  ", "SENIOR DESIGNER"] {
            assert_eq!(classify_line(line), LineKind::Header, "{line:?}");
        }
    }

    #[test]
    fn test_not_headers() {
        for line in [
            "Acme Corp",                                  // mixed case
            "CV",                                         // too short
            "FRONTEND: REACT, NEXT.JS",                   // has colon
            "WWW.EXAMPLE.COM",                            // url
            "2020 - 2022",                                // no letters
            "A VERY LONG LINE THAT IS ALL UPPERCASE BUT GOES ON", // too long
        ] {
            assert_eq!(classify_line(line), LineKind::Text, "{line:?}");
        }
    }

    #[test]
    fn test_bullets_and_blanks() {
        assert_eq!(classify_line("  * Led rebrand"), LineKind::Bullet);
        assert_eq!(classify_line("\t\t- Mentored interns"), LineKind::Bullet);
        assert_eq!(classify_line("    EXPERIENCE"), LineKind::Bullet);
        assert_eq!(classify_line(" * single space"), LineKind::Text);
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("   "), LineKind::Blank);
    }

    #[test]
    fn test_split_urls_plain_text() {
        assert_eq!(split_urls("Phone: 555"), vec![Segment::Text("Phone: 555")]);
        assert!(split_urls("").is_empty());
    }

    #[test]
    fn test_split_urls_with_scheme() {
        let segments = split_urls("GitHub: https://github.com/ada (code)");
        assert_eq!(
            segments,
            vec![
                Segment::Text("GitHub: "),
                Segment::Link {
                    text: "https://github.com/ada",
                    href: "https://github.com/ada".to_string()
                },
                Segment::Text(" (code)"),
            ]
        );
    }

    #[test]
    fn test_split_urls_bare_www_gets_http() {
        let segments = split_urls("Website: www.ada.dev.");
        assert_eq!(
            segments[1],
            Segment::Link {
                text: "www.ada.dev",
                href: "http://www.ada.dev".to_string()
            }
        );
        assert_eq!(segments[2], Segment::Text("."));
    }

    #[test]
    fn test_split_urls_multiple() {
        let segments = split_urls("https://a.dev and http://b.dev");
        let links: Vec<_> = segments
            .iter()
            .filter(|s| matches!(s, Segment::Link { .. }))
            .collect();
        assert_eq!(links.len(), 2);
    }
}
