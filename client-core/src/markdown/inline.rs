//! Inline span parsing: bold, italic, and code with literal fallback.

use std::sync::OnceLock;

use regex::Regex;

// Each pattern splits the text into a lazy prefix, an innermost content
// group, and the remainder. The lazy prefix pins the match to the leftmost
// occurrence of the marker.
const BOLD_STAR_PATTERN: &str = r"^(.*?)\*\*(.+?)\*\*(.*)$";
const BOLD_UNDERSCORE_PATTERN: &str = r"^(.*?)__(.+?)__(.*)$";
const ITALIC_STAR_PATTERN: &str = r"^(.*?)\*(.+?)\*(.*)$";
const ITALIC_UNDERSCORE_PATTERN: &str = r"^(.*?)_(.+?)_(.*)$";
const CODE_PATTERN: &str = r"^(.*?)`(.+?)`(.*)$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanKind {
    Bold,
    Italic,
    Code,
}

struct InlineRule {
    kind: SpanKind,
    regex: Regex,
}

static INLINE_RULES: OnceLock<[InlineRule; 5]> = OnceLock::new();

/// Rules in priority order: bold outranks italic so `**` is never read as
/// two italic markers, and code comes last.
fn inline_rules() -> &'static [InlineRule] {
    INLINE_RULES.get_or_init(|| {
        let rule = |kind, pattern: &str| InlineRule {
            kind,
            regex: Regex::new(pattern).expect("valid regex pattern"),
        };

        [
            rule(SpanKind::Bold, BOLD_STAR_PATTERN),
            rule(SpanKind::Bold, BOLD_UNDERSCORE_PATTERN),
            rule(SpanKind::Italic, ITALIC_STAR_PATTERN),
            rule(SpanKind::Italic, ITALIC_UNDERSCORE_PATTERN),
            rule(SpanKind::Code, CODE_PATTERN),
        ]
    })
}

/// A minimal styled fragment of text within a rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
}

impl Inline {
    /// The literal text content of the span, markers stripped.
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(text)
            | Inline::Bold(text)
            | Inline::Italic(text)
            | Inline::Code(text) => text,
        }
    }
}

/// Parse one line's worth of text into styled spans.
///
/// The highest-priority rule that matches anywhere in the remaining text
/// wins; its prefix is emitted as literal text without re-parsing, and the
/// scan continues after the match. Span contents are never parsed
/// recursively. When no rule matches, the remainder becomes one literal
/// span, so unbalanced markers show up verbatim instead of failing.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        let Some((prefix, kind, content, rest)) = first_match(remaining) else {
            spans.push(Inline::Text(remaining.to_string()));
            break;
        };

        if !prefix.is_empty() {
            spans.push(Inline::Text(prefix.to_string()));
        }

        spans.push(match kind {
            SpanKind::Bold => Inline::Bold(content.to_string()),
            SpanKind::Italic => Inline::Italic(content.to_string()),
            SpanKind::Code => Inline::Code(content.to_string()),
        });

        remaining = rest;
    }

    spans
}

fn first_match(text: &str) -> Option<(&str, SpanKind, &str, &str)> {
    for rule in inline_rules() {
        if let Some(caps) = rule.regex.captures(text) {
            let prefix = caps.get(1).map_or("", |m| m.as_str());
            let content = caps.get(2).map_or("", |m| m.as_str());
            let rest = caps.get(3).map_or("", |m| m.as_str());
            return Some((prefix, rule.kind, content, rest));
        }
    }

    None
}
