//! Minimal Markdown renderer for AI chat output.
//!
//! Converts untrusted model-generated text into a tree of typed blocks and
//! spans, never raw HTML; the enum variants here are the sanitization
//! boundary. Supported subset: paragraphs, blank-line spacers,
//! unordered/ordered lists, and bold/italic/code inline spans. Parsing is
//! total: any input yields a document, and anything outside the subset
//! passes through as literal text.

pub mod inline;

pub use inline::{Inline, parse_inline};

use std::sync::OnceLock;

use regex::Regex;

const UNORDERED_ITEM_PATTERN: &str = r"^[-*]\s+(.+)$";
const ORDERED_ITEM_PATTERN: &str = r"^\d+\.\s+(.+)$";

static UNORDERED_ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
static ORDERED_ITEM_REGEX: OnceLock<Regex> = OnceLock::new();

fn unordered_item_regex() -> &'static Regex {
    UNORDERED_ITEM_REGEX
        .get_or_init(|| Regex::new(UNORDERED_ITEM_PATTERN).expect("valid regex pattern"))
}

fn ordered_item_regex() -> &'static Regex {
    ORDERED_ITEM_REGEX.get_or_init(|| Regex::new(ORDERED_ITEM_PATTERN).expect("valid regex pattern"))
}

/// A block-level node of a rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    UnorderedList(Vec<Vec<Inline>>),
    OrderedList(Vec<Vec<Inline>>),
    /// Rendered gap produced by an interior blank line.
    Spacer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

/// Parse a complete document into block nodes.
///
/// Lines are scanned in order with a single list accumulator. A list is
/// flushed when the item kind switches or a non-list line appears; blank
/// lines become [`Block::Spacer`] only when they are interior to the
/// input, so leading and trailing blanks render no stray gaps. A blank
/// line directly after a list still counts as interior and emits a Spacer
/// behind the flushed list.
pub fn parse(source: &str) -> Vec<Block> {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut blocks = Vec::new();
    let mut list: Option<(ListKind, Vec<Vec<Inline>>)> = None;

    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if let Some(caps) = unordered_item_regex().captures(trimmed) {
            push_item(&mut blocks, &mut list, ListKind::Unordered, &caps[1]);
            continue;
        }

        if let Some(caps) = ordered_item_regex().captures(trimmed) {
            push_item(&mut blocks, &mut list, ListKind::Ordered, &caps[1]);
            continue;
        }

        flush_list(&mut blocks, &mut list);

        if trimmed.is_empty() {
            if index > 0 && index < lines.len() - 1 {
                blocks.push(Block::Spacer);
            }
            continue;
        }

        blocks.push(Block::Paragraph(parse_inline(trimmed)));
    }

    flush_list(&mut blocks, &mut list);

    blocks
}

/// Continue the current list when the kind matches, otherwise flush it and
/// start a new one. Adjacent lists of different kinds stay separate blocks
/// even with no blank line between them.
fn push_item(
    blocks: &mut Vec<Block>,
    list: &mut Option<(ListKind, Vec<Vec<Inline>>)>,
    kind: ListKind,
    item: &str,
) {
    match list {
        Some((current, items)) if *current == kind => items.push(parse_inline(item)),
        _ => {
            flush_list(blocks, list);
            *list = Some((kind, vec![parse_inline(item)]));
        }
    }
}

fn flush_list(blocks: &mut Vec<Block>, list: &mut Option<(ListKind, Vec<Vec<Inline>>)>) {
    if let Some((kind, items)) = list.take() {
        blocks.push(match kind {
            ListKind::Unordered => Block::UnorderedList(items),
            ListKind::Ordered => Block::OrderedList(items),
        });
    }
}
