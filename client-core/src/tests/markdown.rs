// Unit tests for the markdown module
// Covers block grouping, spacer placement, inline span priority, and the
// literal-fallback guarantee for malformed markup

use crate::markdown::{Block, Inline, parse, parse_inline};

fn text(value: &str) -> Inline {
    Inline::Text(String::from(value))
}

/// **VALUE**: Verifies plain text becomes a single paragraph with one span.
///
/// **WHY THIS MATTERS**: The overwhelming majority of chat output is plain
/// prose. If the simplest input grows extra blocks or spans, every rendered
/// message is wrong.
///
/// **BUG THIS CATCHES**: Spurious matches from any inline rule against
/// marker-free text.
#[test]
fn given_plain_text_when_parsed_then_single_paragraph_single_span() {
    let blocks = parse("hello world");

    assert_eq!(blocks, vec![Block::Paragraph(vec![text("hello world")])]);
}

/// **VALUE**: Verifies empty input produces an empty document.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one in the interior-blank
/// rule emitting a Spacer for the single empty line.
#[test]
fn given_empty_input_when_parsed_then_empty_document() {
    assert_eq!(parse(""), vec![]);
}

/// **VALUE**: Verifies bold markers split a line into the expected spans.
///
/// **WHY THIS MATTERS**: This is the canonical inline case; the prefix
/// must come through literal, the content stripped of markers.
///
/// **BUG THIS CATCHES**: Greedy matching (would swallow " c"), or markers
/// leaking into span content.
#[test]
fn given_bold_markers_when_parsed_then_bold_span_between_plain_text() {
    let blocks = parse("a **b** c");

    assert_eq!(
        blocks,
        vec![Block::Paragraph(vec![
            text("a "),
            Inline::Bold(String::from("b")),
            text(" c"),
        ])]
    );
}

/// **VALUE**: Verifies the underscore variants of bold and italic.
///
/// **BUG THIS CATCHES**: Would catch the `__` rule being dropped or
/// ordered below italic, which would read `__b__` as two italic runs.
#[test]
fn given_underscore_markers_when_parsed_then_bold_and_italic_recognized() {
    assert_eq!(
        parse_inline("__b__"),
        vec![Inline::Bold(String::from("b"))]
    );
    assert_eq!(
        parse_inline("a _i_ b"),
        vec![text("a "), Inline::Italic(String::from("i")), text(" b")]
    );
}

/// **VALUE**: Verifies star italic and inline code spans.
#[test]
fn given_italic_and_code_markers_when_parsed_then_styled_spans_emitted() {
    assert_eq!(
        parse_inline("a *b* c"),
        vec![text("a "), Inline::Italic(String::from("b")), text(" c")]
    );
    assert_eq!(
        parse_inline("run `ls` now"),
        vec![text("run "), Inline::Code(String::from("ls")), text(" now")]
    );
}

/// **VALUE**: Verifies pattern priority beats position: bold anywhere in
/// the text wins over code appearing earlier.
///
/// **WHY THIS MATTERS**: The renderer extracts the first matching PATTERN
/// in priority order, not the leftmost marker of any kind. The skipped
/// prefix is emitted literally, backticks included - that is observable
/// output, not an implementation detail.
///
/// **BUG THIS CATCHES**: A rewrite to leftmost-of-any-marker scanning
/// would produce a Code span here and silently change rendered chat text.
#[test]
fn given_code_before_bold_when_parsed_then_bold_wins_and_prefix_stays_literal() {
    assert_eq!(
        parse_inline("a `x` **b**"),
        vec![text("a `x` "), Inline::Bold(String::from("b"))]
    );
}

/// **VALUE**: Verifies span contents are not recursively parsed.
///
/// **BUG THIS CATCHES**: Nested emphasis support sneaking in; the inner
/// markers must stay verbatim inside the bold content.
#[test]
fn given_nested_markers_when_parsed_then_inner_markup_stays_verbatim() {
    let spans = parse_inline("**bold *inner***");

    assert_eq!(
        spans,
        vec![Inline::Bold(String::from("bold *inner")), text("*")]
    );
}

/// **VALUE**: Verifies unbalanced markers fall through as literal text.
///
/// **WHY THIS MATTERS**: Chat input is untrusted and routinely malformed.
/// The renderer must be total - no panic, no hidden characters; the user
/// sees exactly what was typed.
///
/// **BUG THIS CATCHES**: A rule matching a lone marker, or an error path
/// appearing in what must be an infallible parser.
#[test]
fn given_unbalanced_marker_when_parsed_then_literal_text_preserved() {
    assert_eq!(parse("a *b"), vec![Block::Paragraph(vec![text("a *b")])]);
    assert_eq!(parse_inline("****"), vec![
        Inline::Italic(String::from("*")),
        text("*"),
    ]);
}

/// **VALUE**: Verifies consecutive `-`/`*` lines group into one unordered
/// list and item content is inline-parsed.
///
/// **BUG THIS CATCHES**: Each item becoming its own single-item list, or
/// item text skipping inline parsing.
#[test]
fn given_dash_and_star_items_when_parsed_then_one_unordered_list() {
    let blocks = parse("- plain\n* **bold** item");

    assert_eq!(
        blocks,
        vec![Block::UnorderedList(vec![
            vec![text("plain")],
            vec![Inline::Bold(String::from("bold")), text(" item")],
        ])]
    );
}

/// **VALUE**: Verifies numbered lines group into one ordered list,
/// including multi-digit markers.
#[test]
fn given_numbered_items_when_parsed_then_one_ordered_list() {
    let blocks = parse("1. first\n2. second\n10. tenth");

    assert_eq!(
        blocks,
        vec![Block::OrderedList(vec![
            vec![text("first")],
            vec![text("second")],
            vec![text("tenth")],
        ])]
    );
}

/// **VALUE**: Verifies switching list kind with no blank line between
/// forces a flush, producing two adjacent list blocks.
///
/// **BUG THIS CATCHES**: A shared accumulator mixing ordered and
/// unordered items into one block.
#[test]
fn given_kind_switch_when_parsed_then_two_adjacent_list_blocks() {
    let blocks = parse("- a\n1. b");

    assert_eq!(
        blocks,
        vec![
            Block::UnorderedList(vec![vec![text("a")]]),
            Block::OrderedList(vec![vec![text("b")]]),
        ]
    );
}

/// **VALUE**: Verifies a marker mid-line does not start a list.
///
/// **BUG THIS CATCHES**: List regexes losing their `^` anchor.
#[test]
fn given_mid_line_dash_when_parsed_then_stays_a_paragraph() {
    assert_eq!(
        parse("text - not a list"),
        vec![Block::Paragraph(vec![text("text - not a list")])]
    );
}

/// **VALUE**: Verifies interior blank lines (including all-whitespace
/// lines) become Spacers while leading/trailing blanks do not.
///
/// **WHY THIS MATTERS**: Spacers render as visible vertical gaps; a stray
/// one at the top or bottom of every message is an obvious visual bug.
///
/// **BUG THIS CATCHES**: Off-by-one in the first/last line exclusion, or
/// whitespace-only lines escaping blank classification.
#[test]
fn given_blank_lines_when_parsed_then_only_interior_blanks_emit_spacers() {
    assert_eq!(
        parse("a\n   \nb"),
        vec![
            Block::Paragraph(vec![text("a")]),
            Block::Spacer,
            Block::Paragraph(vec![text("b")]),
        ]
    );

    assert_eq!(parse("\na"), vec![Block::Paragraph(vec![text("a")])]);
    assert_eq!(parse("a\n"), vec![Block::Paragraph(vec![text("a")])]);
}

/// **VALUE**: Pins the blank-after-list decision: an interior blank line
/// immediately following list items still emits a Spacer after the
/// flushed list, in both list-then-paragraph and paragraph-then-list
/// order.
///
/// **WHY THIS MATTERS**: The blank-line check indexes the original line
/// array independently of list flushing. This is the documented, tested
/// resolution of an ambiguity that two plausible implementations disagree
/// on.
///
/// **BUG THIS CATCHES**: A refactor that consumes the blank line as part
/// of the list-flush boundary and silently removes the rendered gap.
#[test]
fn given_blank_line_at_list_boundary_when_parsed_then_spacer_follows_flush() {
    assert_eq!(
        parse("- one\n- two\n\nthree"),
        vec![
            Block::UnorderedList(vec![vec![text("one")], vec![text("two")]]),
            Block::Spacer,
            Block::Paragraph(vec![text("three")]),
        ]
    );

    assert_eq!(
        parse("three\n\n- one\n- two"),
        vec![
            Block::Paragraph(vec![text("three")]),
            Block::Spacer,
            Block::UnorderedList(vec![vec![text("one")], vec![text("two")]]),
        ]
    );
}

/// **VALUE**: Verifies a document ending in list items flushes the final
/// list.
///
/// **BUG THIS CATCHES**: The trailing flush after the line scan being
/// dropped, losing the last block entirely.
#[test]
fn given_input_ending_in_list_when_parsed_then_final_list_flushed() {
    let blocks = parse("intro\n- a\n- b");

    assert_eq!(
        blocks,
        vec![
            Block::Paragraph(vec![text("intro")]),
            Block::UnorderedList(vec![vec![text("a")], vec![text("b")]]),
        ]
    );
}

/// **VALUE**: Verifies the reconstruction invariant: concatenating span
/// text in order reproduces the visible content with markers stripped.
///
/// **WHY THIS MATTERS**: This is the renderer's core contract - markup
/// characters are stripped exactly when they match a pattern and shown
/// literally exactly when they do not. Any drift means characters appear
/// or vanish in rendered chat.
#[test]
fn given_mixed_markup_when_parsed_then_span_text_reconstructs_content() {
    let spans = parse_inline("a **b** *c* `d` e *unclosed");

    let reconstructed: String = spans.iter().map(Inline::text).collect();
    assert_eq!(reconstructed, "a b c d e *unclosed");
}
