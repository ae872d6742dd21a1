//! Integration tests for page indexing.
//!
//! Covers buffer linearization, the line-count page heuristic, explicit page
//! breaks and the paragraph → page lookup.

use keyword_locator::document::{Document, Paragraph};
use keyword_locator::search::{BreakKind, PageIndexer, TextBuffer};
use keyword_locator::LocatorConfig;
use proptest::prelude::*;

fn numbered(count: usize) -> Vec<Paragraph> {
    (0..count).map(|i| Paragraph::new(format!("paragraph {}", i))).collect()
}

#[test]
fn test_empty_document_defaults_to_page_one() {
    let index = PageIndexer::new().build(Document::default().paragraphs());
    assert_eq!(index.buffer().as_str(), "");
    assert!(index.breaks().is_empty());
    for i in 0..5 {
        assert_eq!(index.page_at(i), 1);
    }
}

#[test]
fn test_short_document_stays_on_page_one() {
    let index = PageIndexer::new().build(&numbered(40));
    assert!(index.breaks().is_empty());
    assert!((0..40).all(|i| index.page_at(i) == 1));
}

#[test]
fn test_explicit_break_at_paragraph_five() {
    let mut paragraphs = numbered(8);
    paragraphs[5].has_page_break = true;
    let index = PageIndexer::new().build(&paragraphs);

    assert_eq!(index.page_at(4), 1);
    assert_eq!(index.page_at(5), 1);
    assert_eq!(index.page_at(6), 2);
    assert_eq!(index.page_at(7), 2);
}

#[test]
fn test_consecutive_explicit_breaks() {
    let paragraphs = vec![
        Paragraph::with_page_break("cover"),
        Paragraph::with_page_break("contents"),
        Paragraph::new("body"),
    ];
    let index = PageIndexer::new().build(&paragraphs);
    let pages: Vec<usize> = (0..3).map(|i| index.page_at(i)).collect();
    assert_eq!(pages, vec![1, 2, 3]);
}

#[test]
fn test_explicit_break_resets_line_count() {
    // 30 lines, a break, then 30 more lines: the break reset keeps the second
    // block on page 2 even though the total passes 40.
    let mut paragraphs = numbered(30);
    paragraphs[29].has_page_break = true;
    paragraphs.extend(numbered(30));
    let index = PageIndexer::new().build(&paragraphs);

    assert_eq!(index.breaks().len(), 1);
    assert_eq!(index.page_at(59), 2);
}

#[test]
fn test_long_paragraph_after_explicit_break_opens_next_page() {
    // 26 estimated lines each: the second paragraph alone would overflow if
    // the first one's lines were still charged to its page.
    let paragraphs = vec![
        Paragraph::with_page_break("x".repeat(2000)),
        Paragraph::new("y".repeat(2000)),
        Paragraph::new("z".repeat(2000)),
    ];
    let index = PageIndexer::new().build(&paragraphs);

    let kinds: Vec<BreakKind> = index.breaks().breakpoints().iter().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![BreakKind::Explicit, BreakKind::Estimated]);
    let pages: Vec<usize> = (0..3).map(|i| index.page_at(i)).collect();
    assert_eq!(pages, vec![1, 2, 3]);
}

#[test]
fn test_marked_paragraph_that_overflows_breaks_once() {
    // 3300 chars estimate to 42 lines, past the 40-line page on its own
    let paragraphs = vec![
        Paragraph::new("before"),
        Paragraph::with_page_break("x".repeat(3300)),
        Paragraph::new("after"),
    ];
    let index = PageIndexer::new().build(&paragraphs);

    let breakpoints = index.breaks().breakpoints();
    assert_eq!(breakpoints.len(), 1);
    assert_eq!(breakpoints[0].paragraph_index, 1);
    assert_eq!(breakpoints[0].kind, BreakKind::Explicit);

    let pages: Vec<usize> = (0..3).map(|i| index.page_at(i)).collect();
    assert_eq!(pages, vec![1, 1, 2]);
}

#[test]
fn test_long_paragraph_counts_wrapped_lines() {
    // 39 short lines plus one 160-character paragraph (3 estimated lines)
    let mut paragraphs = numbered(39);
    paragraphs.push(Paragraph::new("x".repeat(160)));
    let index = PageIndexer::new().build(&paragraphs);

    let breakpoints = index.breaks().breakpoints();
    assert_eq!(breakpoints.len(), 1);
    assert_eq!(breakpoints[0].paragraph_index, 39);
    assert_eq!(breakpoints[0].kind, BreakKind::Estimated);
    assert_eq!(index.page_at(39), 2);
}

#[test]
fn test_blank_paragraphs_occupy_slots_but_not_lines() {
    let mut paragraphs = Vec::new();
    for i in 0..40 {
        paragraphs.push(Paragraph::new(format!("line {}", i)));
        paragraphs.push(Paragraph::new("   "));
    }
    let index = PageIndexer::new().build(&paragraphs);
    assert!(index.breaks().is_empty());
    assert_eq!(index.buffer().paragraph_count(), 80);
}

#[test]
fn test_configured_lines_per_page() {
    let config = LocatorConfig::new().with_lines_per_page(2);
    let index = PageIndexer::from_config(&config).build(&numbered(5));
    let pages: Vec<usize> = (0..5).map(|i| index.page_at(i)).collect();
    assert_eq!(pages, vec![1, 1, 2, 2, 3]);
}

#[test]
fn test_breakpoint_pages_increase_by_one() {
    let index = PageIndexer::new().build(&numbered(500));
    for (n, breakpoint) in index.breaks().breakpoints().iter().enumerate() {
        assert_eq!(breakpoint.page, n + 1);
    }
    assert_eq!(index.breaks().page_count(), index.page_at(499));
}

fn paragraph_strategy() -> impl Strategy<Value = Paragraph> {
    ("[a-z 北京\n]{0,200}", any::<bool>()).prop_map(|(text, has_page_break)| Paragraph {
        text,
        has_page_break,
    })
}

proptest! {
    #[test]
    fn prop_buffer_reconstructs_from_paragraphs(texts in prop::collection::vec("[a-z 北\n]{0,30}", 0..30)) {
        let paragraphs: Vec<Paragraph> = texts.iter().map(Paragraph::new).collect();
        let buffer = TextBuffer::from_paragraphs(&paragraphs);

        let expected: String = texts.iter().map(|t| format!("{}\n", t)).collect();
        prop_assert_eq!(buffer.as_str(), expected.as_str());
        for (i, text) in texts.iter().enumerate() {
            prop_assert_eq!(buffer.paragraph_text(i), Some(text.as_str()));
        }
    }

    #[test]
    fn prop_every_offset_maps_to_its_paragraph(texts in prop::collection::vec("[a-z]{0,10}", 1..20)) {
        let paragraphs: Vec<Paragraph> = texts.iter().map(Paragraph::new).collect();
        let buffer = TextBuffer::from_paragraphs(&paragraphs);
        for i in 0..paragraphs.len() {
            let range = buffer.paragraph_range(i).unwrap();
            // The separator right after the text belongs to the same paragraph
            for offset in range.start..=range.end {
                prop_assert_eq!(buffer.paragraph_at(offset), Some(i));
            }
        }
    }

    #[test]
    fn prop_page_at_is_monotonic(paragraphs in prop::collection::vec(paragraph_strategy(), 0..120)) {
        let index = PageIndexer::new().build(&paragraphs);
        for i in 0..paragraphs.len() + 2 {
            prop_assert!(index.page_at(i) <= index.page_at(i + 1));
        }
    }

    #[test]
    fn prop_breakpoints_strictly_increasing(paragraphs in prop::collection::vec(paragraph_strategy(), 0..120)) {
        let index = PageIndexer::new().build(&paragraphs);
        let breakpoints = index.breaks().breakpoints();
        for pair in breakpoints.windows(2) {
            prop_assert!(pair[0].paragraph_index < pair[1].paragraph_index);
            prop_assert_eq!(pair[0].page + 1, pair[1].page);
        }
    }
}
