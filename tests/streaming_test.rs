//! Integration tests for streaming renderer.

use mathblock::model::{BlockKind, EditorMode};
use mathblock::render::streaming::{collect_html, RenderEvent};
use mathblock::{Mathblock, RenderOptions};

fn create_sample_document() -> String {
    let mut doc = String::new();
    doc.push_str("Introduction with `x^2`.\n");
    doc.push_str("--- START LATEX BLOCK\n\\int_0^1 x\\,dx\n--- CLOSE LATEX BLOCK");
    doc.push_str("\nChapter text `a <= b`\n");
    doc.push_str("--- START HTML BLOCK\n<table><tr><td>1</td></tr></table>\n--- CLOSE HTML BLOCK");
    doc.push_str("--- START PLAIN TEXT BLOCK\nConclusion.\n--- CLOSE PLAIN TEXT BLOCK");
    doc
}

#[test]
fn test_streaming_renderer_basic() {
    let mb = Mathblock::new();
    let events: Vec<_> = mb.stream(&create_sample_document(), EditorMode::Embed).collect();

    // Should have document start and end
    assert!(matches!(
        events.first(),
        Some(RenderEvent::DocumentStart {
            mode: EditorMode::Embed,
            block_count: 5
        })
    ));
    assert!(matches!(events.last(), Some(RenderEvent::DocumentEnd)));
}

#[test]
fn test_streaming_renderer_block_events() {
    let mb = Mathblock::new();
    let events: Vec<_> = mb.stream(&create_sample_document(), EditorMode::Embed).collect();

    let kinds: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            RenderEvent::BlockStart { kind, .. } => Some(*kind),
            _ => None,
        })
        .collect();
    let block_ends = events
        .iter()
        .filter(|e| matches!(e, RenderEvent::BlockEnd { .. }))
        .count();

    assert_eq!(
        kinds,
        vec![
            BlockKind::Augmented,
            BlockKind::Latex,
            BlockKind::Augmented,
            BlockKind::Html,
            BlockKind::Plain,
        ]
    );
    assert_eq!(block_ends, 5);
}

#[test]
fn test_streaming_matches_full_render() {
    let doc = create_sample_document();
    let mut mb = Mathblock::new();

    for mode in EditorMode::ALL {
        let streamed = collect_html(mb.stream(&doc, mode));
        assert_eq!(streamed, mb.render_html(&doc, mode), "mode {}", mode);
    }
}

#[test]
fn test_streaming_without_wrappers_matches_full_render() {
    let doc = create_sample_document();
    let mut mb = Mathblock::new().with_options(RenderOptions::new().with_block_wrappers(false));

    let streamed = collect_html(mb.stream(&doc, EditorMode::Embed));
    assert_eq!(streamed, mb.render_html(&doc, EditorMode::Embed));
}

#[test]
fn test_streaming_empty_document() {
    let mut mb = Mathblock::new();
    let events: Vec<_> = mb.stream("  \n", EditorMode::Embed).collect();

    assert_eq!(events.len(), 3);
    assert!(matches!(
        events[0],
        RenderEvent::DocumentStart { block_count: 0, .. }
    ));
    assert!(matches!(events[1], RenderEvent::Placeholder(_)));
    assert_eq!(
        collect_html(events),
        mb.render_html("  \n", EditorMode::Embed)
    );
}

#[test]
fn test_streaming_isolates_failures() {
    let doc = "`ok` and `(bad`\n--- START LATEX BLOCK\n\\begin{x}\n--- CLOSE LATEX BLOCK";
    let mb = Mathblock::new();

    let chunks: Vec<String> = mb
        .stream(doc, EditorMode::Embed)
        .filter_map(|e| match e {
            RenderEvent::Chunk(html) => Some(html),
            _ => None,
        })
        .collect();

    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].contains("$ok$"));
    assert!(chunks[0].contains("`(bad` (Conversion Error)"));
    assert!(chunks[1].contains("Error rendering LaTeX: \\begin{x}"));
}

#[test]
fn test_streaming_whole_document_mode() {
    let mb = Mathblock::new();
    let mut stream = mb.stream("<b>bold</b>", EditorMode::Html);
    assert_eq!(stream.block_count(), 1);

    let events: Vec<_> = stream.by_ref().collect();
    assert!(stream.is_done());
    assert!(events
        .iter()
        .any(|e| e.content() == Some("<b>bold</b>")));
}

#[test]
fn test_event_helpers() {
    assert!(RenderEvent::DocumentEnd.is_document_boundary());
    assert!(RenderEvent::BlockEnd { index: 0 }.is_block_boundary());
    assert!(RenderEvent::Chunk("x".into()).has_content());
    assert!(!RenderEvent::BlockStart {
        index: 0,
        kind: BlockKind::Plain
    }
    .has_content());
    assert_eq!(RenderEvent::Placeholder("p".into()).content(), Some("p"));
}
