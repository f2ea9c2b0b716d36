/*!
 * Tests for session handlers
 */

use pagegen::renderer::{PageMeta, PageRenderer, FRAGMENT_SEPARATOR};
use pagegen::section::ContentType;
use pagegen::session::Session;
use crate::common;

/// Test empty submissions advance the counter without appending
#[test]
fn test_submit_withEmptyInput_shouldAdvanceCounterOnly() {
    for content_type in [
        ContentType::Subheading,
        ContentType::SubSubheading,
        ContentType::Paragraph,
        ContentType::CodeBlock,
    ] {
        let session = common::add(Session::new(), content_type, "");
        assert_eq!(session.len(), 0, "{} appended on empty input", content_type);
        assert_eq!(session.next_sequence(), 1);
    }
}

/// Test an empty list submission still appends a section
#[test]
fn test_submit_bulletList_withEmptyInput_shouldAppend() {
    let session = common::add(Session::new(), ContentType::BulletList, "");

    assert_eq!(session.len(), 1);
    assert_eq!(session.next_sequence(), 1);
}

/// Test skipped slots shift the input keys
#[test]
fn test_submit_skippedSlot_shouldMoveToFreshKey() {
    let session = Session::new().handle_select_type(ContentType::Subheading);
    assert_eq!(session.input_key(), "h3_0");

    let (session, outcome) = session.handle_input("").handle_submit_fragment();
    assert_eq!(outcome.cleared_key, "h3_0");
    assert_eq!(session.input_key(), "h3_1");

    let session = session.handle_select_type(ContentType::Paragraph);
    assert_eq!(session.input_key(), "para_1");
}

/// Test the pending input is cleared after each submit
#[test]
fn test_submit_shouldClearPendingInput() {
    let session = Session::new().handle_input("typed");
    assert_eq!(session.pending_input(), "typed");

    let (session, _) = session.handle_submit_fragment();
    assert_eq!(session.pending_input(), "");
}

/// Test fragments keep append order in the content block
#[test]
fn test_generate_shouldKeepAppendOrder() {
    let session = common::add(Session::new(), ContentType::Subheading, "F1");
    let session = common::add(session, ContentType::Paragraph, "F2");
    let session = common::add(session, ContentType::SubSubheading, "F3");

    let page = session
        .handle_generate_with_banner(&PageRenderer::default(), &PageMeta::new("Ordered", "", ""), 2)
        .unwrap();

    let fragments = session.fragments();
    let expected = format!(
        "{}{}{}{}{}",
        fragments[0], FRAGMENT_SEPARATOR, fragments[1], FRAGMENT_SEPARATOR, fragments[2]
    );
    assert_eq!(page.content_block, expected);

    let f1 = page.document.find("F1").unwrap();
    let f2 = page.document.find("F2").unwrap();
    let f3 = page.document.find("F3").unwrap();
    assert!(f1 < f2 && f2 < f3);
}

/// Test generation does not alter the session
#[test]
fn test_generate_shouldLeaveSessionUnchanged() {
    let session = common::add(Session::new(), ContentType::Paragraph, "Body");
    let before = session.clone();

    let _ = session.handle_generate_with_banner(&PageRenderer::default(), &PageMeta::default(), 7);

    assert_eq!(session, before);
}
