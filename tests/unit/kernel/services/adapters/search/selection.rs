use super::*;
use crate::kernel::services::adapters::MemoryDocument;
use crate::kernel::services::ports::{Node, SearchError, StructuralPath};

fn tree() -> Node {
    Node::block(vec![Node::leaf("first"), Node::block(vec![Node::leaf("second")])])
}

#[test]
fn test_apply_selection_sets_anchor_and_focus() {
    let mut doc = MemoryDocument::new(tree());
    let m = Match::new(StructuralPath::from(vec![1, 0]), 1, 4);

    apply_selection(&mut doc, &m, true).unwrap();

    let selection = doc.selection().unwrap();
    assert_eq!(selection.anchor.path, m.path);
    assert_eq!(selection.anchor.offset, 1);
    assert_eq!(selection.focus.path, m.path);
    assert_eq!(selection.focus.offset, 4);
    assert_eq!(doc.scrolled_to(), Some(&m.path));
}

#[test]
fn test_scroll_skipped_when_not_requested() {
    let mut doc = MemoryDocument::new(tree());
    let m = Match::new(StructuralPath::from(vec![0]), 0, 5);
    apply_selection(&mut doc, &m, false).unwrap();
    assert!(doc.selection().is_some());
    assert!(doc.scrolled_to().is_none());
}

#[test]
fn test_missing_render_surface_is_not_fatal() {
    let mut doc = MemoryDocument::headless(tree());
    let m = Match::new(StructuralPath::from(vec![0]), 0, 5);

    apply_selection(&mut doc, &m, true).unwrap();

    assert_eq!(doc.selection(), Some(&m.to_selection()));
    assert!(doc.scrolled_to().is_none());
}

#[test]
fn test_stale_selection_path() {
    let mut doc = MemoryDocument::new(tree());
    let m = Match::new(StructuralPath::from(vec![1]), 0, 1);
    let err = apply_selection(&mut doc, &m, true).unwrap_err();
    assert!(matches!(err, SearchError::StalePath(_)));
    assert!(doc.selection().is_none());
}
