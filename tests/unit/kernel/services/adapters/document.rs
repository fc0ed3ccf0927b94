use super::*;
use crate::kernel::services::ports::SelectionPoint;

const SAMPLE: &str = r#"{
    "children": [
        { "children": [ { "text": "Hello, " }, { "text": "world", "marks": { "bold": true } } ] },
        { "text": "" }
    ]
}"#;

#[test]
fn test_from_json_builds_blocks_and_leaves() {
    let doc = MemoryDocument::from_json(SAMPLE).unwrap();
    assert_eq!(doc.plain_text(), "Hello, world");
    assert_eq!(doc.text_at(&StructuralPath::from(vec![0, 1])), Some("world"));
    assert_eq!(doc.text_at(&StructuralPath::from(vec![1])), Some(""));
    assert_eq!(doc.text_at(&StructuralPath::from(vec![0])), None);
}

#[test]
fn test_json_round_trip_keeps_marks() {
    let doc = MemoryDocument::from_json(SAMPLE).unwrap();
    let json = doc.to_json_pretty().unwrap();
    let again = MemoryDocument::from_json(&json).unwrap();
    assert_eq!(doc.root(), again.root());
    assert!(json.contains("\"bold\": true"));
}

#[test]
fn test_delete_then_insert() {
    let mut doc = MemoryDocument::from_json(SAMPLE).unwrap();
    let path = StructuralPath::from(vec![0, 1]);
    let before = doc.revision();

    doc.delete_range(&path, 0, 5).unwrap();
    doc.insert_text(&path, 0, "there").unwrap();

    assert_eq!(doc.plain_text(), "Hello, there");
    assert_eq!(doc.revision(), before + 2);
}

#[test]
fn test_edits_clear_selection() {
    let mut doc = MemoryDocument::from_json(SAMPLE).unwrap();
    let path = StructuralPath::from(vec![0, 0]);
    let point = |offset| SelectionPoint {
        path: path.clone(),
        offset,
    };
    doc.set_selection(Selection {
        anchor: point(0),
        focus: point(5),
    })
    .unwrap();
    assert!(doc.selection().is_some());

    doc.insert_text(&path, 0, ">").unwrap();
    assert!(doc.selection().is_none());
}

#[test]
fn test_rejects_stale_paths_and_bad_offsets() {
    let mut doc = MemoryDocument::from_json(SAMPLE).unwrap();

    let missing = StructuralPath::from(vec![3, 0]);
    assert_eq!(
        doc.insert_text(&missing, 0, "x"),
        Err(HostError::StalePath(missing.clone()))
    );

    let block = StructuralPath::from(vec![0]);
    assert_eq!(
        doc.delete_range(&block, 0, 1),
        Err(HostError::StalePath(block.clone()))
    );

    let leaf = StructuralPath::from(vec![0, 1]);
    assert!(matches!(
        doc.delete_range(&leaf, 3, 2),
        Err(HostError::OffsetOutOfRange { .. })
    ));
    assert!(matches!(
        doc.insert_text(&leaf, 6, "x"),
        Err(HostError::OffsetOutOfRange { offset: 6, len: 5, .. })
    ));
    assert_eq!(doc.plain_text(), "Hello, world");
}

#[test]
fn test_rejects_offsets_inside_a_char() {
    let mut doc = MemoryDocument::new(Node::leaf("é"));
    assert!(matches!(
        doc.insert_text(&StructuralPath::root(), 1, "x"),
        Err(HostError::OffsetOutOfRange { .. })
    ));
}

#[test]
fn test_headless_cannot_scroll() {
    let mut doc = MemoryDocument::headless(Node::leaf("x"));
    let root = StructuralPath::root();
    assert_eq!(
        doc.scroll_into_view(&root),
        Err(HostError::NoRenderSurface(root.clone()))
    );

    let mut doc = MemoryDocument::new(Node::leaf("x"));
    doc.scroll_into_view(&root).unwrap();
    assert_eq!(doc.scrolled_to(), Some(&root));
}
