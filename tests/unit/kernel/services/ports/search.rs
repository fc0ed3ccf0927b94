use super::*;
use crate::kernel::services::ports::Node;

#[test]
fn test_utf16_range() {
    let path = StructuralPath::root();
    let m = Match::new(path.clone(), "a😀".len(), "a😀bc".len());
    assert_eq!(m.len(), 2);
    assert_eq!(m.utf16_range("a😀bcd"), Some((3, 5)));

    let ascii = Match::new(path, 1, 3);
    assert_eq!(ascii.utf16_range("abcd"), Some((1, 3)));
    assert_eq!(ascii.utf16_range("a"), None);
}

#[test]
fn test_inverted_match_is_empty() {
    let m = Match::new(StructuralPath::root(), 5, 2);
    assert!(m.is_empty());
    assert_eq!(m.len(), 0);
}

#[test]
fn test_host_errors_map_to_stale_path() {
    let path = StructuralPath::from(vec![0, 2]);

    let err = SearchError::from(HostError::StalePath(path.clone()));
    assert!(matches!(&err, SearchError::StalePath(p) if *p == path));
    assert!(err.needs_rescan());

    let err = SearchError::from(HostError::OffsetOutOfRange {
        path: path.clone(),
        offset: 9,
        len: 3,
    });
    assert!(err.needs_rescan());

    let err = SearchError::from(HostError::NoRenderSurface(path));
    assert!(matches!(err, SearchError::Host(_)));
    assert!(!err.needs_rescan());
    assert!(!SearchError::HostUnavailable.needs_rescan());
}

#[test]
fn test_structural_path_display_and_resolve() {
    assert_eq!(StructuralPath::root().to_string(), "[]");
    let path = StructuralPath::root().child(0).child(2);
    assert_eq!(path.to_string(), "[0,2]");
    assert_eq!(path.depth(), 2);

    let root = Node::block(vec![Node::block(vec![
        Node::leaf("a"),
        Node::leaf("b"),
        Node::leaf("c"),
    ])]);
    assert_eq!(root.get(&path).and_then(Node::text), Some("c"));
    assert!(root.get(&StructuralPath::from(vec![0, 3])).is_none());
    assert!(root.get(&StructuralPath::from(vec![0, 0, 0])).is_none());
    assert_eq!(root.get(&StructuralPath::root()), Some(&root));
}
