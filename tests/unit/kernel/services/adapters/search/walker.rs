use super::*;

fn sample_tree() -> Node {
    Node::block(vec![
        Node::block(vec![Node::leaf("Hello, "), Node::leaf("wor"), Node::leaf("ld")]),
        Node::leaf(""),
        Node::block(vec![Node::block(vec![Node::leaf("nested")])]),
    ])
}

#[test]
fn test_walk_pre_order_paths() {
    let leaves = walk(&sample_tree());
    let paths: Vec<Vec<usize>> = leaves.iter().map(|l| l.path.indices().to_vec()).collect();
    assert_eq!(
        paths,
        vec![vec![0, 0], vec![0, 1], vec![0, 2], vec![1], vec![2, 0, 0]]
    );
}

#[test]
fn test_walk_concatenates_to_reading_order() {
    let text: String = walk(&sample_tree()).into_iter().map(|l| l.text).collect();
    assert_eq!(text, "Hello, worldnested");
}

#[test]
fn test_walk_is_idempotent() {
    let tree = sample_tree();
    assert_eq!(walk(&tree), walk(&tree));
}

#[test]
fn test_walk_root_leaf_has_empty_path() {
    let leaves = walk(&Node::leaf("solo"));
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].path, StructuralPath::root());
    assert_eq!(leaves[0].text, "solo");
}

#[test]
fn test_walk_empty_block() {
    assert!(walk(&Node::block(Vec::new())).is_empty());
}
