//! Unit tests for the AST node model.

use super::node::{Node, NodeKind, NodeValue};

#[test]
fn test_factory_builds_leaf() {
    let node = Node::new(Some(NodeValue::Int(42)), NodeKind::Number, None, None);

    assert_eq!(node.kind, NodeKind::Number);
    assert_eq!(node.value, Some(NodeValue::Int(42)));
    assert_eq!(node.offset, None);
    assert!(node.left.is_none());
    assert!(node.right.is_none());
}

#[test]
fn test_number_constructor() {
    let node = Node::number(7);

    assert_eq!(node.kind, NodeKind::Number);
    assert_eq!(node.value, Some(NodeValue::Int(7)));
    assert!(node.is_leaf());
}

#[test]
fn test_local_var_constructor() {
    let node = Node::local_var("count", 16);

    assert_eq!(node.kind, NodeKind::LocalVar);
    assert_eq!(node.value, Some(NodeValue::Text(String::from("count"))));
    assert_eq!(node.offset, Some(16));
    assert!(node.is_leaf());
}

#[test]
fn test_binary_constructor_owns_both_children() {
    let node = Node::binary("+", NodeKind::Add, Node::number(1), Node::number(2));

    assert_eq!(node.kind, NodeKind::Add);
    assert_eq!(node.value, Some(NodeValue::Text(String::from("+"))));
    assert!(!node.is_leaf());
    assert_eq!(node.left.as_ref().unwrap().kind, NodeKind::Number);
    assert_eq!(node.right.as_ref().unwrap().kind, NodeKind::Number);
}

#[test]
fn test_display_renders_s_expression() {
    let inner = Node::binary("*", NodeKind::Mul, Node::number(2), Node::number(3));
    let node = Node::binary("+", NodeKind::Add, Node::number(1), inner);

    assert_eq!(node.to_string(), "(+ 1 (* 2 3))");
}

#[test]
fn test_display_renders_local_var_offset() {
    let node = Node::binary(
        "=",
        NodeKind::Assign,
        Node::local_var("a", 8),
        Node::number(5),
    );

    assert_eq!(node.to_string(), "(= a[8] 5)");
}
