use crate::{MAX_ARRAY_LEVEL, Node, NodeKind, TreeError, validate};

fn person() -> Node {
    Node::root_of(NodeKind::Object, "Person").children([
        Node::new(NodeKind::String, "Name").key("name"),
        Node::new(NodeKind::Int, "Age").key("age").required(false),
    ])
}

#[test]
fn well_formed_forest_passes() {
    let tags = Node::root_of(NodeKind::Map, "Tags").child(Node::new(NodeKind::String, "Tag"));
    assert_eq!(validate(&[person(), tags]), Ok(()));
}

#[test]
fn empty_forest_passes() {
    assert_eq!(validate(&[]), Ok(()));
}

#[test]
fn unnamed_declaration_is_reported_by_position() {
    let err = validate(&[person(), Node::root_of(NodeKind::String, "")]).unwrap_err();
    assert_eq!(
        err,
        TreeError::MissingTypeName {
            path: "#1".to_string()
        }
    );
}

#[test]
fn duplicate_field_names() {
    let root = person().child(Node::new(NodeKind::Bool, "Name").key("NAME"));
    let err = validate(&[root]).unwrap_err();
    assert_eq!(err.to_string(), "Person: duplicate field `Name`");
}

#[test]
fn unnamed_field_is_reported_by_key() {
    let root = person().child(Node::new(NodeKind::Bool, "").key("flag"));
    let err = validate(&[root]).unwrap_err();
    assert_eq!(err.to_string(), "Person.flag: field has no name");
}

#[test]
fn map_with_several_value_types() {
    let root = Node::root_of(NodeKind::Map, "Lookup").children([
        Node::new(NodeKind::String, "A"),
        Node::new(NodeKind::Int, "B"),
    ]);
    let err = validate(&[root]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Lookup: map declares 2 value types, expected at most one"
    );
}

#[test]
fn scalar_with_children() {
    let root = Node::root_of(NodeKind::Object, "Root").child(
        Node::new(NodeKind::String, "Label").child(Node::new(NodeKind::Int, "Stray")),
    );
    let err = validate(&[root]).unwrap_err();
    assert_eq!(err.to_string(), "Root.Label: string node cannot have children");
}

#[test]
fn nested_root_flag() {
    let root = Node::root_of(NodeKind::Object, "Root").child(
        Node::new(NodeKind::Map, "Meta").child(Node::root_of(NodeKind::Time, "Stamp")),
    );
    let err = validate(&[root]).unwrap_err();
    assert_eq!(
        err,
        TreeError::NestedRoot {
            path: "Root.Meta.<value>".to_string()
        }
    );
}

#[test]
fn extracted_reference_falls_back_to_name() {
    let root = Node::root_of(NodeKind::Object, "Root").child(
        Node::new(NodeKind::Extracted, "Owner").key("owner"),
    );
    assert_eq!(validate(&[root]), Ok(()));

    let blank_override = Node::root_of(NodeKind::Extracted, "Alias").external_type_id("");
    assert_eq!(validate(&[blank_override]), Ok(()));
}

#[test]
fn extracted_without_reference() {
    let root = Node::root_of(NodeKind::Map, "Index").child(Node::new(NodeKind::Extracted, ""));
    let err = validate(&[root]).unwrap_err();
    assert_eq!(err.to_string(), "Index.<value>: extracted node references no type");
}

#[test]
fn first_violation_wins() {
    let root = Node::root_of(NodeKind::Object, "Root").children([
        Node::new(NodeKind::Int, "A").child(Node::new(NodeKind::Int, "X")),
        Node::new(NodeKind::Int, "A"),
    ]);
    let err = validate(&[root]).unwrap_err();
    assert!(matches!(err, TreeError::UnexpectedChildren { .. }));
}

#[test]
fn array_nesting_limit() {
    let at_limit = Node::root_of(NodeKind::Object, "Root")
        .child(Node::new(NodeKind::Int, "Grid").array_level(MAX_ARRAY_LEVEL));
    assert_eq!(validate(&[at_limit]), Ok(()));

    let too_deep = Node::root_of(NodeKind::Object, "Root")
        .child(Node::new(NodeKind::Int, "Grid").array_level(1_000_000));
    let err = validate(&[too_deep]).unwrap_err();
    assert_eq!(
        err,
        TreeError::ArrayTooDeep {
            path: "Root.Grid".to_string(),
            level: 1_000_000,
        }
    );
    assert_eq!(
        err.to_string(),
        "Root.Grid: 1000000 array levels, at most 1024 allowed"
    );
}
