//! Type declaration generation from inferred type trees.
//!
//! Currently supports Go.
//!
//! # Example
//!
//! ```
//! use json2go_lib::typegen::golang;
//! use json2go_lib::{Node, NodeKind};
//!
//! let person = Node::root_of(NodeKind::Object, "Person")
//!     .child(Node::new(NodeKind::String, "Name").key("name"));
//! let output = golang::emit(&[person]);
//! assert_eq!(output, "type Person struct {\n\tName string `json:\"name\"`\n}");
//! ```

pub mod golang;
