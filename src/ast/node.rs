use std::fmt::Display;

/// Node kinds of the abstract syntax tree.
///
/// This set is closed: consumers match it exhaustively. `Number` and
/// `LocalVar` are the only leaf kinds, everything else is a binary operator.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NodeKind {
    Add,          // +
    Sub,          // -
    Mul,          // *
    Div,          // /
    Greater,      // >
    GreaterEqual, // >=
    Lower,        // <
    LowerEqual,   // <=
    Equal,        // ==
    NotEqual,     // !=
    Assign,       // =
    LocalVar,
    Number,
}

impl NodeKind {
    /// The operator symbol for binary kinds, used when rendering a tree.
    pub fn symbol(&self) -> &'static str {
        match self {
            NodeKind::Add => "+",
            NodeKind::Sub => "-",
            NodeKind::Mul => "*",
            NodeKind::Div => "/",
            NodeKind::Greater => ">",
            NodeKind::GreaterEqual => ">=",
            NodeKind::Lower => "<",
            NodeKind::LowerEqual => "<=",
            NodeKind::Equal => "==",
            NodeKind::NotEqual => "!=",
            NodeKind::Assign => "=",
            NodeKind::LocalVar => "var",
            NodeKind::Number => "num",
        }
    }
}

/// Payload carried by a node: an integer literal for `Number`, an identifier
/// for `LocalVar`, the operator text for binary nodes (diagnostic only).
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum NodeValue {
    Int(i64),
    Text(String),
}

/// One node of the abstract syntax tree.
///
/// A node exclusively owns its children, so the result of parsing is always
/// a tree. Leaf kinds carry no children; every other kind carries exactly
/// two, populated by the grammar rule that created it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub value: Option<NodeValue>,
    /// Stack slot displacement, meaningful only when `kind` is `LocalVar`.
    pub offset: Option<i64>,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    /// The single node factory. Nodes are not mutated after construction.
    pub fn new(
        value: Option<NodeValue>,
        kind: NodeKind,
        left: Option<Node>,
        right: Option<Node>,
    ) -> Node {
        Node {
            kind,
            value,
            offset: None,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn number(value: i64) -> Node {
        Node::new(Some(NodeValue::Int(value)), NodeKind::Number, None, None)
    }

    pub fn local_var(name: &str, offset: i64) -> Node {
        let mut node = Node::new(
            Some(NodeValue::Text(String::from(name))),
            NodeKind::LocalVar,
            None,
            None,
        );
        node.offset = Some(offset);
        node
    }

    pub fn binary(operator: &str, kind: NodeKind, left: Node, right: Node) -> Node {
        Node::new(
            Some(NodeValue::Text(String::from(operator))),
            kind,
            Some(left),
            Some(right),
        )
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Number | NodeKind::LocalVar)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            NodeKind::Number => match &self.value {
                Some(NodeValue::Int(value)) => write!(f, "{}", value),
                _ => write!(f, "num"),
            },
            NodeKind::LocalVar => match &self.value {
                Some(NodeValue::Text(name)) => {
                    write!(f, "{}[{}]", name, self.offset.unwrap_or(0))
                }
                _ => write!(f, "var"),
            },
            _ => {
                write!(f, "({}", self.kind.symbol())?;
                if let Some(left) = &self.left {
                    write!(f, " {}", left)?;
                }
                if let Some(right) = &self.right {
                    write!(f, " {}", right)?;
                }
                write!(f, ")")
            }
        }
    }
}
