//! Result node model
//!
//! Owned, immutable view of the items an XPath evaluation returns. Each XPath
//! data-model kind is its own variant so the formatters can match on shape
//! instead of inspecting node types at runtime.

/// An attribute carried on an element (`name="value"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A single item of a query result
///
/// Dropping, [`ResultNode::string_value`] and rendering walk the tree with an
/// explicit stack. The derived `Clone`, `PartialEq` and `Debug` still recurse
/// once per nesting level, so cloning, comparing or printing a very deep tree
/// can overflow the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultNode {
    /// Document root (unnamed, value is all descendant text)
    Document { children: Vec<ResultNode> },
    /// Element with its attributes and children in document order
    Element {
        name: String,
        attributes: Vec<Attribute>,
        children: Vec<ResultNode>,
    },
    /// Attribute selected directly, e.g. by `//@lang`
    Attribute { name: String, value: String },
    /// Text leaf
    Text { value: String },
    Comment { value: String },
    ProcessingInstruction { target: String, data: Option<String> },
    /// Namespace node, e.g. from `namespace::*`
    Namespace { prefix: String, uri: String },
    /// Non-node item such as the result of `count(//book)`
    Atomic { value: String },
}

impl ResultNode {
    /// Create an element with no attributes and no children
    pub fn element(name: impl Into<String>) -> Self {
        ResultNode::Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        ResultNode::Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        ResultNode::Text { value: value.into() }
    }

    pub fn atomic(value: impl Into<String>) -> Self {
        ResultNode::Atomic { value: value.into() }
    }

    /// Add an attribute (elements only; other variants are returned unchanged)
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let ResultNode::Element { attributes, .. } = &mut self {
            attributes.push(Attribute::new(name, value));
        }
        self
    }

    /// Append a child (elements and documents only)
    pub fn with_child(mut self, child: ResultNode) -> Self {
        match &mut self {
            ResultNode::Element { children, .. } | ResultNode::Document { children } => {
                children.push(child);
            }
            _ => {}
        }
        self
    }

    /// Short lowercase name of the node kind
    pub fn kind(&self) -> &'static str {
        match self {
            ResultNode::Document { .. } => "document",
            ResultNode::Element { .. } => "element",
            ResultNode::Attribute { .. } => "attribute",
            ResultNode::Text { .. } => "text",
            ResultNode::Comment { .. } => "comment",
            ResultNode::ProcessingInstruction { .. } => "processing-instruction",
            ResultNode::Namespace { .. } => "namespace",
            ResultNode::Atomic { .. } => "atomic",
        }
    }

    /// Qualified name, if this kind of node has one
    pub fn name(&self) -> Option<&str> {
        match self {
            ResultNode::Element { name, .. } | ResultNode::Attribute { name, .. } => Some(name),
            ResultNode::ProcessingInstruction { target, .. } => Some(target),
            ResultNode::Namespace { prefix, .. } => Some(prefix),
            ResultNode::Document { .. }
            | ResultNode::Text { .. }
            | ResultNode::Comment { .. }
            | ResultNode::Atomic { .. } => None,
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        match self {
            ResultNode::Element { attributes, .. } => attributes,
            _ => &[],
        }
    }

    pub fn children(&self) -> &[ResultNode] {
        match self {
            ResultNode::Element { children, .. } | ResultNode::Document { children } => children,
            _ => &[],
        }
    }

    /// XPath string value
    ///
    /// Elements and documents concatenate their descendant text in document
    /// order; every other kind returns the value it carries.
    pub fn string_value(&self) -> String {
        match self {
            ResultNode::Element { .. } | ResultNode::Document { .. } => {
                let mut value = String::new();
                let mut stack: Vec<&ResultNode> = self.children().iter().rev().collect();
                while let Some(node) = stack.pop() {
                    match node {
                        ResultNode::Text { value: text } => value.push_str(text),
                        ResultNode::Element { children, .. } => {
                            stack.extend(children.iter().rev());
                        }
                        // Comments and PIs don't contribute to an element's string value
                        _ => {}
                    }
                }
                value
            }
            ResultNode::Attribute { value, .. }
            | ResultNode::Text { value }
            | ResultNode::Comment { value }
            | ResultNode::Atomic { value } => value.clone(),
            ResultNode::ProcessingInstruction { data, .. } => data.clone().unwrap_or_default(),
            ResultNode::Namespace { uri, .. } => uri.clone(),
        }
    }

    /// Trimmed qualified name, or `None` when absent or blank
    pub(crate) fn display_name(&self) -> Option<&str> {
        self.name().map(str::trim).filter(|name| !name.is_empty())
    }

    /// Trimmed string value, or `None` when blank
    pub(crate) fn display_value(&self) -> Option<String> {
        let value = self.string_value();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == value.len() {
            Some(value)
        } else {
            Some(trimmed.to_string())
        }
    }
}

// Deep result trees would otherwise be dropped recursively, one stack frame
// per nesting level.
impl Drop for ResultNode {
    fn drop(&mut self) {
        let mut pending = match self {
            ResultNode::Element { children, .. } | ResultNode::Document { children } => {
                std::mem::take(children)
            }
            _ => return,
        };
        while let Some(mut node) = pending.pop() {
            if let ResultNode::Element { children, .. } | ResultNode::Document { children } = &mut node {
                pending.append(children);
            }
        }
    }
}
