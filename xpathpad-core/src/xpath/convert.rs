//! Conversion of xot nodes into result nodes

use crate::node::{Attribute, ResultNode};
use xot::{NameId, Node, Value, Xot};

/// Copy a xot node and its subtree into a [`ResultNode`]
///
/// The subtree is walked with an explicit stack, so deeply nested documents
/// don't grow the call stack.
pub(crate) fn convert_node(xot: &Xot, root: Node) -> ResultNode {
    // (node, children already converted)
    let mut stack = vec![(root, false)];
    let mut built: Vec<ResultNode> = Vec::new();

    while let Some((node, ready)) = stack.pop() {
        match xot.value(node) {
            Value::Document | Value::Element(_) if !ready => {
                stack.push((node, true));
                let children: Vec<Node> = xot.children(node).collect();
                stack.extend(children.into_iter().rev().map(|child| (child, false)));
            }
            Value::Document => {
                let children = take_children(xot, node, &mut built);
                built.push(ResultNode::Document { children });
            }
            Value::Element(element) => {
                let children = take_children(xot, node, &mut built);
                let attributes = xot
                    .attributes(node)
                    .iter()
                    .map(|(name, value)| Attribute::new(qualified_name(xot, node, name), value.to_string()))
                    .collect();
                built.push(ResultNode::Element {
                    name: qualified_name(xot, node, element.name()),
                    attributes,
                    children,
                });
            }
            Value::Attribute(attribute) => {
                let context = xot.parent(node).unwrap_or(node);
                built.push(ResultNode::Attribute {
                    name: qualified_name(xot, context, attribute.name()),
                    value: attribute.value().to_string(),
                });
            }
            Value::Text(text) => built.push(ResultNode::text(text.get())),
            Value::Comment(comment) => built.push(ResultNode::Comment {
                value: comment.get().to_string(),
            }),
            Value::ProcessingInstruction(pi) => built.push(ResultNode::ProcessingInstruction {
                target: xot.local_name_str(pi.target()).to_string(),
                data: pi.data().map(str::to_string),
            }),
            Value::Namespace(namespace) => built.push(ResultNode::Namespace {
                prefix: xot.prefix_str(namespace.prefix()).to_string(),
                uri: xot.namespace_str(namespace.namespace()).to_string(),
            }),
        }
    }

    built.pop().unwrap_or(ResultNode::Document { children: Vec::new() })
}

/// Pop the converted children of `node` off the build stack, in document order
fn take_children(xot: &Xot, node: Node, built: &mut Vec<ResultNode>) -> Vec<ResultNode> {
    let count = xot.children(node).count();
    let start = built.len().saturating_sub(count);
    built.split_off(start)
}

/// `prefix:local` when the name's namespace has a prefix in scope at `context`
fn qualified_name(xot: &Xot, context: Node, name: NameId) -> String {
    let local = xot.local_name_str(name);
    let namespace = xot.namespace_for_name(name);
    if namespace == xot.no_namespace() {
        return local.to_string();
    }
    match xot.prefix_for_namespace(context, namespace) {
        Some(prefix) if !xot.prefix_str(prefix).is_empty() => {
            format!("{}:{}", xot.prefix_str(prefix), local)
        }
        _ => local.to_string(),
    }
}
