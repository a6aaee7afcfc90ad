//! Node identifiers, build specs, and fragments.

/// Index of a node in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Payload of a node: a styled element or a raw text run.
pub(crate) enum NodeData {
    Element {
        tag: String,
        id: Option<String>,
        classes: Vec<String>,
    },
    Text(String),
}

/// Builder for a subtree to insert into a `ContentTree`.
pub struct NodeSpec {
    data: NodeData,
    children: Vec<NodeSpec>,
}

impl NodeSpec {
    /// A new element node.
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            data: NodeData::Element {
                tag: tag.into(),
                id: None,
                classes: Vec::new(),
            },
            children: Vec::new(),
        }
    }

    /// A new text run.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            data: NodeData::Text(content.into()),
            children: Vec::new(),
        }
    }

    /// Set the element's id attribute. No effect on text runs.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        if let NodeData::Element { id: slot, .. } = &mut self.data {
            *slot = Some(id.into());
        }
        self
    }

    /// Append a class to the element's class list. No effect on text runs.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        if let NodeData::Element { classes, .. } = &mut self.data {
            classes.push(class.into());
        }
        self
    }

    /// Append a child subtree.
    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }

    pub(crate) fn into_parts(self) -> (NodeData, Vec<NodeSpec>) {
        (self.data, self.children)
    }
}

/// An atomic unit of renderable content: a text run plus its nearest element
/// container. Identity — and the suppression marker — live on the container.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub container: NodeId,
    pub text: String,
}
