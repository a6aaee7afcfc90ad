//! Content tree — the engine's model of a live, mutating document.
//!
//! An arena of element and text nodes. Insertions are journaled as batches so
//! the scan driver can consume newly introduced subtrees exactly once without
//! ever re-diffing existing nodes.

pub mod subscription;
pub mod types;

use hush_core::types::Category;

pub use subscription::Subscription;
pub use types::{Fragment, NodeId, NodeSpec};

use types::NodeData;

/// Arena-backed content tree with an insertion journal.
pub struct ContentTree {
    nodes: Vec<Node>,
    root: NodeId,
    journal: Vec<Vec<NodeId>>,
}

struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Suppression marker. `Some` means marked and hidden; this is the single
    /// attribute the rest of the system tests for. Set at most once.
    suppressed: Option<Category>,
}

impl ContentTree {
    /// Create a tree from a root spec. The root subtree is journaled as the
    /// first batch, so a fresh subscription delivers the initial document
    /// exactly like any later mutation.
    pub fn new(root: NodeSpec) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            journal: Vec::new(),
        };
        let root_id = tree.materialize(None, root);
        tree.root = root_id;
        tree.journal.push(vec![root_id]);
        tree
    }

    /// The document root.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Total number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert one subtree under `parent`, journaled as its own batch.
    pub fn insert(&mut self, parent: NodeId, spec: NodeSpec) -> NodeId {
        let id = self.materialize(Some(parent), spec);
        self.journal.push(vec![id]);
        id
    }

    /// Insert several sibling subtrees under `parent` as a single batch.
    /// Batch order is document order.
    pub fn insert_batch(&mut self, parent: NodeId, specs: Vec<NodeSpec>) -> Vec<NodeId> {
        let ids: Vec<NodeId> = specs
            .into_iter()
            .map(|spec| self.materialize(Some(parent), spec))
            .collect();
        self.journal.push(ids.clone());
        ids
    }

    fn materialize(&mut self, parent: Option<NodeId>, spec: NodeSpec) -> NodeId {
        let (data, children) = spec.into_parts();
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            data,
            parent,
            children: Vec::new(),
            suppressed: None,
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        for child in children {
            self.materialize(Some(id), child);
        }
        id
    }

    /// Observe the insertion journal from the beginning. Each subscription is
    /// an independent cursor; subscribing again restarts the sequence.
    pub fn subscribe(&self) -> Subscription {
        Subscription::new()
    }

    pub(crate) fn batch(&self, index: usize) -> Option<&[NodeId]> {
        self.journal.get(index).map(Vec::as_slice)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    /// Whether the node is an element (as opposed to a text run).
    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.index()].data, NodeData::Element { .. })
    }

    /// Element tag name, if the node is an element.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.index()].data {
            NodeData::Element { tag, .. } => Some(tag),
            NodeData::Text(_) => None,
        }
    }

    /// Element id attribute, if present.
    pub fn dom_id(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.index()].data {
            NodeData::Element { id: Some(dom_id), .. } => Some(dom_id),
            _ => None,
        }
    }

    /// Element class list (empty for text nodes).
    pub fn classes(&self, id: NodeId) -> &[String] {
        match &self.nodes[id.index()].data {
            NodeData::Element { classes, .. } => classes,
            NodeData::Text(_) => &[],
        }
    }

    /// Text run content, if the node is a text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.index()].data {
            NodeData::Text(text) => Some(text),
            NodeData::Element { .. } => None,
        }
    }

    /// Mark a container suppressed. Returns `true` on the unmarked → marked
    /// transition, `false` if the marker was already set (idempotent no-op).
    pub fn mark_suppressed(&mut self, id: NodeId, reason: Category) -> bool {
        let node = &mut self.nodes[id.index()];
        if node.suppressed.is_some() {
            return false;
        }
        node.suppressed = Some(reason);
        true
    }

    /// Whether the container carries the suppression marker.
    pub fn is_suppressed(&self, id: NodeId) -> bool {
        self.nodes[id.index()].suppressed.is_some()
    }

    /// The category a container was suppressed for, if any.
    pub fn suppression(&self, id: NodeId) -> Option<Category> {
        self.nodes[id.index()].suppressed
    }

    /// Pre-order (document order) traversal of a subtree, root included.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            let children = &self.nodes[current.index()].children;
            for &child in children.iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// Ancestors of a node, nearest first, ending at the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }

    /// All fragments in a subtree, in document order: each text run paired
    /// with its nearest element container.
    pub fn fragments_in(&self, id: NodeId) -> Vec<Fragment> {
        self.descendants(id)
            .into_iter()
            .filter_map(|node| {
                let text = self.text(node)?;
                let container = self.parent(node)?;
                Some(Fragment {
                    container,
                    text: text.to_string(),
                })
            })
            .collect()
    }

    /// Concatenated text content of a subtree, document order, space-joined.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in self.descendants(id) {
            if let Some(text) = self.text(node) {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(text);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> ContentTree {
        ContentTree::new(
            NodeSpec::element("body").child(
                NodeSpec::element("div")
                    .class("post")
                    .child(NodeSpec::text("first"))
                    .child(NodeSpec::element("span").child(NodeSpec::text("second"))),
            ),
        )
    }

    #[test]
    fn fragments_pair_text_with_nearest_container() {
        let tree = sample_tree();
        let fragments = tree.fragments_in(tree.root());
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].text, "first");
        assert_eq!(tree.classes(fragments[0].container), &["post".to_string()]);
        assert_eq!(fragments[1].text, "second");
        assert_eq!(tree.tag(fragments[1].container), Some("span"));
    }

    #[test]
    fn descendants_are_pre_order() {
        let tree = sample_tree();
        let order = tree.descendants(tree.root());
        let tags: Vec<Option<&str>> = order.iter().map(|&id| tree.tag(id)).collect();
        assert_eq!(tags[0], Some("body"));
        assert_eq!(tags[1], Some("div"));
        // text "first" precedes the span in document order
        assert_eq!(tree.text(order[2]), Some("first"));
        assert_eq!(tags[3], Some("span"));
    }

    #[test]
    fn ancestors_walk_to_root() {
        let tree = sample_tree();
        let fragments = tree.fragments_in(tree.root());
        let span = fragments[1].container;
        let chain: Vec<Option<&str>> = tree.ancestors(span).map(|id| tree.tag(id)).collect();
        assert_eq!(chain, vec![Some("div"), Some("body")]);
    }

    #[test]
    fn text_content_joins_subtree_runs() {
        let tree = sample_tree();
        assert_eq!(tree.text_content(tree.root()), "first second");
    }

    #[test]
    fn marker_is_set_at_most_once() {
        let mut tree = sample_tree();
        let container = tree.fragments_in(tree.root())[0].container;
        assert!(tree.mark_suppressed(container, Category::Negative));
        assert!(!tree.mark_suppressed(container, Category::Comparison));
        assert_eq!(tree.suppression(container), Some(Category::Negative));
    }

    #[test]
    fn insert_batch_journals_in_document_order() {
        let mut tree = sample_tree();
        let root = tree.root();
        let ids = tree.insert_batch(
            root,
            vec![NodeSpec::element("p"), NodeSpec::element("aside")],
        );
        let mut sub = tree.subscribe();
        // batch 0 is the initial document
        assert_eq!(sub.next_batch(&tree).unwrap(), &[root]);
        assert_eq!(sub.next_batch(&tree).unwrap(), ids.as_slice());
        assert!(sub.next_batch(&tree).is_none());
    }
}
