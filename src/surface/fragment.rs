//! Fragment tree: the document model behind structured surfaces
//!
//! A small arena of container elements and text fragments with DOM-like
//! carets. A caret inside a text fragment addresses a character offset; a
//! caret on an element addresses a child index (the gap before that child).
//! Detached nodes stay in the arena but are unreachable from the root.

/// Index of a node in a [`FragmentTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Payload of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Text(String),
    Element {
        name: String,
        /// `Some(true)` makes the subtree editable, `Some(false)` opts out,
        /// `None` inherits from the parent
        editable: Option<bool>,
    },
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A collapsed caret position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caret {
    pub node: NodeId,
    pub offset: usize,
}

impl Caret {
    pub fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }
}

#[derive(Debug, Clone)]
pub struct FragmentTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for FragmentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentTree {
    /// Create a tree with a single non-editable `body` root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                data: NodeData::Element {
                    name: "body".to_string(),
                    editable: None,
                },
                parent: None,
                children: Vec::new(),
            }],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Create a detached text fragment
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.alloc(NodeData::Text(text.to_string()))
    }

    /// Create a detached element
    pub fn create_element(&mut self, name: &str, editable: Option<bool>) -> NodeId {
        self.alloc(NodeData::Element {
            name: name.to_string(),
            editable,
        })
    }

    /// Create an element and append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, name: &str, editable: Option<bool>) -> NodeId {
        let id = self.create_element(name, editable);
        self.append_child(parent, id);
        id
    }

    /// Create a text fragment and append it to `parent`
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let id = self.create_text(text);
        self.append_child(parent, id);
        id
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let index = self.nodes[parent.0].children.len();
        self.insert_child(parent, index, child);
    }

    /// Insert `child` at `index` among `parent`'s children, detaching it first
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) {
        self.detach(child);
        let children = &mut self.nodes[parent.0].children;
        let index = index.min(children.len());
        children.insert(index, child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Remove a node (and its subtree) from its parent
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != node);
        }
    }

    pub fn data(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.0].data
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn index_in_parent(&self, node: NodeId) -> Option<usize> {
        let parent = self.parent(node)?;
        self.children(parent).iter().position(|&c| c == node)
    }

    pub fn is_text(&self, node: NodeId) -> bool {
        matches!(self.data(node), NodeData::Text(_))
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        match self.data(node) {
            NodeData::Text(t) => Some(t),
            NodeData::Element { .. } => None,
        }
    }

    fn text_mut(&mut self, node: NodeId) -> Option<&mut String> {
        match &mut self.nodes[node.0].data {
            NodeData::Text(t) => Some(t),
            NodeData::Element { .. } => None,
        }
    }

    /// Length of a text fragment in characters (0 for elements)
    pub fn text_len(&self, node: NodeId) -> usize {
        self.text(node).map_or(0, |t| t.chars().count())
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(t) = self.text_mut(node) {
            *t = text.to_string();
        }
    }

    /// Whether `node` is `ancestor` or lies inside it
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    /// Editability with inheritance; text fragments follow their parent
    pub fn is_editable(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if let NodeData::Element {
                editable: Some(flag),
                ..
            } = self.data(n)
            {
                return *flag;
            }
            current = self.parent(n);
        }
        false
    }

    /// Nearest element at or above `node` that is editable
    pub fn editable_region(&self, node: NodeId) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(n) = current {
            if !self.is_text(n) && self.is_editable(n) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }

    /// All text fragments under `root` in document order
    pub fn text_fragments(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if self.is_text(node) {
                out.push(node);
            }
            stack.extend(self.children(node).iter().rev());
        }
        out
    }

    /// Concatenated text under `node`
    pub fn text_content(&self, node: NodeId) -> String {
        self.text_fragments(node)
            .into_iter()
            .filter_map(|n| self.text(n))
            .collect()
    }

    /// Follow first children down to a leaf
    pub fn first_leaf(&self, node: NodeId) -> NodeId {
        let mut current = node;
        while let Some(&child) = self.children(current).first() {
            current = child;
        }
        current
    }

    /// Follow last children down to a leaf
    pub fn last_leaf(&self, node: NodeId) -> NodeId {
        let mut current = node;
        while let Some(&child) = self.children(current).last() {
            current = child;
        }
        current
    }

    /// Split a text fragment at `offset`; the tail becomes a new sibling.
    ///
    /// Returns the new fragment, or `None` when `node` is not attached text.
    pub fn split_text(&mut self, node: NodeId, offset: usize) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let index = self.index_in_parent(node)?;
        let text = self.text(node)?.to_string();
        let (head, tail) = split_chars(&text, offset);
        self.set_text(node, head);
        let tail_node = self.create_text(tail);
        self.insert_child(parent, index + 1, tail_node);
        Some(tail_node)
    }

    /// Caret in the gap right after `node` inside its parent
    pub fn caret_after(&self, node: NodeId) -> Option<Caret> {
        let parent = self.parent(node)?;
        let index = self.index_in_parent(node)?;
        Some(Caret::new(parent, index + 1))
    }

    /// Insert a detached node at a caret.
    ///
    /// A caret inside a text fragment splits it so the node lands between the
    /// two halves; no empty fragments are left behind at either end.
    pub fn insert_node_at(&mut self, caret: Caret, node: NodeId) {
        if self.is_text(caret.node) {
            let Some(parent) = self.parent(caret.node) else {
                return;
            };
            let Some(index) = self.index_in_parent(caret.node) else {
                return;
            };
            let len = self.text_len(caret.node);
            if caret.offset == 0 {
                self.insert_child(parent, index, node);
            } else {
                if caret.offset < len {
                    self.split_text(caret.node, caret.offset);
                }
                self.insert_child(parent, index + 1, node);
            }
        } else {
            self.insert_child(caret.node, caret.offset, node);
        }
    }

    /// Delete everything between two text carets (start before end).
    ///
    /// Fragments fully inside the range are detached, and containers that
    /// become empty as a result are pruned unless they hold either boundary.
    pub fn delete_range(&mut self, start: Caret, end: Caret) {
        if start.node == end.node {
            if let Some(text) = self.text(start.node) {
                let (head, rest) = split_chars(text, start.offset);
                let (_, tail) = split_chars(rest, end.offset.saturating_sub(start.offset));
                let joined = format!("{}{}", head, tail);
                self.set_text(start.node, &joined);
            }
            return;
        }

        let fragments = self.text_fragments(self.root);
        let (Some(si), Some(ei)) = (
            fragments.iter().position(|&n| n == start.node),
            fragments.iter().position(|&n| n == end.node),
        ) else {
            return;
        };
        if si > ei {
            return;
        }

        if let Some(text) = self.text(start.node) {
            let head = split_chars(text, start.offset).0.to_string();
            self.set_text(start.node, &head);
        }
        if let Some(text) = self.text(end.node) {
            let tail = split_chars(text, end.offset).1.to_string();
            self.set_text(end.node, &tail);
        }

        for &node in &fragments[si + 1..ei] {
            let parent = self.parent(node);
            self.detach(node);
            self.prune_empty(parent, start.node, end.node);
        }
    }

    fn prune_empty(&mut self, mut current: Option<NodeId>, keep_a: NodeId, keep_b: NodeId) {
        while let Some(node) = current {
            if node == self.root
                || !self.children(node).is_empty()
                || self.contains(node, keep_a)
                || self.contains(node, keep_b)
            {
                return;
            }
            current = self.parent(node);
            self.detach(node);
        }
    }

    /// Type text at a caret the way a platform would, returning the new caret.
    ///
    /// Element carets extend the preceding text fragment when there is one and
    /// otherwise create a new fragment in the gap.
    pub fn type_text(&mut self, caret: Caret, text: &str) -> Caret {
        if let Some(existing) = self.text_mut(caret.node) {
            let (head, tail) = split_chars(existing, caret.offset);
            let joined = format!("{}{}{}", head, text, tail);
            *existing = joined;
            return Caret::new(caret.node, caret.offset + text.chars().count());
        }

        if caret.offset > 0 {
            if let Some(&prev) = self.children(caret.node).get(caret.offset - 1) {
                if self.is_text(prev) {
                    let len = self.text_len(prev);
                    return self.type_text(Caret::new(prev, len), text);
                }
            }
        }

        let node = self.create_text(text);
        self.insert_child(caret.node, caret.offset, node);
        Caret::new(node, text.chars().count())
    }

    /// Delete the character before a text caret, returning the new caret
    pub fn delete_backward(&mut self, caret: Caret) -> Caret {
        let Some(text) = self.text(caret.node) else {
            return caret;
        };
        if caret.offset == 0 {
            return caret;
        }
        let (head, tail) = split_chars(text, caret.offset);
        let mut head = head.to_string();
        head.pop();
        let joined = format!("{}{}", head, tail);
        self.set_text(caret.node, &joined);
        Caret::new(caret.node, caret.offset - 1)
    }

    /// Characters preceding a text caret within `root`, in document order
    pub fn chars_before(&self, root: NodeId, caret: Caret) -> Option<usize> {
        if !self.is_text(caret.node) {
            return None;
        }
        let mut total = 0;
        for node in self.text_fragments(root) {
            if node == caret.node {
                return Some(total + caret.offset.min(self.text_len(node)));
            }
            total += self.text_len(node);
        }
        None
    }
}

/// Split a string at a character offset (clamped)
fn split_chars(text: &str, offset: usize) -> (&str, &str) {
    let byte = text
        .char_indices()
        .nth(offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    text.split_at(byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(parts: &[&str]) -> (FragmentTree, NodeId, Vec<NodeId>) {
        let mut doc = FragmentTree::new();
        let root = doc.root();
        let host = doc.append_element(root, "div", Some(true));
        let p = doc.append_element(host, "p", None);
        let nodes = parts.iter().map(|s| doc.append_text(p, s)).collect();
        (doc, host, nodes)
    }

    #[test]
    fn test_document_order_and_content() {
        let (doc, host, nodes) = paragraph(&["ab", "cd", "e"]);
        assert_eq!(doc.text_fragments(host), nodes);
        assert_eq!(doc.text_content(host), "abcde");
    }

    #[test]
    fn test_editability_inherits() {
        let (doc, host, nodes) = paragraph(&["x"]);
        assert!(doc.is_editable(nodes[0]));
        assert!(!doc.is_editable(doc.root()));
        let p = doc.parent(nodes[0]).unwrap();
        assert_eq!(doc.editable_region(nodes[0]), Some(p));
        assert_eq!(doc.editable_region(host), Some(host));
    }

    #[test]
    fn test_split_text() {
        let (mut doc, host, nodes) = paragraph(&["hello"]);
        let tail = doc.split_text(nodes[0], 2).unwrap();
        assert_eq!(doc.text(nodes[0]), Some("he"));
        assert_eq!(doc.text(tail), Some("llo"));
        assert_eq!(doc.text_content(host), "hello");
    }

    #[test]
    fn test_delete_range_within_fragment() {
        let (mut doc, host, nodes) = paragraph(&["say #ab now"]);
        doc.delete_range(Caret::new(nodes[0], 4), Caret::new(nodes[0], 7));
        assert_eq!(doc.text_content(host), "say  now");
    }

    #[test]
    fn test_delete_range_across_fragments_prunes_containers() {
        let mut doc = FragmentTree::new();
        let root = doc.root();
        let host = doc.append_element(root, "div", Some(true));
        let a = doc.append_text(host, "x #");
        let span = doc.append_element(host, "span", None);
        doc.append_text(span, "pro");
        let c = doc.append_text(host, "j!");

        doc.delete_range(Caret::new(a, 2), Caret::new(c, 1));

        assert_eq!(doc.text_content(host), "x !");
        assert_eq!(doc.children(host), &[a, c]);
    }

    #[test]
    fn test_insert_node_splits_text() {
        let (mut doc, host, nodes) = paragraph(&["ab"]);
        let new = doc.create_text("X");
        doc.insert_node_at(Caret::new(nodes[0], 1), new);
        assert_eq!(doc.text_content(host), "aXb");

        let caret = doc.caret_after(new).unwrap();
        assert_eq!(caret.node, doc.parent(new).unwrap());
        assert_eq!(caret.offset, 2);
    }

    #[test]
    fn test_type_text_at_element_caret_extends_previous() {
        let (mut doc, host, nodes) = paragraph(&["ab"]);
        let p = doc.parent(nodes[0]).unwrap();
        let caret = doc.type_text(Caret::new(p, 1), "c");
        assert_eq!(caret, Caret::new(nodes[0], 3));
        assert_eq!(doc.text_content(host), "abc");
    }

    #[test]
    fn test_type_text_into_empty_element() {
        let mut doc = FragmentTree::new();
        let root = doc.root();
        let host = doc.append_element(root, "div", Some(true));
        let caret = doc.type_text(Caret::new(host, 0), "#");
        assert!(doc.is_text(caret.node));
        assert_eq!(caret.offset, 1);
        assert_eq!(doc.text_content(host), "#");
    }

    #[test]
    fn test_chars_before_spans_fragments() {
        let (doc, host, nodes) = paragraph(&["ab", "cd"]);
        assert_eq!(doc.chars_before(host, Caret::new(nodes[1], 1)), Some(3));
        assert_eq!(doc.chars_before(host, Caret::new(host, 0)), None);
    }
}
