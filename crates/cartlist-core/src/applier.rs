use std::any::Any;
use std::fmt;

pub type NodeId = usize;

/// A node emitted into the tree by a composable.
///
/// Nodes are plain data: the tree is rebuilt on every pass.
pub trait Node: AsAny + fmt::Debug {
    /// One-line description used by [`MemoryApplier::dump_tree`].
    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

/// Type-erased view of a node, implemented for every `'static` type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn Node {
    pub fn downcast_ref<N: Node>(&self) -> Option<&N> {
        <dyn Node as AsAny>::as_any(self).downcast_ref::<N>()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    Missing { id: NodeId },
    TypeMismatch { id: NodeId, expected: &'static str },
    Unbalanced { open_groups: usize, open_parents: usize },
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeError::Missing { id } => write!(f, "node {id} missing"),
            NodeError::TypeMismatch { id, expected } => {
                write!(f, "node {id} type mismatch; expected {expected}")
            }
            NodeError::Unbalanced {
                open_groups,
                open_parents,
            } => write!(
                f,
                "composition ended with {open_groups} open groups and {open_parents} open parents"
            ),
        }
    }
}

impl std::error::Error for NodeError {}

struct NodeEntry {
    node: Box<dyn Node>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// In-memory node tree produced by one composition pass.
///
/// Ids are handed out in creation order, which is also pre-order: a parent is
/// always created before its children.
#[derive(Default)]
pub struct MemoryApplier {
    nodes: Vec<NodeEntry>,
    roots: Vec<NodeId>,
}

impl MemoryApplier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }

    pub(crate) fn create(&mut self, node: Box<dyn Node>, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(NodeEntry {
            node,
            parent,
            children: Vec::new(),
        });
        match parent.and_then(|p| self.nodes.get_mut(p)) {
            Some(entry) => entry.children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    fn entry(&self, id: NodeId) -> Result<&NodeEntry, NodeError> {
        self.nodes.get(id).ok_or(NodeError::Missing { id })
    }

    pub fn node(&self, id: NodeId) -> Result<&(dyn Node + 'static), NodeError> {
        Ok(&*self.entry(id)?.node)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], NodeError> {
        Ok(&self.entry(id)?.children)
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, NodeError> {
        Ok(self.entry(id)?.parent)
    }

    pub fn with_node<N: Node, R>(
        &self,
        id: NodeId,
        f: impl FnOnce(&N) -> R,
    ) -> Result<R, NodeError> {
        let typed = self
            .node(id)?
            .downcast_ref::<N>()
            .ok_or(NodeError::TypeMismatch {
                id,
                expected: std::any::type_name::<N>(),
            })?;
        Ok(f(typed))
    }

    /// Ids of every node of type `N`, in document order.
    pub fn find_all<N: Node>(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.node.downcast_ref::<N>().is_some())
            .map(|(id, _)| id)
            .collect()
    }

    /// Every node of type `N`, in document order.
    pub fn collect<N: Node + Clone>(&self) -> Vec<N> {
        self.nodes
            .iter()
            .filter_map(|entry| entry.node.downcast_ref::<N>().cloned())
            .collect()
    }

    /// Whether `ancestor` appears on the parent chain of `id`.
    pub fn is_descendant_of(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = self.nodes.get(id).and_then(|entry| entry.parent);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.nodes.get(current).and_then(|entry| entry.parent);
        }
        false
    }

    pub fn dump_tree(&self) -> String {
        if self.roots.is_empty() {
            return "(no root)\n".to_string();
        }
        let mut output = String::new();
        for &root in &self.roots {
            self.dump_node(&mut output, root, 0);
        }
        output
    }

    fn dump_node(&self, output: &mut String, id: NodeId, depth: usize) {
        let indent = "  ".repeat(depth);
        match self.nodes.get(id) {
            Some(entry) => {
                output.push_str(&format!("{indent}[{id}] {}\n", entry.node.describe()));
                for &child in &entry.children {
                    self.dump_node(output, child, depth + 1);
                }
            }
            None => output.push_str(&format!("{indent}[{id}] (missing)\n")),
        }
    }
}
