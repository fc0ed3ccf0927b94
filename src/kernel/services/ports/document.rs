//! Document host contract: the tree the engine reads and the edits it requests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of the host document tree.
///
/// Blocks carry ordered children, leaves carry a run of text. Formatting marks
/// on a leaf are opaque to search and are round-tripped untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Block {
        children: Vec<Node>,
    },
    Leaf {
        text: String,
        #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
        marks: serde_json::Map<String, serde_json::Value>,
    },
}

impl Node {
    pub fn block(children: Vec<Node>) -> Self {
        Self::Block { children }
    }

    pub fn leaf(text: impl Into<String>) -> Self {
        Self::Leaf {
            text: text.into(),
            marks: serde_json::Map::new(),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Leaf { text, .. } => Some(text),
            Self::Block { .. } => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Self::Block { children } => children,
            Self::Leaf { .. } => &[],
        }
    }

    /// Resolves `path` against this node. An empty path is the node itself.
    pub fn get(&self, path: &StructuralPath) -> Option<&Node> {
        path.indices()
            .iter()
            .try_fold(self, |node, &ix| node.children().get(ix))
    }

    pub fn get_mut(&mut self, path: &StructuralPath) -> Option<&mut Node> {
        let mut node = self;
        for &ix in path.indices() {
            node = match node {
                Self::Block { children } => children.get_mut(ix)?,
                Self::Leaf { .. } => return None,
            };
        }
        Some(node)
    }
}

/// Child indices from the root to one node.
///
/// Only valid until the next mutation of the tree; re-derive by walking again.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuralPath(Vec<usize>);

impl StructuralPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<usize>> for StructuralPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for StructuralPath {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl fmt::Display for StructuralPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, ix) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{ix}")?;
        }
        f.write_str("]")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPoint {
    pub path: StructuralPath,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: SelectionPoint,
    pub focus: SelectionPoint,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("path {0} does not resolve to a text leaf")]
    StalePath(StructuralPath),
    #[error("offset {offset} is outside leaf {path} (len {len})")]
    OffsetOutOfRange {
        path: StructuralPath,
        offset: usize,
        len: usize,
    },
    #[error("no render surface for {0}")]
    NoRenderSurface(StructuralPath),
}

/// What the engine needs from the editor that owns the document.
///
/// `delete_range` followed by `insert_text` is treated as one atomic edit by
/// the engine; hosts that batch history entries may group the pair.
pub trait DocumentHost {
    fn root(&self) -> &Node;

    fn set_selection(&mut self, selection: Selection) -> Result<(), HostError>;

    fn scroll_into_view(&mut self, path: &StructuralPath) -> Result<(), HostError>;

    fn delete_range(
        &mut self,
        path: &StructuralPath,
        start: usize,
        end: usize,
    ) -> Result<(), HostError>;

    fn insert_text(
        &mut self,
        path: &StructuralPath,
        offset: usize,
        text: &str,
    ) -> Result<(), HostError>;
}
