//! In-memory document host.
//!
//! Backs the command-line front end and the tests; an embedding editor
//! implements `DocumentHost` over its own tree instead.

use crate::kernel::services::ports::{
    DocumentHost, HostError, Node, Selection, StructuralPath,
};

#[derive(Debug, Clone)]
pub struct MemoryDocument {
    root: Node,
    selection: Option<Selection>,
    scrolled_to: Option<StructuralPath>,
    rendered: bool,
    revision: u64,
}

impl MemoryDocument {
    pub fn new(root: Node) -> Self {
        Self {
            root,
            selection: None,
            scrolled_to: None,
            rendered: true,
            revision: 0,
        }
    }

    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data).map(Self::new)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.root)
    }

    /// A document without a view cannot scroll; selection still works.
    pub fn headless(root: Node) -> Self {
        Self {
            rendered: false,
            ..Self::new(root)
        }
    }

    pub fn root_mut(&mut self) -> &mut Node {
        self.revision += 1;
        &mut self.root
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn scrolled_to(&self) -> Option<&StructuralPath> {
        self.scrolled_to.as_ref()
    }

    /// Bumped on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn text_at(&self, path: &StructuralPath) -> Option<&str> {
        self.root.get(path).and_then(Node::text)
    }

    /// Reading-order text of all leaves.
    pub fn plain_text(&self) -> String {
        crate::kernel::services::adapters::search::walk(&self.root)
            .into_iter()
            .map(|leaf| leaf.text)
            .collect()
    }

    fn leaf_text(&self, path: &StructuralPath) -> Result<&str, HostError> {
        self.text_at(path)
            .ok_or_else(|| HostError::StalePath(path.clone()))
    }

    fn leaf_text_mut(&mut self, path: &StructuralPath) -> Result<&mut String, HostError> {
        match self.root.get_mut(path) {
            Some(Node::Leaf { text, .. }) => Ok(text),
            _ => Err(HostError::StalePath(path.clone())),
        }
    }

    fn check_offset(
        text: &str,
        path: &StructuralPath,
        offset: usize,
    ) -> Result<(), HostError> {
        if offset > text.len() || !text.is_char_boundary(offset) {
            return Err(HostError::OffsetOutOfRange {
                path: path.clone(),
                offset,
                len: text.len(),
            });
        }
        Ok(())
    }
}

impl DocumentHost for MemoryDocument {
    fn root(&self) -> &Node {
        &self.root
    }

    fn set_selection(&mut self, selection: Selection) -> Result<(), HostError> {
        for point in [&selection.anchor, &selection.focus] {
            let text = self.leaf_text(&point.path)?;
            Self::check_offset(text, &point.path, point.offset)?;
        }
        self.selection = Some(selection);
        Ok(())
    }

    fn scroll_into_view(&mut self, path: &StructuralPath) -> Result<(), HostError> {
        if !self.rendered || self.root.get(path).is_none() {
            return Err(HostError::NoRenderSurface(path.clone()));
        }
        self.scrolled_to = Some(path.clone());
        Ok(())
    }

    fn delete_range(
        &mut self,
        path: &StructuralPath,
        start: usize,
        end: usize,
    ) -> Result<(), HostError> {
        let text = self.leaf_text(path)?;
        Self::check_offset(text, path, start)?;
        Self::check_offset(text, path, end)?;
        if start > end {
            return Err(HostError::OffsetOutOfRange {
                path: path.clone(),
                offset: start,
                len: text.len(),
            });
        }

        self.leaf_text_mut(path)?.replace_range(start..end, "");
        self.selection = None;
        self.revision += 1;
        Ok(())
    }

    fn insert_text(
        &mut self,
        path: &StructuralPath,
        offset: usize,
        text: &str,
    ) -> Result<(), HostError> {
        let current = self.leaf_text(path)?;
        Self::check_offset(current, path, offset)?;

        self.leaf_text_mut(path)?.insert_str(offset, text);
        self.selection = None;
        self.revision += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/document.rs"]
mod tests;
