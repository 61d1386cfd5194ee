//! In-memory output tree and its materialization on disk.
//!
//! The whole project is assembled as an arena of nodes keyed by relative path
//! before anything touches the filesystem. That makes a dry run free and lets
//! path collisions surface before the first write.

use crate::error::{AmurError, Result};
use crate::fs::{atomic_write, ensure_dir};
use indexmap::IndexMap;
use std::path::Path;

/// Key of the root directory node.
const ROOT: &str = "";

/// A node of the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputNode {
    /// Child names, in creation order.
    Directory { children: Vec<String> },
    File { content: Vec<u8> },
}

/// Arena of output nodes keyed by `/`-separated relative path.
///
/// Iteration follows creation order, so a parent directory always comes
/// before anything inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTree {
    nodes: IndexMap<String, OutputNode>,
}

impl Default for OutputTree {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputTree {
    pub fn new() -> Self {
        let mut nodes = IndexMap::new();
        nodes.insert(
            ROOT.to_string(),
            OutputNode::Directory {
                children: Vec::new(),
            },
        );
        Self { nodes }
    }

    /// Add a file, creating missing ancestor directories.
    ///
    /// # Errors
    ///
    /// `AmurError::PathCollision` if `path` or one of its ancestors is already
    /// taken by a node of the other kind, or if the file already exists.
    pub fn insert_file(&mut self, path: &str, content: Vec<u8>) -> Result<()> {
        if self.nodes.contains_key(path) {
            return Err(AmurError::PathCollision(path.to_string()));
        }

        let mut parent = ROOT.to_string();
        let mut components = path.split('/').peekable();
        while let Some(name) = components.next() {
            let key = if parent.is_empty() {
                name.to_string()
            } else {
                format!("{}/{}", parent, name)
            };

            if components.peek().is_none() {
                self.attach(&parent, name);
                self.nodes.insert(key, OutputNode::File { content });
                return Ok(());
            }

            match self.nodes.get(&key) {
                Some(OutputNode::Directory { .. }) => {}
                Some(OutputNode::File { .. }) => return Err(AmurError::PathCollision(key)),
                None => {
                    self.attach(&parent, name);
                    self.nodes.insert(
                        key.clone(),
                        OutputNode::Directory {
                            children: Vec::new(),
                        },
                    );
                }
            }
            parent = key;
        }

        Ok(())
    }

    fn attach(&mut self, parent: &str, name: &str) {
        if let Some(OutputNode::Directory { children }) = self.nodes.get_mut(parent) {
            children.push(name.to_string());
        }
    }

    pub fn get(&self, path: &str) -> Option<&OutputNode> {
        self.nodes.get(path)
    }

    /// File contents by path, if `path` is a file.
    pub fn file(&self, path: &str) -> Option<&[u8]> {
        match self.nodes.get(path) {
            Some(OutputNode::File { content }) => Some(content.as_slice()),
            _ => None,
        }
    }

    /// Files in creation order.
    pub fn files(&self) -> impl Iterator<Item = (&str, &[u8])> + '_ {
        self.nodes.iter().filter_map(|(path, node)| match node {
            OutputNode::File { content } => Some((path.as_str(), content.as_slice())),
            OutputNode::Directory { .. } => None,
        })
    }

    /// Directories below the root, in creation order.
    pub fn dirs(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes
            .iter()
            .filter(|(path, node)| {
                !path.is_empty() && matches!(node, OutputNode::Directory { .. })
            })
            .map(|(path, _)| path.as_str())
    }

    /// Child names of the directory at `path` (`""` is the root).
    pub fn children(&self, path: &str) -> Option<&[String]> {
        match self.nodes.get(path) {
            Some(OutputNode::Directory { children }) => Some(children.as_slice()),
            _ => None,
        }
    }
}

/// Write `tree` under `output_root`.
///
/// Directories are created first, in creation order, then every file is
/// written atomically. Directories created before a failure are left in
/// place; removing a partial output root is the caller's job.
pub fn materialize(tree: &OutputTree, output_root: &Path) -> Result<()> {
    std::fs::create_dir_all(output_root)
        .map_err(|e| AmurError::materialization(output_root, e))?;

    for dir in tree.dirs() {
        ensure_dir(output_root.join(dir))?;
    }

    for (path, content) in tree.files() {
        let target = output_root.join(path);
        atomic_write(&target, content)?;
        tracing::debug!(path = %target.display(), bytes = content.len(), "wrote file");
    }

    Ok(())
}
