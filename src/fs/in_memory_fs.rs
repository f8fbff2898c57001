//! In-Memory File System Implementation
//!
//! Arena-backed tree of nodes. Every node lives in one `Vec` and is addressed
//! by its `NodeId`; nodes are only ever appended, so ids stay valid for the
//! lifetime of the filesystem.

use tracing::debug;

use super::types::*;

/// In-memory virtual file tree.
#[derive(Debug, Clone)]
pub struct InMemoryFs {
    nodes: Vec<Node>,
}

impl InMemoryFs {
    /// Name of the root directory node.
    pub const ROOT_NAME: &'static str = "root";

    /// Create a filesystem holding only the root directory.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::directory(Self::ROOT_NAME)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    // ========================================================================
    // Path resolution
    // ========================================================================

    /// Resolve a slash-delimited path to a directory node.
    ///
    /// Empty segments are ignored. When a segment does not name a child
    /// directory the walk stops and the last directory reached is returned;
    /// resolution never fails.
    pub fn resolve(&self, path: &str) -> NodeId {
        let mut current = self.root();
        for part in split_path(path) {
            match self.find_directory(current, part) {
                Some(next) => current = next,
                None => {
                    debug!(path, missing = part, "path resolution stopped at ancestor");
                    return current;
                }
            }
        }
        current
    }

    /// The path of the directory `resolve` lands on.
    pub fn canonicalize(&self, path: &str) -> String {
        let mut current = self.root();
        let mut resolved: Vec<&str> = Vec::new();
        for part in split_path(path) {
            match self.find_directory(current, part) {
                Some(next) => {
                    current = next;
                    resolved.push(part);
                }
                None => break,
            }
        }
        format!("/{}", resolved.join("/"))
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Children of a directory in creation order. Empty for files.
    pub fn children(&self, dir: NodeId) -> Vec<DirentEntry> {
        self.node(dir)
            .children()
            .unwrap_or_default()
            .iter()
            .map(|&id| {
                let node = self.node(id);
                DirentEntry {
                    id,
                    name: node.name().to_string(),
                    kind: node.kind(),
                }
            })
            .collect()
    }

    /// Any child with the given name, file or directory.
    pub fn find_child(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.node(dir)
            .children()?
            .iter()
            .copied()
            .find(|&id| self.node(id).name() == name)
    }

    pub fn find_directory(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.find_child(dir, name)
            .filter(|&id| self.node(id).is_directory())
    }

    pub fn find_file(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.find_child(dir, name)
            .filter(|&id| self.node(id).is_file())
    }

    pub fn read_file(&self, file: NodeId) -> Result<&str, FsError> {
        let node = self.node(file);
        node.content().ok_or_else(|| FsError::IsDirectory {
            name: node.name().to_string(),
            operation: "read".to_string(),
        })
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append a new empty directory under `parent`.
    pub fn create_directory(&mut self, parent: NodeId, name: &str) -> Result<NodeId, FsError> {
        self.attach(parent, Node::directory(name), "mkdir")
    }

    /// Append a new empty file under `parent`.
    pub fn create_file(&mut self, parent: NodeId, name: &str) -> Result<NodeId, FsError> {
        self.attach(parent, Node::file(name), "touch")
    }

    /// Replace a file's content. Returns the new length in bytes.
    pub fn write_file(&mut self, file: NodeId, content: String) -> Result<usize, FsError> {
        let node = &mut self.nodes[file.0];
        if let NodeBody::File { content: existing } = &mut node.body {
            let written = content.len();
            *existing = content;
            return Ok(written);
        }
        Err(FsError::IsDirectory {
            name: node.name().to_string(),
            operation: "write".to_string(),
        })
    }

    fn attach(&mut self, parent: NodeId, node: Node, operation: &str) -> Result<NodeId, FsError> {
        let name = node.name();
        if name.is_empty() || name.contains('/') {
            return Err(FsError::InvalidName {
                name: name.to_string(),
                operation: operation.to_string(),
            });
        }
        if self.find_child(parent, name).is_some() {
            return Err(FsError::AlreadyExists {
                name: name.to_string(),
                operation: operation.to_string(),
            });
        }

        let id = NodeId(self.nodes.len());
        let parent_node = &mut self.nodes[parent.0];
        if !parent_node.is_directory() {
            return Err(FsError::NotDirectory {
                name: parent_node.name().to_string(),
                operation: operation.to_string(),
            });
        }
        if let NodeBody::Directory { children } = &mut parent_node.body {
            children.push(id);
        }
        self.nodes.push(node);
        Ok(id)
    }

    // ========================================================================
    // Seeding
    // ========================================================================

    /// Create every missing directory along `path` and return the last one.
    pub fn mkdir_all(&mut self, path: &str) -> Result<NodeId, FsError> {
        let mut current = self.root();
        for part in split_path(path) {
            current = match self.find_child(current, part) {
                Some(id) if self.node(id).is_directory() => id,
                Some(_) => {
                    return Err(FsError::NotDirectory {
                        name: part.to_string(),
                        operation: "mkdir".to_string(),
                    });
                }
                None => self.create_directory(current, part)?,
            };
        }
        Ok(current)
    }

    /// Create (or overwrite) a file at `path`, creating parents as needed.
    pub fn seed_file(&mut self, path: &str, content: &str) -> Result<NodeId, FsError> {
        let (parent_path, name) = match path.trim_end_matches('/').rsplit_once('/') {
            Some((parent, name)) => (parent, name),
            None => ("", path),
        };
        let parent = self.mkdir_all(parent_path)?;
        let file = match self.find_child(parent, name) {
            Some(id) => id,
            None => self.create_file(parent, name)?,
        };
        self.write_file(file, content.to_string())?;
        Ok(file)
    }

    // ========================================================================
    // Accounting
    // ========================================================================

    /// Total bytes of file content reachable from the root.
    pub fn storage_used(&self) -> usize {
        let mut total = 0;
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            match &self.node(id).body {
                NodeBody::File { content } => total += content.len(),
                NodeBody::Directory { children } => stack.extend(children.iter().rev()),
            }
        }
        total
    }
}

impl Default for InMemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-empty segments of a slash-delimited path.
pub fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|p| !p.is_empty())
}
