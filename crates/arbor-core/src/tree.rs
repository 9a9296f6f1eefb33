//! Folder tree reconstruction from flat, path-only folder listings

use crate::model::{FileRecord, FolderRecord};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Separator used by the remote service inside `full_path`.
pub const PATH_SEPARATOR: char = '/';

/// A reconstructed folder hierarchy: one per course, or the synthetic
/// root node that aggregates several course trees.
///
/// A node owns its children exclusively; the tree is acyclic by
/// construction since it is only ever grown top-down from path
/// segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderTree {
    pub id: u64,
    pub name: String,
    pub folders: Vec<FolderTree>,
    pub files: Vec<FileRecord>,
}

impl FolderTree {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        FolderTree {
            id,
            name: name.into(),
            folders: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Insert a single folder record by walking its `full_path` down
    /// from this node.
    ///
    /// Every segment before the last must already exist as a child
    /// node; a record whose ancestor chain is incomplete is an orphan
    /// and is dropped. Returns false when that happens.
    pub fn insert(&mut self, record: &FolderRecord) -> bool {
        let segments: Vec<&str> =
            record.full_path.split(PATH_SEPARATOR).collect();
        let Some((_, ancestors)) = segments.split_last() else {
            return false;
        };

        let mut node = self;
        for segment in ancestors {
            match node.folders.iter_mut().find(|f| f.name == *segment) {
                Some(child) => node = child,
                None => {
                    tracing::debug!(
                        path = %record.full_path,
                        missing = %segment,
                        "dropping orphaned folder record"
                    );
                    return false;
                }
            }
        }
        node.folders.push(FolderTree::new(record.id, &record.name));
        true
    }

    /// Insert an unordered collection of folder records.
    ///
    /// Records are sorted by path depth first (then by path, to keep
    /// sibling order deterministic) so that every ancestor is inserted
    /// before any of its descendants. Depth ordering is used instead of
    /// a plain lexicographic sort because `/` does not compare below
    /// every byte that can appear in a folder name.
    pub fn insert_all(&mut self, mut records: Vec<FolderRecord>) {
        records.sort_by(|a, b| {
            let depth_a = a.full_path.split(PATH_SEPARATOR).count();
            let depth_b = b.full_path.split(PATH_SEPARATOR).count();
            depth_a
                .cmp(&depth_b)
                .then_with(|| a.full_path.cmp(&b.full_path))
        });
        for record in &records {
            self.insert(record);
        }
    }

    /// Distribute file records onto their owning folder nodes by
    /// `folder_id`. Files that reference a folder not present in the
    /// tree are dropped, mirroring the orphan policy of [`insert`].
    ///
    /// [`insert`]: FolderTree::insert
    pub fn attach_files(&mut self, files: Vec<FileRecord>) {
        let mut by_folder: HashMap<u64, Vec<FileRecord>> = HashMap::new();
        for file in files {
            by_folder.entry(file.folder_id).or_default().push(file);
        }
        self.take_files(&mut by_folder);
        for file in by_folder.values().flatten() {
            tracing::debug!(
                file = %file.filename,
                folder_id = file.folder_id,
                "dropping file with no matching folder"
            );
        }
    }

    fn take_files(&mut self, by_folder: &mut HashMap<u64, Vec<FileRecord>>) {
        if let Some(files) = by_folder.remove(&self.id) {
            self.files = files;
        }
        for child in &mut self.folders {
            child.take_files(by_folder);
        }
    }

    /// Canonical textual encoding of the tree shape:
    /// `{(id,name):<child1><child2>...}`, recursively.
    ///
    /// A pure function of the tree — two trees are structurally equal
    /// iff their canonical strings are equal.
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        self.canonical_into(&mut out);
        out
    }

    fn canonical_into(&self, out: &mut String) {
        out.push_str(&format!("{{({},{}):", self.id, self.name));
        for child in &self.folders {
            child.canonical_into(out);
        }
        out.push('}');
    }

    /// Total number of folder nodes, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.folders.iter().map(FolderTree::node_count).sum::<usize>()
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        let indent = "  ".repeat(level);
        writeln!(f, "{indent}({}) {}", self.id, self.name)?;
        for file in &self.files {
            writeln!(f, "{indent}  {}", file.filename)?;
        }
        for child in &self.folders {
            child.render(f, level + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for FolderTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}
