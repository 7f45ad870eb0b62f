//! Hierarchical index of assets keyed by path segment.
//!
//! [`AssetTree`] answers directory-listing queries on the compiler side and
//! is flattened into a [`TreeNode`] value before anything is written out, so
//! the emitted Rust literal and the JSON manifest share one traversal.

use crate::error::SynthesisError;
use crate::types::Asset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node of the asset index. A node without an asset is a directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AssetTree {
    pub asset: Option<Asset>,
    pub children: BTreeMap<String, AssetTree>,
}

impl AssetTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from a flat asset list.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::NameCollision`] when a name is used both as
    /// a file and as a directory, or twice as a file.
    pub fn build(assets: &[Asset]) -> Result<Self, SynthesisError> {
        let mut root = Self::new();
        for asset in assets {
            root.insert(asset)?;
        }
        Ok(root)
    }

    fn insert(&mut self, asset: &Asset) -> Result<(), SynthesisError> {
        let mut node = self;
        for segment in asset.name.split('/') {
            if let Some(file) = &node.asset {
                return Err(collision(&asset.name, file, asset));
            }
            node = node.children.entry(segment.to_string()).or_default();
        }
        if let Some(existing) = &node.asset {
            return Err(collision(&asset.name, existing, asset));
        }
        if let Some(nested) = first_leaf(node) {
            return Err(collision(&asset.name, nested, asset));
        }
        node.asset = Some(asset.clone());
        Ok(())
    }

    pub fn is_dir(&self) -> bool {
        self.asset.is_none()
    }

    /// Lists the child segment names of the directory at `path`.
    ///
    /// An empty path lists the top level. Paths naming a file, or any
    /// missing segment, report [`SynthesisError::NotFound`].
    pub fn list_children(&self, path: &str) -> Result<Vec<&str>, SynthesisError> {
        let mut node = self;
        if !path.is_empty() {
            let canonical = path.replace('\\', "/");
            for segment in canonical.split('/') {
                node = node
                    .children
                    .get(segment)
                    .ok_or_else(|| SynthesisError::NotFound(path.to_string()))?;
            }
        }
        if !node.is_dir() {
            return Err(SynthesisError::NotFound(path.to_string()));
        }
        Ok(node.children.keys().map(String::as_str).collect())
    }

    /// Converts the index into a syntax-independent value, children first.
    pub fn to_node(&self) -> TreeNode {
        let children = self
            .children
            .iter()
            .map(|(segment, child)| (segment.clone(), child.to_node()))
            .collect();
        TreeNode {
            func: self.asset.as_ref().map(|a| a.func.clone()),
            children,
        }
    }
}

fn first_leaf(node: &AssetTree) -> Option<&Asset> {
    node.children
        .values()
        .find_map(|child| child.asset.as_ref().or_else(|| first_leaf(child)))
}

fn collision(name: &str, first: &Asset, second: &Asset) -> SynthesisError {
    SynthesisError::NameCollision {
        name: name.to_string(),
        first: first.path.clone(),
        second: second.path.clone(),
    }
}

/// Serializable form of an [`AssetTree`] node.
///
/// `func` names the generated loader for files and is `None` for
/// directories. `children` are sorted by segment name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub func: Option<String>,
    pub children: Vec<(String, TreeNode)>,
}

impl TreeNode {
    /// Writes the node as a Rust `AssetNode` constructor expression.
    pub(crate) fn write_literal(&self, out: &mut String, depth: usize) {
        match &self.func {
            Some(func) => {
                out.push_str("AssetNode { load: Some(");
                out.push_str(func);
                out.push_str("::load as Loader), children: &[] }");
            }
            None if self.children.is_empty() => {
                out.push_str("AssetNode { load: None, children: &[] }");
            }
            None => {
                out.push_str("AssetNode { load: None, children: &[\n");
                for (segment, child) in &self.children {
                    indent(out, depth + 1);
                    out.push('(');
                    out.push_str(&format!("{segment:?}"));
                    out.push_str(", ");
                    child.write_literal(out, depth + 1);
                    out.push_str("),\n");
                }
                indent(out, depth);
                out.push_str("] }");
            }
        }
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("    ");
    }
}
