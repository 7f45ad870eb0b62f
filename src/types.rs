use crate::tree::TreeNode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A discovered file that will be embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Absolute path of the file at generation time.
    pub path: PathBuf,
    /// Forward-slash separated logical name used for lookups.
    pub name: String,
    /// Identifier of the generated submodule holding this asset.
    pub func: String,
}

/// What a run would embed, without generating any code.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    /// Assets in discovery order.
    pub assets: Vec<Asset>,
    /// The directory index, children sorted by segment name.
    pub tree: TreeNode,
}
