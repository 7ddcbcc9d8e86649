use std::path::{Path, PathBuf};

use crate::error::{Result, SceneError};

/**
 * This module contains all logic for loading images from disk and turning them
 * into GPU resources, plus the interface to the primitive mesh provider.
 */
pub mod mesh;
pub mod texture;

/// Resolves an asset path against `root`. Absolute paths are returned as-is.
pub fn resolve_asset(root: &Path, file_name: impl AsRef<Path>) -> PathBuf {
    let file_name = file_name.as_ref();
    if file_name.is_absolute() {
        file_name.to_path_buf()
    } else {
        root.join(file_name)
    }
}

pub fn load_binary(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| SceneError::Io {
        path: path.to_path_buf(),
        source,
    })
}
