//! Building the preposition class reference from local sources.

use std::fs;
use std::path::Path;

use tracing::info;
use vnframes_corpus::load_list;
use vnframes_foundation::{Error, PrepositionClassHierarchy, Result};

/// Builds a reference from an `isa(literal,class)` listing and a column
/// list of an expanded format, merging whichever are given.
///
/// # Errors
///
/// Returns an I/O error if a given source cannot be read.
pub fn build_reference(
    isa_listing: Option<&Path>,
    expanded_columns: Option<&Path>,
) -> Result<PrepositionClassHierarchy> {
    let mut hierarchy = PrepositionClassHierarchy::new();

    if let Some(path) = isa_listing {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path.display().to_string(), e))?;
        hierarchy = hierarchy.merge(&PrepositionClassHierarchy::from_isa_text(&text));
    }
    if let Some(path) = expanded_columns {
        let columns = load_list(path)?;
        hierarchy = hierarchy.merge(&PrepositionClassHierarchy::harvest_from_columns(&columns));
    }

    info!(classes = hierarchy.len(), "built preposition class reference");
    Ok(hierarchy)
}

/// Writes a reference as JSON.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_reference<P: AsRef<Path>>(hierarchy: &PrepositionClassHierarchy, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent.display().to_string(), e))?;
    }
    let json = hierarchy.to_json_string()?;
    fs::write(path, json).map_err(|e| Error::io(path.display().to_string(), e))?;
    info!(path = %path.display(), "saved preposition class reference");
    Ok(())
}
