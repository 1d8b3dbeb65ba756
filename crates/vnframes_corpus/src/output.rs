//! Output files and their names.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;
use vnframes_engine::FrameFormat;
use vnframes_foundation::{Error, Result};

/// Suffix added to every file name in verbs-only mode.
pub const VERBS_ONLY_SUFFIX: &str = "-vo";

/// Writes items as one comma-separated line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub fn save_list<P, I, S>(path: P, items: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let line = items
        .into_iter()
        .map(|item| item.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",");
    fs::write(path, line).map_err(|e| Error::io(path.display().to_string(), e))?;
    debug!(path = %path.display(), "saved list");
    Ok(())
}

/// Reads a comma-separated list written by [`save_list`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path.display().to_string(), e))?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    Ok(text.split(',').map(str::to_string).collect())
}

/// Writes a value as JSON.
///
/// # Errors
///
/// Returns a JSON error if serialization fails, or an I/O error.
pub fn save_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string(value).map_err(Error::json)?;
    fs::write(path, json).map_err(|e| Error::io(path.display().to_string(), e))?;
    debug!(path = %path.display(), "saved json");
    Ok(())
}

/// File names of a run's outputs inside one directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLayout {
    dir: PathBuf,
    suffix: &'static str,
}

impl OutputLayout {
    /// Creates a layout in `dir`, with the verbs-only suffix if requested.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, verbs_only: bool) -> Self {
        Self {
            dir: dir.into(),
            suffix: if verbs_only { VERBS_ONLY_SUFFIX } else { "" },
        }
    }

    /// Returns the output directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file(&self, stem: &str, extension: &str) -> PathBuf {
        self.dir.join(format!("{stem}{}.{extension}", self.suffix))
    }

    /// `vn-<fmt><suffix>.csv`
    #[must_use]
    pub fn matrix(&self, format: FrameFormat) -> PathBuf {
        self.file(&format!("vn-{format}"), "csv")
    }

    /// `vn-<fmt><suffix>-short.csv`
    #[must_use]
    pub fn short_matrix(&self, format: FrameFormat) -> PathBuf {
        self.dir.join(format!("vn-{format}{}-short.csv", self.suffix))
    }

    /// `<fmt><suffix>-columns.txt`
    #[must_use]
    pub fn columns(&self, format: FrameFormat) -> PathBuf {
        self.dir.join(format!("{format}{}-columns.txt", self.suffix))
    }

    /// `nontopics<suffix>.txt`
    #[must_use]
    pub fn nontopics(&self) -> PathBuf {
        self.file("nontopics", "txt")
    }

    /// `members<suffix>.txt`
    #[must_use]
    pub fn members(&self) -> PathBuf {
        self.file("members", "txt")
    }

    /// `members-short<suffix>.txt`
    #[must_use]
    pub fn short_members(&self) -> PathBuf {
        self.file("members-short", "txt")
    }

    /// `vnwn<suffix>.json`
    #[must_use]
    pub fn wordnet_map(&self) -> PathBuf {
        self.file("vnwn", "json")
    }

    /// `gt<suffix>.txt`
    #[must_use]
    pub fn toplevel_labels(&self) -> PathBuf {
        self.file("gt", "txt")
    }

    /// `gtsub<suffix>.txt`
    #[must_use]
    pub fn subclass_labels(&self) -> PathBuf {
        self.file("gtsub", "txt")
    }

    /// `gt-top<suffix>.txt`
    #[must_use]
    pub fn integer_labels(&self) -> PathBuf {
        self.file("gt-top", "txt")
    }

    /// `gt-short<suffix>.txt`
    #[must_use]
    pub fn short_toplevel_labels(&self) -> PathBuf {
        self.file("gt-short", "txt")
    }

    /// `gt-top-short<suffix>.txt`
    #[must_use]
    pub fn short_integer_labels(&self) -> PathBuf {
        self.file("gt-top-short", "txt")
    }

    /// `frames.csv`
    #[must_use]
    pub fn variants(&self) -> PathBuf {
        self.dir.join("frames.csv")
    }
}
