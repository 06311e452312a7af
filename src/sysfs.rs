//! Read-only sysfs probe with an injectable root.
//!
//! All filesystem access performed by bus discovery and optional-driver
//! detection goes through [`Sysfs`]. The root defaults to `/sys`; tests
//! point it at a staged temporary tree instead. Every operation is an
//! existence or enumeration check -- nothing under the root is ever
//! modified, so repeated probes against an unchanged tree return identical
//! results.

use std::fs;
use std::path::{Path, PathBuf};

/// Handle to a sysfs-shaped tree.
#[derive(Debug, Clone)]
pub struct Sysfs {
    root: PathBuf,
}

impl Sysfs {
    /// Probe the live kernel tree at `/sys`.
    pub fn system() -> Self {
        Sysfs {
            root: PathBuf::from("/sys"),
        }
    }

    /// Probe a tree rooted elsewhere (staged fixtures, chroots).
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Sysfs { root: root.into() }
    }

    /// The configured root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join a root-relative fragment onto the configured root.
    ///
    /// Leading slashes in `fragment` are stripped so absolute-looking
    /// sysfs paths from board tables ("/bus/platform/...") stay inside the
    /// injected root.
    pub fn path(&self, fragment: &str) -> PathBuf {
        self.root.join(fragment.trim_start_matches('/'))
    }

    /// Existence check for a root-relative path.
    pub fn exists(&self, fragment: &str) -> bool {
        self.path(fragment).exists()
    }

    /// Directory entry names under a root-relative path, sorted.
    ///
    /// Returns an empty list when the directory is absent or unreadable --
    /// discovery treats both the same way (nothing found).
    pub fn entries(&self, fragment: &str) -> Vec<String> {
        let Ok(read) = fs::read_dir(self.path(fragment)) else {
            return Vec::new();
        };
        let mut names: Vec<String> = read
            .filter_map(|e| e.ok())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }
}

impl Default for Sysfs {
    fn default() -> Self {
        Self::system()
    }
}
