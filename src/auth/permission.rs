use std::path::{Path, PathBuf};

use crate::server::vpath;

/// A read/write grant rooted at a virtual path prefix.
#[derive(Debug, Clone)]
pub struct Permission {
    pub path: PathBuf,
    pub readable: bool,
    pub writable: bool,
}

impl Permission {
    pub fn new(path: impl AsRef<Path>, readable: bool, writable: bool) -> Self {
        Permission {
            path: vpath::normalize(path.as_ref()),
            readable,
            writable,
        }
    }

    /// `virtual_path` can be expressed relative to `self.path` without
    /// ascending — i.e. `self.path` is an ancestor of, or equal to,
    /// `virtual_path`.
    fn is_ancestor_of(&self, virtual_path: &Path) -> bool {
        virtual_path.strip_prefix(&self.path).is_ok()
    }

    /// Number of path components between this permission's prefix and
    /// `virtual_path`. Only meaningful when `is_ancestor_of` holds.
    fn depth_to(&self, virtual_path: &Path) -> usize {
        virtual_path.strip_prefix(&self.path).map(|rel| rel.components().count()).unwrap_or(usize::MAX)
    }
}

impl Default for Permission {
    /// The default grant: full access rooted at `/`, per spec.md §3.
    fn default() -> Self {
        Permission::new("/", true, true)
    }
}

/// Resolve the most specific permission covering `virtual_path`, per
/// spec.md §4.1: filter to ancestors-or-equal, then pick the one with the
/// fewest remaining components (deepest match); ties go to the first
/// occurrence in `permissions`.
pub fn resolve<'a>(permissions: &'a [Permission], virtual_path: &Path) -> &'a Permission {
    permissions
        .iter()
        .filter(|p| p.is_ancestor_of(virtual_path))
        .min_by_key(|p| p.depth_to(virtual_path))
        .unwrap_or(&DEFAULT_PERMISSION)
}

// `resolve` needs a `&'a Permission` that outlives the call when no entry
// matches; `PathBuf::new()` is never compared against (the fallback only
// ever serves its `readable`/`writable` bits), so a non-normalized empty
// path is fine here.
static DEFAULT_PERMISSION: Permission = Permission {
    path: PathBuf::new(),
    readable: true,
    writable: true,
};
