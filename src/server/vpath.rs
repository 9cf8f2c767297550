//! Virtual-path normalization.
//!
//! spec.md's open question #3 flags that the original path resolver never
//! collapses `.`/`..` components before handing the path to permission
//! resolution, which lets a crafted relative path escape a readable
//! subtree. This core canonicalizes lexically (no filesystem access, no
//! symlink resolution — there is nothing to resolve against, since this is
//! a client-visible virtual path) before it is ever compared against a
//! `Permission` prefix or stored as `current_directory`.

use std::path::{Component, Path, PathBuf};

/// Collapse `.` and `..` components against the root, lexically. `..` at the
/// root is absorbed rather than erroring — an FTP client cannot walk above
/// its virtual root, it can only fail to go further up.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<std::ffi::OsString> = Vec::new();
    for component in path.components() {
        match component {
            Component::RootDir | Component::Prefix(_) => {}
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part.to_os_string()),
        }
    }
    let mut result = PathBuf::from("/");
    for part in out {
        result.push(part);
    }
    result
}

/// Join `current_directory` with a (possibly relative) command argument and
/// normalize the result. Mirrors spec.md §4.2's `get_paths`: an absolute
/// argument replaces the current directory outright, a relative one is
/// joined lexically.
pub fn resolve_virtual(current_directory: &Path, arg: &str) -> PathBuf {
    let joined = if Path::new(arg).is_absolute() {
        PathBuf::from(arg)
    } else {
        current_directory.join(arg)
    };
    normalize(&joined)
}
