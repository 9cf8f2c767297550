//! The abstract path-I/O capability spec.md declares out of scope as an
//! external collaborator: `exists`, `is_file`, `is_dir`, `stat`, `list`,
//! `mkdir`, `rmdir`. Grounded on `libunftp`'s `StorageBackend` trait, but
//! narrowed to spec.md §6's seven operations and made object-safe so the
//! server can hold it as `Arc<dyn PathIo>`.

mod local;
mod stat;

pub use local::LocalPathIo;
pub use stat::Stat;

use std::io;
use std::path::Path;
use std::path::PathBuf;

use async_trait::async_trait;

/// Suspension-capable filesystem operations over real (already-resolved)
/// paths. Implementations never see virtual paths or permissions — those
/// are resolved by the caller before `PathIo` is invoked.
#[async_trait]
pub trait PathIo: Send + Sync + std::fmt::Debug {
    async fn exists(&self, path: &Path) -> bool;
    async fn is_file(&self, path: &Path) -> bool;
    async fn is_dir(&self, path: &Path) -> bool;
    async fn stat(&self, path: &Path) -> io::Result<Stat>;
    /// Full real paths of the directory's immediate children.
    async fn list(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
    async fn mkdir(&self, path: &Path, parents: bool) -> io::Result<()>;
    async fn rmdir(&self, path: &Path) -> io::Result<()>;
}
