use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::{PathIo, Stat};

/// The one concrete `PathIo`: plain `tokio::fs` over the real filesystem, no
/// capability sandboxing. Path-I/O is an external collaborator per
/// spec.md §1 — this exists to exercise the contract, not to be a
/// production-hardened backend (see DESIGN.md).
#[derive(Debug, Clone)]
pub struct LocalPathIo;

impl LocalPathIo {
    pub fn new() -> Self {
        LocalPathIo
    }
}

impl Default for LocalPathIo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PathIo for LocalPathIo {
    async fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok()
    }

    async fn is_file(&self, path: &Path) -> bool {
        fs::metadata(path).await.map(|m| m.is_file()).unwrap_or(false)
    }

    async fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path).await.map(|m| m.is_dir()).unwrap_or(false)
    }

    async fn stat(&self, path: &Path) -> io::Result<Stat> {
        let meta = fs::metadata(path).await?;
        Ok(Stat {
            size: meta.len(),
            modified: meta.modified().unwrap_or(std::time::SystemTime::UNIX_EPOCH),
            created: meta.created().unwrap_or(std::time::SystemTime::UNIX_EPOCH),
            is_file: meta.is_file(),
            is_dir: meta.is_dir(),
        })
    }

    async fn list(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(path).await?;
        let mut out = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            out.push(entry.path());
        }
        Ok(out)
    }

    async fn mkdir(&self, path: &Path, parents: bool) -> io::Result<()> {
        if parents {
            fs::create_dir_all(path).await
        } else {
            fs::create_dir(path).await
        }
    }

    async fn rmdir(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir(path).await
    }
}
