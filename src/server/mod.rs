//! The FTP server core: session dispatcher, passive data channel and the
//! virtual-path permission layer. See spec.md for the governing
//! specification and `DESIGN.md` for how each piece is grounded.

pub mod chancomms;
pub mod codec;
pub mod command;
pub mod config;
pub mod context;
pub mod datachan;
pub mod dispatch;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod line_parser;
pub mod mlsx;
pub mod reply;
pub mod session;
pub mod vpath;

use std::net::SocketAddr;
use std::sync::Arc;

use dashmap::DashMap;

use crate::auth::User;
use crate::pathio::PathIo;
use context::SharedSession;

/// State shared by every session on a running server: the things that don't
/// change per-connection. Grounded on `libunftp`'s `Server`/`switchboard.rs`
/// split between static configuration and the live connection registry.
pub struct ServerShared {
    pub greeting: String,
    pub users: Arc<Vec<User>>,
    pub path_io: Arc<dyn PathIo>,
    pub logger: slog::Logger,
    /// Per-line read deadline applied to every session; `None` means no
    /// timeout (spec.md §3).
    pub read_timeout: Option<std::time::Duration>,
    /// Keyed by the client's socket address; a session's entry exists
    /// exactly while its dispatcher task is running (spec.md §8 invariant 4).
    pub registry: DashMap<SocketAddr, SharedSession>,
}

pub use config::{BuildError, Server, ServerBuilder};
