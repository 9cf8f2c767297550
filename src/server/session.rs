//! The per-connection record spec.md §3 describes. The original is a
//! dynamic string-keyed dictionary; here it is an ordinary struct with
//! `Option` fields standing in for "key absent", so gates (see
//! `dispatch::gate`) are plain field checks.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::auth::User;

/// The session's passive-mode state: the listener plus whatever has been
/// accepted on it, and the background task draining new accepts into it.
pub struct PassiveState {
    pub listener: Arc<TcpListener>,
    pub local_addr: SocketAddr,
    pub accepted: Option<tokio::net::TcpStream>,
    pub accept_task: JoinHandle<()>,
    pub logger: slog::Logger,
}

impl Drop for PassiveState {
    fn drop(&mut self) {
        // spec.md's open question #4: the listener must be explicitly
        // closed rather than left to implicit `Drop` timing. Aborting the
        // accept loop drops its clone of the listener immediately; this
        // `Drop` impl drops ours. Reachable now that the accept loop holds
        // only a `Weak` reference back to the session, so nothing keeps
        // this struct alive past its session's teardown.
        self.accept_task.abort();
        slog::info!(self.logger, "passive listener closed"; "addr" => %self.local_addr);
    }
}

pub struct Session {
    pub client_addr: SocketAddr,
    pub server_addr: SocketAddr,
    pub user: Option<Arc<User>>,
    pub logged: bool,
    pub current_directory: PathBuf,
    pub transfer_type: Option<String>,
    pub passive: Option<PassiveState>,
    /// Per-line read deadline; `None` means no timeout, per spec.md §3.
    pub read_timeout: Option<Duration>,
}

impl Session {
    pub fn new(client_addr: SocketAddr, server_addr: SocketAddr, read_timeout: Option<Duration>) -> Self {
        Session {
            client_addr,
            server_addr,
            user: None,
            logged: false,
            current_directory: PathBuf::from("/"),
            transfer_type: None,
            passive: None,
            read_timeout,
        }
    }
}
