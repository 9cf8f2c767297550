//! Server configuration, grounded on `libunftp`'s `ServerBuilder` in
//! `server/ftpserver.rs`: a builder that assembles the immutable,
//! shared-across-sessions part of the server.

use std::net::ToSocketAddrs;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::auth::User;
use crate::pathio::{LocalPathIo, PathIo};
use crate::server::dispatch;
use crate::server::ServerShared;

const DEFAULT_GREETING: &str = "Welcome";

/// Errors that can occur while assembling a [`Server`].
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("a user list must configure at most one anonymous user")]
    MultipleAnonymousUsers,
    #[error("a user list must not be empty")]
    NoUsers,
}

pub struct ServerBuilder {
    greeting: String,
    users: Vec<User>,
    path_io: Arc<dyn PathIo>,
    logger: slog::Logger,
    read_timeout: Option<Duration>,
}

impl ServerBuilder {
    pub fn new(users: Vec<User>) -> Self {
        ServerBuilder {
            greeting: DEFAULT_GREETING.to_string(),
            users,
            path_io: Arc::new(LocalPathIo::new()),
            logger: slog::Logger::root(slog::Discard, slog::o!()),
            read_timeout: None,
        }
    }

    pub fn greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn path_io(mut self, path_io: Arc<dyn PathIo>) -> Self {
        self.path_io = path_io;
        self
    }

    pub fn logger(mut self, logger: slog::Logger) -> Self {
        self.logger = logger;
        self
    }

    /// The per-line read deadline (spec.md §3/§5). Unset by default, matching
    /// `aioftp`'s `timeout=None`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<Server, BuildError> {
        if self.users.is_empty() {
            return Err(BuildError::NoUsers);
        }
        // spec.md §3: "at most one anonymous user is selected per session" —
        // enforced here at configuration time rather than left as a runtime
        // race between handlers.
        if self.users.iter().filter(|u| u.login.is_none()).count() > 1 {
            return Err(BuildError::MultipleAnonymousUsers);
        }

        Ok(Server {
            shared: Arc::new(ServerShared {
                greeting: self.greeting,
                users: Arc::new(self.users),
                path_io: self.path_io,
                logger: self.logger,
                read_timeout: self.read_timeout,
                registry: DashMap::new(),
            }),
        })
    }
}

pub struct Server {
    shared: Arc<ServerShared>,
}

impl Server {
    /// Bind `addr` and accept connections until the process is torn down.
    /// Each accepted connection gets its own dispatcher task
    /// (spec.md §5's scheduling model).
    pub async fn listen(self, addr: impl ToSocketAddrs) -> std::io::Result<()> {
        let addr = addr.to_socket_addrs()?.next().ok_or_else(|| std::io::Error::other("no address to bind"))?;
        let listener = TcpListener::bind(addr).await?;
        slog::info!(self.shared.logger, "listening"; "addr" => %addr);

        loop {
            let (stream, client_addr) = listener.accept().await?;
            let server_addr = stream.local_addr()?;
            let shared = self.shared.clone();
            tokio::spawn(dispatch::run_session(stream, client_addr, server_addr, shared));
        }
    }
}
