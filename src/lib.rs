//! An FTP server core implementing the RFC 959 control-connection
//! protocol with the RFC 3659 MLSD/MLST listing extensions: session
//! dispatcher, passive data channel and virtual-path permission layer.
//!
//! The concrete filesystem backend, TLS, active mode and payload transfer
//! (`STOR`/`RETR`/...) are out of scope — see spec.md §1.

pub mod auth;
pub mod pathio;
pub mod server;

pub use auth::{Permission, User};
pub use pathio::{LocalPathIo, PathIo};
pub use server::{Server, ServerBuilder};
