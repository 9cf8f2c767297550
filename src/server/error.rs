//! Error types for the control channel and its command handlers.
//!
//! Mirrors the split found in `libunftp`: a low-level [`ControlChanError`]
//! for things that go wrong driving the socket itself (I/O, line parsing),
//! and a handler-level [`FtpError`] for the domain outcomes a command can
//! produce. The dispatcher never lets an `FtpError` escape a handler call —
//! it is always turned into a reply.

use std::io;

use derive_more::Display;
use thiserror::Error;

use crate::server::line_parser::ParseError;

/// Boxed source error, analogous to `libunftp`'s `BoxError` alias.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error on the control channel itself: a failed read, a malformed line,
/// or an I/O failure writing a reply.
#[derive(Debug, Error)]
#[error("control channel error: {kind}")]
pub struct ControlChanError {
    kind: ControlChanErrorKind,
    #[source]
    source: Option<BoxError>,
}

impl ControlChanError {
    pub fn new(kind: ControlChanErrorKind) -> Self {
        ControlChanError { kind, source: None }
    }

    pub fn kind(&self) -> &ControlChanErrorKind {
        &self.kind
    }
}

/// The kind of [`ControlChanError`] that occurred.
#[derive(Eq, PartialEq, Debug, Display)]
pub enum ControlChanErrorKind {
    #[display("IO error")]
    IoError,
    #[display("parse error")]
    ParseError,
    #[display("the client closed the connection")]
    ConnectionClosed,
    #[display("read timed out")]
    Timeout,
}

impl From<io::Error> for ControlChanError {
    fn from(err: io::Error) -> Self {
        ControlChanError {
            kind: ControlChanErrorKind::IoError,
            source: Some(Box::new(err)),
        }
    }
}

impl From<ParseError> for ControlChanError {
    fn from(err: ParseError) -> Self {
        ControlChanError {
            kind: ControlChanErrorKind::ParseError,
            source: Some(Box::new(err)),
        }
    }
}

/// The outcome of running a command handler, mapped 1:1 onto spec.md's
/// "Error Handling Design" table. Every variant corresponds to a specific
/// reply; the dispatcher never has to guess what to tell the client.
#[derive(Debug, Error)]
pub enum FtpError {
    #[error("bad sequence of commands ({0})")]
    BadSequence(&'static str),

    #[error("unknown user")]
    UnknownUser,

    #[error("wrong password")]
    WrongPassword,

    #[error("path does not exists")]
    NotFound,

    #[error("path is not a directory")]
    NotADirectory,

    #[error("path already exists")]
    AlreadyExists,

    #[error("permission denied")]
    PermissionDenied,

    #[error("os error: {0}")]
    Os(String),

    #[error("path is neither file nor directory")]
    UnknownPathType,

    #[error("'{0}' not implemented")]
    NotImplemented(String),
}

impl From<io::Error> for FtpError {
    fn from(err: io::Error) -> Self {
        FtpError::Os(err.to_string())
    }
}

impl FtpError {
    /// Render the reply text this error produces, per spec.md §4.5/§7. Kept
    /// separate from `Display` so the wire text is pinned independently of
    /// whatever reads nicest in a log line.
    pub fn into_reply(self) -> crate::server::reply::Reply {
        use crate::server::reply::{Reply, ReplyCode};
        match self {
            FtpError::BadSequence(msg) => Reply::new(ReplyCode::BadSequenceOfCommands, format!("bad sequence of commands ({msg})")),
            FtpError::UnknownUser => Reply::new(ReplyCode::NotLoggedIn, "no such username"),
            FtpError::WrongPassword => Reply::new(ReplyCode::NotLoggedIn, "wrong password"),
            FtpError::NotFound => Reply::new(ReplyCode::FileActionNotTaken, "path does not exists"),
            FtpError::NotADirectory => Reply::new(ReplyCode::FileActionNotTaken, "path is not a directory"),
            FtpError::AlreadyExists => Reply::new(ReplyCode::FileActionNotTaken, "path already exists"),
            FtpError::PermissionDenied => Reply::new(ReplyCode::FileActionNotTaken, "permission denied"),
            FtpError::Os(msg) => Reply::new(ReplyCode::FileActionNotTaken, format!("os error: {msg}")),
            FtpError::UnknownPathType => Reply::new(ReplyCode::FileActionNotTaken, "os error: path is neither file nor directory"),
            FtpError::NotImplemented(message) => Reply::new(ReplyCode::CommandNotImplemented, message),
        }
    }
}
