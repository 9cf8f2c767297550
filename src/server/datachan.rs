//! The passive data channel: binding the ephemeral listener, the
//! first-accept-wins accept loop, and the MLSD background writer. See
//! spec.md §4.6.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Weak};

use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

use crate::pathio::PathIo;
use crate::server::chancomms::ControlChanMsg;
use crate::server::context::SharedSession;
use crate::server::error::FtpError;
use crate::server::mlsx;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::{PassiveState, Session};

/// Bind a new ephemeral listener on `bind_host` and spawn the background
/// accept loop that implements "first accept wins": once `accepted` holds a
/// stream, later connections are dropped instead of replacing it.
///
/// The accept loop only ever holds a [`Weak`] reference back to the session,
/// upgraded on each accept. Holding a strong `Arc` here would make the
/// session's own `passive` field — which owns this very task's `JoinHandle`
/// — keep itself alive forever, since the loop never exits on its own.
pub async fn bind_passive_listener(bind_host: std::net::IpAddr, session: SharedSession, logger: slog::Logger) -> io::Result<PassiveState> {
    let listener = Arc::new(TcpListener::bind((bind_host, 0)).await?);
    let local_addr = listener.local_addr()?;
    slog::info!(logger, "passive listener bound"; "addr" => %local_addr);

    let accept_listener = Arc::clone(&listener);
    let session_weak: Weak<Mutex<Session>> = Arc::downgrade(&session);
    let accept_logger = logger.clone();
    let accept_task = tokio::spawn(async move {
        loop {
            let (stream, peer) = match accept_listener.accept().await {
                Ok(pair) => pair,
                Err(err) => {
                    slog::warn!(accept_logger, "passive accept failed"; "error" => %err);
                    return;
                }
            };
            let Some(session) = session_weak.upgrade() else {
                // The session has already torn down; there's no one left to
                // hand this connection to.
                return;
            };
            let mut guard = session.lock().await;
            let Some(passive) = guard.passive.as_mut() else {
                return;
            };
            if passive.accepted.is_some() {
                slog::info!(accept_logger, "closing extra passive connection"; "peer" => %peer);
                drop(stream);
            } else {
                passive.accepted = Some(stream);
            }
        }
    });

    Ok(PassiveState {
        listener,
        local_addr,
        accepted: None,
        accept_task,
        logger,
    })
}

/// Encode a server address as the `(h1,h2,h3,h4,p1,p2)` PASV tuple, per
/// spec.md §6.
pub fn format_pasv_tuple(addr: SocketAddr) -> String {
    let port = addr.port();
    let p1 = (port >> 8) as u8;
    let p2 = (port & 0xff) as u8;
    match addr.ip() {
        std::net::IpAddr::V4(v4) => {
            let octets = v4.octets();
            format!("({},{},{},{},{},{})", octets[0], octets[1], octets[2], octets[3], p1, p2)
        }
        std::net::IpAddr::V6(_) => unreachable!("IPv6 is out of scope per spec.md §1"),
    }
}

/// Drains the target directory to the just-accepted data socket and posts
/// the final status back on the control channel. Must tolerate the control
/// connection disappearing mid-transfer without panicking (spec.md §5).
pub async fn run_mlsd_writer(
    mut stream: TcpStream,
    real_dir: PathBuf,
    path_io: Arc<dyn PathIo>,
    control_tx: tokio::sync::mpsc::Sender<ControlChanMsg>,
    logger: slog::Logger,
) {
    slog::info!(logger, "mlsd writer started"; "dir" => %real_dir.display());
    let result = write_listing(&mut stream, &real_dir, path_io.as_ref()).await;
    let _ = stream.shutdown().await;

    let reply = match result {
        Ok(()) => {
            slog::info!(logger, "mlsd writer finished");
            Reply::new(ReplyCode::CommandOkay, "mlsd data transer done")
        }
        Err(err) => {
            slog::warn!(logger, "mlsd writer aborted"; "error" => %err);
            err.into_reply()
        }
    };
    // The control task may already be gone (client disconnected mid-transfer);
    // that's not this task's problem to report.
    let _ = control_tx.send(ControlChanMsg::Reply(reply)).await;
}

async fn write_listing(stream: &mut TcpStream, real_dir: &std::path::Path, path_io: &dyn PathIo) -> Result<(), FtpError> {
    let children = path_io.list(real_dir).await?;
    for child in children {
        let stat = path_io.stat(&child).await?;
        let basename = child.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let fact = mlsx::format_fact(&basename, &stat)?;
        // RFC 3659 mandates CRLF; spec.md §9 open question #2 flags the LF-only
        // behavior in the source this core is modeled on as a bug to fix.
        stream.write_all(fact.as_bytes()).await?;
        stream.write_all(b"\r\n").await?;
    }
    Ok(())
}
