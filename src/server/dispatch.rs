//! The per-connection command loop, per spec.md §4.4: read a command, apply
//! its gate inside the handler, write the reply, repeat until `QUIT` or the
//! client disconnects. Grounded on `libunftp`'s `control_loop.rs`, whose
//! `tokio::select!` between the next command and background-task messages
//! this core reuses verbatim in shape.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, Mutex};
use tokio_util::codec::Framed;

use crate::server::chancomms::ControlChanMsg;
use crate::server::codec::FtpCodec;
use crate::server::command::Command;
use crate::server::context::CommandContext;
use crate::server::error::{ControlChanError, ControlChanErrorKind};
use crate::server::handlers;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use crate::server::ServerShared;

/// Drive one accepted control connection until it ends. Always removes the
/// session from `shared.registry` on the way out, whatever the reason for
/// exiting (spec.md §4.4 step 3, §8 invariant 4).
pub async fn run_session(stream: TcpStream, client_addr: SocketAddr, server_addr: SocketAddr, shared: Arc<ServerShared>) {
    let logger = shared.logger.new(slog::o!("peer" => client_addr.to_string()));
    slog::info!(logger, "connection accepted");

    let read_timeout = shared.read_timeout;
    let session = Arc::new(Mutex::new(Session::new(client_addr, server_addr, read_timeout)));
    shared.registry.insert(client_addr, session.clone());

    let (control_tx, mut control_rx) = mpsc::channel(16);
    let ctx = CommandContext {
        session,
        users: shared.users.clone(),
        path_io: shared.path_io.clone(),
        control_tx,
        logger: logger.clone(),
    };

    let mut framed = Framed::new(stream, FtpCodec::new());

    if framed.send(Reply::new(ReplyCode::ServiceReady, shared.greeting.clone())).await.is_err() {
        shared.registry.remove(&client_addr);
        return;
    }

    loop {
        tokio::select! {
            biased;

            msg = control_rx.recv() => {
                match msg {
                    Some(ControlChanMsg::Reply(reply)) => {
                        let code = reply.code();
                        if framed.send(reply).await.is_err() {
                            break;
                        }
                        slog::debug!(logger, "reply written"; "code" => code as u32);
                    }
                    None => continue,
                }
            }

            next = read_command(&mut framed, read_timeout) => {
                match next {
                    Ok(Some(Ok(Command::Quit))) => {
                        let _ = framed.send(Reply::new(ReplyCode::ClosingControlConnection, "bye")).await;
                        slog::debug!(logger, "reply written"; "code" => ReplyCode::ClosingControlConnection as u32);
                        break;
                    }
                    Ok(Some(Ok(command))) => {
                        slog::info!(logger, "command received"; "verb" => command.verb());
                        let reply = dispatch_command(&ctx, command).await;
                        let code = reply.code();
                        if framed.send(reply).await.is_err() {
                            break;
                        }
                        slog::debug!(logger, "reply written"; "code" => code as u32);
                    }
                    Ok(Some(Err(err))) => {
                        slog::warn!(logger, "control channel error, ending session"; "error" => %err);
                        break;
                    }
                    Ok(None) => {
                        // Empty read: the client closed the connection. spec.md §7's
                        // ConnectionClosed — ends the session silently.
                        break;
                    }
                    Err(()) => {
                        // spec.md §5: a read timeout is a fatal session error.
                        let err = ControlChanError::new(ControlChanErrorKind::Timeout);
                        slog::warn!(logger, "control channel error, ending session"; "error" => %err);
                        break;
                    }
                }
            }
        }
    }

    shared.registry.remove(&client_addr);
    slog::info!(logger, "connection closed");
}

/// Read the next command, bounded by `timeout` if one is configured. `Err(())`
/// means the deadline elapsed before a full line arrived.
async fn read_command(
    framed: &mut Framed<TcpStream, FtpCodec>,
    timeout: Option<Duration>,
) -> Result<Option<Result<Command, ControlChanError>>, ()> {
    match timeout {
        Some(duration) => tokio::time::timeout(duration, framed.next()).await.map_err(|_elapsed| ()),
        None => Ok(framed.next().await),
    }
}

async fn dispatch_command(ctx: &CommandContext, command: Command) -> Reply {
    let verb = command.verb().to_string();
    let result = match command {
        Command::User { username } => handlers::handle_user(ctx, &username).await,
        Command::Pass { password } => handlers::handle_pass(ctx, &password).await,
        Command::Pwd => handlers::handle_pwd(ctx).await,
        Command::Cwd { path } => handlers::handle_cwd(ctx, &path).await,
        Command::Cdup => handlers::handle_cdup(ctx).await,
        Command::Mkd { path } => handlers::handle_mkd(ctx, &path).await,
        Command::Rmd { path } => handlers::handle_rmd(ctx, &path).await,
        Command::Mlsd { path } => handlers::handle_mlsd(ctx, &path).await,
        Command::Mlst { path } => handlers::handle_mlst(ctx, &path).await,
        Command::Type { arg } => handlers::handle_type(ctx, &arg).await,
        Command::Pasv => handlers::handle_pasv(ctx).await,
        // Reserved verbs and QUIT (handled by the caller) fall through to the
        // same "not implemented" path as a truly unknown verb.
        Command::Quit | Command::Reserved { .. } | Command::Other { .. } => {
            Err(crate::server::error::FtpError::NotImplemented(format!("'{verb}' not implemented")))
        }
    };

    match result {
        Ok(reply) => reply,
        Err(err) => err.into_reply(),
    }
}
