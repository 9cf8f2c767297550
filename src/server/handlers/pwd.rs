//! `PWD`: gated on `login_required`. See spec.md §4.5.

use crate::server::context::CommandContext;
use crate::server::error::FtpError;
use crate::server::gate::login_required;
use crate::server::reply::{Reply, ReplyCode};

pub async fn handle_pwd(ctx: &CommandContext) -> Result<Reply, FtpError> {
    let session = ctx.session.lock().await;
    login_required(&session)?;
    Ok(Reply::new(ReplyCode::PathCreated, format!("\"{}\"", session.current_directory.display())))
}
