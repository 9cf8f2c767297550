//! `TYPE <x>`: gated on `login_required`. Only `I` (image/binary) is
//! supported, per spec.md §4.5.

use crate::server::context::CommandContext;
use crate::server::error::FtpError;
use crate::server::gate::login_required;
use crate::server::reply::{Reply, ReplyCode};

pub async fn handle_type(ctx: &CommandContext, arg: &str) -> Result<Reply, FtpError> {
    let mut session = ctx.session.lock().await;
    login_required(&session)?;

    if arg.eq_ignore_ascii_case("I") {
        session.transfer_type = Some("I".to_string());
        Ok(Reply::new(ReplyCode::CommandOkay, "Always in binary mode"))
    } else {
        Err(FtpError::NotImplemented(format!("type '{arg}' not implemented")))
    }
}
