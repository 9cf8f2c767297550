//! `PASS <pw>`: gated on `user_required`. See spec.md §4.5.

use crate::server::context::CommandContext;
use crate::server::error::FtpError;
use crate::server::gate::user_required;
use crate::server::reply::{Reply, ReplyCode};

pub async fn handle_pass(ctx: &CommandContext, password: &str) -> Result<Reply, FtpError> {
    let mut session = ctx.session.lock().await;
    user_required(&session)?;
    let user = session.user.clone().expect("user_required just checked this");

    if user.password.as_deref() == Some(password) {
        session.logged = true;
        session.current_directory = user.home_path.clone();
        Ok(Reply::new(ReplyCode::UserLoggedIn, "normal login"))
    } else {
        Err(FtpError::WrongPassword)
    }
}
