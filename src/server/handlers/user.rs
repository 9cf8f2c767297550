//! `USER <name>`: no gate (this is how a session acquires a user in the
//! first place). See spec.md §4.5 "USER semantics".

use std::sync::Arc;

use crate::auth::select_user;
use crate::server::context::CommandContext;
use crate::server::error::FtpError;
use crate::server::reply::{Reply, ReplyCode};

pub async fn handle_user(ctx: &CommandContext, username: &str) -> Result<Reply, FtpError> {
    let selected = select_user(&ctx.users, username).ok_or(FtpError::UnknownUser)?;

    let mut session = ctx.session.lock().await;
    if selected.login.is_none() {
        session.user = Some(Arc::new(selected.clone()));
        session.logged = true;
        session.current_directory = selected.home_path.clone();
        Ok(Reply::new(ReplyCode::UserLoggedIn, "anonymous login"))
    } else {
        session.user = Some(Arc::new(selected.clone()));
        Ok(Reply::new(ReplyCode::NeedPassword, "require password"))
    }
}
