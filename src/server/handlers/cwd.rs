//! `CWD <p>`: gated on `login_required`. See spec.md §4.2 (path resolution)
//! and §4.5.

use crate::server::context::CommandContext;
use crate::server::error::FtpError;
use crate::server::gate::login_required;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::vpath;

pub async fn handle_cwd(ctx: &CommandContext, arg: &str) -> Result<Reply, FtpError> {
    let mut session = ctx.session.lock().await;
    login_required(&session)?;
    let user = session.user.clone().expect("login_required implies a user is set");

    let virtual_path = vpath::resolve_virtual(&session.current_directory, arg);
    let real_path = user.real_path(&virtual_path);

    if !ctx.path_io.exists(&real_path).await {
        return Err(FtpError::NotFound);
    }
    if !ctx.path_io.is_dir(&real_path).await {
        return Err(FtpError::NotADirectory);
    }
    if !user.get_permissions(&virtual_path).readable {
        return Err(FtpError::PermissionDenied);
    }

    session.current_directory = virtual_path;
    Ok(Reply::new(ReplyCode::FileActionOkay, ""))
}
