//! `MLST <p>`: gated on `login_required`. Unlike `MLSD`, this is answered
//! directly on the control channel as a three-line multi-line reply, per
//! spec.md §4.5.

use crate::server::context::CommandContext;
use crate::server::error::FtpError;
use crate::server::gate::login_required;
use crate::server::mlsx;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::vpath;

pub async fn handle_mlst(ctx: &CommandContext, arg: &str) -> Result<Reply, FtpError> {
    let session = ctx.session.lock().await;
    login_required(&session)?;
    let user = session.user.clone().expect("login_required implies a user is set");

    let virtual_path = vpath::resolve_virtual(&session.current_directory, arg);
    let real_path = user.real_path(&virtual_path);

    if !user.get_permissions(&virtual_path).readable {
        return Err(FtpError::PermissionDenied);
    }

    let stat = ctx.path_io.stat(&real_path).await?;
    let basename = virtual_path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| "/".to_string());
    let fact = mlsx::format_fact(&basename, &stat)?;

    Ok(Reply::new_multiline(ReplyCode::FileActionOkay, vec!["start".to_string(), fact, "end".to_string()]))
}
