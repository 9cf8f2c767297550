//! `MLSD <p>`: gated on `login_required` and `passive_required`. Spawns the
//! background writer (see `server::datachan`) and replies immediately with
//! `150`, per spec.md §4.5/§4.6.

use crate::server::context::CommandContext;
use crate::server::datachan;
use crate::server::error::FtpError;
use crate::server::gate::{login_required, passive_required};
use crate::server::reply::{Reply, ReplyCode};
use crate::server::vpath;

pub async fn handle_mlsd(ctx: &CommandContext, arg: &str) -> Result<Reply, FtpError> {
    let mut session = ctx.session.lock().await;
    login_required(&session)?;
    passive_required(&session)?;
    let user = session.user.clone().expect("login_required implies a user is set");

    let virtual_path = vpath::resolve_virtual(&session.current_directory, arg);
    let real_path = user.real_path(&virtual_path);

    if !user.get_permissions(&virtual_path).readable {
        return Err(FtpError::PermissionDenied);
    }

    // Single-use: the accepted connection is consumed by this transfer,
    // per spec.md §4.6 step 1.
    let stream = session
        .passive
        .as_mut()
        .and_then(|p| p.accepted.take())
        .expect("passive_required just confirmed a connection is present");

    tokio::spawn(datachan::run_mlsd_writer(
        stream,
        real_path,
        ctx.path_io.clone(),
        ctx.control_tx.clone(),
        ctx.logger.clone(),
    ));

    Ok(Reply::new(ReplyCode::DataConnectionOpen, "mlsd transer started"))
}
