//! `PASV`: gated on `login_required`. See spec.md §4.5/§4.6.

use crate::server::context::CommandContext;
use crate::server::datachan;
use crate::server::error::FtpError;
use crate::server::gate::login_required;
use crate::server::reply::{Reply, ReplyCode};

pub async fn handle_pasv(ctx: &CommandContext) -> Result<Reply, FtpError> {
    let mut session = ctx.session.lock().await;
    login_required(&session)?;

    let (headline, local_addr) = if let Some(passive) = &session.passive {
        ("listen socket already exists", passive.local_addr)
    } else {
        let bind_host = session.server_addr.ip();
        let passive = datachan::bind_passive_listener(bind_host, ctx.session.clone(), ctx.logger.clone()).await?;
        let local_addr = passive.local_addr;
        session.passive = Some(passive);
        ("listen socket created", local_addr)
    };

    Ok(Reply::new_multiline(
        ReplyCode::EnteringPassiveMode,
        vec![headline.to_string(), datachan::format_pasv_tuple(local_addr)],
    ))
}
