//! `CDUP`: spec.md §4.5 defines this as equivalent to `CWD <parent>`.

use crate::server::context::CommandContext;
use crate::server::error::FtpError;
use crate::server::reply::Reply;

use super::cwd::handle_cwd;

pub async fn handle_cdup(ctx: &CommandContext) -> Result<Reply, FtpError> {
    handle_cwd(ctx, "..").await
}
