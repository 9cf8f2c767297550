//! Everything a command handler needs, bundled so handler signatures don't
//! grow a parameter every time the dispatcher gains a new capability —
//! mirrors `libunftp`'s `CommandContext`, narrowed to this core's single
//! concrete user/storage model.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};

use crate::auth::User;
use crate::pathio::PathIo;
use crate::server::chancomms::ControlChanMsg;
use crate::server::session::Session;

pub type SharedSession = Arc<Mutex<Session>>;

#[derive(Clone)]
pub struct CommandContext {
    pub session: SharedSession,
    pub users: Arc<Vec<User>>,
    pub path_io: Arc<dyn PathIo>,
    pub control_tx: mpsc::Sender<ControlChanMsg>,
    pub logger: slog::Logger,
}
