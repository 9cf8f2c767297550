//! Messages a background task (currently only the MLSD writer) posts back
//! onto the control channel, analogous to `libunftp`'s
//! `ControlChanMsg`/`InternalMsg` plumbing in `control_loop.rs`.

use crate::server::reply::Reply;

#[derive(Debug)]
pub enum ControlChanMsg {
    /// A reply to write verbatim, e.g. MLSD's final `200`/`550`.
    Reply(Reply),
}
