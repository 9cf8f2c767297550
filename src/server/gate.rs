//! Precondition gates, per spec.md §4.4: each wraps a handler and
//! short-circuits with `503` if the named session field isn't set yet.
//! Modeled as plain field checks rather than a decorator stack, since the
//! session is now a struct instead of a dynamic dictionary (spec.md §9).

use crate::server::error::FtpError;
use crate::server::session::Session;

pub fn user_required(session: &Session) -> Result<(), FtpError> {
    if session.user.is_some() {
        Ok(())
    } else {
        Err(FtpError::BadSequence("no user (use USER firstly)"))
    }
}

pub fn login_required(session: &Session) -> Result<(), FtpError> {
    if session.logged {
        Ok(())
    } else {
        Err(FtpError::BadSequence("not logged in"))
    }
}

pub fn passive_required(session: &Session) -> Result<(), FtpError> {
    match &session.passive {
        Some(passive) if passive.accepted.is_some() => Ok(()),
        Some(_) => Err(FtpError::BadSequence("no passive connection created (connect firstly)")),
        None => Err(FtpError::BadSequence("no listen socket created (use PASV firstly)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    fn session() -> Session {
        Session::new("127.0.0.1:10".parse::<SocketAddr>().unwrap(), "127.0.0.1:21".parse::<SocketAddr>().unwrap(), None)
    }

    #[test]
    fn user_required_fails_before_user_command() {
        assert!(user_required(&session()).is_err());
    }

    #[test]
    fn login_required_fails_before_pass_succeeds() {
        assert!(login_required(&session()).is_err());
    }

    #[test]
    fn passive_required_fails_before_pasv() {
        assert!(passive_required(&session()).is_err());
    }
}
