//! The set of FTP verbs this core understands, plus the reserved verbs that
//! are recognized but stubbed (spec.md §4.5's "reserved" row) and an `Other`
//! catch-all for anything else.

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    User { username: String },
    Pass { password: String },
    Quit,
    Pwd,
    Cwd { path: String },
    Cdup,
    Mkd { path: String },
    Rmd { path: String },
    Mlsd { path: String },
    Mlst { path: String },
    Type { arg: String },
    Pasv,
    /// RNFR, RNTO, DELE, STOR, RETR, ABOR: accepted by the parser, but the
    /// dispatcher answers them exactly like an unimplemented verb.
    Reserved { verb: String },
    Other { verb: String, arguments: String },
}

impl Command {
    /// The verb as used for logging and the `502` unimplemented reply;
    /// never includes arguments, so a stray `PASS` never ends up in a log
    /// line.
    pub fn verb(&self) -> &str {
        match self {
            Command::User { .. } => "user",
            Command::Pass { .. } => "pass",
            Command::Quit => "quit",
            Command::Pwd => "pwd",
            Command::Cwd { .. } => "cwd",
            Command::Cdup => "cdup",
            Command::Mkd { .. } => "mkd",
            Command::Rmd { .. } => "rmd",
            Command::Mlsd { .. } => "mlsd",
            Command::Mlst { .. } => "mlst",
            Command::Type { .. } => "type",
            Command::Pasv => "pasv",
            Command::Reserved { verb } => verb,
            Command::Other { verb, .. } => verb,
        }
    }
}
