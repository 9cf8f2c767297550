//! Reply codes and the line-framing rules from RFC 959 (`code␠text` /
//! `code-text`) used to write responses on the control channel.

/// A reply awaiting encoding onto the wire.
///
/// `Single` covers the common one-line case; `MultiLine` is used by handlers
/// such as `MLST` that must emit a bracketed block (`code-head`, ` interior`
/// lines, `code tail`).
#[derive(Debug, Clone)]
pub enum Reply {
    Single { code: ReplyCode, line: String },
    MultiLine { code: ReplyCode, lines: Vec<String> },
}

impl Reply {
    pub fn new(code: ReplyCode, line: impl Into<String>) -> Self {
        Reply::Single { code, line: line.into() }
    }

    /// A multi-line reply. `lines` must contain at least two entries: the
    /// head and the tail, with any interior lines in between.
    pub fn new_multiline(code: ReplyCode, lines: Vec<String>) -> Self {
        debug_assert!(lines.len() >= 2, "multi-line reply needs a head and a tail");
        Reply::MultiLine { code, lines }
    }

    pub fn code(&self) -> ReplyCode {
        match self {
            Reply::Single { code, .. } => *code,
            Reply::MultiLine { code, .. } => *code,
        }
    }

    /// Render the reply as the exact bytes to write to the control socket,
    /// each line CRLF-terminated.
    pub fn render(&self) -> String {
        match self {
            Reply::Single { code, line } => format!("{} {}\r\n", *code as u32, line),
            Reply::MultiLine { code, lines } => {
                let n = *code as u32;
                let mut lines = lines.clone();
                let tail = lines.pop().unwrap_or_default();
                let head = lines.remove(0);
                let mut out = format!("{n}-{head}\r\n");
                for interior in &lines {
                    out.push_str(&format!(" {interior}\r\n"));
                }
                out.push_str(&format!("{n} {tail}\r\n"));
                out
            }
        }
    }
}

/// RFC 959 (and RFC 3659) reply codes this core emits. Only the subset
/// spec.md §6 lists is represented; there is no need to model codes this
/// implementation never writes.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ReplyCode {
    DataConnectionOpen = 150,
    CommandOkay = 200,
    ServiceReady = 220,
    ClosingControlConnection = 221,
    EnteringPassiveMode = 227,
    UserLoggedIn = 230,
    FileActionOkay = 250,
    PathCreated = 257,
    NeedPassword = 331,
    CommandNotImplemented = 502,
    BadSequenceOfCommands = 503,
    NotLoggedIn = 530,
    FileActionNotTaken = 550,
}
