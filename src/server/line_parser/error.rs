use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("invalid end of line")]
    InvalidEol,
    #[error("invalid UTF-8 in command line")]
    InvalidUtf8,
    #[error("empty command")]
    Empty,
}

impl From<std::str::Utf8Error> for ParseError {
    fn from(_: std::str::Utf8Error) -> Self {
        ParseError::InvalidUtf8
    }
}
