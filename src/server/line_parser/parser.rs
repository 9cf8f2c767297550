use super::error::ParseError;
use crate::server::command::Command;

/// Parse one already-UTF8-decoded command line (CRLF already stripped by the
/// codec) into a [`Command`].
///
/// Splits on the first space into `(verb, rest)` and lowercases the verb, so
/// that handler dispatch doesn't have to care about case. Unknown verbs fall
/// through to [`Command::Other`] rather than erroring — spec.md's dispatcher
/// is the one that decides an unrecognized verb means `502`, not the parser.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_end();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let (verb, rest) = match line.split_once(' ') {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    // spec.md §4.3: the registry is keyed by lowercased verb, matching
    // aioftp's `str.lower(cmd)`.
    let verb = verb.to_lowercase();

    let cmd = match verb.as_str() {
        "user" => Command::User { username: rest.to_string() },
        "pass" => Command::Pass { password: rest.to_string() },
        "quit" => Command::Quit,
        "pwd" => Command::Pwd,
        "cwd" => Command::Cwd { path: rest.to_string() },
        "cdup" => Command::Cdup,
        "mkd" => Command::Mkd { path: rest.to_string() },
        "rmd" => Command::Rmd { path: rest.to_string() },
        "mlsd" => Command::Mlsd { path: rest.to_string() },
        "mlst" => Command::Mlst { path: rest.to_string() },
        "type" => Command::Type { arg: rest.to_string() },
        "pasv" => Command::Pasv,
        "rnfr" | "rnto" | "dele" | "stor" | "retr" | "abor" => Command::Reserved { verb },
        other => Command::Other {
            verb: other.to_string(),
            arguments: rest.to_string(),
        },
    };
    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_user_with_argument() {
        assert_eq!(parse("USER anonymous").unwrap(), Command::User { username: "anonymous".into() });
    }

    #[test]
    fn verb_is_case_insensitive() {
        assert_eq!(parse("user anonymous").unwrap(), Command::User { username: "anonymous".into() });
    }

    #[test]
    fn bare_verb_has_empty_rest() {
        assert_eq!(parse("PWD").unwrap(), Command::Pwd);
        assert_eq!(parse("QUIT\r").unwrap(), Command::Quit);
    }

    #[test]
    fn unknown_verb_falls_through_to_other_lowercased() {
        assert_eq!(
            parse("FOOBAR baz").unwrap(),
            Command::Other {
                verb: "foobar".into(),
                arguments: "baz".into()
            }
        );
    }

    #[test]
    fn reserved_verbs_are_recognized_and_lowercased() {
        assert_eq!(parse("DELE some/file").unwrap(), Command::Reserved { verb: "dele".into() });
    }

    #[test]
    fn empty_line_is_rejected() {
        assert!(matches!(parse(""), Err(ParseError::Empty)));
    }
}
