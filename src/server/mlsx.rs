//! Builds the MLSx fact string spec.md §4.5 and §6 describe:
//! `Type=<file|dir>;Size=<n>;Modify=<mtime>;Create=<ctime>; <basename>`.

use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::pathio::Stat;
use crate::server::error::FtpError;

/// `stat` classifies as neither file nor directory — spec.md §7's
/// `UnknownPathType`, which aborts the listing in progress.
pub fn format_fact(basename: &str, stat: &Stat) -> Result<String, FtpError> {
    let file_type = match (stat.is_dir, stat.is_file) {
        (true, _) => "dir",
        (false, true) => "file",
        (false, false) => return Err(FtpError::UnknownPathType),
    };
    let _ = Path::new(basename); // basenames are already filename-only by construction
    Ok(format!(
        "Type={};Size={};Modify={};Create={}; {}",
        file_type,
        stat.size,
        format_time(stat.modified),
        format_time(stat.created),
        basename
    ))
}

/// RFC 3659's required timestamp form: `YYYYMMDDHHMMSS`, UTC.
fn format_time(t: SystemTime) -> String {
    let dt: DateTime<Utc> = t.into();
    dt.format("%Y%m%d%H%M%S").to_string()
}
