use std::path::{Path, PathBuf};

use super::permission::{self, Permission};

/// A configured account, per spec.md §3. `login: None` marks the anonymous
/// user: it matches any `USER` argument when no named user does, and at
/// most one such user may be configured (enforced by
/// [`crate::server::config::ServerBuilder`]).
#[derive(Debug, Clone)]
pub struct User {
    pub login: Option<String>,
    pub password: Option<String>,
    pub base_path: PathBuf,
    pub home_path: PathBuf,
    pub permissions: Vec<Permission>,
}

impl User {
    pub fn anonymous(base_path: impl Into<PathBuf>) -> Self {
        User {
            login: None,
            password: None,
            base_path: base_path.into(),
            home_path: PathBuf::from("/"),
            permissions: vec![Permission::default()],
        }
    }

    pub fn named(login: impl Into<String>, password: impl Into<String>, base_path: impl Into<PathBuf>) -> Self {
        User {
            login: Some(login.into()),
            password: Some(password.into()),
            base_path: base_path.into(),
            home_path: PathBuf::from("/"),
            permissions: vec![Permission::default()],
        }
    }

    pub fn with_permissions(mut self, permissions: Vec<Permission>) -> Self {
        assert!(!permissions.is_empty(), "a user's permission list must be non-empty");
        self.permissions = permissions;
        self
    }

    pub fn with_home(mut self, home_path: impl Into<PathBuf>) -> Self {
        self.home_path = home_path.into();
        self
    }

    /// spec.md §4.1: the most specific permission covering `virtual_path`.
    pub fn get_permissions(&self, virtual_path: &Path) -> &Permission {
        permission::resolve(&self.permissions, virtual_path)
    }

    /// The real filesystem path backing a (already-normalized) virtual path:
    /// `base_path / virtual_path.relative_to("/")`, per spec.md §3.
    pub fn real_path(&self, virtual_path: &Path) -> PathBuf {
        let relative = virtual_path.strip_prefix("/").unwrap_or(virtual_path);
        self.base_path.join(relative)
    }
}

/// Scan `users` for the one that should be selected for a `USER <arg>`
/// command, per spec.md §4.5's USER semantics: the first `login: None` user
/// is a fallback candidate, but a name match supersedes it and stops the
/// scan.
pub fn select_user<'a>(users: &'a [User], arg: &str) -> Option<&'a User> {
    let mut anonymous_fallback = None;
    for user in users {
        match &user.login {
            Some(login) if login == arg => return Some(user),
            None if anonymous_fallback.is_none() => anonymous_fallback = Some(user),
            _ => {}
        }
    }
    anonymous_fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn named_match_supersedes_anonymous_fallback() {
        let users = vec![User::anonymous("/srv/anon"), User::named("alice", "secret", "/srv/alice")];
        let selected = select_user(&users, "alice").unwrap();
        assert_eq!(selected.login.as_deref(), Some("alice"));
    }

    #[test]
    fn unknown_name_falls_back_to_anonymous_when_present() {
        let users = vec![User::anonymous("/srv/anon")];
        let selected = select_user(&users, "whoever").unwrap();
        assert!(selected.login.is_none());
    }

    #[test]
    fn unknown_name_with_no_anonymous_user_selects_nothing() {
        let users = vec![User::named("alice", "secret", "/srv/alice")];
        assert!(select_user(&users, "bob").is_none());
    }

    #[test]
    fn real_path_joins_base_path_with_relative_virtual_path() {
        let user = User::named("alice", "secret", "/srv/alice");
        assert_eq!(user.real_path(Path::new("/docs/readme.txt")), PathBuf::from("/srv/alice/docs/readme.txt"));
    }
}
