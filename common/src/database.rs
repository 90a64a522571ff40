//! Resolution of the configured `DATABASE_PATH` into a SQLite connection URL.
//!
//! Only SQLite is compiled into the workspace. The value is either a
//! `sqlite:` DSN, used unchanged, or a plain file path.

use std::path::Path;

/// Returns the file behind `path_or_url`, or `None` when it is a DSN.
pub fn sqlite_file_path(path_or_url: &str) -> Option<&Path> {
    if path_or_url.starts_with("sqlite:") || path_or_url.contains("://") {
        None
    } else {
        Some(Path::new(path_or_url))
    }
}

/// Resolves a configured value into a connection URL.
///
/// Plain paths get their parent directories created, since SQLite won't
/// create intermediate dirs. DSNs for other backends are rejected.
pub fn database_url(path_or_url: &str) -> Result<String, String> {
    if path_or_url.starts_with("sqlite:") {
        return Ok(path_or_url.to_owned());
    }

    let Some(path) = sqlite_file_path(path_or_url) else {
        return Err(format!(
            "Unsupported database URL '{path_or_url}': only SQLite is supported"
        ));
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                log::warn!("Could not create {}: {err}", parent.display());
            }
        }
    }
    Ok(format!("sqlite://{path_or_url}?mode=rwc"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_dsn_passes_through() {
        assert_eq!(database_url("sqlite::memory:").unwrap(), "sqlite::memory:");
        assert_eq!(
            database_url("sqlite:data/dev.db").unwrap(),
            "sqlite:data/dev.db"
        );
        assert!(sqlite_file_path("sqlite:data/dev.db").is_none());
    }

    #[test]
    fn test_other_backends_are_rejected() {
        let err = database_url("postgres://localhost/blog").unwrap_err();
        assert!(err.contains("only SQLite"));
        assert!(database_url("mysql://localhost/blog").is_err());
        assert!(sqlite_file_path("postgres://localhost/blog").is_none());
    }

    #[test]
    fn test_path_becomes_sqlite_url_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dev.db");
        let path_str = path.to_str().unwrap();

        let url = database_url(path_str).unwrap();

        assert_eq!(url, format!("sqlite://{path_str}?mode=rwc"));
        assert!(dir.path().join("nested").is_dir());
        assert_eq!(sqlite_file_path(path_str), Some(path.as_path()));
    }

    #[test]
    fn test_relative_file_without_parent_dir() {
        assert_eq!(database_url("dev.db").unwrap(), "sqlite://dev.db?mode=rwc");
    }

    #[test]
    fn test_uncreatable_parent_still_yields_url() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let path = blocker.join("dev.db");
        let path_str = path.to_str().unwrap();

        assert_eq!(
            database_url(path_str).unwrap(),
            format!("sqlite://{path_str}?mode=rwc")
        );
    }
}
