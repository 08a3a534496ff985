//! Filesystem utilities.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Recursively remove a directory tree, children before parents.
///
/// An absent target is a no-op, so the call is idempotent. An entry that
/// vanished between being visited and being deleted counts as removed.
/// A target that exists but is not a directory, including a symlink to
/// one, is an error; nothing behind a symlinked target is touched.
pub fn purge_dir(path: &Path) -> io::Result<()> {
    // symlink_metadata so a link to a directory is rejected instead of
    // followed into its target.
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err),
    };

    if !meta.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("not a directory: {}", path.display()),
        ));
    }

    // Contents-first traversal yields every child before its parent and the
    // target directory last.
    for entry in WalkDir::new(path).contents_first(true) {
        let entry = match entry {
            Ok(entry) => entry,
            // Already gone is success, anything else aborts.
            Err(err) if err.io_error().map(io::Error::kind) == Some(io::ErrorKind::NotFound) => {
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let removed = if entry.file_type().is_dir() {
            fs::remove_dir(entry.path())
        } else {
            // Covers regular files and symlinks; the link itself is removed,
            // never its target.
            fs::remove_file(entry.path())
        };

        match removed {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }
    }

    debug_assert!(
        !path.exists(),
        "purged directory still exists: {}",
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_purge_absent_is_noop() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("never-created");

        purge_dir(&missing).unwrap();
        assert!(!missing.exists());
    }

    #[test]
    fn test_purge_empty_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("bld");
        fs::create_dir(&dir).unwrap();

        purge_dir(&dir).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_purge_nested_tree() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("bld");
        fs::create_dir_all(dir.join("a/b/c")).unwrap();
        fs::write(dir.join("top.class"), b"x").unwrap();
        fs::write(dir.join("a/mid.class"), b"x").unwrap();
        fs::write(dir.join("a/b/c/leaf.class"), b"x").unwrap();

        purge_dir(&dir).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_purge_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("bld");
        fs::create_dir(&dir).unwrap();

        purge_dir(&dir).unwrap();
        purge_dir(&dir).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_purge_regular_file_fails() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("bld");
        fs::write(&file, b"not a directory").unwrap();

        let err = purge_dir(&file).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotADirectory);
        assert!(err.to_string().contains("not a directory"));
        assert!(file.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_purge_readonly_entries() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("bld");
        fs::create_dir_all(dir.join("sub")).unwrap();
        let frozen = dir.join("sub/frozen.class");
        fs::write(&frozen, b"x").unwrap();
        fs::set_permissions(&frozen, fs::Permissions::from_mode(0o444)).unwrap();

        purge_dir(&dir).unwrap();
        assert!(!dir.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_purge_symlinked_target_fails_untouched() {
        let tmp = TempDir::new().unwrap();
        let real = tmp.path().join("real");
        fs::create_dir(&real).unwrap();
        fs::write(real.join("keep.txt"), b"x").unwrap();

        let link = tmp.path().join("bld");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let err = purge_dir(&link).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotADirectory);

        // The error precedes any deletion behind the link.
        assert!(link.exists());
        assert!(real.join("keep.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_purge_removes_symlink_not_target() {
        let tmp = TempDir::new().unwrap();
        let outside = tmp.path().join("outside");
        fs::create_dir(&outside).unwrap();
        fs::write(outside.join("keep.txt"), b"x").unwrap();

        let dir = tmp.path().join("bld");
        fs::create_dir(&dir).unwrap();
        std::os::unix::fs::symlink(&outside, dir.join("link")).unwrap();

        purge_dir(&dir).unwrap();
        assert!(!dir.exists());
        assert!(outside.join("keep.txt").exists());
    }
}
