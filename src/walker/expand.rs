//! Path expansion: the per-directory warming operation
//!
//! Expanding a path means listing its children, classifying each as
//! directory or not, touching metadata so the kernel populates its
//! dentry/inode caches, and handing discovered directories back to the
//! caller for further traversal.
//!
//! Warming is advisory, so expansion is best-effort throughout: an
//! unreadable or vanished path simply contributes zero children, and a
//! composed child path longer than [`MAX_PATH_BYTES`] is skipped rather
//! than truncated. Nothing here ever aborts the traversal.

use crate::walker::stack::PathStack;
use std::fs;
use std::path::Path;
use tracing::trace;

/// Longest composed path this walker will touch, in `OsStr` units.
/// Children beyond this are skipped without traversal.
pub const MAX_PATH_BYTES: usize = 4096;

/// Expands one path into zero or more child directories, warming
/// caches as a side effect.
///
/// `Send + Sync` because one expander instance is shared by every
/// worker thread. Implementations outside the filesystem exist only in
/// tests, where synthetic trees exercise the traversal engine without
/// touching disk.
pub trait Expand: Send + Sync {
    /// Warm `path` and push each child directory onto `discovered`.
    ///
    /// Returns the number of entries processed: child directories
    /// pushed plus terminal entries touched. Inaccessible paths return
    /// zero.
    fn expand(&self, path: &Path, discovered: &mut PathStack) -> usize;
}

/// Filesystem-backed expander.
///
/// Listing a directory warms its dentries; reading each child's
/// metadata warms the inodes. Symlinks are never followed: a link is
/// classified by its own file type, touched once, and never enqueued,
/// so cycles cannot occur.
pub struct FsExpander {
    print: bool,
}

impl FsExpander {
    /// Create an expander; `print` echoes every visited path to stdout.
    pub fn new(print: bool) -> Self {
        Self { print }
    }
}

impl Expand for FsExpander {
    fn expand(&self, path: &Path, discovered: &mut PathStack) -> usize {
        // Best-effort: unreadable directories have zero children
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                trace!(path = %path.display(), error = %e, "skipping unreadable directory");
                return 0;
            }
        };

        let mut count = 0;

        for entry in entries.flatten() {
            let child = entry.path();

            if child.as_os_str().len() > MAX_PATH_BYTES {
                trace!(path = %child.display(), "skipping over-long path");
                continue;
            }

            // file_type() does not follow symlinks, so a link to a
            // directory counts as a terminal entry
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

            if is_dir {
                if self.print {
                    println!("{}", child.display());
                }
                discovered.push(child);
            } else {
                // Touching metadata is what pulls the inode into cache
                let _ = entry.metadata();
                if self.print {
                    println!("{}", child.display());
                }
            }

            count += 1;
        }

        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_expand_counts_children_and_discovers_dirs() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        fs::create_dir(root.join("sub_a")).unwrap();
        fs::create_dir(root.join("sub_b")).unwrap();
        File::create(root.join("file.txt")).unwrap();

        let expander = FsExpander::new(false);
        let mut discovered = PathStack::new();
        let count = expander.expand(root, &mut discovered);

        assert_eq!(count, 3);
        assert_eq!(discovered.len(), 2);
    }

    #[test]
    fn test_expand_missing_path_is_silent() {
        let expander = FsExpander::new(false);
        let mut discovered = PathStack::new();
        let count = expander.expand(Path::new("/no/such/path/anywhere"), &mut discovered);

        assert_eq!(count, 0);
        assert!(discovered.is_empty());
    }

    #[test]
    fn test_expand_empty_dir() {
        let dir = tempdir().unwrap();

        let expander = FsExpander::new(false);
        let mut discovered = PathStack::new();
        let count = expander.expand(dir.path(), &mut discovered);

        assert_eq!(count, 0);
        assert!(discovered.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_expand_does_not_follow_symlinks() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        fs::create_dir(root.join("real")).unwrap();
        std::os::unix::fs::symlink(root.join("real"), root.join("link")).unwrap();

        let expander = FsExpander::new(false);
        let mut discovered = PathStack::new();
        let count = expander.expand(root, &mut discovered);

        // Both children counted, but only the real directory discovered
        assert_eq!(count, 2);
        assert_eq!(discovered.len(), 1);
        assert_eq!(discovered.pop(), Some(root.join("real")));
    }
}
