//! Filesystem helpers.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Create a directory and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory `{}`", path.display()))
}

/// Read a file to a string, naming the path in the error.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))
}

/// Write a string to a file, creating parent directories first.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write `{}`", path.display()))
}

/// Expand glob patterns against a base directory.
///
/// Matches are limited to plain files and come back sorted with
/// duplicates collapsed, so the result never depends on pattern order.
pub fn glob_files(base: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut matches = Vec::new();

    for pattern in patterns {
        let anchored = base.join(pattern);
        let paths = glob::glob(&anchored.to_string_lossy())
            .with_context(|| format!("invalid source pattern `{}`", pattern))?;

        for path in paths {
            match path {
                Ok(path) if path.is_file() => matches.push(path),
                Ok(_) => {}
                Err(err) => tracing::warn!("skipping unreadable match: {}", err),
            }
        }
    }

    matches.sort();
    matches.dedup();
    Ok(matches)
}

/// Express `path` relative to `base`, falling back to `path` itself when
/// the two share no common root.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_glob_files_matches_only_the_extension() {
        let tmp = TempDir::new().unwrap();
        let pkg = tmp.path().join("quantor");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("settings.pyx"), "# cython module").unwrap();
        fs::write(pkg.join("observer.pyx"), "# cython module").unwrap();
        fs::write(pkg.join("notes.txt"), "notes").unwrap();

        let files = glob_files(tmp.path(), &["quantor/*.pyx".to_string()]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_glob_files_sorted_and_deduped() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.pyx"), "").unwrap();
        fs::write(tmp.path().join("a.pyx"), "").unwrap();

        // `a.pyx` matches both patterns but appears once
        let files = glob_files(tmp.path(), &["*.pyx".to_string(), "a.pyx".to_string()]).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.pyx", "b.pyx"]);
    }

    #[test]
    fn test_glob_files_skips_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("dir.pyx")).unwrap();
        fs::write(tmp.path().join("file.pyx"), "").unwrap();

        let files = glob_files(tmp.path(), &["*.pyx".to_string()]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("file.pyx"));
    }

    #[test]
    fn test_relative_path() {
        let base = Path::new("/work/project");
        let path = Path::new("/work/project/quantor/time");
        assert_eq!(relative_path(base, path), PathBuf::from("quantor/time"));
    }

    #[test]
    fn test_write_string_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("plans/today/plan.json");

        write_string(&target, "{}").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "{}");
    }
}
