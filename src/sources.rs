// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Source file discovery

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name suffixes handed to the rewriter.
pub const SOURCE_SUFFIXES: [&str; 2] = [".cpp", ".hpp"];

/// True if the file name ends in one of [`SOURCE_SUFFIXES`].
///
/// This is a suffix test on the name, so `my.cpp.bak` does not match.
pub fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| SOURCE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
}

/// Find the C++ sources directly inside `dir` (one level, no recursion).
///
/// Symlinks are followed, so a link to a `.cpp` file is staged like the file
/// itself. Directories and dangling links are skipped. Results are sorted for
/// reproducible runs.
pub fn find_source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Source directory not found: {}", dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        if is_source_file(entry.path()) && entry.path().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_suffix_match() {
        assert!(is_source_file(Path::new("src/cinq_enumerable.hpp")));
        assert!(is_source_file(Path::new("cinq_test.cpp")));
        assert!(!is_source_file(Path::new("notes.txt")));
        assert!(!is_source_file(Path::new("my.cpp.bak")));
        assert!(!is_source_file(Path::new("Doxyfile")));
    }

    #[test]
    fn test_directory_name_ignored() {
        // Only the final component counts
        assert!(!is_source_file(Path::new("build.cpp/readme")));
    }

    #[test]
    fn test_find_skips_directories_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("zeta.cpp"), "").unwrap();
        fs::write(dir.path().join("alpha.hpp"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("generated.cpp")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/inner.cpp"), "").unwrap();

        let files = find_source_files(dir.path()).unwrap();

        assert_eq!(names(&files), vec!["alpha.hpp", "zeta.cpp"]);
    }

    #[test]
    fn test_find_missing_dir_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(find_source_files(&dir.path().join("missing")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_find_follows_file_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real");
        let src = dir.path().join("src");
        fs::create_dir_all(&real).unwrap();
        fs::create_dir_all(&src).unwrap();
        fs::write(real.join("a.cpp"), "requires x\n").unwrap();
        symlink(real.join("a.cpp"), src.join("a.cpp")).unwrap();
        symlink(real.join("gone.hpp"), src.join("dangling.hpp")).unwrap();
        symlink(&real, src.join("linked.cpp")).unwrap();

        let files = find_source_files(&src).unwrap();

        assert_eq!(names(&files), vec!["a.cpp"]);
    }
}
