/// File handling utilities
///
/// This module provides utility functions for reading input text and collecting
/// the files to analyze.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::{debug, error, warn};
use memmap2::Mmap;
use walkdir::WalkDir;

/// Files above this size are memory-mapped instead of read into a buffer
pub const MMAP_THRESHOLD: u64 = 10 * 1024 * 1024;

/// Read a file as text.
///
/// Invalid UTF-8 sequences are replaced rather than rejected, so any file can
/// be analyzed.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// The file content as a string
pub fn read_text_file(file_path: &Path) -> io::Result<String> {
    let size = fs::metadata(file_path)?.len();

    if size > MMAP_THRESHOLD {
        debug!("Memory-mapping {} ({} bytes)", file_path.display(), size);
        let file = File::open(file_path)?;
        // The map is only read while the file stays open in this scope.
        let mmap = unsafe { Mmap::map(&file)? };
        return Ok(decode_lossy(&mmap, file_path));
    }

    let bytes = fs::read(file_path)?;
    Ok(decode_lossy(&bytes, file_path))
}

fn decode_lossy(bytes: &[u8], file_path: &Path) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            warn!("{} is not valid UTF-8, replacing invalid sequences", file_path.display());
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

/// Read all of standard input as text
pub fn read_stdin() -> io::Result<String> {
    let mut buffer = Vec::new();
    io::stdin().lock().read_to_end(&mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Limits and filters applied while collecting input files
#[derive(Debug, Clone)]
pub struct FileSelection {
    /// Maximum file size in bytes
    pub max_size: u64,
    /// Maximum number of files
    pub max_files: usize,
    /// Glob patterns a file must match (defaults to everything)
    pub include: Vec<String>,
    /// Glob patterns that exclude a file
    pub exclude: Vec<String>,
}

impl Default for FileSelection {
    fn default() -> Self {
        Self {
            max_size: 50 * 1024 * 1024,
            max_files: 1000,
            include: vec!["*".to_string()],
            exclude: Vec::new(),
        }
    }
}

/// Collect the files to analyze from explicit paths and an optional directory
///
/// Missing paths, non-files and oversized files are logged and skipped.
pub fn collect_files(paths: &[PathBuf], dir: Option<&Path>, selection: &FileSelection) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if !path.exists() {
            error!("File not found: {}", path.display());
            continue;
        }
        if !path.is_file() {
            warn!("Skipping {}: not a file", path.display());
            continue;
        }
        match path.metadata() {
            Ok(metadata) if metadata.len() <= selection.max_size => files.push(path.clone()),
            Ok(metadata) => warn!(
                "Skipping {}: exceeds maximum file size ({:.2} MB)",
                path.display(),
                metadata.len() as f64 / 1024.0 / 1024.0
            ),
            Err(e) => error!("Error reading metadata for {}: {}", path.display(), e),
        }
    }

    if let Some(dir) = dir {
        if !dir.is_dir() {
            error!("Directory not found: {}", dir.display());
            return files;
        }

        for entry in WalkDir::new(dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if files.len() >= selection.max_files {
                warn!("Reached maximum file limit ({})", selection.max_files);
                break;
            }

            let file_path = entry.path();
            if !file_path.is_file() {
                continue;
            }
            match file_path.metadata() {
                Ok(metadata) if metadata.len() > selection.max_size => continue,
                Ok(_) => {}
                Err(e) => {
                    error!("Error reading metadata for {}: {}", file_path.display(), e);
                    continue;
                }
            }

            let file_name = file_path.to_string_lossy();
            let included = selection.include.iter().any(|p| glob_match(&file_name, p));
            let excluded = selection.exclude.iter().any(|p| glob_match(&file_name, p));
            if included && !excluded {
                files.push(file_path.to_path_buf());
            }
        }
    }

    files
}

/// Simple glob pattern matching supporting `*` and `?`
pub fn glob_match(text: &str, pattern: &str) -> bool {
    let mut translated = String::with_capacity(pattern.len() + 8);
    for c in pattern.chars() {
        match c {
            '*' => translated.push_str(".*"),
            '?' => translated.push('.'),
            other => translated.push_str(&regex::escape(&other.to_string())),
        }
    }
    match regex::Regex::new(&format!("^{}$", translated)) {
        Ok(re) => re.is_match(text),
        Err(e) => {
            error!("Invalid glob pattern {}: {}", pattern, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_match() {
        assert!(glob_match("notes/chapter1.txt", "*.txt"));
        assert!(glob_match("a.md", "?.md"));
        assert!(!glob_match("a.md", "*.txt"));
        // dots are literal
        assert!(!glob_match("axtxt", "a.txt"));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, b"ok \xff done").unwrap();
        let text = read_text_file(&path).unwrap();
        assert!(text.starts_with("ok "));
        assert!(text.ends_with(" done"));
    }

    #[test]
    fn test_collect_files_filters() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "one").unwrap();
        fs::write(dir.path().join("b.md"), "two").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.txt"), "three").unwrap();

        let selection = FileSelection {
            include: vec!["*.txt".to_string()],
            ..FileSelection::default()
        };
        let files = collect_files(&[], Some(dir.path()), &selection);
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "txt"));

        let missing = dir.path().join("missing.txt");
        let files = collect_files(&[missing], None, &FileSelection::default());
        assert!(files.is_empty());
    }
}
