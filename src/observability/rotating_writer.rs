//! Append-only line writer with size-capped rotation.
//!
//! When the file grows past its cap it is renamed to
//! `<stem>.<YYYYmmdd-HHMMSS>.<ext>` and any older backup is removed, so at most
//! one backup sits next to the live file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size cap (5 MB).
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Thread-safe rotating writer; the file opens lazily on first write.
pub struct RotatingWriter {
    path: PathBuf,
    max_bytes: u64,
    file: Mutex<Option<File>>,
}

impl RotatingWriter {
    #[must_use]
    pub const fn new(path: PathBuf, max_bytes: u64) -> Self {
        Self {
            path,
            max_bytes,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is over the cap.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned or any file operation fails.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes) {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            *guard = Some(file);
        }
        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let prefix = backup_prefix(&self.path);
        if let Some(parent) = self.path.parent() {
            for entry in fs::read_dir(parent)?.filter_map(Result::ok) {
                let is_backup = entry.path() != self.path
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| name.starts_with(&prefix));
                if is_backup {
                    let _ = fs::remove_file(entry.path());
                }
            }
        }

        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        fs::rename(&self.path, backup_path(&self.path, &stamp.to_string()))
    }
}

/// `gamedeck-spans.jsonl` → `gamedeck-spans.`
fn backup_prefix(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    format!("{stem}.")
}

/// `gamedeck-spans.jsonl` + stamp → `gamedeck-spans.<stamp>.jsonl`
fn backup_path(path: &Path, stamp: &str) -> PathBuf {
    let name = path.extension().and_then(|e| e.to_str()).map_or_else(
        || format!("{}{stamp}", backup_prefix(path)),
        |ext| format!("{}{stamp}.{ext}", backup_prefix(path)),
    );
    path.with_file_name(name)
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|name| name != "spans.jsonl")
            .collect();
        names.sort();
        names
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let writer = RotatingWriter::new(path.clone(), DEFAULT_MAX_BYTES);

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
        assert!(backups(dir.path()).is_empty());
    }

    #[test]
    fn rotates_past_cap_keeping_one_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        fs::write(dir.path().join("spans.20000101-000000.jsonl"), "stale").unwrap();
        let writer = RotatingWriter::new(path.clone(), 8);

        writer.write_line("0123456789").unwrap();
        writer.write_line("next").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "next\n");
        let backups = backups(dir.path());
        assert_eq!(backups.len(), 1);
        assert_ne!(backups[0], "spans.20000101-000000.jsonl");
        assert_eq!(
            fs::read_to_string(dir.path().join(&backups[0])).unwrap(),
            "0123456789\n"
        );
    }

    #[test]
    fn backup_names_keep_extension() {
        assert_eq!(
            backup_path(Path::new("/d/gamedeck-spans.jsonl"), "20240102-030405"),
            PathBuf::from("/d/gamedeck-spans.20240102-030405.jsonl")
        );
        assert_eq!(
            backup_path(Path::new("/d/spans"), "x"),
            PathBuf::from("/d/spans.x")
        );
    }
}
