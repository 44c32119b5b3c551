use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Three well-formed lines: two from 127.0.0.1 (200 and 404, one hour
/// apart), one from 192.168.1.1 a day later.
pub const SAMPLE_LINES: &[&str] = &[
    r#"127.0.0.1 - - [12/Dec/2021:15:04:05 +0000] "GET /index.html HTTP/1.1" 200 1024 "http://example.com" "Mozilla/5.0""#,
    r#"127.0.0.1 - - [12/Dec/2021:16:04:05 +0000] "POST /submit HTTP/1.1" 404 - "-" "-""#,
    r#"192.168.1.1 - - [13/Dec/2021:15:04:05 +0000] "GET /home HTTP/1.1" 200 512 "-" "Mozilla/5.0""#,
];

/// A temporary directory of log files, removed on drop.
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `lines` joined by `\n` to `name` (relative, parents created).
    pub fn write(&self, name: &str, lines: &[&str]) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create fixture dir");
        }
        fs::write(&path, lines.join("\n")).expect("failed to write fixture");
        path
    }

    /// A glob pattern rooted in this directory.
    pub fn pattern(&self, glob: &str) -> String {
        self.dir.path().join(glob).to_string_lossy().into_owned()
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}
