//! Test helpers for writing CLI input files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Temporary directory addressed through UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `contents` to `name` and return the full path.
    pub(super) fn write(&self, name: &str, contents: &[u8]) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents);
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

pub(super) const NEARBY_JSON: &str = r#"[
  { "id": "1", "name": "Alex", "vibe": "Nightlife Coffee ☕ late-night", "distance": "0.2mi", "verified": true },
  { "id": "2", "name": "Jamie", "vibe": "Live Music Rock concerts indie", "distance": "0.5mi" },
  { "id": "3", "name": "Sam", "vibe": "Park Hangout Chill nature walking", "distance": 0.1 },
  { "id": "5", "name": "Zoe", "vibe": "Art Gallery Creative museums", "distance": "somewhere" }
]"#;
