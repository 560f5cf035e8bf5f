//! Output file writing.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::Builder;

/// Write `contents` to `path` through a temporary file in the same directory
/// and a rename, so readers never see a partial `doc.go`.
///
/// An existing file keeps its permissions; a new one is created `0644`.
pub(crate) fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut tmp = Builder::new().prefix(".md-to-godoc").tempfile_in(parent)?;
    tmp.as_file_mut().write_all(contents)?;
    tmp.as_file_mut().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(path).map_or(0o644, |metadata| metadata.permissions().mode());
        fs::set_permissions(tmp.path(), fs::Permissions::from_mode(mode))?;
    }

    tmp.persist(path).map(|_| ()).map_err(|err| err.error)
}
