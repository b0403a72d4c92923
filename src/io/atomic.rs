use std::io::{self, Write};
use std::path::Path;

use tempfile::Builder;

/// Write `content` to `path` atomically using a temp file + rename.
///
/// The temp file lives in the destination directory so the rename never
/// crosses filesystems; it is removed if anything fails before the rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = Builder::new()
        .prefix(".conductor-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
