//! Sequential writer for one download's temp file.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Uniquely named temp file beside the destination, receiving the streamed
/// body. Concurrent downloads of the same file each get their own. Removed
/// on drop unless finalized.
pub struct PartFile {
    file: BufWriter<NamedTempFile>,
    final_path: PathBuf,
    written: u64,
}

impl PartFile {
    /// Create `.<name>.<random>.part` in the destination's directory.
    pub fn create(final_path: &Path) -> io::Result<Self> {
        let dir = match final_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let name = final_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tmp = tempfile::Builder::new()
            .prefix(&format!(".{}.", name))
            .suffix(super::TEMP_SUFFIX)
            .tempfile_in(dir)?;
        Ok(Self {
            file: BufWriter::new(tmp),
            final_path: final_path.to_path_buf(),
            written: 0,
        })
    }

    /// Path to the current temp file.
    pub fn temp_path(&self) -> &Path {
        self.file.get_ref().path()
    }

    /// Flush, sync and move the temp file to its final name without
    /// replacing an existing file. Returns the byte count.
    ///
    /// Fails with `ErrorKind::AlreadyExists` when another download put the
    /// file in place first. The temp file is removed on every failure.
    pub fn finalize(self) -> io::Result<u64> {
        let tmp = self.file.into_inner().map_err(|e| e.into_error())?;
        tmp.as_file().sync_all()?;
        tmp.persist_noclobber(&self.final_path)
            .map_err(|e| e.error)?;
        Ok(self.written)
    }
}

impl Write for PartFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
