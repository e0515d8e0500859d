//! # Atomic File Writes

use std::{
    ffi::OsString,
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
};

use crate::errors::{CorpusPrepError, IoPathContext, PrepResult};

/// A buffered file writer which only replaces its destination on [`AtomicFile::commit`].
///
/// Output goes to a hidden temporary sibling of the destination, unique to
/// this writer and opened with `create_new`; commit
/// flushes, syncs, and renames it into place. Dropping an uncommitted
/// writer removes the temporary, so a failed run never leaves a
/// truncated artifact at the destination path.
#[derive(Debug)]
pub struct AtomicFile {
    path: PathBuf,
    temp_path: PathBuf,
    writer: Option<BufWriter<File>>,
    committed: bool,
}

impl AtomicFile {
    /// Begin writing to `path`.
    ///
    /// Fails with [`CorpusPrepError::Io`] (naming `path`) when the
    /// destination directory is not writable.
    pub fn create<P: AsRef<Path>>(path: P) -> PrepResult<Self> {
        let path = path.as_ref().to_path_buf();
        let temp_path = temp_sibling(&path)?;
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .with_path(&path)?;

        Ok(Self {
            path,
            temp_path,
            writer: Some(BufWriter::new(file)),
            committed: false,
        })
    }

    /// The destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush, sync, and move the output into place.
    pub fn commit(mut self) -> PrepResult<()> {
        if let Some(writer) = self.writer.take() {
            let file = writer
                .into_inner()
                .map_err(|e| e.into_error())
                .with_path(&self.path)?;
            file.sync_all().with_path(&self.path)?;
        }
        fs::rename(&self.temp_path, &self.path).with_path(&self.path)?;
        self.committed = true;
        Ok(())
    }
}

impl Write for AtomicFile {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match self.writer.as_mut() {
            Some(writer) => writer.write(buf),
            None => Err(io::Error::other("write after commit")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for AtomicFile {
    fn drop(&mut self) {
        if !self.committed {
            self.writer.take();
            if let Err(e) = fs::remove_file(&self.temp_path)
                && e.kind() != io::ErrorKind::NotFound
            {
                log::warn!("failed to remove {}: {e}", self.temp_path.display());
            }
        }
    }
}

/// Temp files created by this process so far.
static TEMP_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// `dir/name` => `dir/.name.<pid>.<seq>.tmp`
fn temp_sibling(path: &Path) -> PrepResult<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        CorpusPrepError::Config(format!("not a file path: {}", path.display()))
    })?;

    let mut temp_name = OsString::from(".");
    temp_name.push(name);
    let seq = TEMP_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    temp_name.push(format!(".{}.{seq}.tmp", std::process::id()));
    Ok(path.with_file_name(temp_name))
}
