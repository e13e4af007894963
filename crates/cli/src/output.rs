//! Output file handling.
//!
//! By default the file is created (truncated) at its final path before the
//! first request and is left behind, partially written, if the run fails.
//! In atomic mode the document goes to a temporary file in the same
//! directory and is renamed into place only once it is complete.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

enum Target {
    Direct(BufWriter<File>),
    Atomic(BufWriter<NamedTempFile>),
}

/// Writable destination of the ledger document.
pub struct OutputFile {
    path: PathBuf,
    target: Target,
}

impl OutputFile {
    /// Opens the output for `path`.
    pub fn create(path: &Path, atomic: bool) -> io::Result<Self> {
        let target = if atomic {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let temp = tempfile::Builder::new()
                .prefix(".ledger-dump.")
                .tempfile_in(dir)?;
            Target::Atomic(BufWriter::new(temp))
        } else {
            Target::Direct(BufWriter::new(File::create(path)?))
        };

        Ok(Self {
            path: path.to_path_buf(),
            target,
        })
    }

    /// Flushes the document and, in atomic mode, moves it to its final path.
    pub fn commit(self) -> io::Result<PathBuf> {
        match self.target {
            Target::Direct(mut writer) => writer.flush()?,
            Target::Atomic(writer) => {
                let temp = writer.into_inner().map_err(|e| e.into_error())?;
                temp.persist(&self.path)?;
            }
        }
        Ok(self.path)
    }
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.target {
            Target::Direct(writer) => writer.write(buf),
            Target::Atomic(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.target {
            Target::Direct(writer) => writer.flush(),
            Target::Atomic(writer) => writer.flush(),
        }
    }
}

impl std::fmt::Debug for OutputFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = match self.target {
            Target::Direct(_) => "direct",
            Target::Atomic(_) => "atomic",
        };
        f.debug_struct("OutputFile")
            .field("path", &self.path)
            .field("mode", &mode)
            .finish()
    }
}
