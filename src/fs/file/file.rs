use std::fs;
use std::io::{self, ErrorKind, IoSlice, IoSliceMut, Read, Seek, SeekFrom, Write};
use std::path::Path;

use super::{CloseError, FileMode, NativeOpenParams, OpenError, OpenIntent, WrapError};
use crate::fs::error::{ClosedFileError, IrregularFileError};
use crate::fs::Fd;

/// A regular file opened with a [`FileMode`].
///
/// A `File` may also be released (see [`File::close`] and [`File::default`]). I/O on a released
/// file fails with [`ErrorKind::NotConnected`], but it can be given a new file with
/// [`File::reopen`].
#[derive(Debug, Default)]
pub struct File {
    inner: Option<fs::File>,
}

impl File {
    /// Opens the file at `file_path` with the given `mode`.
    ///
    /// The mode is validated before any syscall is made. A failing native open is reported as
    /// [`OpenError::Os`], with the OS error code untouched. If the open succeeds but the result
    /// isn't a regular file, the descriptor is closed again and [`OpenError::Wrap`] is returned.
    pub fn open<P: AsRef<Path>>(file_path: P, mode: FileMode) -> Result<File, OpenError> {
        let file_path = file_path.as_ref();
        let intent = OpenIntent::new(mode)?;
        let params = NativeOpenParams::from_intent(&intent);
        tracing::trace!(path = ?file_path, ?mode, ?params, "opening file");

        let fd = Fd::open(file_path, &params).inspect_err(|e| {
            tracing::debug!(path = ?file_path, ?mode, error = %e, "native open failed");
        })?;

        match File::wrap(fd, &params) {
            Ok(inner) => Ok(File { inner: Some(inner) }),
            Err(e) => {
                tracing::debug!(path = ?file_path, ?mode, error = %e, "opened file rejected");
                Err(e)?
            },
        }
    }

    /// Closes the file currently held (if any), then opens `file_path` into `self` as
    /// [`File::open`] would.
    ///
    /// On failure, `self` is left released: the previous file is gone either way. Errors while
    /// closing the previous file are not reported.
    pub fn reopen<P: AsRef<Path>>(
        &mut self,
        file_path: P,
        mode: FileMode,
    ) -> Result<(), OpenError> {
        if let Err(e) = self.close() {
            tracing::warn!(error = %e, "error while releasing file for reopen");
        }

        let file = File::open(file_path, mode)?;
        tracing::trace!("reopened file");
        *self = file;
        Ok(())
    }

    /// Closes the file, reporting any error from the OS. Closing a released file does nothing.
    pub fn close(&mut self) -> Result<(), CloseError> {
        match self.inner.take() {
            Some(inner) => {
                tracing::trace!("closing file");
                Fd::from_std(inner).close()
            },
            None => Ok(()),
        }
    }

    pub const fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    /// Gives up the underlying [`std::fs::File`], or [`None`] if this file has been released.
    pub fn into_std(self) -> Option<fs::File> {
        self.inner
    }

    /// The second phase of opening: `fd` is still owned here, so any early return drops and closes
    /// it before the error reaches the caller.
    fn wrap(fd: Fd, params: &NativeOpenParams) -> Result<fs::File, WrapError> {
        let found = fd.file_type()?;
        if !found.is_regular() {
            Err(IrregularFileError { found })?
        }
        fd.finish_open(params)?;

        Ok(fd.into_std())
    }

    fn inner(&mut self) -> io::Result<&mut fs::File> {
        self.inner
            .as_mut()
            .ok_or_else(|| io::Error::new(ErrorKind::NotConnected, ClosedFileError))
    }
}

impl Read for File {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner()?.read(buf)
    }

    fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
        self.inner()?.read_vectored(bufs)
    }
}

impl Write for File {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner()?.write(buf)
    }

    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
        self.inner()?.write_vectored(bufs)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner()?.flush()
    }
}

impl Seek for File {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner()?.seek(pos)
    }
}
