use std::ffi::CString;
use std::fmt::{self, Debug, Formatter};
use std::fs;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::os::fd::{FromRawFd, IntoRawFd};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::{EDQUOT, EINTR, EIO, ENOSPC, c_int, stat as Stat};

use crate::fs::error::{
    IOError, InterruptError, InvalidPathError, OsError, StorageExhaustedError,
};
use crate::fs::file::{CloseError, OpenError, PosixParams};
use crate::fs::FileType;

pub(crate) struct Fd(c_int);

impl Fd {
    pub fn open(file_path: &Path, params: &PosixParams) -> Result<Fd, OpenError> {
        let pathname = CString::new(file_path.as_os_str().as_bytes())
            .map_err(|_| InvalidPathError)?;

        // SAFETY: pathname is nul-terminated and outlives the call. The mode argument is always
        // passed, as required when O_CREAT is in the flags.
        match unsafe { libc::open(pathname.as_ptr(), params.oflag(), params.mode_arg()) } {
            -1 => Err(OsError::last())?,
            fd => Ok(Fd(fd)),
        }
    }

    pub fn file_type(&self) -> Result<FileType, OsError> {
        let mut raw_meta: MaybeUninit<Stat> = MaybeUninit::uninit();
        // SAFETY: raw_meta is valid for writes of a whole stat struct.
        if unsafe { libc::fstat(self.0, raw_meta.as_mut_ptr()) } == -1 {
            return Err(OsError::last());
        }
        // SAFETY: fstat either initializes raw_meta or returns an error, handled above.
        let raw = unsafe { raw_meta.assume_init() };

        Ok(FileType::from_stat_mode(raw.st_mode))
    }

    /// Nothing needs to happen between opening and wrapping on unix, `O_APPEND` is enforced by the
    /// kernel on every write.
    #[inline(always)]
    pub const fn finish_open(&self, _params: &PosixParams) -> Result<(), OsError> {
        Ok(())
    }

    pub fn into_std(self) -> fs::File {
        let fd = ManuallyDrop::new(self);
        // SAFETY: fd is an open descriptor owned by self, and ownership moves to the File without
        // self being dropped.
        unsafe { fs::File::from_raw_fd(fd.0) }
    }

    pub fn from_std(file: fs::File) -> Fd {
        Fd(file.into_raw_fd())
    }

    pub fn close(self) -> Result<(), CloseError> {
        let fd = ManuallyDrop::new(self);
        // SAFETY: close invalidates the descriptor regardless of the outcome, which is why self is
        // consumed without running Drop.
        if unsafe { libc::close(fd.0) } == -1 {
            let error = OsError::last();
            match error.code() {
                EINTR =>           Err(InterruptError)?,
                EIO =>             Err(IOError)?,
                ENOSPC | EDQUOT => Err(StorageExhaustedError)?,
                _ =>               Err(error)?,
            }
        }
        Ok(())
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: After this, the descriptor is invalidated but we are dropping self so it doesn't
        // matter.
        if unsafe { libc::close(self.0) } == -1 {
            tracing::debug!(
                fd = self.0,
                error = %OsError::last(),
                "error while dropping file descriptor"
            );
        }
    }
}

impl Debug for Fd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fd({})", self.0)
    }
}
