use std::fmt::{self, Debug, Formatter};
use std::fs;
use std::mem::ManuallyDrop;
use std::os::windows::ffi::OsStrExt;
use std::os::windows::io::{FromRawHandle, IntoRawHandle};
use std::path::Path;
use std::ptr;

use windows_sys::Win32::Foundation::{CloseHandle, HANDLE, INVALID_HANDLE_VALUE, NO_ERROR};
use windows_sys::Win32::Storage::FileSystem::{
    CreateFileW, FILE_END, FILE_TYPE_UNKNOWN, GetFileType, SetFilePointerEx,
};

use crate::fs::error::{InvalidPathError, OsError};
use crate::fs::file::{CloseError, OpenError, WindowsParams};
use crate::fs::FileType;

pub(crate) struct Fd(HANDLE);

impl Fd {
    pub fn open(file_path: &Path, params: &WindowsParams) -> Result<Fd, OpenError> {
        let mut wide: Vec<u16> = file_path.as_os_str().encode_wide().collect();
        if wide.contains(&0) {
            Err(InvalidPathError)?
        }
        wide.push(0);

        // SAFETY: wide is nul-terminated and outlives the call, and null is allowed for both the
        // security attributes and the template file.
        let handle = unsafe {
            CreateFileW(
                wide.as_ptr(),
                params.access_mask(),
                params.share_mode(),
                ptr::null(),
                params.creation_disposition(),
                params.flags_and_attributes(),
                ptr::null_mut(),
            )
        };

        if handle == INVALID_HANDLE_VALUE {
            Err(OsError::last())?
        }
        Ok(Fd(handle))
    }

    pub fn file_type(&self) -> Result<FileType, OsError> {
        // SAFETY: self.0 is an open handle.
        let raw = unsafe { GetFileType(self.0) };
        if raw == FILE_TYPE_UNKNOWN {
            let error = OsError::last();
            if error.code() != NO_ERROR as i32 {
                return Err(error);
            }
        }
        Ok(FileType::from_win_file_type(raw))
    }

    /// Emulates append by moving the file pointer to the end once. Later writes are not
    /// repositioned, so other writers can still interleave.
    pub fn finish_open(&self, params: &WindowsParams) -> Result<(), OsError> {
        if !params.seek_to_end {
            return Ok(());
        }
        // SAFETY: self.0 is an open handle and a null new-position pointer is allowed.
        if unsafe { SetFilePointerEx(self.0, 0, ptr::null_mut(), FILE_END) } == 0 {
            return Err(OsError::last());
        }
        Ok(())
    }

    pub fn into_std(self) -> fs::File {
        let fd = ManuallyDrop::new(self);
        // SAFETY: fd is an open handle owned by self, and ownership moves to the File without self
        // being dropped.
        unsafe { fs::File::from_raw_handle(fd.0.cast()) }
    }

    pub fn from_std(file: fs::File) -> Fd {
        Fd(file.into_raw_handle().cast())
    }

    pub fn close(self) -> Result<(), CloseError> {
        let fd = ManuallyDrop::new(self);
        // SAFETY: The handle is invalidated regardless of the outcome, which is why self is
        // consumed without running Drop.
        if unsafe { CloseHandle(fd.0) } == 0 {
            Err(OsError::last())?
        }
        Ok(())
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: After this, the handle is invalidated but we are dropping self so it doesn't
        // matter.
        if unsafe { CloseHandle(self.0) } == 0 {
            tracing::debug!(
                handle = ?self.0,
                error = %OsError::last(),
                "error while dropping file handle"
            );
        }
    }
}

impl Debug for Fd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fd({:?})", self.0)
    }
}
